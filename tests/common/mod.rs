#![allow(dead_code)]

use actix_web::{get, App, HttpRequest, HttpResponse, HttpServer, Responder};
use adboard::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

/// Token the mock auth service rejects.
pub const INVALID_TOKEN: &str = "invalid";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_ad(&self, token: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/ads"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates an ad owned by `token` and returns its id.
    pub async fn create_ad_id(&self, token: &str, title: &str, text: &str) -> i32 {
        let response = self
            .create_ad(
                token,
                serde_json::json!({ "title": title, "text": text, "price": 10.0 }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.expect("json body");
        body["id"].as_i64().expect("ad id") as i32
    }

    pub async fn get_json(&self, path: &str, token: Option<&str>) -> (u16, serde_json::Value) {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.expect("Failed to execute request.");
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub async fn post_empty(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn fav_count(&self, ad_id: i32, user_id: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fav WHERE ad_id = $1 AND user_id = $2")
            .bind(ad_id)
            .bind(user_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count favorites")
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = adboard::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build http client");

    Some(TestApp {
        address,
        db_pool: connection_pool,
        client,
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener =
        TcpListener::bind("127.0.0.1:0").expect("Failed to bind port for testing auth server");
    configuration.auth_url = format!(
        "http://127.0.0.1:{}/me",
        listener.local_addr().unwrap().port()
    );
    println!("Auth Server is running on: {}", configuration.auth_url);

    let auth_server = HttpServer::new(|| App::new().service(mock_auth))
        .listen(listener)
        .expect("Failed to start mock auth server")
        .run();
    let _ = tokio::spawn(auth_server);

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

/// The bearer token doubles as the user id.
#[get("/me")]
async fn mock_auth(req: HttpRequest) -> impl Responder {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string);

    match token {
        Some(token) if token != INVALID_TOKEN => HttpResponse::Ok().json(serde_json::json!({
            "user": {
                "_id": &token,
                "first_name": "Test",
                "last_name": "User",
                "email": format!("{}@example.com", token),
                "role": "group_user",
                "email_confirmed": true
            }
        })),
        _ => HttpResponse::Unauthorized().finish(),
    }
}

pub fn picture_payload(bytes: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

pub fn ids(body: &serde_json::Value) -> Vec<i64> {
    body["list"]
        .as_array()
        .map(|list| list.iter().filter_map(|ad| ad["id"].as_i64()).collect())
        .unwrap_or_default()
}
