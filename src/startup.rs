use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, middleware::Compress, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let authorization =
        middleware::authorization::try_new(settings.database.connection_string()).await?;

    let auth_http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let auth_http_client = web::Data::new(auth_http_client);

    let user_cache = web::Data::new(middleware::authentication::UserCache::new(
        Duration::from_secs(settings.auth_cache_ttl_secs),
    ));

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default()
        .limit(4 * settings.max_picture_bytes.max(256 * 1024))
        .error_handler(|err, _req| {
            let msg: String = match err {
                error::JsonPayloadError::Deserialize(err) => format!(
                    "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                    err.line(),
                    err.column(),
                    err
                ),
                _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
            };
            error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
        });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(authorization.clone())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/ads")
                    .service(routes::ad::get::list)
                    .service(routes::ad::add::add)
                    .service(routes::ad::picture::stream)
                    .service(routes::ad::get::item)
                    .service(routes::ad::update::item)
                    .service(routes::ad::delete::item)
                    .service(routes::comment::add_handler)
                    .service(routes::fav::add_handler)
                    .service(routes::fav::delete_handler),
            )
            .service(web::scope("/comments").service(routes::comment::delete_handler))
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(auth_http_client.clone())
            .app_data(user_cache.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
