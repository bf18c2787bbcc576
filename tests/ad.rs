mod common;

use common::{picture_payload, INVALID_TOKEN};

// test me: cargo t --test ad -- --nocapture --show-output
#[tokio::test]
async fn create_and_fetch_ad() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .create_ad(
            "alice",
            serde_json::json!({ "title": "Road bike", "text": "Steel frame", "price": 250.5 }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["item"]["owner_id"], "alice");
    assert_eq!(body["item"]["has_picture"], false);

    let (status, body) = app.get_json(&format!("/ads/{}", id), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["item"]["title"], "Road bike");
    assert_eq!(body["item"]["price"], 250.5);
    assert_eq!(body["item"]["comments"], serde_json::json!([]));
    assert!(body["item"]["natural_updated"].is_string());
}

#[tokio::test]
async fn unknown_ad_is_not_found() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let (status, _) = app.get_json("/ads/999999", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn invalid_form_is_rejected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .create_ad("alice", serde_json::json!({ "title": "x", "text": "too short title" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .create_ad(
            "alice",
            serde_json::json!({ "title": "Lamp", "text": "Desk lamp", "price": -3 }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn anonymous_cannot_create() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .client
        .post(app.url("/ads"))
        .json(&serde_json::json!({ "title": "Lamp", "text": "Desk lamp" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 403);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ad")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn rejected_token_is_a_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let (status, _) = app.get_json("/ads", Some(INVALID_TOKEN)).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn only_owner_can_update() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_ad_id("alice", "Sofa", "Green sofa").await;
    let update = serde_json::json!({ "title": "Sofa bed", "text": "Green sofa bed", "price": 80 });

    let response = app
        .client
        .put(app.url(&format!("/ads/{}", id)))
        .bearer_auth("bob")
        .json(&update)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = app
        .client
        .put(app.url(&format!("/ads/{}", id)))
        .bearer_auth("alice")
        .json(&update)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let (_, body) = app.get_json(&format!("/ads/{}", id), None).await;
    assert_eq!(body["item"]["title"], "Sofa bed");
    assert_eq!(body["item"]["price"], 80.0);
    assert_eq!(body["item"]["owner_id"], "alice");
}

#[tokio::test]
async fn only_owner_can_delete() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_ad_id("alice", "Chair", "Oak chair").await;

    let response = app
        .client
        .delete(app.url(&format!("/ads/{}", id)))
        .bearer_auth("bob")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = app
        .client
        .delete(app.url(&format!("/ads/{}", id)))
        .bearer_auth("alice")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let (status, _) = app.get_json(&format!("/ads/{}", id), None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn picture_is_streamed_with_type_and_length() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let bytes: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

    let response = app
        .create_ad(
            "alice",
            serde_json::json!({
                "title": "Camera",
                "text": "Film camera",
                "picture": picture_payload(&bytes),
                "content_type": "image/png"
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["item"]["has_picture"], true);

    let response = app
        .client
        .get(app.url(&format!("/ads/{}/picture", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap().to_str().unwrap(),
        "image/png"
    );
    assert_eq!(response.content_length(), Some(bytes.len() as u64));
    assert_eq!(response.bytes().await.unwrap().to_vec(), bytes);
}

#[tokio::test]
async fn update_without_picture_keeps_the_old_one() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .create_ad(
            "alice",
            serde_json::json!({
                "title": "Guitar",
                "text": "Acoustic",
                "picture": picture_payload(b"jpegdata"),
                "content_type": "image/jpeg"
            }),
        )
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    let response = app
        .client
        .put(app.url(&format!("/ads/{}", id)))
        .bearer_auth("alice")
        .json(&serde_json::json!({ "title": "Guitar", "text": "Acoustic, new strings" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .client
        .get(app.url(&format!("/ads/{}/picture", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("content-type").unwrap().to_str().unwrap(),
        "image/jpeg"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"jpegdata");
}

#[tokio::test]
async fn ad_without_picture_has_no_stream() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let id = app.create_ad_id("alice", "Table", "Pine table").await;

    let response = app
        .client
        .get(app.url(&format!("/ads/{}/picture", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn oversized_picture_is_rejected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let bytes = vec![7u8; 2 * 1024 * 1024 + 1];

    let response = app
        .create_ad(
            "alice",
            serde_json::json!({
                "title": "Poster",
                "text": "Huge poster",
                "picture": picture_payload(&bytes),
                "content_type": "image/png"
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn picture_is_not_compressed() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let bytes = vec![7u8; 1000];

    let response = app
        .create_ad(
            "alice",
            serde_json::json!({
                "title": "Firmware",
                "text": "Router firmware dump",
                "picture": picture_payload(&bytes)
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    let response = app
        .client
        .get(app.url(&format!("/ads/{}/picture", id)))
        .header("accept-encoding", "gzip")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/octet-stream"
    );
    let encoding = response
        .headers()
        .get("content-encoding")
        .map(|value| value.to_str().unwrap().to_string());
    assert!(encoding.is_none() || encoding.as_deref() == Some("identity"));
    assert_eq!(response.content_length(), Some(bytes.len() as u64));
    assert_eq!(response.bytes().await.unwrap().to_vec(), bytes);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app
        .client
        .post(app.url("/ads"))
        .bearer_auth("alice")
        .header("content-type", "application/json")
        .body(r#"{"title": "Broken", "text": "#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body = response.text().await.unwrap();
    assert!(body.contains("deserialize"), "unexpected body: {}", body);
}
