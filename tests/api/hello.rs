use crate::helpers::spawn_app;
use chrono::{Local, NaiveDateTime};
use hello_greeter::domain::{GreetingVariant, TIMESTAMP_FORMAT, TIMESTAMP_PREFIX};

fn looks_like_timestamp(raw: &str) -> bool {
    raw.len() == 19
        && raw.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            10 => c == ' ',
            13 | 16 => c == ':',
            _ => c.is_ascii_digit(),
        })
}

#[tokio::test]
async fn plain_hello_returns_exactly_hello_world() {
    let test_app = spawn_app(GreetingVariant::Plain).await;
    let response = test_app
        .get_hello()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!("Hello, World!", response.text().await.unwrap());
}

#[tokio::test]
async fn timestamped_hello_carries_the_current_time() {
    let test_app = spawn_app(GreetingVariant::Timestamped).await;
    let requested_at = Local::now().naive_local();
    let response = test_app
        .get_hello()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.unwrap();
    let raw = body
        .strip_prefix(TIMESTAMP_PREFIX)
        .unwrap_or_else(|| panic!("Unexpected greeting: {}", body));
    assert!(looks_like_timestamp(raw), "Malformed timestamp: {}", raw);

    let stamped = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).unwrap();
    let drift = (stamped - requested_at).num_seconds().abs();
    assert!(drift <= 5, "Timestamp {} drifted {}s", raw, drift);
}

#[tokio::test]
async fn hello_is_served_as_text() {
    let test_app = spawn_app(GreetingVariant::Timestamped).await;
    let response = test_app
        .get_hello()
        .await
        .expect("Failed to execute request.");

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn each_request_is_computed_afresh() {
    let test_app = spawn_app(GreetingVariant::Timestamped).await;
    let first = test_app.get_hello().await.unwrap().text().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = test_app.get_hello().await.unwrap().text().await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn post_to_hello_is_not_allowed() {
    let test_app = spawn_app(GreetingVariant::Plain).await;
    let response = reqwest::Client::new()
        .post(&format!("{}/hello", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
}
