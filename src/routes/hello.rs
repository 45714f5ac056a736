use axum::{extract::State, http::header, response::IntoResponse};
use chrono::Local;
use uuid::Uuid;

use crate::domain::{Greeting, GreetingVariant};

#[tracing::instrument(
    name = "Hello requested",
    skip_all,
    fields(
        request_id = %Uuid::now_v7(),
        variant = ?variant,
    )
)]
pub async fn hello(State(variant): State<GreetingVariant>) -> impl IntoResponse {
    let greeting = match variant {
        GreetingVariant::Plain => {
            let greeting = Greeting::plain();
            tracing::info!("{}", greeting);
            tracing::info!("{}", greeting);
            greeting
        }
        GreetingVariant::Timestamped => {
            let greeting = Greeting::timestamped(&Local::now());
            tracing::info!("{}", greeting);
            greeting
        }
    };
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        String::from(greeting),
    )
}
