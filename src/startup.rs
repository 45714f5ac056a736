use crate::{configuration::Settings, domain::GreetingVariant, routes};
use axum::{extract::Request, routing, serve::Serve, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

pub struct Application {
    port: u16,
    server: Serve<Router, Router>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let listener =
            TcpListener::bind(configuration.application.address()).await?;
        let port = listener.local_addr()?.port();
        let server = run(listener, configuration.greeting.variant);
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn router(variant: GreetingVariant) -> Router {
    Router::new()
        .route("/hello", routing::get(routes::hello))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &Request<_>| {
                let request_id = Uuid::now_v7();
                info_span!("Http Request", %request_id, request_uri = %request.uri())
            },
        ))
        .with_state(variant)
}

pub fn run(
    listener: TcpListener,
    variant: GreetingVariant,
) -> Serve<Router, Router> {
    axum::serve(listener, router(variant))
}
