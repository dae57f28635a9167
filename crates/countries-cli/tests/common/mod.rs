//! Local HTTP server serving canned country list responses.

#![allow(dead_code, clippy::expect_used)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use countries_cli::Config;

pub const COUNTRIES_JSON: &str = r#"[
    {"name": "France", "region": "EU", "capital": "Paris", "code": "FR"},
    {"name": "Germany", "region": "EU", "capital": "Berlin", "code": "DE"},
    {"name": "Spain", "region": "EU", "capital": "Madrid", "code": "ES"}
]"#;

#[derive(Clone)]
pub enum ServerMode {
    /// Respond 200 with this body.
    Body(&'static str),
    /// Respond with this status and a short text body.
    Status(u16),
    /// Sleep before responding 200 with the sample list.
    Delay { millis: u64 },
}

async fn countries_handler(State(mode): State<ServerMode>) -> Response {
    match mode {
        ServerMode::Body(body) => ([(CONTENT_TYPE, "application/json")], body).into_response(),
        ServerMode::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "upstream exploded").into_response()
        }
        ServerMode::Delay { millis } => {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            ([(CONTENT_TYPE, "application/json")], COUNTRIES_JSON).into_response()
        }
    }
}

/// Starts a server and returns the full URL of its country list.
pub async fn start_test_server(mode: ServerMode) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/countries.json", get(countries_handler))
        .with_state(mode);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("listener addr");
    let url = format!("http://{addr}/countries.json");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test server");
    });

    (url, handle)
}

pub fn config_for(url: &str) -> Config {
    Config {
        url: url.to_string(),
        timeout: Some(Duration::from_secs(5)),
        ..Config::default()
    }
}
