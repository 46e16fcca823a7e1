use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderValue, Request, Response, StatusCode},
    middleware::Next,
};
use chrono::Utc;
use tokio::time::Instant;

use crate::{build_info::{AXUM_VERSION, BUILD_TIME}, init::state::ServerState};

pub async fn log_middleware(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(info): ConnectInfo<SocketAddr>,
    mut request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let now = Utc::now(); // earliest possible timestamp of server-received request

    state.add_responses_handled();

    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let client_ip: String = match request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        Some(val) => val.to_owned(),
        None => info.to_string(),
    };

    tracing::info!(kind = %"RECV", method = %method, path = %path, client_ip = %client_ip);
    request.extensions_mut().insert(now);

    let mut response = next.run(request).await;
    let duration = start.elapsed();

    if response.status() == StatusCode::OK {
        tracing::info!(kind = %"RESP", method = %method, path = %path, client_ip = %client_ip, duration = ?duration);
    } else {
        let headers = response.headers_mut();

        let status_code = header_value_to_str(headers.get("x-error-status-code")).unwrap_or("");
        let error_code = header_value_to_str(headers.get("x-error-code")).unwrap_or("");
        let message = header_value_to_str(headers.get("x-error-message")).unwrap_or("");
        let detail = header_value_to_str(headers.get("x-error-detail")).unwrap_or("");

        tracing::error!(
            kind = %"ERSP",
            method = %method,
            path = %path,
            client_ip = %client_ip,
            status_code = %status_code,
            error_code = %error_code,
            message = %message,
            detail = %detail,
            duration = ?duration
        );

        headers.remove("x-error-status-code");
        headers.remove("x-error-code");
        headers.remove("x-error-message");
        headers.remove("x-error-detail");
    }

    let headers = response.headers_mut();
    headers.insert("x-server-built-time", HeaderValue::from_static(BUILD_TIME));
    headers.insert("x-server-name", HeaderValue::from_static(AXUM_VERSION));

    response
}

fn header_value_to_str(value: Option<&HeaderValue>) -> Option<&str> {
    value.and_then(|v| v.to_str().ok())
}
