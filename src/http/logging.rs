use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{DateTime, Local, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%I:%M:%S %p, %d %b %Y";

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Emits one line per request, stamped with the local arrival time.
pub async fn log_request(request: Request, next: Next) -> Response {
    let received = format_timestamp(&Local::now());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "{received}"
    );
    response
}
