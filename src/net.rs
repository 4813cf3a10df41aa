// src/net.rs
// One small HTTP helper for the vacancy feed.
// The feed is published over HTTPS, so this rides on minreq + rustls
// instead of a raw TcpStream.

use std::error::Error;

use crate::config::consts::REQUEST_TIMEOUT_SECS;

/// Perform an HTTP GET and return the response body as a String.
///
/// * `url` – full URL including scheme
///
/// Always sends `Cache-Control: no-cache`: the feed is republished in
/// place and a stale copy is worse than a slow one. Any non-2xx status
/// is an error.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = minreq::get(url)
        .with_header("Cache-Control", "no-cache")
        .with_timeout(REQUEST_TIMEOUT_SECS)
        .send()?;

    if !(200..300).contains(&resp.status_code) {
        return Err(format!("HTTP error: {} {}", resp.status_code, resp.reason_phrase).into());
    }

    Ok(resp.as_str()?.to_string())
}
