//! Shared HTTP agent and bounded response helpers.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while reading a response body.
#[derive(Debug, thiserror::Error)]
pub(crate) enum BodyError {
    #[error("Failed to read response body: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Return the shared HTTP agent.
///
/// Only connection setup is bounded. Training runs can take minutes and the
/// client never aborts a call once it has started.
pub(crate) fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .user_agent(concat!("aed-client/", env!("CARGO_PKG_VERSION")))
            .build()
    })
}

/// Read a response into memory, enforcing a maximum byte size.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

/// Read a bounded response body and decode it as JSON.
pub(crate) fn read_json<T: DeserializeOwned>(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<T, BodyError> {
    let bytes = read_response_bytes(response, max_bytes)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read a bounded response body as lossy UTF-8, for error reporting.
pub(crate) fn read_text_lossy(response: ureq::Response, max_bytes: usize) -> String {
    match read_response_bytes(response, max_bytes) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(err) => err.to_string(),
    }
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response.header("Content-Length") else {
        return Ok(());
    };
    let Ok(length) = length.parse::<u64>() else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}
