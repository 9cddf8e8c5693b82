//! Wire types for the feedback REST API.
//!
//! Every endpoint wraps its payload as `{"success": bool, "data": ..}`, with
//! an `"error"` message on failure. The payload types themselves live in
//! `rfb_core`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// The payload of a successful response.
    ///
    /// `fallback` is used as the message when the API failed without saying why.
    pub(crate) fn into_data(self, fallback: &str) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(format!("{fallback}: response had no data")),
            (false, _) => Err(self.error.unwrap_or_else(|| fallback.to_string())),
        }
    }
}
