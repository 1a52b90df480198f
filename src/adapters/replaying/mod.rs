//! Replaying adapters that replay recorded interactions.

pub mod byte_source;

pub use byte_source::ReplayingByteSource;

use serde::de::DeserializeOwned;

use crate::ports::ByteSourceError;

/// Decode a recorded `{"Ok": v}` / `{"Err": msg}` output back into a `Result`.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, ByteSourceError> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("Ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
