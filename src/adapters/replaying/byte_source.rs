//! Replaying adapter for the `ByteSource` port.

use std::sync::Mutex;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{ByteSource, ByteSourceError};

/// Replays recorded byte draws from a cassette.
pub struct ReplayingByteSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingByteSource {
    /// Creates a new replaying byte source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ByteSource for ReplayingByteSource {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, ByteSourceError> {
        let (recorded_n, output) = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("bytes", "random_bytes")?;
            (interaction.input.get("n").and_then(serde_json::Value::as_u64), interaction.output.clone())
        };
        if let Some(recorded) = recorded_n {
            if recorded != n as u64 {
                tracing::warn!(recorded, requested = n, "replayed draw size differs from request");
            }
        }
        replay_result(&output, "bytes::random_bytes")
    }
}
