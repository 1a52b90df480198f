//! Recording adapter for the `ByteSource` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{ByteSource, ByteSourceError};

/// Records byte draws while delegating to an inner source.
pub struct RecordingByteSource {
    inner: Box<dyn ByteSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingByteSource {
    /// Creates a new recording byte source wrapping the given implementation.
    pub fn new(inner: Box<dyn ByteSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct DrawInput {
    n: usize,
}

impl ByteSource for RecordingByteSource {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, ByteSourceError> {
        let result = self.inner.random_bytes(n);
        record_result(&self.recorder, "bytes", "random_bytes", &DrawInput { n }, &result);
        result
    }
}
