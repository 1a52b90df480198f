//! Service context bundling the byte source port.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveByteSource;
use crate::adapters::recording::RecordingByteSource;
use crate::adapters::replaying::ReplayingByteSource;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::ByteSource;

/// Env var naming a cassette file to record byte draws into.
pub const RECORD_ENV: &str = "UUPID_RECORD";

/// Env var naming a cassette file to replay byte draws from.
pub const REPLAY_ENV: &str = "UUPID_REPLAY";

/// Bundles the port trait objects used by commands.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Source of random bytes for identifier generation.
    pub bytes: Box<dyn ByteSource>,
    /// Recorder shared with the recording adapter, if recording.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context drawing from the OS CSPRNG.
    #[must_use]
    pub fn live() -> Self {
        Self { bytes: Box::new(LiveByteSource::new()), recorder: None }
    }

    /// Creates a recording context: live draws, each captured to `path`.
    ///
    /// The cassette is written by [`ServiceContext::finish`]. This is the
    /// developer-only mechanism behind the `UUPID_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "uupid-session",
            env!("CARGO_PKG_VERSION"),
        )));
        let bytes =
            RecordingByteSource::new(Box::new(LiveByteSource::new()), Arc::clone(&recorder));
        Self { bytes: Box::new(bytes), recorder: Some(recorder) }
    }

    /// Creates a replaying context serving draws from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        tracing::debug!(
            path = %path.display(),
            interactions = cassette.interactions.len(),
            "replaying cassette"
        );
        let replayer = CassetteReplayer::new(&cassette);
        Ok(Self { bytes: Box::new(ReplayingByteSource::new(replayer)), recorder: None })
    }

    /// Picks the context from `UUPID_REPLAY` / `UUPID_RECORD`, defaulting to live.
    ///
    /// # Errors
    ///
    /// Returns an error if both variables are set or the replay cassette
    /// cannot be loaded.
    pub fn from_env() -> Result<Self, String> {
        let replay = env::var_os(REPLAY_ENV).map(PathBuf::from);
        let record = env::var_os(RECORD_ENV).map(PathBuf::from);
        match (replay, record) {
            (Some(_), Some(_)) => {
                Err(format!("{REPLAY_ENV} and {RECORD_ENV} cannot be set at the same time"))
            }
            (Some(path), None) => Self::replaying(&path),
            (None, Some(path)) => Ok(Self::recording(&path)),
            (None, None) => Ok(Self::live()),
        }
    }

    /// Whether draws are being captured to a cassette.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Tears the context down, writing the cassette when recording.
    ///
    /// Returns the cassette path if one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { bytes, recorder } = self;
        // Release the adapter's handle on the recorder.
        drop(bytes);

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "Recording adapter for bytes still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for bytes poisoned: {e}"))?;
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}
