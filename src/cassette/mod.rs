//! Cassette format for recording and replaying byte source draws.

pub mod format;
pub mod recorder;
pub mod replayer;
