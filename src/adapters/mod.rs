//! Adapters implementing the byte source port.
//!
//! - `live` draws from the operating system CSPRNG.
//! - `recording` wraps another source and captures each draw to a cassette.
//! - `replaying` serves draws previously captured in a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
