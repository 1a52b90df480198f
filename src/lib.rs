//! Universally unique pronounceable identifiers (UUPIDs).
//!
//! An identifier is a fixed number of units drawn from a dictionary of
//! pronounceable strings and joined with `-`, for example
//! `Aqua-Blit-Cron-Deep-Echo-Flux-Grid-Hymn-Icon-Jade`. Units are chosen from
//! fixed-width bit groups cut out of cryptographically secure random bytes.
//!
//! ```no_run
//! let id = uupid::generate().expect("os randomness");
//! assert!(uupid::is_valid(id.as_str()));
//! assert!(!uupid::is_valid(None::<&str>));
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dictionary;
pub mod error;
pub mod generator;
pub mod ports;
pub mod validator;

pub use config::{Config, Reduction, BITS_PER_UNIT, NUM_UNITS, REFERENCE, SEPARATOR};
pub use dictionary::Dictionary;
pub use error::{ConfigError, GenerateError};
pub use generator::Generator;
pub use ports::ByteSource;
pub use validator::{Candidate, Invalid, Validator};

use clap::Parser;

use crate::adapters::live::LiveByteSource;

/// Generates an identifier with the reference configuration and OS randomness.
///
/// # Errors
///
/// Returns [`GenerateError`] if the operating system cannot supply the
/// random bytes.
pub fn generate() -> Result<String, GenerateError> {
    Generator::new(&REFERENCE, &LiveByteSource).generate()
}

/// Whether `candidate` is an identifier under the reference configuration.
pub fn is_valid<'c>(candidate: impl Into<Candidate<'c>>) -> bool {
    Validator::new(&REFERENCE).is_valid(candidate)
}

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
