//! `uupid validate` command.

use crate::config::Config;
use crate::validator::{Candidate, Invalid, Validator};

/// Execute the `validate` command.
///
/// Prints one verdict line per candidate. With `json`, each candidate is
/// parsed as a JSON value so that non-string values can be checked.
///
/// # Errors
///
/// Returns an error string naming how many candidates were invalid.
pub fn run(config: &Config, candidates: &[String], json: bool) -> Result<(), String> {
    let validator = Validator::new(config);
    let mut invalid = 0;

    for raw in candidates {
        let verdict = if json {
            match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(value) => validator.explain(&value).map_err(|e| e.to_string()),
                Err(e) => Err(format!("not valid JSON: {e}")),
            }
        } else {
            validator.explain(Candidate::Text(raw)).map_err(|e: Invalid| e.to_string())
        };

        match verdict {
            Ok(()) => println!("{raw}\tvalid"),
            Err(reason) => {
                invalid += 1;
                println!("{raw}\tinvalid: {reason}");
            }
        }
    }

    if invalid == 0 {
        Ok(())
    } else {
        Err(format!("{invalid} of {} candidates are invalid", candidates.len()))
    }
}
