//! `uupid info` command.

use crate::config::{Config, Reduction};

/// Execute the `info` command.
///
/// # Errors
///
/// Never fails; the signature matches the other handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn run(config: &Config) -> Result<(), String> {
    let size = config.dictionary().len();
    let range = 1u64 << config.bits_per_unit();

    println!("units per identifier: {}", config.num_units());
    println!("bits per unit:        {}", config.bits_per_unit());
    println!("dictionary size:      {size}");
    println!("separator:            {:?}", config.separator());
    println!("reduction:            {}", config.reduction());
    println!("random bytes per id:  {}", config.bytes_per_identifier());
    println!("simulated entropy:    {} bits", config.entropy_bits());
    println!("effective entropy:    {:.1} bits", config.effective_entropy_bits());
    if config.reduction() == Reduction::Modulo && range % size as u64 != 0 {
        println!("modulo bias:          present ({range} raw values over {size} units)");
    }
    Ok(())
}
