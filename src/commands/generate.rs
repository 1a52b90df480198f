//! `uupid generate` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::generator::Generator;

/// Execute the `generate` command, printing `count` identifiers.
///
/// # Errors
///
/// Returns an error string if the byte source fails.
pub fn run_with_context(ctx: &ServiceContext, config: &Config, count: usize) -> Result<(), String> {
    let generator = Generator::new(config, ctx.bytes.as_ref());
    for _ in 0..count {
        let id = generator.generate().map_err(|e| e.to_string())?;
        println!("{id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_command_runs() {
        let ctx = ServiceContext::live();
        assert!(run_with_context(&ctx, &Config::reference(), 2).is_ok());
    }

    #[test]
    fn generate_zero_prints_nothing() {
        let ctx = ServiceContext::live();
        assert!(run_with_context(&ctx, &Config::reference(), 0).is_ok());
    }
}
