//! `canopy languages` command implementation.

use canopy::{AdapterRegistry, Error};
use colored::Colorize;

/// Run the languages command.
pub fn run() -> Result<(), Error> {
    let registry = AdapterRegistry::with_builtin_languages();

    println!("{}", "Supported languages".cyan().bold());
    println!();
    for name in registry.supported_languages() {
        let adapter = registry.resolve(name)?;
        let aliases = adapter.aliases();
        if aliases.is_empty() {
            println!("  {name}");
        } else {
            println!("  {name} {}", format!("({})", aliases.join(", ")).dimmed());
        }
    }
    Ok(())
}
