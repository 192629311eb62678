//! CLI help and command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log fields (e.g. "plan", "providers").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Catchphrase { .. } => "catchphrase",
        Commands::Plan { .. } => "plan",
        Commands::Chat { .. } => "chat",
        Commands::Providers => "providers",
    }
}
