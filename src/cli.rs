//! CLI domain: parse, route, help and output only.
//! No generation logic; the route table dispatches to the orchestrator.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::{format_providers, map_error, to_pretty_json};
pub use parse::{Cli, Commands, ProfileArgs};
pub use route::RunContext;
