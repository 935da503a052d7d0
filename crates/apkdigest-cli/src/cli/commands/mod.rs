//! CLI command handlers, one file per subcommand.

mod config;
mod extract;
mod locate;

pub use config::run_config;
pub use extract::run_extract;
pub use locate::run_locate;
