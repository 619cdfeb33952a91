//! Screen modules for the showcase TUI

pub mod actors;
pub mod help;
pub mod stats;

pub use actors::ActorsScreen;
pub use help::HelpScreen;
pub use stats::StatsScreen;
