use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::models::{Actor, ActorFilter, ActorStats};
use crate::showcase_tui::components::ActorCard;
use crate::showcase_tui::screens::actors::{select_view, ListView};
use crate::showcase_tui::Theme;

#[derive(Parser)]
#[command(name = "actor-showcase")]
#[command(about = "Browse actors from the Actor Showcase API in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run in CLI mode (print output and exit, no interactive TUI)
    #[arg(long, global = true)]
    pub cli: bool,

    /// Base URL of the Actor Showcase API (overrides ACTOR_SHOWCASE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Colour theme (light, dark)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List actors as cards
    List {
        /// Only actors from this country (case insensitive)
        #[arg(short, long)]
        country: Option<String>,

        /// Only actors with at least one Oscar
        #[arg(short, long)]
        winners: bool,
    },

    /// Show a single actor by id
    Show {
        /// Actor id
        id: i64,
    },

    /// Show aggregate statistics
    Stats,

    /// Check whether the API is reachable
    Status,
}

impl Cli {
    /// Whether this invocation prints and exits instead of starting the TUI
    pub fn is_print_mode(&self) -> bool {
        self.cli || matches!(self.command, Some(Commands::Show { .. }) | Some(Commands::Status))
    }
}

impl Commands {
    pub fn filter(&self) -> ActorFilter {
        match self {
            Commands::List { country, winners } => ActorFilter {
                country: country.clone(),
                winners_only: *winners,
            },
            _ => ActorFilter::default(),
        }
    }
}

/// Text rendering of the listing for CLI mode, following the same
/// loading / error / empty / cards precedence as the TUI.
/// A failed fetch is returned as `Err` so the caller can exit non-zero.
pub fn render_actor_list(
    records: &[Actor],
    error_message: Option<&str>,
    filter: &ActorFilter,
) -> Result<String> {
    match select_view(false, error_message, records, filter) {
        ListView::Loading => Ok(String::new()),
        ListView::Error(message) => Err(anyhow!("{}", message)),
        ListView::Empty => Ok(if filter.is_active() {
            "No actors match the current filter".to_string()
        } else {
            "No actors found".to_string()
        }),
        ListView::Cards(actors) => {
            let mut out = String::new();
            for actor in &actors {
                for line in ActorCard::new(actor).text_lines() {
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push('\n');
            }
            out.push_str(&format!("Showing {} of {} actors", actors.len(), records.len()));
            Ok(out)
        }
    }
}

pub fn render_stats(stats: &ActorStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<16}{}\n", "Total actors", stats.total_actors));
    out.push_str(&format!("{:<16}{}\n", "Oscars", stats.total_oscars));
    out.push_str(&format!("{:<16}{}\n", "Countries", stats.unique_countries));
    out.push_str(&format!("{:<16}{:.1}\n", "Average Oscars", stats.average_oscars));
    if !stats.countries.is_empty() {
        out.push('\n');
        for country in &stats.countries {
            out.push_str(&format!("• {}\n", country));
        }
    }
    out
}
