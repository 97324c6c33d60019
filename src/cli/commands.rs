use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `ncw-consent` - Cookie consent state, persisted and versioned.
#[derive(Parser, Debug)]
#[command(name = "ncw-consent")]
#[command(author = "theonlyhennygod")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and drive the site's cookie consent state.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.ncw-consent/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the consent state as a fresh page load sees it
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Accept every category
    Accept,

    /// Reject every optional category
    Reject,

    /// Save a custom selection (unlisted categories are denied)
    Save {
        /// Allow analytics
        #[arg(long)]
        analytics: bool,

        /// Allow marketing
        #[arg(long)]
        marketing: bool,

        /// Allow preference cookies (theme, language)
        #[arg(long)]
        preferences: bool,
    },

    /// Check one category; exits non-zero when it is disabled
    Check {
        /// necessary, preferences, analytics or marketing
        category: String,
    },

    /// List the consent categories
    Categories,

    /// Forget the stored decision
    Reset,

    /// Walk through the banner and preferences editor interactively
    Prompt,

    /// Show or set the colour theme (persisted only with preferences consent)
    Theme {
        /// light or dark
        theme: Option<String>,
    },
}
