use clap::{Parser, Subcommand};

/// Command-line interface definition for rStopwatch
/// CLI application to run several named stopwatches, persisted in SQLite
#[derive(Parser)]
#[command(
    name = "rstopwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Several named stopwatches: start, pause, reset, set by hand, kept across sessions",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new (paused) stopwatch
    Add {
        /// Display name (default: "Stopwatch N")
        #[arg(long, short)]
        name: Option<String>,

        /// Starting time: 90, 2:03 or 1:02:03
        #[arg(long, short)]
        time: Option<String>,
    },

    /// List stopwatches with their elapsed time
    List,

    /// Rename a stopwatch
    Rename {
        /// Stopwatch id or list position (1-based)
        target: String,

        /// New name (blank becomes "Untitled")
        name: String,
    },

    /// Set the elapsed time of a stopwatch
    Set {
        /// Stopwatch id or list position (1-based)
        target: String,

        /// New time: 90, 2:03 or 1:02:03
        time: String,
    },

    /// Reset a stopwatch to 00:00:00
    Reset {
        /// Stopwatch id or list position (1-based)
        target: String,
    },

    /// Remove a stopwatch
    Remove {
        /// Stopwatch id or list position (1-based)
        target: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Interactive session: start/pause stopwatches and watch them run
    Session,
}
