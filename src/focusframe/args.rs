use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "focusframe", version)]
#[command(about = "Minimal focus timer: record sessions, see your focused time", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show totals and session history, newest first
    #[command(visible_aliases = ["dashboard", "st"])]
    Stats {
        /// Print the stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a completed focus session
    #[command(alias = "s")]
    Save {
        /// Length of the session in minutes
        #[arg(allow_negative_numbers = true)]
        duration: String,

        /// Notes about the session
        #[arg(num_args = 0..)]
        notes: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove every recorded session
    #[command(alias = "reset")]
    Clear {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a timer length and show when it would end
    Start {
        /// Timer length in minutes
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (sessions-file, max-timer-minutes)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_save_with_notes() {
        let cli = Cli::parse_from(["focusframe", "save", "25", "wrote", "the", "intro"]);
        match cli.command {
            Some(Commands::Save {
                duration, notes, ..
            }) => {
                assert_eq!(duration, "25");
                assert_eq!(notes.join(" "), "wrote the intro");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn negative_duration_reaches_validation() {
        let cli = Cli::parse_from(["focusframe", "save", "-5"]);
        assert!(matches!(cli.command, Some(Commands::Save { ref duration, .. }) if duration == "-5"));
    }

    #[test]
    fn dashboard_is_stats() {
        let cli = Cli::parse_from(["focusframe", "dashboard", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Stats { json: true })));
    }

    #[test]
    fn no_subcommand() {
        let cli = Cli::parse_from(["focusframe", "-v"]);
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
