use crate::core::calculator::MatchPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rexitlog
/// CLI application to log student exits/entries with SQLite
#[derive(Parser)]
#[command(
    name = "rexitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small exit/entry logger: record when students go out and come back, and reconcile the log into sessions",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

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

    /// Log an exit (student going out)
    Out {
        /// Roll number of the student
        roll: String,
        /// Logical date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Time (HH:MM:SS AM/PM or HH:MM AM/PM), default now
        #[arg(long)]
        time: Option<String>,
    },

    /// Log an entry (student coming back in)
    In {
        /// Roll number of the student
        roll: String,
        /// Logical date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Time (HH:MM:SS AM/PM or HH:MM AM/PM), default now
        #[arg(long)]
        time: Option<String>,
    },

    /// Show the activity feed for a day
    Recent {
        /// Day to show (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },

    /// Search history and show exit/entry sessions
    ///
    /// Examples:
    ///   rexitlog search rahim
    ///   rexitlog search --roll 701
    ///   rexitlog search --date 2025-03-14
    Search {
        /// Part of a name or roll number (case-insensitive)
        #[arg(conflicts_with_all = ["date", "roll"])]
        query: Option<String>,

        /// Exact roll number
        #[arg(long, conflicts_with = "date")]
        roll: Option<String>,

        /// Logical date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// How entries are matched to pending exits (overrides config)
        #[arg(long, value_enum)]
        policy: Option<MatchPolicy>,

        /// Print sessions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a logged event by id
    Edit {
        /// Log id (see the EXIT ID / ENTRY ID columns of `search`)
        id: i64,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New time (HH:MM:SS AM/PM)
        #[arg(long)]
        time: Option<String>,
        /// New status (IN or OUT)
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete the records behind a session
    Del {
        /// Id of the exit record
        #[arg(long = "exit")]
        exit_id: Option<i64>,
        /// Id of the entry record
        #[arg(long = "entry")]
        entry_id: Option<i64>,
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Follow the log and reprint a day's sessions on every change
    Watch {
        /// Day to follow (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Stop after this many updates (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
        /// How entries are matched to pending exits (overrides config)
        #[arg(long, value_enum)]
        policy: Option<MatchPolicy>,
    },

    /// Manage the student roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Print the internal operation log
    Audit,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RosterAction {
    /// List every student
    List,
    /// Show one student
    Show {
        roll: String,
    },
    /// Add or update a student
    Add {
        roll: String,
        name: String,
        #[arg(long, default_value = "")]
        batch: String,
    },
    /// Import students from a CSV file (header: rollNo,name,batch)
    Import {
        file: String,
    },
}
