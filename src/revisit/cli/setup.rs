use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "revisit", bin_name = "revisit", version)]
#[command(about = "Spaced-repetition review tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding revision_items.json and config.json
    #[arg(
        long,
        global = true,
        env = "REVISIT_DATA_DIR",
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a topic to review
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Review gaps in days, comma separated (e.g. 1,3,7)
        #[arg(short, long, value_name = "DAYS")]
        intervals: Option<String>,

        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Show the review agenda
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Print the agenda as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show items with their schedule and progress
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Items to show (e.g. 1 a1 m1 2-4)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Print the items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a completed review
    #[command(alias = "complete", display_order = 10)]
    Done {
        /// Items reviewed (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Archive items (deleted automatically after 7 days)
    #[command(display_order = 11)]
    Archive {
        /// Items to archive (e.g. 1 2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Bring archived items back into rotation
    #[command(display_order = 12)]
    Restore {
        /// Archived items (e.g. a1 a2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Rename an item
    #[command(alias = "mv", display_order = 13)]
    Rename {
        /// The item to rename
        selector: String,

        /// New title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Permanently delete items
    #[command(alias = "rm", display_order = 20)]
    Delete {
        /// Items to delete (e.g. 1 a1 m1)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove all mastered items
    #[command(display_order = 21)]
    Clear,

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (default-intervals, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
