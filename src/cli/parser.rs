use crate::config::ListView;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for seatfinder
/// Wedding seating lookup and guest administration with SQLite
#[derive(Parser)]
#[command(
    name = "seatfinder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find your table at the wedding, and manage guests and seating-card settings using SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add one guest
    Add {
        /// Full name of the guest
        name: String,

        /// Table number
        table: Option<String>,
    },

    /// Add several guests at once (all or nothing)
    AddBatch {
        /// Guest entry as NAME=TABLE (repeatable)
        #[arg(long = "entry", short = 'e', value_name = "NAME=TABLE", required = true)]
        entries: Vec<String>,
    },

    /// Edit a guest's name and/or table
    Edit {
        /// Guest id
        id: i64,

        #[arg(long, help = "New full name")]
        name: Option<String>,

        #[arg(long, help = "New table number")]
        table: Option<String>,
    },

    /// Delete guests by id and/or whole tables
    Del {
        /// Guest ids
        ids: Vec<i64>,

        /// Also select every guest at this table (repeatable)
        #[arg(long = "table", value_name = "TABLE")]
        tables: Vec<i64>,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Move guests (by id and/or whole tables) to another table
    Move {
        /// Destination table
        #[arg(long = "to", value_name = "TABLE")]
        to: String,

        /// Guest ids
        ids: Vec<i64>,

        /// Also select every guest at this table (repeatable)
        #[arg(long = "table", value_name = "TABLE")]
        tables: Vec<i64>,
    },

    /// Admin listing of guests
    List {
        #[arg(long, short = 'f', help = "Case-insensitive name filter")]
        filter: Option<String>,

        #[arg(long, value_enum, help = "Group by table or show a flat list")]
        view: Option<ListView>,
    },

    /// Public lookup: find a guest's table and tablemates
    Find {
        /// Part of the guest's name
        term: String,
    },

    /// Import guests from CSV text (`first, last, table` per line)
    Import {
        #[arg(long, value_name = "FILE", conflicts_with = "text")]
        file: Option<String>,

        #[arg(long, value_name = "CSV")]
        text: Option<String>,
    },

    /// Export the guest list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// View or change presentation settings
    Settings {
        #[arg(long = "print", help = "Print all settings")]
        print: bool,

        #[arg(long = "json", help = "With --print, output camelCase JSON")]
        json: bool,

        #[arg(long = "set", num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,

        #[arg(
            long = "image",
            num_args = 2,
            value_names = ["KEY", "FILE"],
            help = "Load an image file into an image setting"
        )]
        image: Option<Vec<String>>,

        #[arg(long = "clear", value_name = "KEY", help = "Clear an image setting")]
        clear: Option<String>,

        #[arg(long = "reset", help = "Restore every setting to its default")]
        reset: bool,
    },
}
