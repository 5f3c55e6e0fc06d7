pub mod commands;

use crate::config;
use crate::tickets::storage::{FileStore, TicketStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "triage")]
#[command(author, version, about = "Classify and manage support tickets", long_about = None)]
pub struct Cli {
    /// Override the data directory (default: ~/.triage/, env: TRIAGE_HOME)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a description without creating a ticket
    Classify {
        /// Ticket description
        text: String,

        /// Show which keywords decided the result
        #[arg(long)]
        explain: bool,
    },

    /// Create a ticket (classified automatically)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Requester name
        #[arg(long)]
        name: String,

        /// Requester email
        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        area: String,

        #[arg(long, default_value = "")]
        puesto: String,
    },

    /// List tickets, most recent first
    List {
        /// Priority code (critical, high, medium, low)
        #[arg(long)]
        priority: Option<String>,

        /// Type code (incident, request, problem)
        #[arg(long = "type")]
        ticket_type: Option<String>,

        /// Status code (open, in-progress, resolved, closed)
        #[arg(long)]
        status: Option<String>,

        /// Text to look for in id, title, description or requester
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one ticket with its history
    Show {
        /// Ticket id (e.g. INC-000001)
        id: String,
    },

    /// Assign a ticket to a staff member
    Assign {
        id: String,

        /// Staff roster id
        #[arg(long, conflicts_with_all = ["name", "email", "puesto"])]
        staff: Option<u32>,

        #[arg(long, requires = "email")]
        name: Option<String>,

        #[arg(long, requires = "name")]
        email: Option<String>,

        #[arg(long)]
        puesto: Option<String>,
    },

    /// Mark a ticket as resolved
    Resolve { id: String },

    /// Change the status of a ticket
    Status {
        id: String,

        /// New status code (open, in-progress, resolved, closed)
        status: String,
    },

    /// Show dashboard counters and distributions
    Stats,

    /// Manage the staff roster
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Print the display labels for every code
    Labels,
}

#[derive(Debug, Subcommand)]
pub enum StaffAction {
    /// List staff members
    List,

    /// Add a staff member
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        puesto: String,

        #[arg(long, default_value = "")]
        area: String,
    },
}

impl Cli {
    /// Open the file store under the resolved data directory.
    fn open_store(&self) -> Result<FileStore, String> {
        let root = config::resolve_data_root(self.home.clone()).map_err(|e| e.to_string())?;
        log::debug!("[cli] Using data directory {}", root.display());
        Ok(FileStore::new(root))
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<(), String> {
    let format = cli.format;

    // Commands that never touch stored tickets
    match &cli.command {
        Commands::Classify { text, explain } => {
            return commands::classify::run(text, *explain, format);
        }
        Commands::Labels => return commands::labels::run(format),
        _ => {}
    }

    let store = cli.open_store()?;
    dispatch(&store, cli.command, format)
}

/// Run a ticket command against `store`.
pub fn dispatch(
    store: &dyn TicketStore,
    command: Commands,
    format: OutputFormat,
) -> Result<(), String> {
    match command {
        Commands::Classify { text, explain } => commands::classify::run(&text, explain, format),
        Commands::Labels => commands::labels::run(format),
        Commands::Create {
            title,
            description,
            name,
            email,
            area,
            puesto,
        } => commands::create::run(
            store,
            commands::create::CreateArgs {
                title,
                description,
                name,
                email,
                area,
                puesto,
            },
            format,
        ),
        Commands::List {
            priority,
            ticket_type,
            status,
            search,
        } => commands::list::run(store, priority, ticket_type, status, search, format),
        Commands::Show { id } => commands::show::run(store, &id, format),
        Commands::Assign {
            id,
            staff,
            name,
            email,
            puesto,
        } => commands::assign::run(store, &id, staff, name, email, puesto, format),
        Commands::Resolve { id } => commands::status::resolve(store, &id, format),
        Commands::Status { id, status } => commands::status::run(store, &id, &status, format),
        Commands::Stats => commands::stats::run(store, format),
        Commands::Staff { action } => commands::staff::run(store, action, format),
    }
}
