use anyhow::Result;
use clap::{Parser, Subcommand};

use reporter::config::{self, DEFAULT_PORT, DEFAULT_SERVER_URL, RunMode};
use reporter::issues::models::{CATEGORIES, Coordinates, DEFAULT_CATEGORY, IssueStatus};

mod cmd;

#[derive(Parser)]
#[command(name = "reporter")]
#[command(version, about = "Community issue reporter: API server and client")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the reporter API used by client commands
    #[arg(long, global = true, env = config::SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server
    Serve {
        /// Port to serve on
        #[arg(short, long, env = config::PORT_ENV, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Run mode: development binds loopback, production binds all interfaces
        #[arg(long, env = config::RUN_MODE_ENV, value_enum, default_value_t = RunMode::Development)]
        mode: RunMode,

        /// Open the status page in a browser once the server is up
        #[arg(long)]
        open: bool,
    },
    /// List issues, optionally filtered
    List {
        /// Category to show
        #[arg(short, long, value_parser = CATEGORIES)]
        category: Option<String>,

        /// Status to show: open, in-progress, resolved
        #[arg(short, long)]
        status: Option<IssueStatus>,

        /// Case-insensitive text to find in title or description
        #[arg(long)]
        search: Option<String>,

        /// Print the matching issues as JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit a new issue report
    Submit {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = DEFAULT_CATEGORY, value_parser = CATEGORIES)]
        category: String,

        /// Address or landmark; may be omitted when --coords is given
        #[arg(long, required_unless_present = "coords")]
        location: Option<String>,

        /// Phone or email
        #[arg(long)]
        contact: Option<String>,

        /// Latitude and longitude, e.g. "40.7128,-74.0060"
        #[arg(long, allow_hyphen_values = true)]
        coords: Option<Coordinates>,
    },
    /// Change the status of an issue
    Status {
        id: String,
        /// New status: open, in-progress, resolved
        status: IssueStatus,
    },
    /// Show a single issue
    Show { id: String },
    /// Show total and per-status counts
    Stats {
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    let cli = Cli::parse();

    let json_logs = match &cli.command {
        Commands::Serve { mode, .. } => mode.json_logs(),
        _ => false,
    };
    reporter::logging::init(cli.verbose, json_logs);

    match cli.command {
        Commands::Serve { port, mode, open } => {
            cmd::cmd_serve(port, mode, open).await?;
        }
        Commands::List {
            category,
            status,
            search,
            json,
        } => {
            cmd::cmd_list(&cli.server, category, status, search, json).await?;
        }
        Commands::Submit {
            title,
            description,
            category,
            location,
            contact,
            coords,
        } => {
            let form = cmd::SubmitArgs {
                title,
                description,
                category,
                location,
                contact,
                coords,
            };
            cmd::cmd_submit(&cli.server, form).await?;
        }
        Commands::Status { id, status } => cmd::cmd_status(&cli.server, &id, status).await?,
        Commands::Show { id } => cmd::cmd_show(&cli.server, &id).await?,
        Commands::Stats { json } => cmd::cmd_stats(&cli.server, json).await?,
    }

    Ok(())
}
