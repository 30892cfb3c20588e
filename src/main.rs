use anyhow::Result;
use clap::{Parser, Subcommand};
use mealplanner::{Config, observability::init_observability};

/// mealplanner - Monthly meal calendar and recipe widgets
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Meal calendar, popup and recipe search widgets", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config)?;

    init_observability(&config.observability.log_level, config.observability.json)?;

    match cli.command {
        Commands::Serve { host, port } => {
            mealplanner::cli::server::serve(config, host, port).await
        }
    }
}
