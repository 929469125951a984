// src/main.rs
//
// RocketHub command-line front end

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use rockethub::application::commands::*;
use rockethub::application::dto::CreateRocketDto;
use rockethub::application::state::AppState;
use rockethub::config::RocketHubConfig;

#[derive(Debug, Parser)]
#[command(name = "rockethub")]
#[command(about = "RocketHub - Browse rockets and keep your own", long_about = None)]
struct Cli {
    /// Rocket API base URL (overrides ROCKETHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Local storage directory (overrides ROCKETHUB_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List remote rockets followed by custom ones
    List,
    /// Show a single rocket, custom rockets first
    Show {
        /// Rocket identifier
        id: String,
    },
    /// Create a custom rocket
    Add(AddArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    country: String,
    /// First flight date, YYYY-MM-DD
    #[arg(long)]
    first_flight: String,
    /// Cost per launch in USD
    #[arg(long)]
    cost_per_launch: u64,
    /// Image URL (repeatable)
    #[arg(long = "image")]
    images: Vec<String>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let mut config = RocketHubConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    log::debug!("Using configuration {:?}", config);

    // 2. WIRING
    let state = AppState::initialize(config)?;

    // 3. DISPATCH
    match cli.command {
        Commands::List => print_json(&list_rockets(&state).await?),
        Commands::Show { id } => print_json(&get_rocket(&id, &state).await?),
        Commands::Add(args) => {
            let dto = CreateRocketDto {
                name: args.name,
                description: args.description,
                flickr_images: args.images,
                cost_per_launch: args.cost_per_launch,
                country: args.country,
                first_flight: args.first_flight,
            };
            print_json(&create_rocket(dto, &state)?)
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
