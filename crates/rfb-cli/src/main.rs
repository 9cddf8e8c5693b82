mod branches;
mod menu;
mod reviews;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::reviews::ReviewArgs;

#[derive(Debug, Parser)]
#[command(name = "rfb")]
#[command(about = "Restaurant feedback command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List branches with their rating and review count
    Branches,
    /// Find the branch nearest to a position
    Nearest {
        /// Latitude in decimal degrees
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in decimal degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List recent reviews
    Reviews {
        /// Only show reviews for this branch ID
        #[arg(long)]
        branch: Option<String>,
        /// Maximum number of reviews to show
        #[arg(long, default_value_t = rfb_api::DEFAULT_REVIEW_LIMIT)]
        limit: u32,
    },
    /// Show the menu grouped by category
    Menu {
        /// Only show this category (e.g. SWEETS)
        #[arg(long)]
        category: Option<String>,
        /// Only show dishes for this branch ID
        #[arg(long)]
        branch: Option<String>,
    },
    /// Submit a review
    Review(ReviewArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = rfb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = rfb_api::ApiClient::from_config(&config)?;
    tracing::debug!(api_url = %config.api_url, env = %config.env, "configured API client");

    match cli.command {
        Commands::Branches => branches::run_branches(&client).await,
        Commands::Nearest { lat, lng, json } => {
            let position = lat.zip(lng);
            branches::run_nearest(&client, &config, position, json).await
        }
        Commands::Reviews { branch, limit } => {
            reviews::run_reviews(&client, branch.as_deref(), limit).await
        }
        Commands::Menu { category, branch } => {
            menu::run_menu(&client, category.as_deref(), branch.as_deref()).await
        }
        Commands::Review(args) => reviews::run_submit_review(&client, args).await,
    }
}
