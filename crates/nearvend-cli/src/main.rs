mod db;
mod geo;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nearvend")]
#[command(about = "Nearby vendor search command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Geohash utilities that never touch the database
    Geo {
        #[command(subcommand)]
        command: geo::GeoCommands,
    },
    /// Run a nearby search against the database
    Search(search::SearchArgs),
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Check database connectivity
    Ping,
    /// Load demo vendors from a YAML seed file
    Seed {
        /// Seed file (defaults to `NEARVEND_SEED_PATH`)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

async fn connect(config: &nearvend_core::AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool = nearvend_db::connect_pool(
        &config.database_url,
        nearvend_db::PoolConfig::from_app_config(config),
    )
    .await?;
    Ok(pool)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Geo { command }) => geo::run(&command)?,
        Some(Commands::Db { command }) => {
            let config = nearvend_core::load_app_config_from_env()?;
            let pool = connect(&config).await?;
            match command {
                DbCommands::Migrate => db::run_migrate(&pool).await?,
                DbCommands::Ping => db::run_ping(&pool).await?,
                DbCommands::Seed { file } => {
                    let path = file.unwrap_or_else(|| config.seed_path.clone());
                    db::run_seed(&pool, &path).await?;
                }
            }
        }
        Some(Commands::Search(args)) => {
            let config = nearvend_core::load_app_config_from_env()?;
            let pool = connect(&config).await?;
            search::run_search(pool, &config, &args).await?;
        }
        None => println!("nearvend: pass --help to list commands"),
    }

    Ok(())
}
