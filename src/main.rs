use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pocket_services::config::{Config, Service};
use pocket_services::{server, telemetry};

/// Runs one of the pocket services.
#[derive(Parser)]
#[command(name = "pocket-services")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the URL shortener
    Shortener(ServeArgs),

    /// Run the to-do list service
    Todo(ServeArgs),
}

/// Flags shared by both services; they override the environment.
#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:8000 (overrides LISTEN)
    #[arg(short, long)]
    listen: Option<String>,

    /// SQLite URL, e.g. sqlite://./data/urls.db (overrides DATABASE_URL)
    #[arg(short, long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (service, args) = match cli.command {
        Commands::Shortener(args) => (Service::Shortener, args),
        Commands::Todo(args) => (Service::Todo, args),
    };

    let config = Config::from_env(service)?.with_overrides(args.listen, args.database_url);
    config.validate()?;

    telemetry::init(&config)?;
    config.print_summary();

    server::run(config).await
}
