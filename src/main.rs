use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mergington_activities::{api, directory::ActivityDirectory};

#[derive(Parser)]
#[command(name = "mergington")]
#[command(about = "Extracurricular activity signup for Mergington High School")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the signup server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "mergington_activities=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16) -> anyhow::Result<()> {
    let directory = ActivityDirectory::with_seed();

    // Static assets (landing page) live next to the binary by default.
    let static_dir = std::env::var("MERGINGTON_STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = api::create_router(directory, static_dir.into());

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!(
        "Mergington activities server listening on http://127.0.0.1:{}",
        port
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await,
        // Default: start server on the standard port
        None => serve(8000).await,
    }
}
