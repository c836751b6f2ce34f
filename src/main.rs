//! gitignore-api CLI
//!
//! Usage:
//!   gitignore-api [OPTIONS] [TYPES]
//!   gitignore-api --serve [--bind ADDR]
//!
//! One-shot mode composes a document to stdout; `--serve` runs the HTTP
//! API over the same registry and order table.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitignore_api::{
    compose, format_listing, format_order, load_registry, ListFormat, OrderTable, HELP_TEXT,
};

#[derive(Parser)]
#[command(name = "gitignore-api")]
#[command(about = "Compose and serve merged .gitignore templates")]
struct Cli {
    /// Comma-separated template identifiers (e.g. "macos,node")
    types: Option<String>,

    /// Directory of *.gitignore template files
    #[arg(short, long, default_value = "data/templates")]
    templates: PathBuf,

    /// Order file (TOML) with priority overrides
    #[arg(short, long)]
    order: Option<PathBuf>,

    /// List known template identifiers
    #[arg(short, long)]
    list: bool,

    /// Listing format: `lines` or `json` (default: grouped)
    #[arg(short, long, requires = "list")]
    format: Option<String>,

    /// Print the order table as JSON
    #[arg(long)]
    show_order: bool,

    /// Run the HTTP server
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = match load_registry(&cli.templates) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error loading templates from '{}': {}", cli.templates.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let order = match &cli.order {
        Some(path) => match OrderTable::from_file(path) {
            Ok(order) => order,
            Err(e) => {
                eprintln!("Error loading order file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => OrderTable::new(),
    };

    if cli.serve {
        if let Err(e) = gitignore_api::serve(cli.bind, registry, order).await {
            eprintln!("Server error: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    if cli.list {
        println!("{}", format_listing(&registry, ListFormat::parse(cli.format.as_deref())));
        return ExitCode::SUCCESS;
    }

    if cli.show_order {
        println!("{}", format_order(&order));
        return ExitCode::SUCCESS;
    }

    match &cli.types {
        Some(types) => {
            print!("{}", compose(types, &registry, &order));
            ExitCode::SUCCESS
        }
        None => {
            print!("{}", HELP_TEXT);
            ExitCode::SUCCESS
        }
    }
}
