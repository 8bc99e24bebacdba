use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chromatch::api;
use chromatch::assets::AssetLoader;
use chromatch::models;
use chromatch::server;
use chromatch::services::{self, ImportFormat};

#[derive(Parser)]
#[command(name = "chromatch")]
#[command(about = "Color naming and RAL/Pantone/NCS matching service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the color report for one color (no server needed)
    Lookup {
        /// Color as hex digits, with or without '#' (e.g., "8a4578")
        hex: String,
    },
    /// Convert a raw vendor color list into a catalog file
    Import {
        /// Source format
        #[arg(value_enum)]
        format: ImportFormat,

        /// Raw source file (CSV or text)
        input: PathBuf,

        /// Output JSON catalog file
        output: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chromatch API",
        description = "Color naming and RAL/Pantone/NCS matching service",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_root, api::handle_color, api::handle_lookup,),
    components(schemas(
        models::ColorReport,
        models::NamedColor,
        models::Conversions,
        models::CatalogMatch,
        models::LabDto,
    )),
    tags(
        (name = "Colors", description = "Color reports and catalog matches"),
        (name = "Lookup", description = "Incremental color-name search")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Lookup { hex }) => run_lookup_command(&hex),
        Some(Commands::Import {
            format,
            input,
            output,
        }) => run_import_command(format, &input, &output),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Print a color report as pretty JSON
fn run_lookup_command(hex: &str) -> anyhow::Result<()> {
    init_cli_tracing();

    let color = services::parse_path_hex(hex.trim().trim_start_matches('#'))?;
    let state = server::create_app_state(Arc::new(AssetLoader::from_env()))?;
    let report = state.reporter.report(&color);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Convert a vendor file into catalog records
fn run_import_command(
    format: ImportFormat,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let summary = services::import_file(format, input, output)?;
    println!(
        "Wrote {} records to {} ({} lines skipped)",
        summary.written,
        output.display(),
        summary.skipped
    );
    Ok(())
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    // Log asset sources
    tracing::info!(
        catalogs = %asset_loader
            .catalog_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        config = %asset_loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    // Loads every catalog; a failure here aborts startup
    let state = server::create_app_state(asset_loader)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Chromatch server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Show version, environment and catalog sources
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let catalog_dir = std::env::var("CATALOG_DIR").ok();

    // Header
    println!("Chromatch v{VERSION}");
    println!("Color naming and RAL/Pantone/NCS matching service\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CATALOG_DIR = {}",
        catalog_dir.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    println!("\nAsset Sources:");

    let loader = AssetLoader::new(
        catalog_dir.clone().map(PathBuf::from),
        config_file.clone().map(PathBuf::from),
    );

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    let config = models::AppConfig::load_from_assets(&loader);
    let available = loader.list_catalogs();
    let embedded_count = AssetLoader::list_embedded_catalogs().len();
    match catalog_dir {
        Some(ref path) => println!(
            "  Catalogs: {path} ({} files, {embedded_count} embedded unused)",
            available.len()
        ),
        None => println!("  Catalogs: embedded ({embedded_count} files)"),
    }
    for kind in color_core::CatalogKind::ALL {
        let file = config.catalogs.file_for(kind);
        let marker = if available.iter().any(|f| f == file) {
            ""
        } else {
            "  (missing)"
        };
        println!("    {:<8} {}{marker}", kind.as_str(), loader.catalog_source(file));
    }

    // Commands section
    println!("\nCommands:");
    println!("  chromatch serve                          Start the HTTP server");
    println!("  chromatch lookup <hex>                   Print the color report for one color");
    println!("  chromatch import <format> <in> <out>     Convert a vendor color list");
    println!("  chromatch --help                         Show all options");
}
