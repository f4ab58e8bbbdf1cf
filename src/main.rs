//! Listing Forge - AI-powered marketplace listing generation and optimization
//!
//! Serves the listing API over HTTP. Providers are configured entirely from
//! environment variables; see `--help`.

use listing_forge::server;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the library
    if let Err(e) = listing_forge::init() {
        eprintln!("Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app_state = match server::build_app_state() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;

    tracing::info!("Listing Forge v{} serving on {}:{}", listing_forge::VERSION, host, port);
    server::run(listener, app_state).await
}

/// Print help information
fn print_help() {
    println!("Listing Forge - AI-powered marketplace listing service");
    println!("═══════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    listing-forge              # start the HTTP server");
    println!();
    println!("ROUTES:");
    println!("    GET  /                     service banner");
    println!("    GET  /health               health check");
    println!("    GET  /metrics              agent usage counters");
    println!("    POST /create-listing       full listing from product info");
    println!("    POST /optimize-title       optimized title + alternatives");
    println!("    POST /generate-keywords    flat keyword list");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    HOST, PORT                 bind address (default 0.0.0.0:8000)");
    println!("    OPENAI_API_KEY             OpenAI API key");
    println!("    ANTHROPIC_API_KEY          Anthropic API key");
    println!("    GEMINI_API_KEY             Google Gemini API key");
    println!("    GROQ_API_KEY               Groq API key");
    println!("    MOONSHOT_API_KEY           Moonshot (Kimi) API key");
    println!("    DASHSCOPE_API_KEY          DashScope / Model Studio API key");
    println!("    OPENROUTER_API_KEY         OpenRouter API key");
    println!();
    println!("    The first configured provider becomes the default; the rest");
    println!("    serve as fallbacks. {{NAME}}_MODEL and {{NAME}}_BASE_URL");
    println!("    override the per-vendor defaults.");
}
