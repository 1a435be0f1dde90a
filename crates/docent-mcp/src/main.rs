//! Docent MCP Server - Main entry point

use docent_mcp::McpServer;
use docent_store::DocentConfig;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, stdout carries the protocol)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Load the corpus and create the MCP server
    let server = match McpServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to load docs from {}: {}", config.docs_root.display(), e);
            std::process::exit(1);
        }
    };

    // Run server (blocks until stdin closes)
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}

/// `DOCENT_CONFIG` names an optional TOML file; `DOCENT_DOCS_ROOT` overrides its docs root
fn load_config() -> Result<DocentConfig, String> {
    let mut config = match env::var("DOCENT_CONFIG") {
        Ok(path) => DocentConfig::from_file(Path::new(&path))?,
        Err(_) => DocentConfig::default(),
    };
    if let Ok(root) = env::var("DOCENT_DOCS_ROOT") {
        config.docs_root = PathBuf::from(root);
    }
    Ok(config)
}
