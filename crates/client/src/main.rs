//! Character sheet builder binary.
//!
//! Composition root that loads configuration from the environment, sets up
//! logging, assembles content and a frontend, and runs until the user quits.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Environment
//!
//! - `CHARSHEET_CONTENT_DIR`: directory with `config.toml` / `catalog.ron`
//! - `CHARSHEET_SESSION_ID`: log session name
//! - `RUST_LOG`: log filter (default `info`)

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use charsheet_client::{CONTENT_DIR_ENV, Client};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(cli_config.session_id.as_deref())?;
    tracing::info!("Starting character sheet builder");

    // 3. Assemble client
    let mut builder = Client::builder()
        .frontend_config(frontend_config)
        .frontend(CliFrontend::new(cli_config));
    if let Some(dir) = std::env::var_os(CONTENT_DIR_ENV) {
        builder = builder.content_dir(dir);
    }
    let client = builder.build()?;

    // 4. Run until quit
    client.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
