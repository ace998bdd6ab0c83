//! Third and Grove site entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tag_site::app::App;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tag_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(feature = "server")]
    if let Err(error) = load_config() {
        tracing::error!(error = ?error, "Startup failed");
        std::process::exit(1);
    }

    // In fullstack mode, this handles both server and client
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn load_config() -> anyhow::Result<()> {
    use anyhow::Context;
    use tag_site::config::{self, SiteConfig};

    let config = SiteConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        site_url = %config.site_url,
        form_endpoint = %config.form_endpoint,
        jobs_path = %config.jobs_path.display(),
        "Configuration loaded"
    );
    config::init(config);
    Ok(())
}
