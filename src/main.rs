use anyhow::{Context, Result, bail};
use pagelayout::{Config, GlobalStyle, Layout, MarkdownRenderer, SiteMetadata};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = SiteMetadata::load(&config.site).context("Failed to load site metadata")?;
    let style = GlobalStyle::with_syntax_theme(&config.theme)
        .with_context(|| format!("Failed to load syntax theme {}", config.theme))?;
    let layout = Layout::new(site, style, MarkdownRenderer::new());

    let report = pagelayout::generate_site(&config.content, &config.output, &layout)
        .context("Failed to generate site")?;

    info!(
        generated = report.generated.len(),
        failed = report.failed.len(),
        output = %config.output.display(),
        "site generated"
    );

    if report.generated.is_empty() && !report.failed.is_empty() {
        bail!("No pages could be rendered");
    }

    if config.open {
        let index = config.output.join("index.html");
        if index.exists() {
            open::that(&index)
                .with_context(|| format!("Failed to open {}", index.display()))?;
        } else {
            warn!(path = %index.display(), "no index page to open");
        }
    }

    Ok(())
}
