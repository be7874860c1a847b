//! Static site renderer entry point.

use anyhow::Context;
use chrono::Datelike;

use mellylue_storefront::{Storefront, StorefrontConfig, write_site};

fn main() -> anyhow::Result<()> {
    mellylue_observability::init();

    let config = StorefrontConfig::from_env().context("failed to load storefront config")?;
    let storefront = Storefront::new(&config).context("storefront data failed validation")?;

    let year = chrono::Utc::now().year();
    let written = write_site(&storefront, &config.out_dir, year)
        .with_context(|| format!("failed to write site to {}", config.out_dir.display()))?;

    tracing::info!(pages = written.len(), out_dir = %config.out_dir.display(), "site rendered");
    Ok(())
}
