//! Parameter file loading and command-line target overrides

use std::path::Path;

use carbon_market_core::config::{MarketTables, TargetOverrides};
use carbon_market_core::model::SectorId;
use color_eyre::eyre::{WrapErr, eyre};

/// Load market tables from a YAML file, or the built-in baseline when no path is given.
pub fn load_tables(path: Option<&Path>) -> color_eyre::Result<MarketTables> {
    let Some(path) = path else {
        tracing::debug!("Using baseline market tables");
        return Ok(MarketTables::baseline());
    };

    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read parameter file {}", path.display()))?;
    let tables = tables_from_yaml(&content)
        .map_err(|e| eyre!("Failed to parse parameter file {}: {e}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        sectors = tables.sectors.len(),
        "Loaded market tables"
    );
    Ok(tables)
}

pub fn tables_from_yaml(yaml: &str) -> Result<MarketTables, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

/// Parse a `SECTOR=VALUE` pair as given to `--target`.
///
/// Only the last `=` separates name from value, so sector names may contain one.
pub fn parse_target_override(s: &str) -> Result<(SectorId, f64), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected SECTOR=VALUE, got `{s}`"))?;

    let sector = SectorId::new(name.trim()).map_err(|e| e.to_string())?;
    let target: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid target `{}`: {e}", value.trim()))?;
    if !target.is_finite() || target < 0.0 {
        return Err(format!("target for {sector} must be a non-negative number"));
    }

    Ok((sector, target))
}

/// Parse a carbon price argument. Negative prices are allowed; NaN and infinities are not.
pub fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid price `{s}`: {e}"))?;
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got `{s}`"));
    }
    Ok(price)
}

/// Collect repeated `--target` pairs; later entries for the same sector win.
pub fn collect_overrides(pairs: &[(SectorId, f64)]) -> TargetOverrides {
    pairs.iter().cloned().collect()
}
