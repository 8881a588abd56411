/// Configuration for the overlay engine
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Whether unit-bearing converters rewrite measurements to metric.
///
/// Snapshotted at the start of every overlay pass and passed explicitly into
/// each converter, never read from ambient state. `Imperial` turns every
/// unit-bearing converter into a pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    Metric,
    Imperial,
}

impl ConversionMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Metric
        } else {
            Self::Imperial
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Metric)
    }
}

impl Default for ConversionMode {
    fn default() -> Self {
        Self::Metric
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayOptions {
    /// Convert feet/miles/pounds to meters/kilometers/kilograms.
    pub convert_units: bool,
    /// Emit a debug log line whenever a fragment is matched by display name
    /// instead of stable id.
    #[serde(default)]
    pub log_name_fallbacks: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            convert_units: true,
            log_name_fallbacks: false,
        }
    }
}

impl OverlayOptions {
    pub fn conversion_mode(&self) -> ConversionMode {
        ConversionMode::from_enabled(self.convert_units)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading options from {}", path.as_ref().display()))?;
        let options = serde_json::from_str(&content).context("parsing overlay options")?;
        Ok(options)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("writing options to {}", path.as_ref().display()))?;
        Ok(())
    }
}
