use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Ambient settings only; the printed sequence and its delay are fixed.
#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TargetSettings {
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

/// Load settings from an explicitly named YAML file; no path means defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<TargetSettings> {
    let Some(path) = path else {
        return Ok(TargetSettings::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(TargetSettings::default());
    }
    let settings: TargetSettings = serde_yaml_bw::from_str(&contents)
        .with_context(|| format!("failed to parse settings {}", path.display()))?;
    Ok(settings)
}
