// Formatter configuration (codesig.toml)
//
// Holds the parameter limit, the phrase table and named option presets so
// hosts can switch between hover, completion and documentation renderings
// without hard-coding flag combinations.

use crate::format::{FormatOptions, DEFAULT_MAX_PARAMS};
use crate::messages::MessageBundle;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Options for an element and, for methods, its parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub options: FormatOptions,
    pub parameter_options: FormatOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Parameters shown before a method's list is cut short
    pub max_params: usize,
    pub messages: MessageBundle,
    pub presets: BTreeMap<String, Preset>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
            messages: MessageBundle::default(),
            presets: builtin_presets(),
        }
    }
}

impl FormatterConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let mut config: FormatterConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        // Presets the file does not override stay available
        for (name, preset) in builtin_presets() {
            config.presets.entry(name).or_insert(preset);
        }

        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Configuration file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;
        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;
        debug!("Saved configuration to: {}", path.display());
        Ok(())
    }

    pub fn preset(&self, name: &str) -> Option<Preset> {
        self.presets.get(name).copied()
    }
}

fn builtin_presets() -> BTreeMap<String, Preset> {
    use FormatOptions as F;

    let mut presets = BTreeMap::new();
    presets.insert(
        "hover".to_string(),
        Preset {
            options: F::SHOW_MODIFIERS
                | F::SHOW_TYPE
                | F::SHOW_NAME
                | F::SHOW_PARAMETERS
                | F::SHOW_THROWS
                | F::SHOW_INITIALIZER
                | F::SHOW_EXTENDS_IMPLEMENTS,
            parameter_options: F::SHOW_TYPE | F::SHOW_NAME,
        },
    );
    presets.insert(
        "completion".to_string(),
        Preset {
            options: F::SHOW_NAME | F::SHOW_PARAMETERS | F::SHOW_TYPE | F::TYPE_AFTER,
            parameter_options: F::SHOW_TYPE,
        },
    );
    presets.insert(
        "javadoc".to_string(),
        Preset {
            options: F::SHOW_MODIFIERS
                | F::JAVADOC_MODIFIERS_ONLY
                | F::SHOW_TYPE
                | F::SHOW_NAME
                | F::SHOW_PARAMETERS
                | F::SHOW_THROWS
                | F::SHOW_EXTENDS_IMPLEMENTS,
            parameter_options: F::SHOW_TYPE | F::SHOW_NAME,
        },
    );
    presets.insert(
        "tree".to_string(),
        Preset {
            options: F::SHOW_NAME
                | F::SHOW_PARAMETERS
                | F::SHOW_TYPE
                | F::TYPE_AFTER
                | F::SHOW_ANONYMOUS_CLASS_VERBOSE,
            parameter_options: F::SHOW_TYPE,
        },
    );
    presets
}
