//! Sheet configuration loaded from `sheep.toml`.
//!
//! ```toml
//! [sheet]
//! rows = 20
//! columns = 10
//!
//! [built_ins]
//! life = 42
//! ```
//!
//! A `[built_ins]` table replaces the default built-ins entirely.

use directories::ProjectDirs;
use serde::Deserialize;
use sheep_core::{Sheet, SheetBuilder};
use sheep_engine::engine::{CoreFactory, ExpressionFactory, SimpleParser};
use std::collections::BTreeMap;
use std::path::PathBuf;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLUMNS: usize = 10;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    sheet: Option<SheetSection>,
    built_ins: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SheetSection {
    rows: Option<usize>,
    columns: Option<usize>,
}

/// Settings used to build the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub built_ins: BTreeMap<String, i64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            built_ins: BTreeMap::from([("life".to_string(), 42)]),
        }
    }
}

impl Config {
    fn apply(&mut self, file: ConfigFile) {
        if let Some(sheet) = file.sheet {
            if let Some(rows) = sheet.rows {
                self.rows = rows;
            }
            if let Some(columns) = sheet.columns {
                self.columns = columns;
            }
        }
        if let Some(built_ins) = file.built_ins {
            self.built_ins = built_ins;
        }
    }

    /// Build an empty sheet with these settings.
    pub fn build_sheet(&self) -> sheep_core::Result<Sheet> {
        let factory = CoreFactory::new();
        let mut builder = SheetBuilder::new(SimpleParser::new(factory), factory.create_empty());
        for (name, value) in &self.built_ins {
            builder = builder.include_built_in(name.as_str(), factory.create_constant(*value));
        }
        builder.empty(self.rows, self.columns)
    }
}

/// Load the configuration from `config_file`, or from the user config dir
/// when none is given. Problems are reported as warnings and the defaults
/// are kept.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = Config::default();
    let config_path = config_file.cloned().or_else(user_config_path);

    let Some(path) = config_path.as_ref() else {
        return (config, warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
        }
        Ok(_) => match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => config.apply(parsed),
                Err(err) => warnings.push(format!("Failed to parse {}: {}", path.display(), err)),
            },
            Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
        },
        Err(err) => warnings.push(format!(
            "Failed to read metadata for {}: {}",
            path.display(),
            err
        )),
    }

    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheep")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("sheep.toml");
    Some(path)
}
