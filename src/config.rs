use crate::error::{FfResult, FingerForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    Standard,
    Calibrated,
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Cost model: `standard` or `calibrated`
    #[arg(long, default_value_t = ModelKind::Standard)]
    pub model: ModelKind,

    /// Directory of calibration tables (required for `calibrated`)
    #[arg(long)]
    pub tables: Option<String>,
}

impl ModelConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> FfResult<()> {
        if self.model == ModelKind::Calibrated && self.tables.is_none() {
            return Err(FingerForgeError::Config(
                "The calibrated model needs a calibration table directory (--tables)".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies arguments the user actually typed over a file-loaded config.
    pub fn merge_from_cli(&mut self, cli: &ModelConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(model, "model");
        update_if_present!(tables, "tables");
    }
}
