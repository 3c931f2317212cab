//! Serializable simulator setup.
//!
//! ```json
//! {
//!   "field": { "ooip": 2000.0, "goip": 2500.0, "woip": 2250.0 },
//!   "wells": [ { "name": "OP1", "seed": 1, "octaves": 6 } ],
//!   "blocks": [ { "name": "6,6,6", "seed": 2 } ]
//! }
//! ```
//! Omitted fields take the simulator defaults.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SynthError};
use crate::simulator::{OilSimulator, WellOptions, DEFAULT_GOIP, DEFAULT_OOIP, DEFAULT_PERSISTENCE, DEFAULT_WOIP};

/// Initial in-place volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub ooip: f64,
    pub goip: f64,
    pub woip: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { ooip: DEFAULT_OOIP, goip: DEFAULT_GOIP, woip: DEFAULT_WOIP }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellConfig {
    pub name: String,
    pub seed: i64,
    #[serde(flatten)]
    pub options: WellOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    pub name: String,
    pub seed: i64,
    #[serde(default = "default_persistence")]
    pub persistence: f64,
}

fn default_persistence() -> f64 {
    DEFAULT_PERSISTENCE
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub field: FieldConfig,
    pub wells: Vec<WellConfig>,
    pub blocks: Vec<BlockConfig>,
}

impl SimulatorConfig {
    /// Default field with well `OP1` (seed 1) and block `6,6,6` (seed 2).
    pub fn reference() -> Self {
        Self {
            field: FieldConfig::default(),
            wells: vec![WellConfig { name: "OP1".into(), seed: 1, options: WellOptions::default() }],
            blocks: vec![BlockConfig { name: "6,6,6".into(), seed: 2, persistence: DEFAULT_PERSISTENCE }],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| SynthError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), wells = config.wells.len(), blocks = config.blocks.len(), "loaded simulator config");
        Ok(config)
    }

    /// Build a simulator with every entity registered in listed order.
    pub fn build(&self) -> OilSimulator {
        OilSimulator::from_config(self)
    }
}

impl OilSimulator {
    pub fn from_config(config: &SimulatorConfig) -> Self {
        let field = &config.field;
        let mut sim = OilSimulator::new(field.ooip, field.goip, field.woip);
        for well in &config.wells {
            sim.add_well(well.name.clone(), well.seed, &well.options);
        }
        for block in &config.blocks {
            sim.add_block(block.name.clone(), block.seed, block.persistence);
        }
        sim
    }
}
