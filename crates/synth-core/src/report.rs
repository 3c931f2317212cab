use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field-level values after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub fopr: f64,
    pub fopt: f64,
    pub fgpr: f64,
    pub fgpt: f64,
    pub fwpr: f64,
    pub fwpt: f64,
    pub fgor: f64,
    pub fwct: f64,
    pub foip: f64,
    pub fgip: f64,
    pub fwip: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellReport {
    pub opr: f64,
    pub gpr: f64,
    pub wpr: f64,
    pub opt: f64,
    pub gpt: f64,
    pub wpt: f64,
    pub gor: f64,
    pub wct: f64,
}

/// Every reader value at one step, keyed by entity name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Completed steps when the snapshot was taken.
    pub step: u64,
    pub field: FieldReport,
    pub wells: BTreeMap<String, WellReport>,
    /// Block pressure per block.
    pub blocks: BTreeMap<String, f64>,
}
