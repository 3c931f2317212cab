//! Discrete time-stepping oil field model.
//!
//! Every well owns three shaped-noise generators (oil, gas, water rate) and
//! every grid block one (pressure). `step` evaluates all of them at the
//! current step index and folds the rates into field totals.
//!
//! Two bookkeeping behaviours are kept on purpose:
//! * Remaining in-place volume is floored at zero *after* the step's
//!   production is subtracted, so cumulative totals may exceed the original
//!   in-place volume.
//! * Once a phase's in-place volume reaches zero, well rates for that phase
//!   stop updating and keep their last value while the field rate drops to 0.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, SynthError};
use crate::noise::presets::presets;
use crate::noise::{NoiseOptions, ShapeCreator, ShapedNoise};
use crate::report::{FieldReport, StepReport, WellReport};

pub const DEFAULT_OOIP: f64 = 2000.0;
pub const DEFAULT_GOIP: f64 = 2500.0;
pub const DEFAULT_WOIP: f64 = 2250.0;

/// Default persistence for well and block noise.
pub const DEFAULT_PERSISTENCE: f64 = 0.2;
/// Octave count used for block pressure noise.
pub const BLOCK_OCTAVES: u32 = 8;

/// Floor applied to oil and gas rates in ratio denominators. A numerical
/// convention, not a physical rate.
pub const RATE_FLOOR: f64 = 0.1;

/// Water cut `wpr / (wpr + max(opr, 0.1))`; 0 when the denominator is not positive.
pub fn water_cut(opr: f64, wpr: f64) -> f64 {
    let opr = opr.max(RATE_FLOOR);
    if wpr + opr > 0.0 {
        wpr / (wpr + opr)
    } else {
        0.0
    }
}

/// Gas-oil ratio `max(gpr, 0.1) / max(opr, 0.1)`.
pub fn gas_oil_ratio(opr: f64, gpr: f64) -> f64 {
    gpr.max(RATE_FLOOR) / opr.max(RATE_FLOOR)
}

/// Per-well noise tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellOptions {
    pub persistence: f64,
    pub octaves: u32,
    /// Multiplier on all three divergence envelopes.
    pub divergence_scale: f64,
    pub offset: f64,
}

impl Default for WellOptions {
    fn default() -> Self {
        Self { persistence: DEFAULT_PERSISTENCE, octaves: 8, divergence_scale: 1.0, offset: 0.0 }
    }
}

#[derive(Debug, Clone)]
struct Well {
    oil: ShapedNoise,
    gas: ShapedNoise,
    water: ShapedNoise,
    opr: f64,
    gpr: f64,
    wpr: f64,
    opt: f64,
    gpt: f64,
    wpt: f64,
}

impl Well {
    fn new(seed: i64, options: &WellOptions) -> Self {
        let p = presets();
        let seed = i128::from(seed);
        let rate_options = |persistence: f64, octaves: u32| NoiseOptions {
            persistence,
            octaves,
            offset: options.offset,
            cutoff: Some(0.0),
        };

        let oil = ShapeCreator::create_noise_function(
            Some(p.oil_rate.clone()),
            Some(p.oil_divergence.scaled_copy(options.divergence_scale)),
            Some(seed),
            &rate_options(options.persistence, options.octaves),
        );
        // Gas is decorrelated from oil: different seed, rougher and coarser noise.
        let gas = ShapeCreator::create_noise_function(
            Some(p.gas_rate.clone()),
            Some(p.gas_divergence.scaled_copy(options.divergence_scale)),
            Some(seed * 7),
            &rate_options(options.persistence * 3.5, options.octaves / 2),
        );
        let water = ShapeCreator::create_noise_function(
            Some(p.water_rate.clone()),
            Some(p.water_divergence.scaled_copy(options.divergence_scale)),
            Some(seed * 11),
            &rate_options(options.persistence, options.octaves),
        );

        Self { oil, gas, water, opr: 0.0, gpr: 0.0, wpr: 0.0, opt: 0.0, gpt: 0.0, wpt: 0.0 }
    }

    fn wct(&self) -> f64 {
        water_cut(self.opr, self.wpr)
    }

    fn gor(&self) -> f64 {
        gas_oil_ratio(self.opr, self.gpr)
    }
}

#[derive(Debug, Clone)]
struct Block {
    pressure: ShapedNoise,
    bpr: f64,
}

/// Synthetic field with wells and grid blocks.
///
/// Entities are keyed by name and iterated in name order. Registering a name
/// again replaces its generators and resets its state.
#[derive(Debug, Clone)]
pub struct OilSimulator {
    ooip: f64,
    goip: f64,
    woip: f64,

    foip: f64,
    fgip: f64,
    fwip: f64,

    fopt: f64,
    fopr: f64,
    fgpt: f64,
    fgpr: f64,
    fwpt: f64,
    fwpr: f64,

    fgor: f64,
    fwct: f64,

    current_step: u64,
    wells: BTreeMap<String, Well>,
    blocks: BTreeMap<String, Block>,
}

impl Default for OilSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_OOIP, DEFAULT_GOIP, DEFAULT_WOIP)
    }
}

impl OilSimulator {
    /// Field with the given initial oil, gas and water in place.
    pub fn new(ooip: f64, goip: f64, woip: f64) -> Self {
        Self {
            ooip,
            goip,
            woip,
            foip: ooip,
            fgip: goip,
            fwip: woip,
            fopt: 0.0,
            fopr: 0.0,
            fgpt: 0.0,
            fgpr: 0.0,
            fwpt: 0.0,
            fwpr: 0.0,
            fgor: 0.0,
            fwct: 0.0,
            current_step: 0,
            wells: BTreeMap::new(),
            blocks: BTreeMap::new(),
        }
    }

    /// Register a well. Gas noise uses `seed · 7`, water `seed · 11`. A
    /// negative seed behaves like its magnitude.
    pub fn add_well(&mut self, name: impl Into<String>, seed: i64, options: &WellOptions) {
        let name = name.into();
        debug!(well = %name, seed, ?options, "registering well");
        self.wells.insert(name, Well::new(seed, options));
    }

    /// Register a grid block with a pressure generator.
    pub fn add_block(&mut self, name: impl Into<String>, seed: i64, persistence: f64) {
        let name = name.into();
        debug!(block = %name, seed, persistence, "registering block");
        let options = NoiseOptions {
            persistence,
            octaves: BLOCK_OCTAVES,
            offset: 0.0,
            cutoff: Some(0.0),
        };
        let pressure = ShapeCreator::create_noise_function(
            Some(presets().block_pressure.clone()),
            Some(presets().block_divergence.clone()),
            Some(i128::from(seed)),
            &options,
        );
        self.blocks.insert(name, Block { pressure, bpr: 0.0 });
    }

    /// Advance one step. `scale` maps step index to normalized time
    /// (`x = step · scale`); 1.0 covers the whole envelope in one step.
    pub fn step(&mut self, scale: f64) {
        let x = self.current_step as f64;

        self.fopr = 0.0;
        self.fgpr = 0.0;
        self.fwpr = 0.0;
        self.fgor = 0.0;
        self.fwct = 0.0;

        let oil_left = self.foip > 0.0;
        let gas_left = self.fgip > 0.0;
        let water_left = self.fwip > 0.0;

        for well in self.wells.values_mut() {
            let opr = well.oil.evaluate(x, scale);
            let gpr = well.gas.evaluate(x, scale);
            let wpr = well.water.evaluate(x, scale);

            if oil_left {
                well.opr = opr;
                well.opt += opr;
                self.fopr += opr;
            }
            if gas_left {
                well.gpr = gpr;
                well.gpt += gpr;
                self.fgpr += gpr;
            }
            if water_left {
                well.wpr = wpr;
                well.wpt += wpr;
                self.fwpr += wpr;
            }

            self.fgor += well.gor();
            self.fwct += well.wct();
        }

        self.foip = deplete(self.foip, self.fopr, "oil");
        self.fgip = deplete(self.fgip, self.fgpr, "gas");
        self.fwip = deplete(self.fwip, self.fwpr, "water");

        self.fopt += self.fopr;
        self.fgpt += self.fgpr;
        self.fwpt += self.fwpr;

        if !self.wells.is_empty() {
            let count = self.wells.len() as f64;
            self.fgor /= count;
            self.fwct /= count;
        }

        for block in self.blocks.values_mut() {
            block.bpr = block.pressure.evaluate(x, scale);
        }

        trace!(
            step = self.current_step,
            fopr = self.fopr,
            fgpr = self.fgpr,
            fwpr = self.fwpr,
            "stepped field"
        );
        self.current_step += 1;
    }

    // ── Field readers ───────────────────────────────────────────────────────

    pub fn ooip(&self) -> f64 {
        self.ooip
    }

    pub fn goip(&self) -> f64 {
        self.goip
    }

    pub fn woip(&self) -> f64 {
        self.woip
    }

    /// Number of completed steps.
    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    pub fn fopt(&self) -> f64 {
        self.fopt
    }

    pub fn fopr(&self) -> f64 {
        self.fopr
    }

    pub fn fgpt(&self) -> f64 {
        self.fgpt
    }

    pub fn fgpr(&self) -> f64 {
        self.fgpr
    }

    pub fn fwpt(&self) -> f64 {
        self.fwpt
    }

    pub fn fwpr(&self) -> f64 {
        self.fwpr
    }

    /// Mean of the per-well gas-oil ratios, not a ratio of field totals.
    pub fn fgor(&self) -> f64 {
        self.fgor
    }

    /// Mean of the per-well water cuts.
    pub fn fwct(&self) -> f64 {
        self.fwct
    }

    pub fn foip(&self) -> f64 {
        self.foip
    }

    pub fn fgip(&self) -> f64 {
        self.fgip
    }

    pub fn fwip(&self) -> f64 {
        self.fwip
    }

    // ── Well readers ────────────────────────────────────────────────────────

    pub fn well_names(&self) -> impl Iterator<Item = &str> {
        self.wells.keys().map(String::as_str)
    }

    fn well(&self, name: &str) -> Result<&Well> {
        self.wells.get(name).ok_or_else(|| SynthError::UnknownWell(name.to_owned()))
    }

    pub fn opr(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.opr)
    }

    pub fn gpr(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.gpr)
    }

    pub fn wpr(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.wpr)
    }

    pub fn opt(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.opt)
    }

    pub fn gpt(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.gpt)
    }

    pub fn wpt(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.wpt)
    }

    pub fn wct(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.wct())
    }

    pub fn gor(&self, well: &str) -> Result<f64> {
        Ok(self.well(well)?.gor())
    }

    // ── Block readers ───────────────────────────────────────────────────────

    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn bpr(&self, block: &str) -> Result<f64> {
        self.blocks
            .get(block)
            .map(|b| b.bpr)
            .ok_or_else(|| SynthError::UnknownBlock(block.to_owned()))
    }

    /// Snapshot of every reader at the current step.
    pub fn report(&self) -> StepReport {
        let wells = self
            .wells
            .iter()
            .map(|(name, w)| {
                let report = WellReport {
                    opr: w.opr,
                    gpr: w.gpr,
                    wpr: w.wpr,
                    opt: w.opt,
                    gpt: w.gpt,
                    wpt: w.wpt,
                    gor: w.gor(),
                    wct: w.wct(),
                };
                (name.clone(), report)
            })
            .collect();
        let blocks = self.blocks.iter().map(|(name, b)| (name.clone(), b.bpr)).collect();

        StepReport {
            step: self.current_step,
            field: FieldReport {
                fopr: self.fopr,
                fopt: self.fopt,
                fgpr: self.fgpr,
                fgpt: self.fgpt,
                fwpr: self.fwpr,
                fwpt: self.fwpt,
                fgor: self.fgor,
                fwct: self.fwct,
                foip: self.foip,
                fgip: self.fgip,
                fwip: self.fwip,
            },
            wells,
            blocks,
        }
    }
}

/// Subtract a step's production and floor at zero.
fn deplete(in_place: f64, produced: f64, phase: &str) -> f64 {
    let remaining = in_place - produced;
    if 0.0 > remaining {
        debug!(phase, overshoot = -remaining, "in-place volume exhausted");
        0.0
    } else {
        remaining
    }
}
