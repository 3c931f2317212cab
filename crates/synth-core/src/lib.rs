//! Seed-reproducible synthetic reservoir time series.
//!
//! Production rates, cumulative totals, ratios and block pressures are shaped
//! noise curves rather than the output of a flow simulation. Given the same
//! seeds and step sequence every value is reproduced bit for bit.
//!
//! ```
//! use synth_core::{OilSimulator, WellOptions};
//!
//! let mut sim = OilSimulator::default();
//! sim.add_well("OP1", 1, &WellOptions::default());
//! sim.add_block("6,6,6", 2, 0.2);
//! for _ in 0..10 {
//!     sim.step(0.1);
//! }
//! assert!(sim.fopt() > 0.0);
//! assert!((sim.foip() - (sim.ooip() - sim.fopt())).abs() < 1e-9);
//! ```
pub mod config;
pub mod ensemble;
pub mod error;
pub mod noise;
pub mod primes;
pub mod report;
pub mod simulator;

pub use ::noise::NoiseFn;

pub use crate::config::{BlockConfig, FieldConfig, SimulatorConfig, WellConfig};
pub use crate::ensemble::{run_ensemble, run_series};
pub use crate::error::{Result, SynthError};
pub use crate::noise::{NoiseOptions, PerlinNoise, ShapeCreator, ShapeFunction, ShapedNoise};
pub use crate::primes::PrimeGenerator;
pub use crate::report::{FieldReport, StepReport, WellReport};
pub use crate::simulator::{OilSimulator, WellOptions};
