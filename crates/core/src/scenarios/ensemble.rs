//! Monte-Carlo sweep over impact angle
//!
//! For an isotropic flux of impactors the entry angle θ (from horizontal)
//! follows P(θ) = sin(2θ), with CDF sin²(θ) and mode 45° (Shoemaker 1962).
//! Angles are drawn by inverse transform from a seeded generator, then the
//! entries are evaluated in parallel.

use crate::calculator::ImpactCalculator;
use crate::core_types::units::{Degrees, Kilometers, Meters};
use crate::core_types::{EntryParameters, ImpactResult};
use crate::error::ImpactError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// One evaluated draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnsembleSample {
    pub angle: Degrees,
    pub result: ImpactResult,
}

/// Aggregate statistics over all draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsembleSummary {
    pub samples: usize,
    pub airburst_count: usize,
    pub surface_count: usize,
    pub airburst_fraction: f64,
    /// Over surface outcomes only; `None` when every draw was an airburst
    pub mean_final_crater: Option<Meters>,
    pub max_final_crater: Option<Meters>,
    pub mean_thermal_radius: Kilometers,
    pub mean_one_psi_radius: Kilometers,
}

/// Draws and results of one sweep, in draw order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleEnsemble {
    pub seed: u64,
    pub samples: Vec<EnsembleSample>,
}

/// Draw one impact angle from the isotropic-flux distribution
///
/// θ = asin(√(1 − u)) with u ∈ [0, 1), so θ ∈ (0°, 90°].
pub fn sample_impact_angle<R: Rng + ?Sized>(rng: &mut R) -> Degrees {
    let u: f64 = rng.random_range(0.0..1.0);
    Degrees::new((1.0 - u).sqrt().asin().to_degrees())
}

/// Evaluate `sample_count` random-angle variants of `base`
///
/// Any angle already set on `base` is replaced. The same seed always gives
/// the same ensemble.
pub fn run_angle_ensemble(
    calculator: &ImpactCalculator,
    base: &EntryParameters,
    sample_count: usize,
    seed: u64,
) -> Result<AngleEnsemble, ImpactError> {
    if sample_count == 0 {
        return Err(ImpactError::invalid_parameter(
            "samples",
            "ensemble needs at least one sample",
        ));
    }
    base.validate()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let angles: Vec<Degrees> = (0..sample_count)
        .map(|_| sample_impact_angle(&mut rng))
        .collect();

    let samples = angles
        .par_iter()
        .map(|&angle| {
            let params = base.with_impact_angle(*angle);
            calculator
                .calculate(&params)
                .map(|result| EnsembleSample { angle, result })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ensemble = AngleEnsemble { seed, samples };
    let summary = ensemble.summary();
    info!(
        seed,
        samples = summary.samples,
        airburst_fraction = summary.airburst_fraction,
        "Angle ensemble complete"
    );
    Ok(ensemble)
}

impl AngleEnsemble {
    pub fn summary(&self) -> EnsembleSummary {
        let n = self.samples.len();
        let craters: Vec<Meters> = self
            .samples
            .iter()
            .filter_map(|s| s.result.crater().map(|c| c.final_diameter))
            .collect();
        let surface_count = craters.len();
        let airburst_count = n - surface_count;

        let mean = |total: f64, count: usize| {
            if count == 0 {
                0.0
            } else {
                total / count as f64
            }
        };

        let mean_final_crater = (!craters.is_empty())
            .then(|| Meters::new(mean(craters.iter().map(|c| **c).sum(), surface_count)));
        let max_final_crater = craters.iter().copied().max();

        let thermal_total: f64 = self.samples.iter().map(|s| *s.result.thermal_radius).sum();
        let one_psi_total: f64 = self
            .samples
            .iter()
            .map(|s| *s.result.blast_radius.one_psi)
            .sum();

        EnsembleSummary {
            samples: n,
            airburst_count,
            surface_count,
            airburst_fraction: mean(airburst_count as f64, n),
            mean_final_crater,
            max_final_crater,
            mean_thermal_radius: Kilometers::new(mean(thermal_total, n)),
            mean_one_psi_radius: Kilometers::new(mean(one_psi_total, n)),
        }
    }
}
