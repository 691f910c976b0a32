use std::path::Path;

use crate::data::loader;
use crate::data::model::ExpansionDataset;
use crate::error::{DatasetError, ExpansionError};
use crate::mineral::MineralProperties;
use crate::render::{ChartRenderer, ExpansionCharts};

// ---------------------------------------------------------------------------
// ExpansionSample – a mineral plus its loaded dataset
// ---------------------------------------------------------------------------

/// A mineral sample with a measured temperature/volume series.
///
/// Holds the mineral description by composition and delegates its queries;
/// the dataset is loaded once at construction and never mutated.
#[derive(Debug, Clone)]
pub struct ExpansionSample {
    mineral: MineralProperties,
    dataset: ExpansionDataset,
}

/// Pure numeric result of the finite-difference pass, one entry per sample
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionProfile {
    /// dV/dT at each sample point.
    pub derivatives: Vec<f64>,
    /// Local volumetric expansion coefficient `(1/V) · dV/dT`.
    pub alphas: Vec<f64>,
    /// Arithmetic mean of the coefficient series.
    pub mean_alpha: f64,
    /// Population standard deviation of the raw derivative series: a noise
    /// estimate over the unnormalized slopes, intentionally not over the
    /// coefficients.
    pub derivative_spread: f64,
}

/// The combined compute-and-render result.
#[derive(Debug, Clone)]
pub struct ExpansionReport {
    pub mean_alpha: f64,
    pub derivative_spread: f64,
    /// Two-panel diagnostic figure, PNG-encoded.
    pub chart: Vec<u8>,
}

impl ExpansionSample {
    pub fn new(mineral: MineralProperties, dataset: ExpansionDataset) -> Self {
        Self { mineral, dataset }
    }

    /// Build a sample by loading its dataset from a CSV file.
    pub fn from_csv<P: AsRef<Path>>(
        mineral: MineralProperties,
        path: P,
    ) -> Result<Self, DatasetError> {
        let dataset = loader::load_csv(path)?;
        Ok(Self { mineral, dataset })
    }

    pub fn mineral(&self) -> &MineralProperties {
        &self.mineral
    }

    pub fn dataset(&self) -> &ExpansionDataset {
        &self.dataset
    }

    // ---- Delegated mineral queries ----

    pub fn is_silicate(&self) -> bool {
        self.mineral.is_silicate()
    }

    pub fn density(&self) -> f64 {
        self.mineral.density()
    }

    pub fn describe(&self) -> String {
        self.mineral.describe()
    }

    // ---- Numeric core ----

    /// Differentiate the volume series and derive the local expansion
    /// coefficients.
    ///
    /// The step `h` is taken from the first two temperatures and reused for
    /// every interval; the series is assumed uniformly spaced. Boundary
    /// stencils omit the node term (`V[1]/2h` on the left, `-V[n-2]/2h` on
    /// the right); interior points use the central difference.
    pub fn expansion_profile(&self) -> Result<ExpansionProfile, DatasetError> {
        let t = self.dataset.temperatures();
        let v = self.dataset.volumes();
        let n = t.len();

        let h = t[1] - t[0];
        if h == 0.0 {
            return Err(DatasetError::DegenerateSpacing { t: t[0] });
        }

        let mut derivatives = Vec::with_capacity(n);
        for i in 0..n {
            let d = if i == 0 {
                v[1] / (2.0 * h)
            } else if i == n - 1 {
                -v[n - 2] / (2.0 * h)
            } else {
                (v[i + 1] - v[i - 1]) / (2.0 * h)
            };
            derivatives.push(d);
        }

        let mut alphas = Vec::with_capacity(n);
        for (j, (&volume, &d)) in v.iter().zip(&derivatives).enumerate() {
            if volume == 0.0 {
                return Err(DatasetError::ZeroVolume { index: j });
            }
            alphas.push(d / volume);
        }

        let mean_alpha = mean(&alphas);
        let derivative_spread = population_std(&derivatives);
        log::debug!(
            "{}: mean alpha {mean_alpha:.6e} 1/°C, derivative spread {derivative_spread:.6e}",
            self.mineral.name()
        );

        Ok(ExpansionProfile {
            derivatives,
            alphas,
            mean_alpha,
            derivative_spread,
        })
    }

    /// Compute the expansion profile and render the two-panel diagnostic
    /// figure (Volume vs Temperature, Alpha vs Temperature) through the
    /// given renderer.
    ///
    /// Deterministic and repeatable for an unchanged dataset.
    pub fn expansion_coefficient<R: ChartRenderer>(
        &self,
        renderer: &R,
    ) -> Result<ExpansionReport, ExpansionError> {
        let profile = self.expansion_profile()?;
        let chart = renderer.expansion_charts(&ExpansionCharts {
            mineral_name: self.mineral.name(),
            temperatures: self.dataset.temperatures(),
            volumes: self.dataset.volumes(),
            alphas: &profile.alphas,
        })?;
        Ok(ExpansionReport {
            mean_alpha: profile.mean_alpha,
            derivative_spread: profile.derivative_spread,
            chart,
        })
    }
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (no Bessel correction).
fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
