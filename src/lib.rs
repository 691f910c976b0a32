//! Mineral physical properties and thermal-expansion analysis.
//!
//! Two entities:
//!
//! - [`MineralProperties`] – descriptive attributes (Mohs hardness, color,
//!   breaking behavior, composition, luster, crystal system, specific
//!   gravity) with derived queries: silicate classification, density, a
//!   textual description, and a rendered color swatch.
//! - [`ExpansionSample`] – a mineral plus a temperature/volume series loaded
//!   from a two-column CSV file. Its finite-difference pass yields a local
//!   volumetric expansion coefficient per sample point, the series mean, a
//!   dispersion estimate over the raw derivatives, and a two-panel PNG
//!   diagnostic figure.
//!
//! # Quick start
//!
//! ```no_run
//! use dilatometry::{BitmapRenderer, ExpansionSample, MineralProperties};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let quartz = MineralProperties::new(
//!     "Quartz", 7.0, true, "goldenrod",
//!     ["Si", "O"], "vitreous", "hexagonal", 2.65,
//! )?;
//!
//! let sample = ExpansionSample::from_csv(quartz, "sample_expansion.csv")?;
//! let report = sample.expansion_coefficient(&BitmapRenderer::default())?;
//!
//! println!("mean alpha = {:.6e} 1/°C", report.mean_alpha);
//! std::fs::write("expansion_report.png", &report.chart)?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod data;
pub mod error;
pub mod expansion;
pub mod mineral;
pub mod render;

pub use data::loader::load_csv;
pub use data::model::ExpansionDataset;
pub use error::{ColorError, DatasetError, ExpansionError, MineralError, RenderError};
pub use expansion::{ExpansionProfile, ExpansionReport, ExpansionSample};
pub use mineral::MineralProperties;
pub use render::{BitmapRenderer, ChartRenderer, ExpansionCharts};
