use std::path::PathBuf;

use anyhow::{Context, Result};
use dilatometry::{BitmapRenderer, ExpansionSample, MineralProperties};

fn main() -> Result<()> {
    env_logger::init();

    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_expansion.csv"));

    let quartz = MineralProperties::new(
        "Quartz",
        7.0,
        true,
        "goldenrod",
        ["Si", "O"],
        "vitreous",
        "hexagonal",
        2.65,
    )?;
    println!("{}", quartz.describe());
    println!(
        "Density: {:.0} kg/m³  (silicate: {})",
        quartz.density(),
        quartz.is_silicate()
    );

    let sample = ExpansionSample::from_csv(quartz, &dataset_path)
        .with_context(|| format!("loading dataset from {}", dataset_path.display()))?;
    log::info!(
        "loaded {} samples from {}",
        sample.dataset().len(),
        dataset_path.display()
    );

    let renderer = BitmapRenderer::default();
    let report = sample.expansion_coefficient(&renderer)?;
    println!("Mean expansion coefficient: {:.6e} 1/°C", report.mean_alpha);
    println!("Derivative spread: {:.6e}", report.derivative_spread);

    std::fs::write("expansion_report.png", &report.chart)
        .context("writing expansion_report.png")?;
    let swatch = sample.mineral().swatch(&renderer)?;
    std::fs::write("color_swatch.png", &swatch).context("writing color_swatch.png")?;
    println!("Wrote expansion_report.png and color_swatch.png");

    Ok(())
}
