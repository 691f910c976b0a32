use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use palette::Srgb;
use serde::Deserialize;

use crate::color;
use crate::error::{MineralError, RenderError};
use crate::render::ChartRenderer;

// ---------------------------------------------------------------------------
// MineralProperties – descriptive attributes of one mineral sample
// ---------------------------------------------------------------------------

/// Descriptive physical attributes of a mineral, immutable after
/// construction.
///
/// The only invariant enforced here is a positive, finite specific gravity;
/// [`density`](Self::density) multiplies by it, so a nonsensical value would
/// poison every derived figure. Physical plausibility of the remaining
/// attributes is deliberately not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct MineralProperties {
    name: String,
    hardness: f64,
    breaks_by_fracture: bool,
    color: String,
    composition: BTreeSet<String>,
    luster: String,
    crystal_system: String,
    specific_gravity: f64,
}

/// On-disk JSON shape of a mineral descriptor, converted into
/// [`MineralProperties`] after validation.
#[derive(Debug, Deserialize)]
struct Descriptor {
    name: String,
    hardness: f64,
    breaks_by_fracture: bool,
    color: String,
    composition: BTreeSet<String>,
    luster: String,
    crystal_system: String,
    specific_gravity: f64,
}

impl TryFrom<Descriptor> for MineralProperties {
    type Error = MineralError;

    fn try_from(value: Descriptor) -> Result<Self, Self::Error> {
        MineralProperties::new(
            value.name,
            value.hardness,
            value.breaks_by_fracture,
            value.color,
            value.composition,
            value.luster,
            value.crystal_system,
            value.specific_gravity,
        )
    }
}

impl MineralProperties {
    /// Build a mineral from its descriptive attributes.
    ///
    /// `breaks_by_fracture = false` means the mineral breaks by cleavage.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        hardness: f64,
        breaks_by_fracture: bool,
        color: impl Into<String>,
        composition: impl IntoIterator<Item = impl Into<String>>,
        luster: impl Into<String>,
        crystal_system: impl Into<String>,
        specific_gravity: f64,
    ) -> Result<Self, MineralError> {
        if !(specific_gravity.is_finite() && specific_gravity > 0.0) {
            return Err(MineralError::InvalidSpecificGravity {
                value: specific_gravity,
            });
        }
        Ok(Self {
            name: name.into(),
            hardness,
            breaks_by_fracture,
            color: color.into(),
            composition: composition.into_iter().map(Into::into).collect(),
            luster: luster.into(),
            crystal_system: crystal_system.into(),
            specific_gravity,
        })
    }

    /// Load a mineral descriptor from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MineralError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a mineral descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, MineralError> {
        let descriptor: Descriptor = serde_json::from_str(json)?;
        descriptor.try_into()
    }

    // ---- Accessors ----

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hardness(&self) -> f64 {
        self.hardness
    }

    pub fn breaks_by_fracture(&self) -> bool {
        self.breaks_by_fracture
    }

    /// The raw color spec string; see [`color_rgb`](Self::color_rgb) for the
    /// resolved value.
    pub fn color_spec(&self) -> &str {
        &self.color
    }

    pub fn composition(&self) -> &BTreeSet<String> {
        &self.composition
    }

    pub fn luster(&self) -> &str {
        &self.luster
    }

    pub fn crystal_system(&self) -> &str {
        &self.crystal_system
    }

    pub fn specific_gravity(&self) -> f64 {
        self.specific_gravity
    }

    // ---- Derived queries ----

    /// A mineral is a silicate when its composition carries both silicon
    /// and oxygen.
    pub fn is_silicate(&self) -> bool {
        self.composition.contains("Si") && self.composition.contains("O")
    }

    /// Density in kg/m³, from specific gravity against water (1000 kg/m³).
    pub fn density(&self) -> f64 {
        self.specific_gravity * 1000.0
    }

    /// Resolve the stored color spec to an sRGB triple.
    pub fn color_rgb(&self) -> Result<Srgb<u8>, RenderError> {
        Ok(color::parse_color(&self.color)?)
    }

    /// Human-readable summary of hardness, breaking behavior, and crystal
    /// system.
    pub fn describe(&self) -> String {
        let breaking = if self.breaks_by_fracture {
            "fracture"
        } else {
            "cleavage"
        };
        format!(
            "The mineral {name} has a hardness of {hardness} on the Mohs scale.\n\
             {name} breaks by {breaking}.\n\
             The atoms in {name} are organized in the {system} crystal system.",
            name = self.name,
            hardness = self.hardness,
            breaking = breaking,
            system = self.crystal_system,
        )
    }

    /// Render a filled rectangle in the mineral's color as a PNG buffer.
    pub fn swatch<R: ChartRenderer>(&self, renderer: &R) -> Result<Vec<u8>, RenderError> {
        renderer.color_swatch(self.color_rgb()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn quartz() -> MineralProperties {
        MineralProperties::new(
            "Quartz",
            7.0,
            true,
            "goldenrod",
            ["Si", "O"],
            "vitreous",
            "hexagonal",
            2.65,
        )
        .unwrap()
    }

    #[test]
    fn silicate_requires_silicon_and_oxygen() {
        assert!(quartz().is_silicate());

        let calcite = MineralProperties::new(
            "Calcite",
            3.0,
            false,
            "white",
            ["Ca", "C", "O"],
            "vitreous",
            "trigonal",
            2.71,
        )
        .unwrap();
        assert!(!calcite.is_silicate());
    }

    #[test]
    fn density_scales_specific_gravity_by_water() {
        assert_eq!(quartz().density(), 2650.0);
    }

    #[test_case(0.0; "zero")]
    #[test_case(-2.65; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn rejects_bad_specific_gravity(value: f64) {
        let result = MineralProperties::new(
            "Broken",
            1.0,
            true,
            "gray",
            ["X"],
            "dull",
            "amorphous",
            value,
        );
        assert!(matches!(
            result,
            Err(MineralError::InvalidSpecificGravity { .. })
        ));
    }

    #[test]
    fn describe_names_breaking_behavior() {
        let text = quartz().describe();
        assert!(text.contains("Quartz breaks by fracture."));
        assert!(text.contains("hardness of 7 on the Mohs scale"));
        assert!(text.contains("hexagonal crystal system"));

        let cleaving = MineralProperties::new(
            "Halite", 2.5, false, "white", ["Na", "Cl"], "vitreous", "cubic", 2.17,
        )
        .unwrap();
        assert!(cleaving.describe().contains("Halite breaks by cleavage."));
    }

    #[test]
    fn descriptor_round_trip_from_json() {
        let json = r#"{
            "name": "Quartz",
            "hardness": 7.0,
            "breaks_by_fracture": true,
            "color": "goldenrod",
            "composition": ["Si", "O"],
            "luster": "vitreous",
            "crystal_system": "hexagonal",
            "specific_gravity": 2.65
        }"#;
        let mineral = MineralProperties::from_json(json).unwrap();
        assert_eq!(mineral, quartz());
    }

    #[test]
    fn descriptor_with_bad_gravity_is_rejected() {
        let json = r#"{
            "name": "Broken",
            "hardness": 1.0,
            "breaks_by_fracture": false,
            "color": "gray",
            "composition": ["X"],
            "luster": "dull",
            "crystal_system": "amorphous",
            "specific_gravity": -1.0
        }"#;
        assert!(matches!(
            MineralProperties::from_json(json),
            Err(MineralError::InvalidSpecificGravity { .. })
        ));
    }

    #[test]
    fn malformed_descriptor_is_a_parse_error() {
        assert!(matches!(
            MineralProperties::from_json("{ not json"),
            Err(MineralError::Descriptor { .. })
        ));
    }
}
