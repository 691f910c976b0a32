use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// ExpansionDataset – the loaded temperature/volume series
// ---------------------------------------------------------------------------

/// An ordered temperature/volume series, read-only after construction.
///
/// Kept as parallel arrays so the finite-difference pass can index both
/// columns by position. The constructor enforces equal column lengths and
/// the two-point minimum a finite difference needs; it does not check
/// monotonicity or duplicate temperatures (a zero first step is caught at
/// compute time instead).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionDataset {
    temperatures: Vec<f64>,
    volumes: Vec<f64>,
}

impl ExpansionDataset {
    pub fn new(temperatures: Vec<f64>, volumes: Vec<f64>) -> Result<Self, DatasetError> {
        if temperatures.len() != volumes.len() {
            return Err(DatasetError::LengthMismatch {
                temperatures: temperatures.len(),
                volumes: volumes.len(),
            });
        }
        if temperatures.len() < 2 {
            return Err(DatasetError::TooShort {
                rows: temperatures.len(),
            });
        }
        Ok(Self {
            temperatures,
            volumes,
        })
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Temperatures in °C, file order.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Volumes in cc, file order.
    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }
}
