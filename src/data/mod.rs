//! Data layer: the expansion dataset and its loader.
//!
//! ```text
//!  temperature,volume CSV
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → ExpansionDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ ExpansionDataset  │  parallel T / V arrays
//!   └──────────────────┘
//! ```

pub mod loader;
pub mod model;
