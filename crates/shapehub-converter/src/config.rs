//! Configuration for the conversion pipeline.

use serde::{Deserialize, Serialize};

/// Tunable parameters for [`crate::converter::Converter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Distance tolerance for the IGES sewing repair step.
    #[serde(default = "default_sew_tolerance")]
    pub sew_tolerance: f64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            sew_tolerance: default_sew_tolerance(),
        }
    }
}

fn default_sew_tolerance() -> f64 {
    1e-3
}
