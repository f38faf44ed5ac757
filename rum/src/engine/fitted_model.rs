use super::FitStatistics;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// the result of estimating a choice model: one value per declared
/// parameter (fixed parameters keep their declared value) and summary
/// fit statistics.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FittedModel {
    pub model_name: String,
    pub estimates: HashMap<String, f64>,
    pub statistics: FitStatistics,
}

impl FittedModel {
    pub fn estimate(&self, name: &str) -> Option<f64> {
        self.estimates.get(name).copied()
    }
}
