use serde::{Deserialize, Serialize};

/// summary statistics of one estimation run
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FitStatistics {
    pub log_likelihood: f64,
    pub observations: usize,
    pub estimated_parameters: usize,
}
