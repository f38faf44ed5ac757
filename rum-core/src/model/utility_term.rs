use serde::{Deserialize, Serialize};

/// one coefficient * variable product in a linear utility expression
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UtilityTerm {
    pub coefficient: String,
    pub variable: String,
}
