use serde::{Deserialize, Serialize};

/// a named scalar coefficient of a choice model, with optional bound
/// constraints and a flag marking whether the estimation engine should
/// search for its value or hold it at the initial value.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub initial: f64,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    #[serde(default)]
    pub fixed: bool,
}

impl Parameter {
    /// an unconstrained parameter starting at zero
    pub fn free(name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            initial: 0.0,
            lower_bound: None,
            upper_bound: None,
            fixed: false,
        }
    }

    /// a parameter constrained to be at least zero
    pub fn non_negative(name: &str) -> Parameter {
        Parameter {
            lower_bound: Some(0.0),
            ..Parameter::free(name)
        }
    }

    /// a parameter constrained to be at most zero
    pub fn non_positive(name: &str) -> Parameter {
        Parameter {
            upper_bound: Some(0.0),
            ..Parameter::free(name)
        }
    }

    /// a parameter held at the given value and excluded from estimation
    pub fn fixed(name: &str, value: f64) -> Parameter {
        Parameter {
            initial: value,
            fixed: true,
            ..Parameter::free(name)
        }
    }
}
