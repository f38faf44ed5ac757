use super::UtilityTerm;
use serde::{Deserialize, Serialize};

/// a linear-in-parameters utility expression for one choice alternative:
/// an optional alternative-specific constant (a declared parameter with no
/// attached variable) plus an ordered list of coefficient * variable terms.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct UtilityFunction {
    pub constant: Option<String>,
    #[serde(default)]
    pub terms: Vec<UtilityTerm>,
}

impl UtilityFunction {
    pub fn new(constant: Option<&str>, terms: &[(&str, &str)]) -> UtilityFunction {
        UtilityFunction {
            constant: constant.map(String::from),
            terms: terms
                .iter()
                .map(|(coefficient, variable)| UtilityTerm {
                    coefficient: coefficient.to_string(),
                    variable: variable.to_string(),
                })
                .collect(),
        }
    }

    /// every parameter name referenced by this expression, constant first
    pub fn coefficients(&self) -> impl Iterator<Item = &String> {
        self.constant
            .iter()
            .chain(self.terms.iter().map(|t| &t.coefficient))
    }

    /// every dataset variable referenced by this expression
    pub fn variables(&self) -> impl Iterator<Item = &String> {
        self.terms.iter().map(|t| &t.variable)
    }
}
