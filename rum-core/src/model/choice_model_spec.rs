use super::{Availability, Parameter, SpecError, UtilityFunction};
use crate::dataset::Dataset;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// a complete multinomial logit model specification: declared parameters,
/// one utility expression and one availability condition per alternative,
/// and the dataset column holding the observed choice. alternatives are
/// keyed by their index in the choice column.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChoiceModelSpec {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub utilities: BTreeMap<usize, UtilityFunction>,
    pub availability: BTreeMap<usize, Availability>,
    pub choice_column: String,
}

impl ChoiceModelSpec {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// alternative indices in ascending order
    pub fn alternatives(&self) -> Vec<usize> {
        self.utilities.keys().copied().collect_vec()
    }

    /// the number of parameters the engine searches over (fixed
    /// parameters are excluded)
    pub fn estimated_parameter_count(&self) -> usize {
        self.parameters.iter().filter(|p| !p.fixed).count()
    }

    /// internal consistency of the specification: parameters are declared
    /// once, every referenced coefficient is declared, and utilities and
    /// availability conditions cover the same alternatives.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.utilities.is_empty() {
            return Err(SpecError::NoAlternatives);
        }
        if let Some(name) = self
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .duplicates()
            .next()
        {
            return Err(SpecError::DuplicateParameter(name.to_string()));
        }
        let declared: HashSet<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        for (alternative, utility) in self.utilities.iter() {
            for coefficient in utility.coefficients() {
                if !declared.contains(coefficient.as_str()) {
                    return Err(SpecError::UndeclaredCoefficient {
                        alternative: *alternative,
                        coefficient: coefficient.clone(),
                    });
                }
            }
            if !self.availability.contains_key(alternative) {
                return Err(SpecError::MissingAvailability(*alternative));
            }
        }
        for alternative in self.availability.keys() {
            if !self.utilities.contains_key(alternative) {
                return Err(SpecError::UnknownAlternative(*alternative));
            }
        }
        Ok(())
    }

    /// confirms that every variable, availability column and the choice
    /// column referenced by this specification exists in the dataset
    pub fn validate_columns(&self, dataset: &Dataset) -> Result<(), SpecError> {
        for utility in self.utilities.values() {
            for variable in utility.variables() {
                dataset.column(variable)?;
            }
        }
        for condition in self.availability.values() {
            if let Some(name) = condition.column_name() {
                dataset.column(name)?;
            }
        }
        dataset.column(&self.choice_column)?;
        Ok(())
    }
}

impl TryFrom<&serde_json::Value> for ChoiceModelSpec {
    type Error = SpecError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value.clone()).map_err(|e| SpecError::BuildError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn binary_spec() -> ChoiceModelSpec {
        ChoiceModelSpec {
            name: String::from("binary"),
            parameters: vec![
                Parameter::free("ASC_1"),
                Parameter::non_positive("B_time"),
            ],
            utilities: BTreeMap::from([
                (0, UtilityFunction::new(None, &[("B_time", "time_0")])),
                (1, UtilityFunction::new(Some("ASC_1"), &[("B_time", "time_1")])),
            ]),
            availability: BTreeMap::from([(0, Availability::Always), (1, Availability::Always)]),
            choice_column: String::from("choice"),
        }
    }

    #[test]
    fn test_validate_accepts_consistent_spec() {
        binary_spec().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_duplicate_parameter() {
        let mut spec = binary_spec();
        spec.parameters.push(Parameter::free("ASC_1"));
        let error = spec.validate().unwrap_err();
        assert!(matches!(error, SpecError::DuplicateParameter(name) if name == "ASC_1"));
    }

    #[test]
    fn test_validate_rejects_undeclared_coefficient() {
        let mut spec = binary_spec();
        spec.utilities
            .insert(2, UtilityFunction::new(Some("ASC_2"), &[]));
        spec.availability.insert(2, Availability::Always);
        let error = spec.validate().unwrap_err();
        assert!(matches!(
            error,
            SpecError::UndeclaredCoefficient { alternative: 2, coefficient } if coefficient == "ASC_2"
        ));
    }

    #[test]
    fn test_validate_rejects_missing_availability() {
        let mut spec = binary_spec();
        spec.availability.remove(&1);
        let error = spec.validate().unwrap_err();
        assert!(matches!(error, SpecError::MissingAvailability(1)));
    }

    #[test]
    fn test_validate_columns_rejects_missing_variable() {
        let spec = binary_spec();
        let dataset = Dataset::new(
            "test",
            HashMap::from([
                (String::from("time_0"), vec![1.0, 2.0]),
                (String::from("choice"), vec![0.0, 1.0]),
            ]),
        )
        .unwrap();
        assert!(spec.validate_columns(&dataset).is_err());
    }

    #[test]
    fn test_build_from_json() {
        let input = serde_json::json!({
            "name": "binary",
            "parameters": [
                { "name": "ASC_1" },
                { "name": "B_time", "upper_bound": 0.0 }
            ],
            "utilities": {
                "0": { "terms": [{ "coefficient": "B_time", "variable": "time_0" }] },
                "1": {
                    "constant": "ASC_1",
                    "terms": [{ "coefficient": "B_time", "variable": "time_1" }]
                }
            },
            "availability": {
                "0": { "type": "always" },
                "1": { "type": "column", "name": "alt_1_av" }
            },
            "choice_column": "choice"
        });
        let spec = ChoiceModelSpec::try_from(&input).unwrap();
        spec.validate().unwrap();
        assert_eq!(spec.alternatives(), vec![0, 1]);
        assert_eq!(spec.estimated_parameter_count(), 2);
        assert_eq!(
            spec.availability.get(&1),
            Some(&Availability::Column {
                name: String::from("alt_1_av")
            })
        );
        assert_eq!(
            spec.parameter("B_time").and_then(|p| p.upper_bound),
            Some(0.0)
        );
    }
}
