//! evaluation of a choice model specification at fixed parameter values.
//! functions here expect a specification that passed
//! [`ChoiceModelSpec::validate`]; utilities and availability conditions
//! are paired by ascending alternative index.

use super::LogitError;
use rum_core::dataset::Dataset;
use rum_core::model::{Availability, ChoiceModelSpec, UtilityFunction};
use std::collections::HashMap;

/// a utility expression with its parameter names and variable names
/// resolved against an estimate map and a dataset, ready for row-wise
/// evaluation
struct ResolvedUtility<'a> {
    constant: f64,
    terms: Vec<(f64, &'a [f64])>,
}

impl ResolvedUtility<'_> {
    fn value(&self, row: usize) -> f64 {
        self.terms
            .iter()
            .fold(self.constant, |acc, (beta, column)| acc + beta * column[row])
    }
}

/// per-observation linear utility values for each alternative at the
/// given parameter estimates. inner vectors follow ascending alternative
/// index order.
pub fn utility_rows(
    spec: &ChoiceModelSpec,
    dataset: &Dataset,
    estimates: &HashMap<String, f64>,
) -> Result<Vec<Vec<f64>>, LogitError> {
    let resolved = spec
        .utilities
        .values()
        .map(|utility| resolve(utility, dataset, estimates))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = (0..dataset.len())
        .map(|row| resolved.iter().map(|utility| utility.value(row)).collect())
        .collect();
    Ok(rows)
}

/// multinomial logit choice probabilities: for each observation, the
/// exponentiated utility of each available alternative normalized over
/// all available alternatives. unavailable alternatives get probability
/// zero. utilities are shifted by the row maximum before exponentiation
/// to avoid overflow.
pub fn choice_probabilities(
    spec: &ChoiceModelSpec,
    dataset: &Dataset,
    estimates: &HashMap<String, f64>,
) -> Result<Vec<Vec<f64>>, LogitError> {
    let utilities = utility_rows(spec, dataset, estimates)?;
    let indicators = availability_indicators(spec, dataset)?;
    let mut result = Vec::with_capacity(utilities.len());
    for (row, values) in utilities.iter().enumerate() {
        let available = indicators
            .iter()
            .map(|indicator| match indicator {
                None => true,
                Some(column) => column[row] != 0.0,
            })
            .collect::<Vec<bool>>();
        let max_utility = values
            .iter()
            .zip(available.iter())
            .filter(|(_, a)| **a)
            .map(|(v, _)| *v)
            .fold(f64::NEG_INFINITY, f64::max);
        if max_utility == f64::NEG_INFINITY {
            return Err(LogitError::NoAvailableAlternative(row));
        }
        let exponentiated = values
            .iter()
            .zip(available.iter())
            .map(|(v, a)| if *a { (v - max_utility).exp() } else { 0.0 })
            .collect::<Vec<f64>>();
        let denominator: f64 = exponentiated.iter().sum();
        result.push(exponentiated.into_iter().map(|e| e / denominator).collect());
    }
    Ok(result)
}

/// the summed log-probability of the observed choices: the log
/// likelihood of the specification at the given estimates. this is the
/// quantity an estimation engine maximizes; a chosen alternative with
/// zero probability contributes negative infinity.
pub fn log_likelihood(
    spec: &ChoiceModelSpec,
    dataset: &Dataset,
    estimates: &HashMap<String, f64>,
) -> Result<f64, LogitError> {
    let probabilities = choice_probabilities(spec, dataset, estimates)?;
    let choices = dataset.integer_column(&spec.choice_column)?;
    let positions: HashMap<usize, usize> = spec
        .alternatives()
        .into_iter()
        .enumerate()
        .map(|(position, alternative)| (alternative, position))
        .collect();
    let mut total = 0.0;
    for (observation, (row, chosen)) in probabilities.iter().zip(choices.iter()).enumerate() {
        let position = positions
            .get(chosen)
            .ok_or(LogitError::UnknownChosenAlternative {
                observation,
                alternative: *chosen,
            })?;
        total += row[*position].ln();
    }
    Ok(total)
}

fn resolve<'a>(
    utility: &UtilityFunction,
    dataset: &'a Dataset,
    estimates: &HashMap<String, f64>,
) -> Result<ResolvedUtility<'a>, LogitError> {
    let constant = match &utility.constant {
        Some(name) => lookup(estimates, name)?,
        None => 0.0,
    };
    let terms = utility
        .terms
        .iter()
        .map(|term| {
            let beta = lookup(estimates, &term.coefficient)?;
            let column = dataset.column(&term.variable)?;
            Ok((beta, column))
        })
        .collect::<Result<Vec<_>, LogitError>>()?;
    Ok(ResolvedUtility { constant, terms })
}

fn lookup(estimates: &HashMap<String, f64>, name: &str) -> Result<f64, LogitError> {
    estimates
        .get(name)
        .copied()
        .ok_or_else(|| LogitError::MissingEstimate(name.to_string()))
}

fn availability_indicators<'a>(
    spec: &ChoiceModelSpec,
    dataset: &'a Dataset,
) -> Result<Vec<Option<&'a [f64]>>, LogitError> {
    spec.availability
        .values()
        .map(|condition| match condition {
            Availability::Always => Ok(None),
            Availability::Column { name } => Ok(Some(dataset.column(name)?)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rum_core::model::Parameter;
    use std::collections::BTreeMap;

    const EPSILON: f64 = 1e-12;

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

    fn binary_dataset() -> Dataset {
        Dataset::new(
            "test",
            HashMap::from([
                (String::from("time_0"), vec![10.0, 20.0, 30.0]),
                (String::from("time_1"), vec![15.0, 10.0, 30.0]),
                (String::from("choice"), vec![0.0, 1.0, 0.0]),
            ]),
        )
        .unwrap()
    }

    fn zero_estimates() -> HashMap<String, f64> {
        HashMap::from([(String::from("ASC_1"), 0.0), (String::from("B_time"), 0.0)])
    }

    #[test]
    fn test_zero_estimates_yield_uniform_probabilities() {
        let probabilities =
            choice_probabilities(&binary_spec(), &binary_dataset(), &zero_estimates()).unwrap();
        assert_eq!(probabilities.len(), 3);
        for row in probabilities {
            for p in row {
                assert!((p - 0.5).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_log_likelihood_at_zero_estimates() {
        let ll = log_likelihood(&binary_spec(), &binary_dataset(), &zero_estimates()).unwrap();
        assert!((ll + 3.0 * 2.0f64.ln()).abs() < EPSILON);
    }

    #[test]
    fn test_utility_rows_follow_estimates() {
        let estimates = HashMap::from([
            (String::from("ASC_1"), 1.0),
            (String::from("B_time"), -0.1),
        ]);
        let rows = utility_rows(&binary_spec(), &binary_dataset(), &estimates).unwrap();
        assert!((rows[0][0] + 1.0).abs() < EPSILON);
        assert!((rows[0][1] + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_availability_column_masks_alternative() {
        let mut spec = binary_spec();
        spec.availability.insert(
            1,
            Availability::Column {
                name: String::from("alt_1_av"),
            },
        );
        let dataset = Dataset::new(
            "test",
            HashMap::from([
                (String::from("time_0"), vec![10.0, 20.0]),
                (String::from("time_1"), vec![15.0, 10.0]),
                (String::from("alt_1_av"), vec![0.0, 1.0]),
                (String::from("choice"), vec![0.0, 1.0]),
            ]),
        )
        .unwrap();
        let probabilities = choice_probabilities(&spec, &dataset, &zero_estimates()).unwrap();
        assert_eq!(probabilities[0], vec![1.0, 0.0]);
        assert!((probabilities[1][0] - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_no_available_alternative_is_an_error() {
        let mut spec = binary_spec();
        for alternative in [0, 1] {
            spec.availability.insert(
                alternative,
                Availability::Column {
                    name: String::from("av"),
                },
            );
        }
        let dataset = Dataset::new(
            "test",
            HashMap::from([
                (String::from("time_0"), vec![10.0]),
                (String::from("time_1"), vec![15.0]),
                (String::from("av"), vec![0.0]),
                (String::from("choice"), vec![0.0]),
            ]),
        )
        .unwrap();
        let error = choice_probabilities(&spec, &dataset, &zero_estimates()).unwrap_err();
        assert!(matches!(error, LogitError::NoAvailableAlternative(0)));
    }

    #[test]
    fn test_missing_estimate_is_an_error() {
        let estimates = HashMap::from([(String::from("ASC_1"), 0.0)]);
        let error = utility_rows(&binary_spec(), &binary_dataset(), &estimates).unwrap_err();
        assert!(matches!(error, LogitError::MissingEstimate(name) if name == "B_time"));
    }

    #[test]
    fn test_unknown_chosen_alternative_is_an_error() {
        let dataset = Dataset::new(
            "test",
            HashMap::from([
                (String::from("time_0"), vec![10.0]),
                (String::from("time_1"), vec![15.0]),
                (String::from("choice"), vec![5.0]),
            ]),
        )
        .unwrap();
        let error = log_likelihood(&binary_spec(), &dataset, &zero_estimates()).unwrap_err();
        assert!(matches!(
            error,
            LogitError::UnknownChosenAlternative {
                observation: 0,
                alternative: 5
            }
        ));
    }
}
