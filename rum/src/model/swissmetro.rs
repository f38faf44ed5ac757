use rum_core::dataset::Dataset;
use rum_core::model::{Availability, ChoiceModelSpec, Parameter, SpecError, UtilityFunction};
use std::collections::BTreeMap;

const TRAIN_TERMS: [(&str, &str); 3] = [
    ("B_TIME", "TRAIN_TT"),
    ("B_COST", "TRAIN_COST"),
    ("B_HE", "TRAIN_HE"),
];

const SM_TERMS: [(&str, &str); 3] = [
    ("B_TIME", "SM_TT"),
    ("B_COST", "SM_COST"),
    ("B_HE", "SM_HE"),
];

const CAR_TERMS: [(&str, &str); 2] = [("B_TIME", "CAR_TT"), ("B_COST", "CAR_CO")];

/// assembles the three-alternative MNL specification for the Swissmetro
/// stated-preference survey: train (0, the reference alternative),
/// Swissmetro (1) and car (2), with shared travel time, cost and headway
/// coefficients constrained to be non-positive.
pub fn swissmetro(dataset: &Dataset) -> Result<ChoiceModelSpec, SpecError> {
    let parameters = vec![
        Parameter::free("ASC_CAR"),
        Parameter::free("ASC_SM"),
        Parameter::fixed("ASC_SBB", 0.0),
        Parameter::non_positive("B_TIME"),
        Parameter::non_positive("B_COST"),
        Parameter::non_positive("B_HE"),
    ];
    let utilities = BTreeMap::from([
        (0, UtilityFunction::new(Some("ASC_SBB"), &TRAIN_TERMS)),
        (1, UtilityFunction::new(Some("ASC_SM"), &SM_TERMS)),
        (2, UtilityFunction::new(Some("ASC_CAR"), &CAR_TERMS)),
    ]);
    let availability = utilities
        .keys()
        .map(|alternative| (*alternative, Availability::Always))
        .collect();
    let spec = ChoiceModelSpec {
        name: String::from("SwissmetroMNL"),
        parameters,
        utilities,
        availability,
        choice_column: String::from("CHOICE"),
    };
    spec.validate()?;
    spec.validate_columns(dataset)?;
    Ok(spec)
}
