use itertools::Itertools;
use log::info;
use rum_core::dataset::Dataset;
use rum_core::model::{Availability, ChoiceModelSpec, Parameter, SpecError, UtilityFunction};
use std::collections::BTreeMap;

const NON_POSITIVE_PARAMS: [&str; 7] = [
    "B_TimePT_PT",
    "B_MarginalCostPT_PT",
    "B_distance_km_PT",
    "B_TimeCar_PM",
    "B_CostCarCHF_PM",
    "B_distance_km_PM",
    "B_distance_km_SM",
];

const FREE_PARAMS: [&str; 29] = [
    "ASC_PM",
    "ASC_SM",
    "B_age_PT",
    "B_age_PM",
    "B_age_SM",
    "B_NbChild_PT",
    "B_NbChild_PM",
    "B_NbChild_SM",
    "B_NbCar_PT",
    "B_NbCar_PM",
    "B_NbCar_SM",
    "B_NbMoto_PT",
    "B_NbMoto_PM",
    "B_NbMoto_SM",
    "B_NbBicy_PT",
    "B_NbBicy_PM",
    "B_NbBicy_SM",
    "B_OccupStat_fulltime_PT",
    "B_OccupStat_fulltime_PM",
    "B_OccupStat_fulltime_SM",
    "B_Gender_man_PT",
    "B_Gender_man_PM",
    "B_Gender_man_SM",
    "B_Gender_woman_PT",
    "B_Gender_woman_PM",
    "B_Gender_woman_SM",
    "B_Gender_unreported_PT",
    "B_Gender_unreported_PM",
    "B_Gender_unreported_SM",
];

const PUBLIC_TRANSPORT_TERMS: [(&str, &str); 12] = [
    ("B_age_PT", "age"),
    ("B_NbChild_PT", "NbChild"),
    ("B_NbCar_PT", "NbCar"),
    ("B_NbMoto_PT", "NbMoto"),
    ("B_NbBicy_PT", "NbBicy"),
    ("B_OccupStat_fulltime_PT", "OccupStat_fulltime"),
    ("B_Gender_man_PT", "Gender_man"),
    ("B_Gender_woman_PT", "Gender_woman"),
    ("B_Gender_unreported_PT", "Gender_unreported"),
    ("B_TimePT_PT", "TimePT"),
    ("B_MarginalCostPT_PT", "MarginalCostPT"),
    ("B_distance_km_PT", "distance_km"),
];

const PRIVATE_MODES_TERMS: [(&str, &str); 12] = [
    ("B_age_PM", "age"),
    ("B_NbChild_PM", "NbChild"),
    ("B_NbCar_PM", "NbCar"),
    ("B_NbMoto_PM", "NbMoto"),
    ("B_NbBicy_PM", "NbBicy"),
    ("B_OccupStat_fulltime_PM", "OccupStat_fulltime"),
    ("B_Gender_man_PM", "Gender_man"),
    ("B_Gender_woman_PM", "Gender_woman"),
    ("B_Gender_unreported_PM", "Gender_unreported"),
    ("B_TimeCar_PM", "TimeCar"),
    ("B_CostCarCHF_PM", "CostCarCHF"),
    ("B_distance_km_PM", "distance_km"),
];

const SOFT_MODES_TERMS: [(&str, &str); 10] = [
    ("B_age_SM", "age"),
    ("B_NbChild_SM", "NbChild"),
    ("B_NbCar_SM", "NbCar"),
    ("B_NbMoto_SM", "NbMoto"),
    ("B_NbBicy_SM", "NbBicy"),
    ("B_OccupStat_fulltime_SM", "OccupStat_fulltime"),
    ("B_Gender_man_SM", "Gender_man"),
    ("B_Gender_woman_SM", "Gender_woman"),
    ("B_Gender_unreported_SM", "Gender_unreported"),
    ("B_distance_km_SM", "distance_km"),
];

/// assembles the three-alternative MNL specification for the Optima
/// revealed-preference survey: public transport (0, the reference
/// alternative), private motorized modes (1) and soft modes (2), with
/// household composition, occupation and gender effects per alternative
/// and non-positive time, cost and distance coefficients.
pub fn optima(dataset: &Dataset) -> Result<ChoiceModelSpec, SpecError> {
    info!("building Optima mode choice specification");
    let parameters = NON_POSITIVE_PARAMS
        .iter()
        .map(|name| Parameter::non_positive(name))
        .chain(FREE_PARAMS.iter().map(|name| Parameter::free(name)))
        .collect_vec();
    let utilities = BTreeMap::from([
        (0, UtilityFunction::new(None, &PUBLIC_TRANSPORT_TERMS)),
        (1, UtilityFunction::new(Some("ASC_PM"), &PRIVATE_MODES_TERMS)),
        (2, UtilityFunction::new(Some("ASC_SM"), &SOFT_MODES_TERMS)),
    ]);
    let availability = utilities
        .keys()
        .map(|alternative| (*alternative, Availability::Always))
        .collect();
    let spec = ChoiceModelSpec {
        name: String::from("OptimaMNL"),
        parameters,
        utilities,
        availability,
        choice_column: String::from("choice"),
    };
    spec.validate()?;
    spec.validate_columns(dataset)?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const COLUMNS: [&str; 15] = [
        "age",
        "NbChild",
        "NbCar",
        "NbMoto",
        "NbBicy",
        "OccupStat_fulltime",
        "Gender_man",
        "Gender_woman",
        "Gender_unreported",
        "TimePT",
        "MarginalCostPT",
        "distance_km",
        "TimeCar",
        "CostCarCHF",
        "choice",
    ];

    fn fixture(columns: &[&str]) -> Dataset {
        let columns = columns
            .iter()
            .map(|name| (name.to_string(), vec![0.0, 2.0]))
            .collect::<HashMap<_, _>>();
        Dataset::new("OP", columns).unwrap()
    }

    #[test]
    fn test_specification_shape() {
        let spec = optima(&fixture(&COLUMNS)).unwrap();
        assert_eq!(spec.parameters.len(), 36);
        assert_eq!(spec.alternatives(), vec![0, 1, 2]);
        // the public transport alternative is the reference: no constant
        assert!(spec.utilities.get(&0).unwrap().constant.is_none());
        assert_eq!(
            spec.parameter("B_TimePT_PT").unwrap().upper_bound,
            Some(0.0)
        );
        assert_eq!(spec.utilities.get(&2).unwrap().terms.len(), 10);
    }

    #[test]
    fn test_rejects_incomplete_dataset() {
        let incomplete = fixture(&COLUMNS[..14]);
        assert!(optima(&incomplete).is_err());
    }
}
