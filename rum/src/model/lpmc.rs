use itertools::Itertools;
use log::info;
use rum_core::dataset::Dataset;
use rum_core::model::{Availability, ChoiceModelSpec, Parameter, SpecError, UtilityFunction};
use std::collections::BTreeMap;

const NON_NEGATIVE_PARAMS: [&str; 2] = ["B_car_ownership_Car", "B_driving_license_Car"];

const NON_POSITIVE_PARAMS: [&str; 15] = [
    "B_dur_walking_Walk",
    "B_dur_cycling_Bike",
    "B_dur_pt_access_Public_Transport",
    "B_dur_pt_rail_Public_Transport",
    "B_dur_pt_bus_Public_Transport",
    "B_dur_pt_int_waiting_Public_Transport",
    "B_dur_pt_int_walking_Public_Transport",
    "B_pt_n_interchanges_Public_Transport",
    "B_cost_transit_Public_Transport",
    "B_dur_driving_Car",
    "B_cost_driving_total_Car",
    "B_distance_Walk",
    "B_distance_Bike",
    "B_distance_Public_Transport",
    "B_distance_Car",
];

const FREE_PARAMS: [&str; 61] = [
    "ASC_Bike",
    "ASC_Public_Transport",
    "ASC_Car",
    "B_car_ownership_Walk",
    "B_car_ownership_Bike",
    "B_car_ownership_Public_Transport",
    "B_driving_license_Walk",
    "B_driving_license_Bike",
    "B_driving_license_Public_Transport",
    "B_age_Walk",
    "B_age_Bike",
    "B_age_Public_Transport",
    "B_age_Car",
    "B_female_Walk",
    "B_female_Bike",
    "B_female_Public_Transport",
    "B_female_Car",
    "B_day_of_week_Walk",
    "B_day_of_week_Bike",
    "B_day_of_week_Public_Transport",
    "B_day_of_week_Car",
    "B_start_time_linear_Walk",
    "B_start_time_linear_Bike",
    "B_start_time_linear_Public_Transport",
    "B_start_time_linear_Car",
    "B_purpose_B_Walk",
    "B_purpose_B_Bike",
    "B_purpose_B_Public_Transport",
    "B_purpose_B_Car",
    "B_purpose_HBE_Walk",
    "B_purpose_HBE_Bike",
    "B_purpose_HBE_Public_Transport",
    "B_purpose_HBE_Car",
    "B_purpose_HBO_Walk",
    "B_purpose_HBO_Bike",
    "B_purpose_HBO_Public_Transport",
    "B_purpose_HBO_Car",
    "B_purpose_HBW_Walk",
    "B_purpose_HBW_Bike",
    "B_purpose_HBW_Public_Transport",
    "B_purpose_HBW_Car",
    "B_purpose_NHBO_Walk",
    "B_purpose_NHBO_Bike",
    "B_purpose_NHBO_Public_Transport",
    "B_purpose_NHBO_Car",
    "B_fueltype_Avrg_Walk",
    "B_fueltype_Avrg_Bike",
    "B_fueltype_Avrg_Public_Transport",
    "B_fueltype_Avrg_Car",
    "B_fueltype_Diesel_Walk",
    "B_fueltype_Diesel_Bike",
    "B_fueltype_Diesel_Public_Transport",
    "B_fueltype_Diesel_Car",
    "B_fueltype_Hybrid_Walk",
    "B_fueltype_Hybrid_Bike",
    "B_fueltype_Hybrid_Public_Transport",
    "B_fueltype_Hybrid_Car",
    "B_fueltype_Petrol_Walk",
    "B_fueltype_Petrol_Bike",
    "B_fueltype_Petrol_Public_Transport",
    "B_fueltype_Petrol_Car",
];

const WALK_TERMS: [(&str, &str); 17] = [
    ("B_age_Walk", "age"),
    ("B_female_Walk", "female"),
    ("B_day_of_week_Walk", "day_of_week"),
    ("B_start_time_linear_Walk", "start_time_linear"),
    ("B_car_ownership_Walk", "car_ownership"),
    ("B_driving_license_Walk", "driving_license"),
    ("B_purpose_B_Walk", "purpose_B"),
    ("B_purpose_HBE_Walk", "purpose_HBE"),
    ("B_purpose_HBO_Walk", "purpose_HBO"),
    ("B_purpose_HBW_Walk", "purpose_HBW"),
    ("B_purpose_NHBO_Walk", "purpose_NHBO"),
    ("B_fueltype_Avrg_Walk", "fueltype_Average"),
    ("B_fueltype_Diesel_Walk", "fueltype_Diesel"),
    ("B_fueltype_Hybrid_Walk", "fueltype_Hybrid"),
    ("B_fueltype_Petrol_Walk", "fueltype_Petrol"),
    ("B_distance_Walk", "distance"),
    ("B_dur_walking_Walk", "dur_walking"),
];

const BIKE_TERMS: [(&str, &str); 17] = [
    ("B_age_Bike", "age"),
    ("B_female_Bike", "female"),
    ("B_day_of_week_Bike", "day_of_week"),
    ("B_start_time_linear_Bike", "start_time_linear"),
    ("B_car_ownership_Bike", "car_ownership"),
    ("B_driving_license_Bike", "driving_license"),
    ("B_purpose_B_Bike", "purpose_B"),
    ("B_purpose_HBE_Bike", "purpose_HBE"),
    ("B_purpose_HBO_Bike", "purpose_HBO"),
    ("B_purpose_HBW_Bike", "purpose_HBW"),
    ("B_purpose_NHBO_Bike", "purpose_NHBO"),
    ("B_fueltype_Avrg_Bike", "fueltype_Average"),
    ("B_fueltype_Diesel_Bike", "fueltype_Diesel"),
    ("B_fueltype_Hybrid_Bike", "fueltype_Hybrid"),
    ("B_fueltype_Petrol_Bike", "fueltype_Petrol"),
    ("B_distance_Bike", "distance"),
    ("B_dur_cycling_Bike", "dur_cycling"),
];

const PUBLIC_TRANSPORT_TERMS: [(&str, &str); 23] = [
    ("B_age_Public_Transport", "age"),
    ("B_female_Public_Transport", "female"),
    ("B_day_of_week_Public_Transport", "day_of_week"),
    ("B_start_time_linear_Public_Transport", "start_time_linear"),
    ("B_car_ownership_Public_Transport", "car_ownership"),
    ("B_driving_license_Public_Transport", "driving_license"),
    ("B_purpose_B_Public_Transport", "purpose_B"),
    ("B_purpose_HBE_Public_Transport", "purpose_HBE"),
    ("B_purpose_HBO_Public_Transport", "purpose_HBO"),
    ("B_purpose_HBW_Public_Transport", "purpose_HBW"),
    ("B_purpose_NHBO_Public_Transport", "purpose_NHBO"),
    ("B_fueltype_Avrg_Public_Transport", "fueltype_Average"),
    ("B_fueltype_Diesel_Public_Transport", "fueltype_Diesel"),
    ("B_fueltype_Hybrid_Public_Transport", "fueltype_Hybrid"),
    ("B_fueltype_Petrol_Public_Transport", "fueltype_Petrol"),
    ("B_distance_Public_Transport", "distance"),
    ("B_dur_pt_access_Public_Transport", "dur_pt_access"),
    ("B_dur_pt_rail_Public_Transport", "dur_pt_rail"),
    ("B_dur_pt_bus_Public_Transport", "dur_pt_bus"),
    ("B_dur_pt_int_waiting_Public_Transport", "dur_pt_int_waiting"),
    ("B_dur_pt_int_walking_Public_Transport", "dur_pt_int_walking"),
    ("B_pt_n_interchanges_Public_Transport", "pt_n_interchanges"),
    ("B_cost_transit_Public_Transport", "cost_transit"),
];

const CAR_TERMS: [(&str, &str); 18] = [
    ("B_age_Car", "age"),
    ("B_female_Car", "female"),
    ("B_day_of_week_Car", "day_of_week"),
    ("B_start_time_linear_Car", "start_time_linear"),
    ("B_car_ownership_Car", "car_ownership"),
    ("B_driving_license_Car", "driving_license"),
    ("B_purpose_B_Car", "purpose_B"),
    ("B_purpose_HBE_Car", "purpose_HBE"),
    ("B_purpose_HBO_Car", "purpose_HBO"),
    ("B_purpose_HBW_Car", "purpose_HBW"),
    ("B_purpose_NHBO_Car", "purpose_NHBO"),
    ("B_fueltype_Avrg_Car", "fueltype_Average"),
    ("B_fueltype_Diesel_Car", "fueltype_Diesel"),
    ("B_fueltype_Hybrid_Car", "fueltype_Hybrid"),
    ("B_fueltype_Petrol_Car", "fueltype_Petrol"),
    ("B_distance_Car", "distance"),
    ("B_dur_driving_Car", "dur_driving"),
    ("B_cost_driving_total_Car", "cost_driving_total"),
];

/// assembles the four-alternative MNL specification for the London
/// Passenger Mode Choice dataset: walk (0), cycle (1), public transport
/// (2) and drive (3), with alternative-specific socio-demographic,
/// trip-purpose, fuel-type, distance, duration and cost effects.
/// duration, cost and distance coefficients are constrained to be
/// non-positive; car ownership and driving license effects on driving
/// are constrained to be non-negative.
pub fn lpmc(dataset: &Dataset) -> Result<ChoiceModelSpec, SpecError> {
    info!("building LPMC mode choice specification");
    let parameters = NON_NEGATIVE_PARAMS
        .iter()
        .map(|name| Parameter::non_negative(name))
        .chain(
            NON_POSITIVE_PARAMS
                .iter()
                .map(|name| Parameter::non_positive(name)),
        )
        .chain(FREE_PARAMS.iter().map(|name| Parameter::free(name)))
        .collect_vec();
    let utilities = BTreeMap::from([
        (0, UtilityFunction::new(None, &WALK_TERMS)),
        (1, UtilityFunction::new(Some("ASC_Bike"), &BIKE_TERMS)),
        (
            2,
            UtilityFunction::new(Some("ASC_Public_Transport"), &PUBLIC_TRANSPORT_TERMS),
        ),
        (3, UtilityFunction::new(Some("ASC_Car"), &CAR_TERMS)),
    ]);
    let availability = utilities
        .keys()
        .map(|alternative| (*alternative, Availability::Always))
        .collect();
    let spec = ChoiceModelSpec {
        name: String::from("LpmcMNL"),
        parameters,
        utilities,
        availability,
        choice_column: String::from("choice"),
    };
    spec.validate()?;
    spec.validate_columns(dataset)?;
    Ok(spec)
}
