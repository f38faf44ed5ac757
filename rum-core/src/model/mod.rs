mod availability;
mod choice_model_spec;
mod parameter;
mod spec_error;
mod utility_function;
mod utility_term;

pub use availability::Availability;
pub use choice_model_spec::ChoiceModelSpec;
pub use parameter::Parameter;
pub use spec_error::SpecError;
pub use utility_function::UtilityFunction;
pub use utility_term::UtilityTerm;
