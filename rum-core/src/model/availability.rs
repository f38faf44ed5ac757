use serde::{Deserialize, Serialize};

/// marks whether a choice alternative could have been chosen at all,
/// either unconditionally or per observation via a 0/1 dataset column.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum Availability {
    Always,
    Column { name: String },
}

impl Availability {
    /// the dataset column backing this condition, if any
    pub fn column_name(&self) -> Option<&String> {
        match self {
            Availability::Always => None,
            Availability::Column { name } => Some(name),
        }
    }
}
