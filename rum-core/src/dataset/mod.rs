mod dataset;
mod dataset_error;

pub use dataset::Dataset;
pub use dataset_error::DatasetError;
