mod logit_error;
pub mod logit_ops;
mod metrics;
mod metrics_error;

pub use logit_error::LogitError;
pub use metrics::{accuracy, cross_entropy};
pub use metrics_error::MetricsError;
