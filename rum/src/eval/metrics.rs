use super::MetricsError;

/// fraction of observations whose predicted class matches the observed
/// label. the predicted class of a row is its argmax; ties break toward
/// the lowest class index.
///
/// # Arguments
///
/// * `predictions` - one row per observation, one predicted probability
///   per class
/// * `labels` - the observed class index of each observation
///
/// # Returns
///
/// the share of correctly predicted observations in [0, 1], or an error
/// when the inputs are empty or misshapen
pub fn accuracy(predictions: &[Vec<f64>], labels: &[usize]) -> Result<f64, MetricsError> {
    validate_shape(predictions, labels)?;
    let mut correct: usize = 0;
    for (row, (prediction, label)) in predictions.iter().zip(labels.iter()).enumerate() {
        if *label >= prediction.len() {
            return Err(MetricsError::LabelOutOfRange {
                row,
                label: *label,
                classes: prediction.len(),
            });
        }
        if argmax(prediction) == *label {
            correct += 1;
        }
    }
    Ok(correct as f64 / predictions.len() as f64)
}

/// negative mean log-probability assigned to the observed labels. lower
/// is better; zero is the (unattainable) minimum.
///
/// probabilities are taken as supplied: a zero probability at the
/// observed label yields `f64::INFINITY` and a negative one yields NaN,
/// following IEEE-754 `ln` semantics rather than clamping or raising.
///
/// # Arguments
///
/// * `predictions` - one row per observation, one predicted probability
///   per class
/// * `labels` - the observed class index of each observation
///
/// # Returns
///
/// the mean of `-ln(p)` over the probabilities assigned to the observed
/// labels, or an error when the inputs are empty or misshapen
pub fn cross_entropy(predictions: &[Vec<f64>], labels: &[usize]) -> Result<f64, MetricsError> {
    validate_shape(predictions, labels)?;
    let mut total = 0.0;
    for (row, (prediction, label)) in predictions.iter().zip(labels.iter()).enumerate() {
        let p = prediction
            .get(*label)
            .ok_or(MetricsError::LabelOutOfRange {
                row,
                label: *label,
                classes: prediction.len(),
            })?;
        total -= p.ln();
    }
    Ok(total / predictions.len() as f64)
}

fn validate_shape(predictions: &[Vec<f64>], labels: &[usize]) -> Result<(), MetricsError> {
    if predictions.len() != labels.len() {
        return Err(MetricsError::LengthMismatch {
            predictions: predictions.len(),
            labels: labels.len(),
        });
    }
    if predictions.is_empty() {
        return Err(MetricsError::EmptyInput);
    }
    Ok(())
}

/// index of the row maximum, lowest index on ties
fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in row.iter().enumerate().skip(1) {
        if *value > row[best] {
            best = i;
        }
    }
    best
}
