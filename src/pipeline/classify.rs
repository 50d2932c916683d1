use crate::label_table::LabelTable;
use crate::sign_classifier::interface::{PredictError, SignClassifier};
use crate::sign_classifier::tensor::InputTensor;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("cannot decode image at {path}")]
    InvalidImage {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Inference(#[from] PredictError),
    #[error("model returned an empty prediction")]
    EmptyPrediction,
    #[error("model predicted class {index}, which has no label")]
    UnknownClass { index: usize },
}

/// Transforms a file path into a display label: decode, stretch-resize to the
/// model's input shape, run one forward pass, take the argmax, and look the
/// winning class up in the label table.
///
/// The model's output indices are 0-based and the label table is 1-based;
/// the +1 below is the contract between them.
pub fn classify_file(
    path: &Path,
    classifier: &dyn SignClassifier,
    labels: &LabelTable,
) -> Result<Classification, ClassifyError> {
    let image = image::open(path).map_err(|source| ClassifyError::InvalidImage {
        path: path.display().to_string(),
        source,
    })?;

    let tensor = InputTensor::from_image(&image);

    let probabilities = classifier.predict(&tensor)?;

    let winner = argmax(&probabilities).ok_or(ClassifyError::EmptyPrediction)?;

    let class_index = winner + 1;
    let label = labels
        .get(class_index)
        .ok_or(ClassifyError::UnknownClass { index: class_index })?;

    Ok(Classification {
        label: label.to_string(),
        confidence: probabilities[winner],
    })
}

/// Index of the largest value; ties go to the lowest index.
fn argmax(probabilities: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &value) in probabilities.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, best_value)) => value > best_value,
        };
        if better {
            best = Some((index, value));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    }

    #[test]
    fn test_argmax_tie_goes_to_lowest_index() {
        assert_eq!(argmax(&[0.1, 0.4, 0.3, 0.4]), Some(1));
    }

    #[test]
    fn test_argmax_of_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_single_entry() {
        assert_eq!(argmax(&[0.5]), Some(0));
    }
}
