use crate::label_table::CLASS_COUNT;
use crate::sign_classifier::interface::{PredictError, SignClassifier};
use crate::sign_classifier::tensor::InputTensor;
use rand::Rng;

/// Model stand-in for tests and for running the app without the real
/// artifact. `returning` pins the output to a fixed vector; `new` draws a
/// fresh random distribution per call.
pub struct SignClassifierFake {
    fixed: Option<Vec<f32>>,
}

impl SignClassifierFake {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self { fixed: None }
    }

    #[allow(dead_code)]
    pub fn returning(probabilities: Vec<f32>) -> Self {
        Self {
            fixed: Some(probabilities),
        }
    }
}

impl SignClassifier for SignClassifierFake {
    fn predict(&self, _tensor: &InputTensor) -> Result<Vec<f32>, PredictError> {
        if let Some(fixed) = &self.fixed {
            return Ok(fixed.clone());
        }

        let mut rng = rand::rng();

        let mut probabilities: Vec<f32> = (0..CLASS_COUNT)
            .map(|_| rng.random_range(0.0..1.0))
            .collect();

        let total: f32 = probabilities.iter().sum();
        for p in &mut probabilities {
            *p /= total;
        }

        Ok(probabilities)
    }
}
