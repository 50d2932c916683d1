use crate::sign_classifier::tensor::InputTensor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model inference failed")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The single capability the rest of the application needs from the
/// pretrained model: one forward pass over a fixed-shape tensor, yielding a
/// probability per sign class. Deterministic for a given loaded model.
pub trait SignClassifier: Send + Sync {
    fn predict(&self, tensor: &InputTensor) -> Result<Vec<f32>, PredictError>;
}
