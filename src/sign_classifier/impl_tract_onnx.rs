use crate::sign_classifier::interface::{PredictError, SignClassifier};
use crate::sign_classifier::model_config::ModelConfig;
use crate::sign_classifier::tensor::{InputTensor, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use thiserror::Error;
use tract_onnx::prelude::*;

#[derive(Debug, Error)]
#[error("failed to load model from {path}")]
pub struct LoadModelError {
    pub path: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

pub struct SignClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
}

impl SignClassifierTractOnnx {
    /// Loads the ONNX artifact once, for the process lifetime. A missing or
    /// malformed artifact is a startup configuration error; there is no
    /// degraded mode and no retry.
    pub fn new(config: &ModelConfig) -> Result<Self, LoadModelError> {
        let model = load_model(&config.onnx_model_path).map_err(|e| LoadModelError {
            path: config.onnx_model_path.clone(),
            source: e.into(),
        })?;

        Ok(Self { model })
    }
}

fn load_model(path: &str) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>> {
    tract_onnx::onnx()
        .model_for_path(path)?
        .with_input_fact(
            0,
            f32::fact([
                1,
                INPUT_HEIGHT as usize,
                INPUT_WIDTH as usize,
                INPUT_CHANNELS,
            ])
            .into(),
        )?
        .into_optimized()?
        .into_runnable()
}

impl SignClassifier for SignClassifierTractOnnx {
    fn predict(&self, tensor: &InputTensor) -> Result<Vec<f32>, PredictError> {
        let [n, h, w, c] = tensor.shape();

        let input = tract_ndarray::Array4::from_shape_vec((n, h, w, c), tensor.as_slice().to_vec())
            .map_err(|e| PredictError::Inference(Box::new(e)))?
            .into_tensor();

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| PredictError::Inference(e.into()))?;

        let probabilities = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| PredictError::Inference(e.into()))?;

        Ok(probabilities.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_a_load_error() {
        let config = ModelConfig {
            onnx_model_path: "does-not-exist.onnx".to_string(),
        };

        let result = SignClassifierTractOnnx::new(&config);

        assert!(result.is_err());
        let error = result.err().unwrap();
        assert_eq!(error.path, "does-not-exist.onnx");
    }
}
