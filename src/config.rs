use crate::sign_classifier::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub window_title: String,
    pub window_size: (f32, f32),
    pub preview_max_size: (u32, u32),
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                onnx_model_path: "traffic_classifier.onnx".to_string(),
            },
            window_title: "Traffic Sign Classification".to_string(),
            window_size: (1000.0, 800.0),
            preview_max_size: (444, 355),
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
