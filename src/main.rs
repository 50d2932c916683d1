use app::main::TrafficSignApp;
use config::Config;
use label_table::LabelTable;
use logger::impl_console::LoggerConsole;
use logger::interface::Logger;
use sign_classifier::impl_tract_onnx::SignClassifierTractOnnx;
use std::sync::Arc;

mod app;
mod config;
mod label_table;
mod logger;
mod pipeline;
mod sign_classifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let _ = logger.info(&format!(
        "loading model from {}",
        config.model.onnx_model_path
    ));

    let classifier = Arc::new(SignClassifierTractOnnx::new(&config.model)?);

    let _ = logger.info("model loaded");

    let labels = LabelTable::new();

    let app = TrafficSignApp::new(config, logger, classifier, labels);

    app.run()?;

    Ok(())
}
