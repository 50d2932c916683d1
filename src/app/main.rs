use crate::app::core::{init, transition, Effect, Event, State};
use crate::app::render::Render;
use crate::config::Config;
use crate::label_table::LabelTable;
use crate::logger::interface::Logger;
use crate::pipeline::classify::classify_file;
use crate::sign_classifier::interface::SignClassifier;
use eframe::egui;
use std::sync::Arc;

pub struct TrafficSignApp {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    classifier: Arc<dyn SignClassifier + Send + Sync>,
    labels: LabelTable,
    render: Render,
    state: State,
    preview: Option<egui::TextureHandle>,
}

impl TrafficSignApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        classifier: Arc<dyn SignClassifier + Send + Sync>,
        labels: LabelTable,
    ) -> Self {
        let (state, _) = init();

        Self {
            config,
            logger: logger.with_namespace("app"),
            classifier,
            labels,
            render: Render::new(),
            state,
            preview: None,
        }
    }

    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let title = self.config.window_title.clone();
        let (width, height) = self.config.window_size;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
            ..Default::default()
        };

        eframe::run_native(&title, options, Box::new(|_cc| Box::new(self)))?;

        Ok(())
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        let _ = self.logger.info(&format!("event: {:?}", event));

        let state = std::mem::replace(&mut self.state, State::AwaitingUpload);
        let (next, effects) = transition(state, event);
        self.state = next;

        for effect in effects {
            if let Some(follow_up) = self.run_effect(ctx, effect) {
                self.dispatch(ctx, follow_up);
            }
        }
    }

    /// Effects run synchronously on the UI thread; a classification blocks
    /// the window for its duration.
    fn run_effect(&mut self, ctx: &egui::Context, effect: Effect) -> Option<Event> {
        match effect {
            Effect::PickFile => {
                let picked = rfd::FileDialog::new()
                    .add_filter("Image", &["png", "jpg", "jpeg", "bmp", "gif", "ppm"])
                    .pick_file();
                Some(Event::FilePicked(picked))
            }

            Effect::DecodePreview { path } => {
                self.preview = None;
                match image::open(&path) {
                    Ok(decoded) => {
                        let (max_width, max_height) = self.config.preview_max_size;
                        let thumbnail = decoded.thumbnail(max_width, max_height).to_rgb8();
                        let size = [thumbnail.width() as usize, thumbnail.height() as usize];
                        let color_image = egui::ColorImage::from_rgb(size, thumbnail.as_raw());
                        self.preview = Some(ctx.load_texture(
                            "preview",
                            color_image,
                            egui::TextureOptions::default(),
                        ));
                        Some(Event::PreviewReady { path })
                    }
                    Err(error) => {
                        let message = format!("Cannot decode image: {}", error);
                        let _ = self.logger.error(&message);
                        Some(Event::PreviewFailed { path, message })
                    }
                }
            }

            Effect::Classify { path } => {
                let result = classify_file(&path, self.classifier.as_ref(), &self.labels);
                match &result {
                    Ok(classification) => {
                        let _ = self.logger.info(&format!(
                            "classified {} as {:?}",
                            path.display(),
                            classification.label
                        ));
                    }
                    Err(error) => {
                        let _ = self.logger.error(&error.to_string());
                    }
                }
                Some(Event::ClassifyDone(result))
            }

            Effect::CloseWindow => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                None
            }
        }
    }
}

impl eframe::App for TrafficSignApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.render.render(ctx, &self.state, self.preview.as_ref());

        for event in events {
            self.dispatch(ctx, event);
        }
    }
}
