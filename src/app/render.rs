use crate::app::core::{Event, State};
use eframe::egui;

const HEADER_BLUE: egui::Color32 = egui::Color32::from_rgb(0x2a, 0x4d, 0x69);
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xf2, 0xf5);
const UPLOAD_BLUE: egui::Color32 = egui::Color32::from_rgb(0x4b, 0x86, 0xb4);
const EXIT_RED: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);
const RESULT_INK: egui::Color32 = egui::Color32::from_rgb(0x01, 0x16, 0x38);

/// Draws the window from the current state and reports the user's intents
/// back as events. Holds no state of its own.
pub struct Render;

impl Render {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        ctx: &egui::Context,
        state: &State,
        preview: Option<&egui::TextureHandle>,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(HEADER_BLUE)
                    .inner_margin(egui::Margin::symmetric(0.0, 20.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Traffic Sign Recognition System")
                            .size(24.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
            });

        egui::TopBottomPanel::bottom("controls")
            .frame(
                egui::Frame::none()
                    .fill(BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(40.0, 30.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(styled_button("Upload Image", UPLOAD_BLUE))
                        .clicked()
                    {
                        events.push(Event::UploadRequested);
                    }

                    let has_image = matches!(
                        state,
                        State::Ready { .. } | State::Classified { .. }
                    );
                    if has_image && ui.add(styled_button("Classify Image", UPLOAD_BLUE)).clicked()
                    {
                        events.push(Event::ClassifyRequested);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(styled_button("Exit", EXIT_RED)).clicked() {
                            events.push(Event::ExitRequested);
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);

                    if let Some(texture) = preview {
                        ui.image(texture);
                        ui.add_space(16.0);
                    }

                    match state {
                        State::AwaitingUpload => {
                            ui.label(
                                egui::RichText::new("Upload image of a traffic sign")
                                    .size(16.0)
                                    .strong()
                                    .color(HEADER_BLUE),
                            );
                        }
                        State::Ready { .. } => {}
                        State::Classified { result, .. } => {
                            ui.label(
                                egui::RichText::new(&result.label)
                                    .size(22.0)
                                    .strong()
                                    .color(RESULT_INK),
                            );
                        }
                        State::Error { message } => {
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(EXIT_RED),
                            );
                        }
                    }
                });
            });

        events
    }
}

fn styled_button(text: &str, fill: egui::Color32) -> impl egui::Widget {
    egui::Button::new(
        egui::RichText::new(text)
            .size(14.0)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(fill)
    .rounding(4.0)
}
