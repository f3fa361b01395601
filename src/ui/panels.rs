use std::collections::HashMap;

use eframe::egui;

use crate::metadata::ContributionGuide;
use crate::model::GalleryEntry;

use super::state::ViewState;

const THUMBNAIL_DISPLAY: [f32; 2] = [160.0, 100.0];
const PANEL_MARGIN: f32 = 24.0;
const AVATAR_DISPLAY: f32 = 32.0;

#[derive(Debug, Clone)]
pub(crate) enum UiAction {
    Select(GalleryEntry),
    ChooseLetter(Option<char>),
    ToggleStrip,
    ToggleMetadata,
    ToggleContribution,
    Download,
}

/// Floating buttons in the bottom-right corner.
pub(crate) fn draw_controls(ctx: &egui::Context, state: &ViewState, actions: &mut Vec<UiAction>) {
    egui::Area::new(egui::Id::new("gallery-controls"))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-PANEL_MARGIN, -PANEL_MARGIN),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let strip = if state.panels.strip_open {
                    "Hide gallery"
                } else {
                    "Gallery"
                };
                if ui.button(strip).clicked() {
                    actions.push(UiAction::ToggleStrip);
                }
                if ui.button("Info").clicked() {
                    actions.push(UiAction::ToggleMetadata);
                }
                if ui.button("Contribute").clicked() {
                    actions.push(UiAction::ToggleContribution);
                }
                let can_download = state.displayed.is_some();
                if ui
                    .add_enabled(can_download, egui::Button::new("Download"))
                    .clicked()
                {
                    actions.push(UiAction::Download);
                }
            });
            ui.label(egui::RichText::new(&state.status).weak());
        });
}

/// Thumbnail strip with its letter filter. Returns the strip's screen rect.
pub(crate) fn draw_strip(
    ctx: &egui::Context,
    state: &ViewState,
    thumbnails: &HashMap<String, egui::TextureHandle>,
    actions: &mut Vec<UiAction>,
) -> egui::Rect {
    let selected = state
        .displayed
        .as_ref()
        .map(|shown| shown.entry.name.as_str());
    egui::TopBottomPanel::bottom("gallery-strip")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.selectable_label(state.letter.is_none(), "All").clicked() {
                    actions.push(UiAction::ChooseLetter(None));
                }
                for letter in state.letters() {
                    let active = state.letter == Some(letter);
                    if ui
                        .selectable_label(active, letter.to_string())
                        .clicked()
                    {
                        actions.push(UiAction::ChooseLetter(Some(letter)));
                    }
                }
            });
            ui.separator();

            let visible = state.visible_entries();
            if visible.is_empty() {
                let message = if state.listing_loaded {
                    "Nothing here"
                } else {
                    "Loading gallery..."
                };
                ui.label(message);
                return;
            }
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for entry in visible {
                        let size = egui::vec2(THUMBNAIL_DISPLAY[0], THUMBNAIL_DISPLAY[1]);
                        let response = match thumbnails.get(&entry.name) {
                            Some(texture) => ui.add(
                                egui::Image::new((texture.id(), size))
                                    .sense(egui::Sense::click()),
                            ),
                            None => ui.add_sized(size, egui::Button::new(entry.label())),
                        };
                        let response = if selected == Some(entry.name.as_str()) {
                            response.highlight()
                        } else {
                            response
                        };
                        if response.on_hover_text(entry.label()).clicked() {
                            actions.push(UiAction::Select(entry));
                        }
                    }
                });
            });
        })
        .response
        .rect
}

pub(crate) fn draw_metadata(
    ctx: &egui::Context,
    state: &ViewState,
    avatar: Option<&egui::TextureHandle>,
    open: &mut bool,
) {
    egui::Window::new("Metadata")
        .open(open)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(PANEL_MARGIN, PANEL_MARGIN))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            if state.is_loading() && state.displayed.is_none() {
                ui.label("Loading metadata...");
                return;
            }
            if let Some(commit) = &state.report.contribution {
                ui.label(egui::RichText::new("Contributed By").strong());
                ui.horizontal(|ui| {
                    if let Some(texture) = avatar.filter(|_| !commit.avatar_url.is_empty()) {
                        ui.add(egui::Image::new((
                            texture.id(),
                            egui::Vec2::splat(AVATAR_DISPLAY),
                        )));
                    }
                    if commit.profile_url.is_empty() {
                        ui.label(format!("@{}", commit.author));
                    } else {
                        ui.hyperlink_to(format!("@{}", commit.author), &commit.profile_url);
                    }
                });
                ui.label(egui::RichText::new(format!("Added on {}", commit.date)).weak());
                if !commit.message.is_empty() {
                    ui.label(egui::RichText::new(format!("\"{}\"", commit.message)).italics());
                }
                ui.separator();
            }

            let Some(metadata) = &state.report.metadata else {
                ui.label("No image selected");
                return;
            };
            egui::Grid::new("metadata-grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (label, value) in metadata.rows() {
                        ui.label(egui::RichText::new(label).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });
            ui.separator();
            ui.label(egui::RichText::new("Recommended Usage").strong());
            ui.label(&metadata.recommended_usage);

            if !state.report.issues.is_empty() {
                ui.separator();
                ui.label(egui::RichText::new("Collection rules").strong());
                for issue in &state.report.issues {
                    ui.label(issue.to_string());
                }
            }
        });
}

pub(crate) fn draw_contribution(ctx: &egui::Context, guide: &ContributionGuide, open: &mut bool) {
    egui::Window::new("Contribute Wallpapers")
        .open(open)
        .anchor(
            egui::Align2::RIGHT_TOP,
            egui::vec2(-PANEL_MARGIN, PANEL_MARGIN),
        )
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Want to add your own wallpapers to this collection?");
            ui.separator();
            ui.label(egui::RichText::new("Repository").strong());
            ui.hyperlink(&guide.repository_url);
            ui.separator();
            ui.label(egui::RichText::new("Image Requirements").strong());
            for (requirement, naming) in &guide.requirements {
                ui.label(requirement);
                ui.label(egui::RichText::new(naming).weak());
            }
            ui.separator();
            ui.label(egui::RichText::new("How to Contribute").strong());
            for (index, step) in guide.steps.iter().enumerate() {
                ui.label(format!("{}. {step}", index + 1));
            }
            ui.separator();
            ui.label(egui::RichText::new(&guide.note).italics());
        });
}

pub(crate) fn draw_loading(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("gallery-loading"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .interactable(false)
        .show(ctx, |ui| {
            ui.add(egui::Spinner::new().size(64.0));
        });
}
