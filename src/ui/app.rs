use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use eframe::egui;
use rfd::FileDialog;
use tracing::{debug, info};

use crate::metadata::ContributionGuide;
use crate::model::{GalleryEntry, Viewport};
use crate::panning::{PointerTracker, SmoothingLoop};
use crate::runtime::AppContext;

use super::background;
use super::panels::{self, UiAction};
use super::state::ViewState;
use super::worker::{WorkerEvent, Workers};

/// Below this distance (in pixels) the smoothed position counts as settled.
const SETTLED_LAG: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RepaintInputs {
    pub(crate) worker_state_changed: bool,
    pub(crate) has_pending_actions: bool,
    pub(crate) smoothing_running: bool,
    pub(crate) pointer_lag: f64,
    pub(crate) transition_remaining: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Repaint {
    Now,
    After(Duration),
    Idle,
}

pub(crate) fn repaint_policy(inputs: RepaintInputs) -> Repaint {
    if inputs.worker_state_changed || inputs.has_pending_actions {
        return Repaint::Now;
    }
    if inputs.smoothing_running && inputs.pointer_lag > SETTLED_LAG {
        return Repaint::Now;
    }
    match inputs.transition_remaining {
        Some(remaining) if !remaining.is_zero() => Repaint::After(remaining),
        _ => Repaint::Idle,
    }
}

pub(crate) struct GalleryApp {
    state: ViewState,
    workers: Workers,
    rx: Receiver<WorkerEvent>,
    smoothing: SmoothingLoop,
    smoothed_x: f64,
    background: Option<egui::TextureHandle>,
    bytes: Option<Arc<Vec<u8>>>,
    thumbnails: HashMap<String, egui::TextureHandle>,
    /// Contributor pictures by request generation.
    avatars: HashMap<u64, egui::TextureHandle>,
    strip_rect: Option<egui::Rect>,
    last_viewport: Option<Viewport>,
    guide: ContributionGuide,
}

impl GalleryApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, context: AppContext) -> Self {
        let (tx, rx) = mpsc::channel();
        let transition = Duration::from_millis(context.config().transition_ms);
        let guide = ContributionGuide::new(context.config().contribution_url());
        let workers = Workers::new(context, tx, cc.egui_ctx.clone());
        workers.load_listing();

        let width = f64::from(cc.egui_ctx.screen_rect().width());
        let start_x = if width.is_finite() { width / 2.0 } else { 0.0 };
        Self {
            state: ViewState::new(transition),
            workers,
            rx,
            smoothing: SmoothingLoop::start(PointerTracker::new(start_x)),
            smoothed_x: start_x,
            background: None,
            bytes: None,
            thumbnails: HashMap::new(),
            avatars: HashMap::new(),
            strip_rect: None,
            last_viewport: None,
            guide,
        }
    }

    fn poll_worker_events(&mut self, ctx: &egui::Context, viewport: Option<Viewport>) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            changed = true;
            match event {
                WorkerEvent::Listing(entries) => {
                    let first = self
                        .workers
                        .app()
                        .gallery_service()
                        .default_entry(&entries)
                        .cloned();
                    self.state.set_entries(entries);
                    if let Some(entry) = first {
                        self.select(entry);
                    }
                }
                WorkerEvent::Thumbnail { name, image } => {
                    let texture = ctx.load_texture(
                        format!("thumb-{name}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.thumbnails.insert(name, texture);
                }
                WorkerEvent::ImageLoaded {
                    key,
                    entry,
                    asset,
                    bytes,
                    image,
                } => {
                    // A minimised window reports no area; lay out against the last real size.
                    let Some(viewport) = viewport.or(self.last_viewport) else {
                        self.state.fail_load(&key, "window has no drawable area");
                        continue;
                    };
                    let name = entry.name.clone();
                    if self
                        .state
                        .finish_load(&key, entry, asset, viewport, Instant::now())
                    {
                        self.background = Some(ctx.load_texture(
                            format!("background-{name}"),
                            image,
                            egui::TextureOptions::LINEAR,
                        ));
                        self.bytes = Some(bytes);
                    } else {
                        debug!(%name, "dropped stale image");
                    }
                }
                WorkerEvent::ImageFailed { key, error } => {
                    self.state.fail_load(&key, &error);
                }
                WorkerEvent::Contribution { key, info } => {
                    self.state.apply_contribution(&key, info);
                }
                WorkerEvent::Avatar { key, image } => {
                    if self.state.accepts_avatar(&key) {
                        let texture = ctx.load_texture(
                            format!("avatar-{}", key.generation),
                            image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.avatars.insert(key.generation, texture);
                    } else {
                        debug!(name = %key.name, "dropped stale avatar");
                    }
                }
                WorkerEvent::Saved(result) => {
                    self.state.status = match result {
                        Ok(path) => format!("Saved to {}", path.display()),
                        Err(error) => format!("Download failed: {error}"),
                    };
                }
            }
        }
        if changed {
            self.avatars
                .retain(|generation, _| self.state.is_live_generation(*generation));
        }
        changed
    }

    fn select(&mut self, entry: GalleryEntry) {
        let key = self.state.begin_load(&entry, Instant::now());
        info!(name = %entry.name, generation = key.generation, "selecting wallpaper");
        self.workers.load_contribution(key.clone());
        self.workers.load_image(key, entry);
    }

    fn track_pointer(&mut self, ctx: &egui::Context) {
        let Some(position) = ctx.input(|input| input.pointer.latest_pos()) else {
            return;
        };
        let over_strip = self
            .strip_rect
            .is_some_and(|rect| rect.contains(position));
        if !over_strip {
            self.smoothing.set_raw(f64::from(position.x));
        }
    }

    fn tick(&mut self) {
        self.smoothed_x = self
            .smoothing
            .next()
            .unwrap_or_else(|| self.smoothing.tracker().smoothed_x());
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Select(entry) => self.select(entry),
                UiAction::ChooseLetter(letter) => self.state.choose_letter(letter),
                UiAction::ToggleStrip => {
                    self.state.panels.strip_open = !self.state.panels.strip_open;
                }
                UiAction::ToggleMetadata => {
                    self.state.panels.metadata_open = !self.state.panels.metadata_open;
                }
                UiAction::ToggleContribution => {
                    self.state.panels.contribution_open = !self.state.panels.contribution_open;
                }
                UiAction::Download => self.download(),
            }
        }
    }

    fn download(&mut self) {
        let (Some(shown), Some(bytes)) = (self.state.displayed.as_ref(), self.bytes.clone()) else {
            return;
        };
        let picked = FileDialog::new()
            .add_filter("JPEG images", &["jpg", "jpeg"])
            .set_title("Save Wallpaper")
            .set_file_name(&shown.entry.name)
            .save_file();
        match picked {
            Some(path) => {
                self.state.status = format!("Saving {}", path.display());
                self.workers.save(path, bytes);
            }
            None => debug!("download cancelled"),
        }
    }
}

fn read_viewport(ctx: &egui::Context) -> Option<Viewport> {
    let rect = ctx.screen_rect();
    Viewport::new(f64::from(rect.width()), f64::from(rect.height())).ok()
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|input| input.viewport().close_requested()) {
            self.smoothing.cancel();
        }

        let viewport = read_viewport(ctx);
        let worker_state_changed = self.poll_worker_events(ctx, viewport);

        self.track_pointer(ctx);
        self.tick();

        let now = Instant::now();
        let switching = self.state.is_switching(now);
        if let Some(viewport) = viewport {
            if self.state.refresh_layout(viewport) {
                debug!(width = viewport.width, height = viewport.height, "relaid background");
            }
            background::paint(
                ctx,
                self.background.as_ref(),
                self.state.displayed.as_ref(),
                viewport,
                self.smoothed_x,
                switching,
            );
            self.last_viewport = Some(viewport);
        }

        let mut actions = Vec::new();
        self.strip_rect = if self.state.panels.strip_open {
            Some(panels::draw_strip(
                ctx,
                &self.state,
                &self.thumbnails,
                &mut actions,
            ))
        } else {
            None
        };

        let mut metadata_open = self.state.panels.metadata_open;
        let avatar = self
            .state
            .displayed
            .as_ref()
            .and_then(|shown| self.avatars.get(&shown.generation()));
        panels::draw_metadata(ctx, &self.state, avatar, &mut metadata_open);
        self.state.panels.metadata_open = metadata_open;

        let mut contribution_open = self.state.panels.contribution_open;
        panels::draw_contribution(ctx, &self.guide, &mut contribution_open);
        self.state.panels.contribution_open = contribution_open;

        panels::draw_controls(ctx, &self.state, &mut actions);
        if switching {
            panels::draw_loading(ctx);
        }

        let has_pending_actions = !actions.is_empty();
        self.apply_actions(actions);

        let plan = repaint_policy(RepaintInputs {
            worker_state_changed,
            has_pending_actions,
            smoothing_running: self.smoothing.is_running(),
            pointer_lag: self.smoothing.tracker().lag(),
            transition_remaining: self.state.transition_remaining(Instant::now()),
        });
        match plan {
            Repaint::Now => ctx.request_repaint(),
            Repaint::After(delay) => ctx.request_repaint_after(delay),
            Repaint::Idle => {}
        }
    }
}
