use std::time::{Duration, Instant};

use crate::gallery::{available_letters, filter_by_letter};
use crate::model::{GalleryEntry, ImageAsset, Viewport};
use crate::panning::{PanningInfo, compute_panning};
use crate::runtime::MetadataReport;
use crate::source::CommitInfo;

/// Identity of one selection request. Completions carrying another key are stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RequestKey {
    pub(crate) name: String,
    pub(crate) generation: u64,
}

/// Keeps the loading overlay up while a request runs and for a minimum time after it lands.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoadGate {
    min_visible: Duration,
    started: Option<Instant>,
    settle_at: Option<Instant>,
}

impl LoadGate {
    pub(crate) fn new(min_visible: Duration) -> Self {
        Self {
            min_visible,
            started: None,
            settle_at: None,
        }
    }

    pub(crate) fn begin(&mut self, now: Instant) {
        self.started = Some(now);
        self.settle_at = None;
    }

    pub(crate) fn finish(&mut self, now: Instant) {
        if self.started.is_some() {
            self.settle_at = Some(now + self.min_visible);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.started = None;
        self.settle_at = None;
    }

    pub(crate) fn is_active(&self, now: Instant) -> bool {
        match (self.started, self.settle_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(settle_at)) => now < settle_at,
        }
    }

    /// Time until the overlay may drop, once the request has landed.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.settle_at
            .filter(|_| self.started.is_some())
            .map(|settle_at| settle_at.saturating_duration_since(now))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Panels {
    pub(crate) strip_open: bool,
    pub(crate) metadata_open: bool,
    pub(crate) contribution_open: bool,
}

/// The image currently drawn as background.
#[derive(Debug, Clone)]
pub(crate) struct Displayed {
    pub(crate) entry: GalleryEntry,
    pub(crate) asset: ImageAsset,
    pub(crate) panning: PanningInfo,
    /// Window size `panning` was computed for.
    pub(crate) viewport: Viewport,
    generation: u64,
}

impl Displayed {
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) entries: Vec<GalleryEntry>,
    pub(crate) listing_loaded: bool,
    pub(crate) letter: Option<char>,
    pub(crate) panels: Panels,
    pub(crate) displayed: Option<Displayed>,
    pub(crate) report: MetadataReport,
    pub(crate) status: String,
    current: Option<RequestKey>,
    loading: bool,
    early_contribution: Option<Option<CommitInfo>>,
    generation: u64,
    gate: LoadGate,
}

impl ViewState {
    pub(crate) fn new(transition: Duration) -> Self {
        Self {
            entries: Vec::new(),
            listing_loaded: false,
            letter: None,
            panels: Panels::default(),
            displayed: None,
            report: MetadataReport::default(),
            status: "Loading gallery...".to_string(),
            current: None,
            loading: false,
            early_contribution: None,
            generation: 0,
            gate: LoadGate::new(transition),
        }
    }

    pub(crate) fn set_entries(&mut self, entries: Vec<GalleryEntry>) {
        self.status = if entries.is_empty() {
            "No wallpapers available".to_string()
        } else {
            format!("{} wallpapers", entries.len())
        };
        self.entries = entries;
        self.listing_loaded = true;
    }

    pub(crate) fn visible_entries(&self) -> Vec<GalleryEntry> {
        filter_by_letter(&self.entries, self.letter)
    }

    pub(crate) fn letters(&self) -> Vec<char> {
        available_letters(&self.entries)
    }

    /// Selecting the active letter again clears the filter.
    pub(crate) fn choose_letter(&mut self, letter: Option<char>) {
        self.letter = if letter.is_some() && letter == self.letter {
            None
        } else {
            letter
        };
    }

    pub(crate) fn begin_load(&mut self, entry: &GalleryEntry, now: Instant) -> RequestKey {
        self.generation = self.generation.saturating_add(1);
        let key = RequestKey {
            name: entry.name.clone(),
            generation: self.generation,
        };
        self.current = Some(key.clone());
        self.loading = true;
        self.early_contribution = None;
        self.gate.begin(now);
        self.status = format!("Loading {}", entry.label());
        key
    }

    pub(crate) fn is_current(&self, key: &RequestKey) -> bool {
        self.current.as_ref() == Some(key)
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn is_switching(&self, now: Instant) -> bool {
        self.gate.is_active(now)
    }

    pub(crate) fn transition_remaining(&self, now: Instant) -> Option<Duration> {
        self.gate.remaining(now)
    }

    /// Applies a finished image load. Returns `false` for a superseded request.
    pub(crate) fn finish_load(
        &mut self,
        key: &RequestKey,
        entry: GalleryEntry,
        asset: ImageAsset,
        viewport: Viewport,
        now: Instant,
    ) -> bool {
        if !self.is_current(key) {
            return false;
        }
        let panning = compute_panning(asset.width, asset.height, viewport);
        let contribution = self.early_contribution.take().flatten();
        self.report = MetadataReport::for_asset(&asset, contribution);
        self.status = entry.label().to_string();
        self.displayed = Some(Displayed {
            entry,
            asset,
            panning,
            viewport,
            generation: key.generation,
        });
        self.loading = false;
        self.gate.finish(now);
        true
    }

    /// Recomputes the panning of the shown image after a resize. Returns `true` when it changed.
    pub(crate) fn refresh_layout(&mut self, viewport: Viewport) -> bool {
        let Some(shown) = self.displayed.as_mut() else {
            return false;
        };
        if shown.viewport == viewport {
            return false;
        }
        shown.panning = compute_panning(shown.asset.width, shown.asset.height, viewport);
        shown.viewport = viewport;
        true
    }

    /// Avatars belong to the request they were fetched for.
    pub(crate) fn accepts_avatar(&self, key: &RequestKey) -> bool {
        self.is_current(key)
    }

    /// Generations whose resources are still needed: the shown image and the pending one.
    pub(crate) fn is_live_generation(&self, generation: u64) -> bool {
        let shown = self
            .displayed
            .as_ref()
            .is_some_and(|displayed| displayed.generation == generation);
        let pending = self
            .current
            .as_ref()
            .is_some_and(|key| key.generation == generation);
        shown || pending
    }

    /// A failed load clears the overlay and keeps whatever was shown before.
    pub(crate) fn fail_load(&mut self, key: &RequestKey, error: &str) -> bool {
        if !self.is_current(key) {
            return false;
        }
        self.loading = false;
        self.early_contribution = None;
        self.gate.clear();
        self.status = format!("Could not load {}: {error}", key.name);
        true
    }

    pub(crate) fn apply_contribution(&mut self, key: &RequestKey, info: Option<CommitInfo>) -> bool {
        if !self.is_current(key) {
            return false;
        }
        if self.loading {
            self.early_contribution = Some(info);
            return true;
        }
        let shown = self
            .displayed
            .as_ref()
            .is_some_and(|displayed| displayed.generation == key.generation);
        if shown {
            self.report.contribution = info;
        }
        shown
    }
}
