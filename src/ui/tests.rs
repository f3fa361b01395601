use std::time::{Duration, Instant};

use crate::model::{GalleryEntry, ImageAsset, Viewport};
use crate::panning::UvWindow;
use crate::source::CommitInfo;

use super::app::{Repaint, RepaintInputs, repaint_policy};
use super::background::background_window;
use super::state::{LoadGate, ViewState};

const TRANSITION: Duration = Duration::from_millis(120);

fn entry(name: &str) -> GalleryEntry {
    GalleryEntry {
        name: name.to_string(),
        thumb_url: format!("https://thumbs.test/{name}"),
        full_url: format!("https://full.test/{name}"),
    }
}

fn asset(name: &str, width: u32, height: u32) -> ImageAsset {
    ImageAsset::new(name, width, height, 400_000).expect("valid asset")
}

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0).expect("valid viewport")
}

fn commit(author: &str) -> CommitInfo {
    CommitInfo {
        author: author.to_string(),
        avatar_url: String::new(),
        date: "March 5, 2024".to_string(),
        message: "add wallpaper".to_string(),
        profile_url: format!("https://github.com/{author}"),
    }
}

#[test]
fn superseded_image_load_is_ignored() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let first = state.begin_load(&entry("alpha.jpg"), now);
    let second = state.begin_load(&entry("beta.jpg"), now);

    let applied = state.finish_load(
        &first,
        entry("alpha.jpg"),
        asset("alpha.jpg", 1920, 1080),
        viewport(),
        now,
    );
    assert!(!applied);
    assert!(state.displayed.is_none());
    assert!(state.is_loading());

    assert!(state.finish_load(
        &second,
        entry("beta.jpg"),
        asset("beta.jpg", 1920, 1080),
        viewport(),
        now,
    ));
    let shown = state.displayed.as_ref().expect("displayed");
    assert_eq!(shown.entry.name, "beta.jpg");
    assert!(!state.is_loading());
}

#[test]
fn failed_load_keeps_previous_background() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let key = state.begin_load(&entry("alpha.jpg"), now);
    state.finish_load(
        &key,
        entry("alpha.jpg"),
        asset("alpha.jpg", 1920, 1080),
        viewport(),
        now,
    );

    let failing = state.begin_load(&entry("broken.jpg"), now);
    assert!(state.fail_load(&failing, "status 404"));

    assert!(!state.is_loading());
    assert!(!state.is_switching(now));
    let shown = state.displayed.as_ref().expect("previous image kept");
    assert_eq!(shown.entry.name, "alpha.jpg");
    assert!(state.status.contains("broken.jpg"));
}

#[test]
fn late_contribution_for_failed_load_does_not_touch_shown_report() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let key = state.begin_load(&entry("alpha.jpg"), now);
    state.finish_load(
        &key,
        entry("alpha.jpg"),
        asset("alpha.jpg", 1920, 1080),
        viewport(),
        now,
    );
    state.apply_contribution(&key, Some(commit("ryu")));

    let failing = state.begin_load(&entry("broken.jpg"), now);
    state.fail_load(&failing, "timeout");
    assert!(!state.apply_contribution(&failing, Some(commit("someone"))));

    let author = state.report.contribution.as_ref().map(|info| info.author.as_str());
    assert_eq!(author, Some("ryu"));
}

#[test]
fn contribution_arriving_before_image_is_applied_on_finish() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let key = state.begin_load(&entry("alpha.jpg"), now);

    assert!(state.apply_contribution(&key, Some(commit("ryu"))));
    assert!(state.report.contribution.is_none());

    state.finish_load(
        &key,
        entry("alpha.jpg"),
        asset("alpha.jpg", 1920, 1080),
        viewport(),
        now,
    );
    assert_eq!(
        state.report.contribution.map(|info| info.author),
        Some("ryu".to_string())
    );
    assert!(state.report.metadata.is_some());
}

#[test]
fn wide_image_gets_wide_panning_on_load() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let key = state.begin_load(&entry("maxxed_city.jpg"), now);
    state.finish_load(
        &key,
        entry("maxxed_city.jpg"),
        asset("maxxed_city.jpg", 3840, 1080),
        viewport(),
        now,
    );
    let shown = state.displayed.as_ref().expect("displayed");
    assert!(shown.panning.is_wide);
    assert!((shown.panning.rendered_width - 2560.0).abs() < 1e-9);
}

#[test]
fn load_gate_holds_overlay_after_completion() {
    let mut gate = LoadGate::new(TRANSITION);
    let start = Instant::now();
    assert!(!gate.is_active(start));

    gate.begin(start);
    assert!(gate.is_active(start + Duration::from_secs(5)));
    assert_eq!(gate.remaining(start), None);

    let landed = start + Duration::from_millis(300);
    gate.finish(landed);
    assert!(gate.is_active(landed + Duration::from_millis(119)));
    assert!(!gate.is_active(landed + TRANSITION));
    assert_eq!(gate.remaining(landed), Some(TRANSITION));

    gate.clear();
    assert!(!gate.is_active(landed));
}

#[test]
fn choosing_active_letter_again_clears_filter() {
    let mut state = ViewState::new(TRANSITION);
    state.set_entries(vec![entry("alpha.jpg"), entry("beta.jpg"), entry("apex.jpg")]);

    state.choose_letter(Some('A'));
    let names: Vec<String> = state
        .visible_entries()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["alpha.jpg", "apex.jpg"]);
    assert_eq!(state.letters(), vec!['A', 'B']);

    state.choose_letter(Some('A'));
    assert_eq!(state.letter, None);
    assert_eq!(state.visible_entries().len(), 3);
}

#[test]
fn empty_listing_sets_status() {
    let mut state = ViewState::new(TRANSITION);
    state.set_entries(Vec::new());
    assert!(state.listing_loaded);
    assert_eq!(state.status, "No wallpapers available");
}

#[test]
fn background_pans_wide_images_and_covers_others() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let key = state.begin_load(&entry("maxxed_city.jpg"), now);
    state.finish_load(
        &key,
        entry("maxxed_city.jpg"),
        asset("maxxed_city.jpg", 3840, 1080),
        viewport(),
        now,
    );
    let shown = state.displayed.clone().expect("displayed");

    let left = background_window(&shown, viewport(), 0.0);
    assert!(left.min_x.abs() < 1e-9);
    assert!((left.width() - 0.5).abs() < 1e-9);

    let right = background_window(&shown, viewport(), 1280.0);
    assert!((right.max_x - 1.0).abs() < 1e-9);

    let key = state.begin_load(&entry("sunset.jpg"), now);
    state.finish_load(
        &key,
        entry("sunset.jpg"),
        asset("sunset.jpg", 1280, 720),
        viewport(),
        now,
    );
    let shown = state.displayed.clone().expect("displayed");
    assert_eq!(background_window(&shown, viewport(), 640.0), UvWindow::FULL);
}

#[test]
fn repaint_follows_pointer_until_settled() {
    let base = RepaintInputs {
        worker_state_changed: false,
        has_pending_actions: false,
        smoothing_running: true,
        pointer_lag: 40.0,
        transition_remaining: None,
    };
    assert_eq!(repaint_policy(base), Repaint::Now);

    let settled = RepaintInputs {
        pointer_lag: 0.1,
        ..base
    };
    assert_eq!(repaint_policy(settled), Repaint::Idle);

    let cancelled = RepaintInputs {
        smoothing_running: false,
        ..base
    };
    assert_eq!(repaint_policy(cancelled), Repaint::Idle);

    let fading = RepaintInputs {
        transition_remaining: Some(Duration::from_millis(80)),
        ..settled
    };
    assert_eq!(
        repaint_policy(fading),
        Repaint::After(Duration::from_millis(80))
    );
}

fn sampled_aspect(window: UvWindow, width: u32, height: u32) -> f64 {
    (window.width() * f64::from(width)) / ((window.max_y - window.min_y) * f64::from(height))
}

#[test]
fn resized_window_keeps_image_proportions() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let key = state.begin_load(&entry("maxxed_city.jpg"), now);
    state.finish_load(
        &key,
        entry("maxxed_city.jpg"),
        asset("maxxed_city.jpg", 3840, 1080),
        viewport(),
        now,
    );
    let before = state.displayed.clone().expect("displayed");

    for (width, height) in [(1280.0, 360.0), (1280.0, 1000.0), (800.0, 720.0)] {
        let resized = Viewport::new(width, height).expect("valid viewport");
        for pointer in [0.0, width / 2.0, width] {
            let window = background_window(&before, resized, pointer);
            let sampled = sampled_aspect(window, 3840, 1080);
            assert!(
                (sampled - width / height).abs() < 1e-6,
                "{width}x{height} at {pointer}: sampled {sampled}"
            );
        }
    }

    let short = Viewport::new(1280.0, 360.0).expect("valid viewport");
    assert!(state.refresh_layout(short));
    assert!(!state.refresh_layout(short));
    let shown = state.displayed.as_ref().expect("displayed");
    assert_eq!(shown.viewport, short);
    assert!(!shown.panning.is_wide);
    assert!((shown.panning.rendered_width - 1280.0).abs() < 1e-9);
}

#[test]
fn refresh_without_image_is_a_no_op() {
    let mut state = ViewState::new(TRANSITION);
    assert!(!state.refresh_layout(viewport()));
}

#[test]
fn avatar_for_superseded_request_is_dropped() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let first = state.begin_load(&entry("alpha.jpg"), now);
    state.finish_load(
        &first,
        entry("alpha.jpg"),
        asset("alpha.jpg", 1920, 1080),
        viewport(),
        now,
    );
    assert!(state.accepts_avatar(&first));

    let second = state.begin_load(&entry("beta.jpg"), now);
    let third = state.begin_load(&entry("gamma.jpg"), now);
    assert!(!state.accepts_avatar(&first));
    assert!(!state.accepts_avatar(&second));
    assert!(state.accepts_avatar(&third));

    assert!(state.is_live_generation(first.generation));
    assert!(!state.is_live_generation(second.generation));
    assert!(state.is_live_generation(third.generation));
}

#[test]
fn failed_load_keeps_shown_avatar_alive() {
    let mut state = ViewState::new(TRANSITION);
    let now = Instant::now();
    let first = state.begin_load(&entry("alpha.jpg"), now);
    state.finish_load(
        &first,
        entry("alpha.jpg"),
        asset("alpha.jpg", 1920, 1080),
        viewport(),
        now,
    );
    let failing = state.begin_load(&entry("broken.jpg"), now);
    state.fail_load(&failing, "status 500");

    let shown = state.displayed.as_ref().expect("previous image kept");
    assert_eq!(shown.generation(), first.generation);
    assert!(state.is_live_generation(first.generation));
}
