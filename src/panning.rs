mod calculator;
mod offset;
mod smoothing;


pub use calculator::{PanningInfo, WIDE_MARGIN, compute_panning};
pub use offset::{UvWindow, compute_offset, cover_window, pan_window};
pub use smoothing::{CancelHandle, PointerTracker, SMOOTHING_FACTOR, SmoothingLoop};
