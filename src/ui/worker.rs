use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use eframe::egui;
use image::DynamicImage;
use image::imageops::FilterType;
use tracing::{debug, warn};

use crate::model::{GalleryEntry, ImageAsset};
use crate::runtime::{AppContext, probe_asset};
use crate::source::CommitInfo;

use super::state::RequestKey;

/// Larger images are scaled down before upload; the asset keeps its natural size.
const MAX_TEXTURE_SIDE: u32 = 8192;
const THUMBNAIL_SIZE: (u32, u32) = (320, 200);
const AVATAR_SIZE: u32 = 64;

pub(crate) enum WorkerEvent {
    Listing(Vec<GalleryEntry>),
    Thumbnail {
        name: String,
        image: egui::ColorImage,
    },
    ImageLoaded {
        key: RequestKey,
        entry: GalleryEntry,
        asset: ImageAsset,
        bytes: Arc<Vec<u8>>,
        image: egui::ColorImage,
    },
    ImageFailed {
        key: RequestKey,
        error: String,
    },
    Contribution {
        key: RequestKey,
        info: Option<CommitInfo>,
    },
    Avatar {
        key: RequestKey,
        image: egui::ColorImage,
    },
    Saved(Result<PathBuf, String>),
}

/// Runs network and decode work off the UI thread and reports back over a channel.
#[derive(Clone)]
pub(crate) struct Workers {
    app: AppContext,
    tx: Sender<WorkerEvent>,
    ctx: egui::Context,
}

impl Workers {
    pub(crate) fn new(app: AppContext, tx: Sender<WorkerEvent>, ctx: egui::Context) -> Self {
        Self { app, tx, ctx }
    }

    pub(crate) fn app(&self) -> &AppContext {
        &self.app
    }

    fn send(&self, event: WorkerEvent) {
        // The receiver only disappears while the window is closing.
        if self.tx.send(event).is_ok() {
            self.ctx.request_repaint();
        }
    }

    fn spawn(&self, job: impl FnOnce(&Workers) + Send + 'static) {
        let workers = self.clone();
        thread::spawn(move || job(&workers));
    }

    /// Fetches the listing, then the thumbnails one by one in listing order.
    pub(crate) fn load_listing(&self) {
        self.spawn(|workers| {
            let entries = workers.app.gallery_service().entries_or_empty();
            workers.send(WorkerEvent::Listing(entries.clone()));
            for entry in entries {
                match workers.app.gallery_service().fetch_thumbnail(&entry) {
                    Ok(bytes) => match image::load_from_memory(&bytes) {
                        Ok(decoded) => {
                            let preview = decoded.thumbnail(THUMBNAIL_SIZE.0, THUMBNAIL_SIZE.1);
                            workers.send(WorkerEvent::Thumbnail {
                                name: entry.name,
                                image: to_color_image(&preview),
                            });
                        }
                        Err(error) => warn!(name = %entry.name, %error, "thumbnail decode failed"),
                    },
                    Err(error) => warn!(name = %entry.name, %error, "thumbnail fetch failed"),
                }
            }
        });
    }

    pub(crate) fn load_image(&self, key: RequestKey, entry: GalleryEntry) {
        self.spawn(move |workers| {
            let event = match decode_entry(&workers.app, &entry) {
                Ok((asset, bytes, image)) => {
                    debug!(name = %entry.name, width = asset.width, height = asset.height, "image ready");
                    WorkerEvent::ImageLoaded {
                        key,
                        entry,
                        asset,
                        bytes,
                        image,
                    }
                }
                Err(error) => {
                    warn!(name = %entry.name, %error, "image load failed");
                    WorkerEvent::ImageFailed { key, error }
                }
            };
            workers.send(event);
        });
    }

    pub(crate) fn load_contribution(&self, key: RequestKey) {
        self.spawn(move |workers| {
            let info = workers.app.metadata_service().contribution(&key.name);
            let avatar = info
                .as_ref()
                .and_then(|info| workers.app.metadata_service().fetch_avatar(info));
            workers.send(WorkerEvent::Contribution {
                key: key.clone(),
                info,
            });
            let Some(bytes) = avatar else {
                return;
            };
            match image::load_from_memory(&bytes) {
                Ok(decoded) => {
                    let picture = decoded.thumbnail(AVATAR_SIZE, AVATAR_SIZE);
                    workers.send(WorkerEvent::Avatar {
                        key,
                        image: to_color_image(&picture),
                    });
                }
                Err(error) => warn!(name = %key.name, %error, "avatar decode failed"),
            }
        });
    }

    pub(crate) fn save(&self, path: PathBuf, bytes: Arc<Vec<u8>>) {
        self.spawn(move |workers| {
            let result = workers
                .app
                .download_service()
                .save(&path, &bytes)
                .map(|()| path)
                .map_err(|error| error.to_string());
            workers.send(WorkerEvent::Saved(result));
        });
    }
}

fn decode_entry(
    app: &AppContext,
    entry: &GalleryEntry,
) -> Result<(ImageAsset, Arc<Vec<u8>>, egui::ColorImage), String> {
    let bytes = app
        .metadata_service()
        .fetch_image(entry)
        .map_err(|error| error.to_string())?;
    let asset = probe_asset(&entry.name, &bytes).map_err(|error| error.to_string())?;
    let mut decoded = image::load_from_memory(&bytes).map_err(|error| error.to_string())?;
    if decoded.width().max(decoded.height()) > MAX_TEXTURE_SIDE {
        decoded = decoded.resize(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE, FilterType::Triangle);
    }
    Ok((asset, bytes, to_color_image(&decoded)))
}

fn to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
