use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui;

/// The backdrop image, as far as the renderer is concerned.
///
/// Drawing never waits for the image: while it is `Pending` the canvas is drawn
/// without it.
#[derive(Debug, Clone, Default)]
pub enum Background<I> {
    #[default]
    Pending,
    Ready(I),
}

impl<I> Background<I> {
    pub fn ready(&self) -> Option<&I> {
        match self {
            Self::Pending => None,
            Self::Ready(image) => Some(image),
        }
    }
}

/// Decode an image file into egui's pixel format.
pub fn decode(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let image = image::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()))?
        .into_rgba8();
    let (w, h) = image.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        image.as_raw(),
    ))
}

/// A background load running on a worker thread.
///
/// Started once per window. When the worker finishes it sends the decoded image and
/// requests a single repaint; the next frame picks the image up through
/// [`BackgroundLoad::poll`]. There is no retry.
pub struct BackgroundLoad {
    path: PathBuf,
    rx: Receiver<anyhow::Result<egui::ColorImage>>,
}

impl BackgroundLoad {
    pub fn spawn(path: PathBuf, ctx: egui::Context) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        std::thread::spawn(move || {
            let _ = tx.send(decode(&worker_path));
            ctx.request_repaint();
        });
        tracing::info!(path = %path.display(), "loading background image");
        Self { path, rx }
    }

    /// Check for the finished image without blocking.
    ///
    /// `None` means still loading. `Some(Err)` and `Some(Ok)` are each returned once;
    /// the caller drops the load afterwards.
    pub fn poll(&self) -> Option<anyhow::Result<egui::ColorImage>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow::anyhow!(
                "Background loader for {} stopped without a result",
                self.path.display()
            ))),
        }
    }
}
