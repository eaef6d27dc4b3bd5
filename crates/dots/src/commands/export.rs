use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};

use colored::Colorize;
use eframe::egui;

use crate::cli::read_edge_list;
use crate::config::Config;
use crate::grid::GridSpec;
use crate::parser::{self, ParseResult};
use crate::render::background::{self, Background};
use crate::render::canvas::Canvas;
use crate::render::transform::CANVAS_EXTENT;
use crate::render::{self, Scene};
use crate::theme::Theme;

struct ExportApp {
    grid: GridSpec,
    result: ParseResult,
    theme: Theme,
    image: Option<egui::ColorImage>,
    background: Background<egui::TextureHandle>,
    output: PathBuf,
    screenshot_requested: bool,
    done: bool,
    /// Carries the save result back to `run` once the window closes.
    tx: Sender<anyhow::Result<()>>,
}

impl ExportApp {
    fn new(
        grid: GridSpec,
        result: ParseResult,
        theme: Theme,
        image: Option<egui::ColorImage>,
        output: PathBuf,
        tx: Sender<anyhow::Result<()>>,
    ) -> Self {
        Self {
            grid,
            result,
            theme,
            image,
            background: Background::Pending,
            output,
            screenshot_requested: false,
            done: false,
            tx,
        }
    }
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // The image was decoded up front, so it is ready on the first frame
        if let Some(image) = self.image.take() {
            let texture = ctx.load_texture("background", image, egui::TextureOptions::LINEAR);
            self.background = Background::Ready(texture);
        }

        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let _ = self.tx.send(save_color_image(image, &self.output));
                    self.done = true;
                }
            }
        });

        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let bg = self.theme.canvas_background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let mut canvas = Canvas::new(ui.painter(), rect, bg);
                render::draw(
                    &mut canvas,
                    &Scene {
                        grid: self.grid,
                        background: &self.background,
                        edges: &self.result.edges,
                        dot_color: self.theme.dot_color,
                    },
                );
            });

        // Request screenshot after rendering (will arrive next frame)
        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

fn save_color_image(image: &egui::ColorImage, path: &Path) -> anyhow::Result<()> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .map_err(|e| anyhow::anyhow!("Failed to save {}: {e}", path.display()))
}

pub fn run(
    file: &Path,
    output: PathBuf,
    size: Option<GridSpec>,
    background: Option<PathBuf>,
) -> anyhow::Result<()> {
    let text = read_edge_list(file)?;
    let config = Config::load_or_default();
    let resolved = config.resolve(size, background);
    let result = parser::parse(&text, resolved.grid);

    // Export draws what the window would draw: valid lines only
    if let Some(report) = result.report() {
        eprintln!("{}", report.to_string().yellow());
        eprintln!();
    }

    let image = match &resolved.background {
        Some(path) => Some(background::decode(path)?),
        None => None,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    eprintln!(
        "Exporting {} edge(s) on a {}x{} grid to {}",
        result.edges.len(),
        resolved.grid,
        resolved.grid,
        output.display(),
    );

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([CANVAS_EXTENT, CANVAS_EXTENT])
        .with_title("dots export")
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let (tx, rx) = mpsc::channel();
    let app = ExportApp::new(
        resolved.grid,
        result,
        Theme::from_name(&resolved.theme),
        image,
        output.clone(),
        tx,
    );

    eframe::run_native(
        "dots export",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    match rx.try_recv() {
        Ok(Ok(())) => {
            eprintln!("{}", format!("Saved {}", output.display()).green());
            Ok(())
        }
        Ok(Err(e)) => Err(e),
        Err(_) => anyhow::bail!("Window closed before the canvas was captured"),
    }
}
