use eframe::egui;
use std::path::PathBuf;

use crate::config::{Config, Resolved};
use crate::grid::{GridSizeError, GridSpec};
use crate::parser::{self, ParseResult, Report};
use crate::render::background::{Background, BackgroundLoad};
use crate::render::canvas::Canvas;
use crate::render::transform::CANVAS_EXTENT;
use crate::render::{self, Scene};
use crate::theme::Theme;

const TITLE: &str = "Connect the Dots!";
const PLACEHOLDER: &str = "Enter edges here: ";
const EDITOR_WIDTH: f32 = 280.0;

/// Whether the user has touched the edge editor yet.
///
/// While `Pristine` the editor shows the placeholder hint and Draw has nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorState {
    Pristine,
    Editing,
}

/// A message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq)]
enum Notice {
    InvalidEdges(Report),
    InvalidGridSize(GridSizeError),
}

impl Notice {
    fn message(&self) -> String {
        match self {
            Self::InvalidEdges(report) => report.to_string(),
            Self::InvalidGridSize(err) => err.to_string(),
        }
    }
}

struct DotsApp {
    grid: GridSpec,
    /// Contents of the grid size field; only applied on Enter or focus loss.
    size_text: String,
    edge_text: String,
    editor: EditorState,
    /// Outcome of the last Draw. Replaced wholesale, never edited.
    result: ParseResult,
    background_path: Option<PathBuf>,
    background: Background<egui::TextureHandle>,
    loading: Option<BackgroundLoad>,
    notice: Option<Notice>,
    theme: Theme,
}

impl DotsApp {
    fn new(text: String, resolved: Resolved) -> Self {
        let editor = if text.is_empty() {
            EditorState::Pristine
        } else {
            EditorState::Editing
        };
        let mut app = Self {
            grid: resolved.grid,
            size_text: resolved.grid.to_string(),
            edge_text: text,
            editor,
            result: ParseResult::default(),
            background_path: resolved.background,
            background: Background::Pending,
            loading: None,
            notice: None,
            theme: Theme::from_name(&resolved.theme),
        };
        if app.editor == EditorState::Editing {
            app.draw();
        }
        app
    }

    /// Kick off the one background load of this window, if an image is configured.
    fn start_background(&mut self, ctx: &egui::Context) {
        if let Some(path) = self.background_path.take() {
            self.loading = Some(BackgroundLoad::spawn(path, ctx.clone()));
        }
    }

    fn poll_background(&mut self, ctx: &egui::Context) {
        let Some(result) = self.loading.as_ref().and_then(BackgroundLoad::poll) else {
            return;
        };
        self.loading = None;
        match result {
            Ok(image) => {
                let texture = ctx.load_texture("background", image, egui::TextureOptions::LINEAR);
                self.background = Background::Ready(texture);
            }
            Err(e) => tracing::warn!("{e:#}"),
        }
    }

    /// Parse the editor contents against the current grid and report any errors once.
    fn draw(&mut self) {
        if self.editor == EditorState::Pristine {
            self.result = ParseResult::default();
            return;
        }
        self.result = parser::parse(&self.edge_text, self.grid);
        self.notice = self.result.report().map(|report| {
            tracing::debug!(errors = report.errors().len(), "reporting invalid edges");
            Notice::InvalidEdges(report)
        });
    }

    fn clear(&mut self) {
        self.edge_text.clear();
        self.result = ParseResult::default();
    }

    /// Apply the grid size field. A new size drops the drawn edges until the next Draw.
    fn commit_size(&mut self) {
        match self.size_text.parse::<GridSpec>() {
            Ok(grid) if grid != self.grid => {
                tracing::debug!(from = self.grid.size(), to = grid.size(), "grid resized");
                self.grid = grid;
                self.size_text = grid.to_string();
                self.result = ParseResult::default();
            }
            Ok(_) => self.size_text = self.grid.to_string(),
            Err(e) => {
                self.notice = Some(Notice::InvalidGridSize(e));
                self.size_text = self.grid.to_string();
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }

    fn draw_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(TITLE)
                        .size(self.theme.title_size)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
            ui.horizontal(|ui| {
                ui.label("Grid Size:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.size_text).desired_width(48.0),
                );
                if response.lost_focus() {
                    self.commit_size();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn draw_editor(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("edges")
            .exact_width(EDITOR_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("Edges").size(self.theme.body_size));
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.edge_text)
                        .hint_text(PLACEHOLDER)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY)
                        .code_editor(),
                );
                if response.gained_focus() || response.changed() {
                    self.editor = EditorState::Editing;
                }
                ui.horizontal(|ui| {
                    if ui.button("Draw").clicked() {
                        self.draw();
                    }
                    if ui.button("Clear").clicked() {
                        self.clear();
                    }
                });

                if !self.result.is_clean() {
                    ui.add_space(8.0);
                    ui.colored_label(
                        self.theme.error_color,
                        format!(
                            "{} edge(s) drawn, {} error(s) in the last draw",
                            self.result.edges.len(),
                            self.result.errors.len()
                        ),
                    );
                }
            });
    }

    fn draw_canvas(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(egui::Vec2::splat(CANVAS_EXTENT), egui::Sense::hover());
            let mut canvas = Canvas::new(&painter, response.rect, self.theme.canvas_background);
            render::draw(
                &mut canvas,
                &Scene {
                    grid: self.grid,
                    background: &self.background,
                    edges: &self.result.edges,
                    dot_color: self.theme.dot_color,
                },
            );
            ui.label(format!("Current Grid Size: {}", self.grid));
        });
    }

    fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let message = notice.message();
        let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.button("OK").clicked()
        });
        if modal.inner || modal.should_close() {
            self.notice = None;
        }
    }
}

impl eframe::App for DotsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background(ctx);
        self.draw_header(ctx);
        self.draw_editor(ctx);
        self.draw_canvas(ctx);
        self.draw_notice(ctx);
    }
}

pub fn run(text: String, size: Option<GridSpec>, background: Option<PathBuf>) -> anyhow::Result<()> {
    let resolved = Config::load_or_default().resolve(size, background);
    tracing::debug!(?resolved, "starting window");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([CANVAS_EXTENT + EDITOR_WIDTH + 60.0, CANVAS_EXTENT + 140.0])
        .with_title(TITLE);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            let mut app = DotsApp::new(text, resolved);
            cc.egui_ctx.set_visuals(app.theme.visuals());
            app.start_background(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
