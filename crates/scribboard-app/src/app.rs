//! Session driver: builds a canvas from configuration and replays a script.

use crate::error::AppError;
use crate::script::{Step, parse_script};
use crate::summary::SummaryRenderer;
use clap::Parser;
use scribboard_core::{Canvas, EditorConfig, RenderContext, Renderer, ToolKind};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Replay a whiteboard gesture script and print the resulting board
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "scribboard")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Script file, or `-` to read from stdin
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Editor configuration (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,

    /// Print the final board as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub width: f64,
    pub height: f64,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from command-line arguments.
    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        let editor = match &args.config {
            Some(path) => load_editor_config(path)?,
            None => EditorConfig::default(),
        };
        Ok(Self {
            width: args.width,
            height: args.height,
            editor,
        })
    }
}

/// Load an editor configuration file. Missing fields take their defaults.
pub fn load_editor_config(path: &Path) -> Result<EditorConfig, AppError> {
    let json = std::fs::read_to_string(path)?;
    let config: EditorConfig = serde_json::from_str(&json)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// A canvas driven by script steps.
#[derive(Debug)]
pub struct Session {
    canvas: Canvas,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let mut canvas = Canvas::with_config(config.editor);
        canvas.set_viewport_size(config.width, config.height);
        Self { canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Apply one step.
    pub fn apply(&mut self, step: &Step) -> Result<(), AppError> {
        if let Some(event) = step.pointer_event() {
            self.canvas.handle_pointer_event(event);
            return Ok(());
        }

        let canvas = &mut self.canvas;
        match step {
            Step::Tool { tool } => canvas.set_tool(tool.parse::<ToolKind>()?),
            Step::Undo => {
                if !canvas.undo() {
                    log::debug!("Nothing to undo");
                }
            }
            Step::Redo => {
                if !canvas.redo() {
                    log::debug!("Nothing to redo");
                }
            }
            Step::ZoomIn => canvas.zoom_in(),
            Step::ZoomOut => canvas.zoom_out(),
            Step::ResetZoom => canvas.reset_zoom(),
            Step::Text { content } => canvas.set_text(content.clone()),
            Step::Commit => {
                canvas.commit_text();
            }
            Step::CancelText => canvas.cancel_text(),
            Step::Resize { width, height } => canvas.set_viewport_size(*width, *height),
            Step::StrokeColor { color } => canvas.config_mut().set_stroke_color(*color),
            Step::StrokeWidth { width } => canvas.config_mut().set_stroke_width(*width),
            Step::StrokeStyle { style } => canvas.config_mut().set_stroke_style(*style),
            Step::Fill { color } => canvas.config_mut().set_fill_color(*color),
            Step::Font { family, size } => {
                if let Some(family) = family {
                    canvas.config_mut().set_font_family(*family);
                }
                if let Some(size) = size {
                    canvas.config_mut().set_font_size(*size);
                }
            }
            Step::Down { .. } | Step::Move { .. } | Step::Up { .. } => {}
        }
        Ok(())
    }

    /// Apply every step in order, stopping at the first error.
    pub fn replay(&mut self, steps: &[Step]) -> Result<(), AppError> {
        for (index, step) in steps.iter().enumerate() {
            log::trace!("Step {index}: {step:?}");
            self.apply(step)?;
        }
        // A script may end with the text surface still open.
        self.canvas.commit_text();
        Ok(())
    }

    /// Write the board as summary lines followed by a status line.
    pub fn write_summary(&self, out: &mut impl Write) -> Result<(), AppError> {
        let mut renderer = SummaryRenderer::new();
        renderer.build_scene(&RenderContext::new(&self.canvas));
        for line in renderer.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(
            out,
            "{} elements, tool {}, zoom {}%, undo {}, redo {}",
            self.canvas.elements().len(),
            self.canvas.tool(),
            self.canvas.camera.zoom_percent(),
            if self.canvas.can_undo() { "yes" } else { "no" },
            if self.canvas.can_redo() { "yes" } else { "no" },
        )?;
        Ok(())
    }

    /// Write the visible elements as a JSON array.
    pub fn write_json(&self, out: &mut impl Write) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut *out, self.canvas.elements())?;
        writeln!(out)?;
        Ok(())
    }
}

fn read_script(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Run a session described by `args`, writing the report to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), AppError> {
    let config = AppConfig::from_args(args)?;
    let steps = parse_script(&read_script(&args.script)?)?;

    let mut session = Session::new(config);
    session.replay(&steps)?;
    log::info!(
        "Replayed {} steps, {} elements on the board",
        steps.len(),
        session.canvas().elements().len()
    );

    if args.json {
        session.write_json(out)
    } else {
        session.write_summary(out)
    }
}
