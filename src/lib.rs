#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mirror;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod symmetry;
pub mod texture_manager;

pub use app::KaleidoApp;
pub use canvas::CanvasSurface;
pub use command::{Command, CommandError, CommandResult};
pub use config::KaleidoConfig;
pub use error::{KaleidoError, KaleidoResult};
pub use input::{PointerSegment, PointerTracker};
pub use mirror::LineSink;
pub use renderer::{FrameReport, FrameSettings, Renderer};
pub use stroke::{LineSegment, StrokeStyle};
pub use symmetry::SymmetryState;
