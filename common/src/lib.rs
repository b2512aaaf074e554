#[macro_use]
extern crate tracing;

mod canvas;
mod color;
mod error;
mod geometry;
mod jpeg;
mod text;

pub use self::{
    canvas::Canvas,
    color::Color,
    error::{Error, Result},
    geometry::{Point, Rect, Size},
    jpeg::{JpegEncoder, write_to_file},
    text::{FontBook, FontWeight, TextStyle},
};

pub const FRAME_WIDTH: u32 = 1920;
pub const FRAME_HEIGHT: u32 = 1080;
pub const JPEG_QUALITY: f32 = 0.9;

/// Output file names, in the order the artworks are produced
pub const ARTWORK_FILES: [&str; 5] = [
    "01-main.jpg",
    "02-multi-agent.jpg",
    "03.5-quickstart.jpg",
    "03-scenarios.jpg",
    "04-conclusion.jpg",
];

/// Run `draw` once against a fresh canvas and hand the result back
///
/// The canvas starts out transparent; `draw` is expected to cover it.
pub fn render<F>(width: u32, height: u32, draw: F) -> Result<Canvas>
where
    F: FnOnce(&mut Canvas) -> Result<()>,
{
    let mut canvas = Canvas::new(width, height)?;
    draw(&mut canvas)?;
    Ok(canvas)
}
