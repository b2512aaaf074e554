use crate::{Color, Error, Point, Rect, Result};
use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Paint, Path, PathBuilder, Pixmap, Shader, SpreadMode,
    Stroke, Transform,
};

/// Raster surface every drawing primitive targets
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::Allocation { width, height })?;
        debug!(width, height, "allocated canvas");
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f32, self.height() as f32)
    }

    /// Pixel color flattened onto black, the way it ends up in the jpeg
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        let pixel = self.pixmap.pixel(x, y)?;
        Some([pixel.red(), pixel.green(), pixel.blue()])
    }

    /// Row-major RGB8 copy of the canvas, flattened onto black
    pub fn to_rgb(&self) -> Vec<u8> {
        // premultiplied channels are exactly the color composited over black
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| [pixel.red(), pixel.green(), pixel.blue()])
            .collect()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = rect.to_skia() else {
            return;
        };

        if color.is_invisible() {
            return;
        }

        self.pixmap
            .fill_rect(rect, &solid(color), Transform::identity(), None);
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        if let Some(rect) = rect.to_skia() {
            self.stroke(&PathBuilder::from_rect(rect), color, line_width);
        }
    }

    /// Fill the ellipse inscribed in `rect`
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if let Some(path) = oval(rect) {
            self.fill(&path, color);
        }
    }

    pub fn stroke_ellipse(&mut self, rect: Rect, color: Color, line_width: f32) {
        if let Some(path) = oval(rect) {
            self.stroke(&path, color, line_width);
        }
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, color: Color, line_width: f32) {
        if from == to {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);

        if let Some(path) = builder.finish() {
            self.stroke(&path, color, line_width);
        }
    }

    /// Fill the closed polygon through `points`
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let [first, rest @ ..] = points else {
            return;
        };

        if rest.len() < 2 {
            return;
        }

        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        builder.close();

        if let Some(path) = builder.finish() {
            self.fill(&path, color);
        }
    }

    /// Paint `rect` with evenly spaced `stops` along `angle_degrees`
    ///
    /// 0° runs left to right, 90° top to bottom.
    pub fn fill_linear_gradient(
        &mut self,
        rect: Rect,
        stops: &[Color],
        angle_degrees: f32,
    ) -> Result<()> {
        if stops.len() < 2 {
            return Err(Error::InvalidGradient(stops.len()));
        }

        let Some(target) = rect.to_skia() else {
            return Ok(());
        };

        let (start, end) = gradient_line(rect, angle_degrees);
        let last = (stops.len() - 1) as f32;
        let stops = stops
            .iter()
            .enumerate()
            .map(|(idx, color)| GradientStop::new(idx as f32 / last, color.to_skia()))
            .collect();

        let Some(shader) = LinearGradient::new(
            tiny_skia::Point::from_xy(start.x, start.y),
            tiny_skia::Point::from_xy(end.x, end.y),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            warn!(?rect, angle_degrees, "degenerate gradient, nothing painted");
            return Ok(());
        };

        let paint = Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        };
        self.pixmap
            .fill_rect(target, &paint, Transform::identity(), None);

        Ok(())
    }

    pub(crate) fn fill(&mut self, path: &Path, color: Color) {
        if color.is_invisible() {
            return;
        }

        self.pixmap.fill_path(
            path,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &Path, color: Color, line_width: f32) {
        if color.is_invisible() || line_width.is_nan() || line_width <= 0.0 {
            return;
        }

        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &solid(color), &stroke, Transform::identity(), None);
    }
}

fn solid(color: Color) -> Paint<'static> {
    Paint {
        shader: Shader::SolidColor(color.to_skia()),
        anti_alias: true,
        ..Paint::default()
    }
}

fn oval(rect: Rect) -> Option<Path> {
    let rect = rect.to_skia()?;
    PathBuilder::from_oval(rect)
}

/// End points of the gradient axis through the centre of `rect`
///
/// The axis spans the projection of the rect onto the gradient direction so
/// the first and last stops land exactly on the rect's extreme corners.
fn gradient_line(rect: Rect, angle_degrees: f32) -> (Point, Point) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let half = (rect.width * cos.abs() + rect.height * sin.abs()) / 2.0;
    let center = rect.center();

    (
        Point::new(center.x - cos * half, center.y - sin * half),
        Point::new(center.x + cos * half, center.y + sin * half),
    )
}
