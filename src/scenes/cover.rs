use super::{SceneContext, backdrop};
use itertools::iproduct;
use promo_art_common::{Canvas, Color, Point, Rect, Result, TextStyle};

const GRID_STEP: usize = 100;
const CORE: Point = Point::new(1400.0, 300.0);

pub fn draw(canvas: &mut Canvas, ctx: &mut SceneContext<'_>) -> Result<()> {
    backdrop(canvas, 0x0A0F1E, 0x050A19)?;

    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    let grid = Color::WHITE.with_alpha(0.05);
    for x in (0..=canvas.width() as usize).step_by(GRID_STEP) {
        let x = x as f32;
        canvas.stroke_line(Point::new(x, 0.0), Point::new(x, height), grid, 1.0);
    }
    for y in (0..=canvas.height() as usize).step_by(GRID_STEP) {
        let y = y as f32;
        canvas.stroke_line(Point::new(0.0, y), Point::new(width, y), grid, 1.0);
    }

    // moon
    let moon = Rect::new(150.0, 150.0, 200.0, 200.0);
    canvas.fill_ellipse(moon, Color::from_rgb(0x283250));
    canvas.stroke_ellipse(moon, Color::from_rgba(0x6496FF, 0.8), 3.0);

    // glowing core, outermost ring first
    for radius in (50..=150).rev().step_by(10) {
        let radius = radius as f32;
        let strength = 1.0 - radius / 150.0;
        let ring = Rect::around(CORE, radius);
        canvas.fill_ellipse(ring, Color::from_rgba(0x0096FF, strength * 0.3));
        canvas.stroke_ellipse(ring, Color::from_rgba(0x0096FF, 0.4), 1.0);
    }

    // code stream below the core, fading out towards the bottom
    for (column, row) in iproduct!(0..10_u8, 0..20_u8) {
        let x = 1200.0 + f32::from(column) * 60.0;
        let y = 350.0 + f32::from(row) * 30.0;
        let length = 30.0 + f32::from(row % 3) * 20.0;
        let alpha = (255.0 - f32::from(row) * 10.0) / 255.0;
        canvas.fill_rect(
            Rect::new(x, y, length, 15.0),
            Color::from_rgba(0x00C8FF, alpha * 0.35),
        );
    }

    let center = width / 2.0;
    ctx.centered(
        canvas,
        "Sleepless Agent",
        Point::new(center, 700.0),
        TextStyle::bold(80.0, Color::WHITE),
    );
    ctx.centered(
        canvas,
        "24/7 AI Development Team",
        Point::new(center, 800.0),
        TextStyle::regular(40.0, Color::from_rgb(0x64C8FF)),
    );

    Ok(())
}
