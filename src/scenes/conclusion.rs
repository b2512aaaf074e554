use super::{SceneContext, backdrop};
use promo_art_common::{Canvas, Color, Point, Rect, Result, TextStyle};
use rand::Rng;

const DOTS: usize = 50;

pub fn draw(canvas: &mut Canvas, ctx: &mut SceneContext<'_>) -> Result<()> {
    backdrop(canvas, 0x080E1C, 0x030816)?;

    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    for _ in 0..DOTS {
        let x = ctx.rng.gen_range(0.0..=width);
        let y = ctx.rng.gen_range(0.0..=height);
        let size = ctx.rng.gen_range(2.0..=6.0);
        let alpha = ctx.rng.gen_range(20.0..=80.0) / 255.0;
        canvas.fill_ellipse(
            Rect::new(x, y, size, size),
            Color::from_rgba(0x64B4FF, alpha),
        );
    }

    let center = width / 2.0;
    ctx.centered(
        canvas,
        "The Future of Development",
        Point::new(center, 300.0),
        TextStyle::bold(70.0, Color::WHITE),
    );

    let tagline = TextStyle::regular(36.0, Color::from_rgb(0x96C8FF));
    ctx.centered(
        canvas,
        "AI isn't replacing you.",
        Point::new(center, 420.0),
        tagline,
    );
    ctx.centered(
        canvas,
        "It's becoming your team.",
        Point::new(center, 480.0),
        tagline,
    );

    canvas.stroke_line(
        Point::new(560.0, 560.0),
        Point::new(1360.0, 560.0),
        Color::from_rgb(0x5096DC),
        2.0,
    );

    ctx.centered(
        canvas,
        "You define requirements → AI builds → You review",
        Point::new(center, 680.0),
        TextStyle::regular(36.0, Color::from_rgb(0xB4C8E6)),
    );
    ctx.centered(
        canvas,
        "This is human-AI collaboration, done right.",
        Point::new(center, 780.0),
        TextStyle::regular(28.0, Color::from_rgb(0x78AAD0)),
    );
    ctx.centered(
        canvas,
        "github.com/context-machine-lab/sleepless-agent",
        Point::new(center, 900.0),
        TextStyle::regular(28.0, Color::from_rgb(0x64B4FF)),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::tests::{embedded_fonts, render_scene};

    #[test]
    fn same_seed_same_pixels() {
        let fonts = embedded_fonts();

        let first = render_scene(draw, &fonts, 42).to_rgb();
        let second = render_scene(draw, &fonts, 42).to_rgb();
        let other = render_scene(draw, &fonts, 43).to_rgb();

        assert!(first == second);
        assert!(first != other);
    }
}
