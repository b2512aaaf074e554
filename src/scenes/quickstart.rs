use super::{Anchor, SceneContext, backdrop};
use itertools::Itertools;
use promo_art_common::{Canvas, Color, Point, Rect, Result, TextStyle};

const STEPS: [&str; 8] = [
    "Install Claude Code CLI",
    "Clone Sleepless Agent",
    "Install Python Dependencies",
    "Create GitHub Token",
    "Configure config.yaml",
    "Setup GitHub CLI",
    "Run First Task",
    "Start Daemon (Optional)",
];

const TIPS: [&str; 11] = [
    "Prerequisites:",
    "",
    "• Claude Max Subscription",
    "• Python 3.10+",
    "• Git & GitHub Account",
    "",
    "Time to complete:",
    "",
    "Approximately 10-15 minutes",
    "",
    "Full guide in article",
];

const BADGE_X: f32 = 180.0;
const BADGE_RADIUS: f32 = 32.0;

fn step_y(idx: usize) -> f32 {
    200.0 + idx as f32 * 100.0
}

pub fn draw(canvas: &mut Canvas, ctx: &mut SceneContext<'_>) -> Result<()> {
    backdrop(canvas, 0x0C1220, 0x060A18)?;

    ctx.centered(
        canvas,
        "Quick Start Guide",
        Point::new(canvas.width() as f32 / 2.0, 80.0),
        TextStyle::bold(60.0, Color::WHITE),
    );

    // connectors between consecutive badges
    for (upper, lower) in (0..STEPS.len()).map(step_y).tuple_windows() {
        canvas.stroke_line(
            Point::new(BADGE_X, upper + BADGE_RADIUS + 6.0),
            Point::new(BADGE_X, lower - BADGE_RADIUS - 6.0),
            Color::from_rgb(0x5078B4),
            2.0,
        );
    }

    let step_style = TextStyle::regular(28.0, Color::from_rgb(0xC8DCFF));
    for (idx, step) in STEPS.iter().enumerate() {
        let y = step_y(idx);
        let badge = Rect::around(Point::new(BADGE_X, y), BADGE_RADIUS);
        canvas.fill_ellipse(badge, Color::from_rgb(0x0096FF));
        canvas.stroke_ellipse(badge, Color::from_rgb(0x64C8FF), 3.0);

        ctx.centered(
            canvas,
            &(idx + 1).to_string(),
            Point::new(BADGE_X, y),
            TextStyle::bold(28.0, Color::WHITE),
        );
        ctx.label(
            canvas,
            step,
            Anchor::LeftMiddle,
            Point::new(240.0, y),
            step_style,
        );
    }

    let panel = Rect::new(1100.0, 200.0, 700.0, 700.0);
    canvas.fill_rect(panel, Color::from_rgba(0x0064C8, 0.08));
    canvas.stroke_rect(panel, Color::from_rgb(0x0096FF), 3.0);
    ctx.column(
        canvas,
        &TIPS,
        Point::new(1160.0, 270.0),
        50.0,
        TextStyle::regular(28.0, Color::from_rgb(0xB4C8E6)),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::tests::{embedded_fonts, render_scene};

    #[test]
    fn badges_and_connectors_are_drawn() {
        let fonts = embedded_fonts();
        let canvas = render_scene(draw, &fonts, 0);

        // left edge of the first badge, clear of its number
        let badge = canvas.rgb_at(BADGE_X as u32 - 24, step_y(0) as u32).unwrap();
        assert_eq!(badge, [0x00, 0x96, 0xFF]);

        // halfway between the first two badges
        let gap = ((step_y(0) + step_y(1)) / 2.0) as u32;
        let connector = canvas.rgb_at(BADGE_X as u32, gap).unwrap();
        assert!(connector[2] > 120, "got {connector:?}");
    }
}
