use super::{SceneContext, backdrop};
use promo_art_common::{Canvas, Color, Point, Rect, Result, TextStyle};

const GREAT_FOR: [&str; 12] = [
    "Side Projects",
    "• Ideas while sleeping",
    "• Nightly code generation",
    "",
    "Technical Debt",
    "• Add tests",
    "• Refactor code",
    "• Update docs",
    "",
    "Batch Tasks",
    "• License headers",
    "• API migrations",
];

const NOT_FOR: [&str; 11] = [
    "Enterprise Projects",
    "• Complex workflows",
    "• Multi-team collab",
    "",
    "High Interaction",
    "• Frequent changes",
    "• Real-time feedback",
    "",
    "Custom Logic",
    "• Business-specific",
    "• Domain knowledge",
];

const LINE_SPACING: f32 = 45.0;

pub fn draw(canvas: &mut Canvas, ctx: &mut SceneContext<'_>) -> Result<()> {
    backdrop(canvas, 0x0A101E, 0x050A19)?;

    let center = canvas.width() as f32 / 2.0;
    ctx.centered(
        canvas,
        "When to Use Sleepless Agent",
        Point::new(center, 60.0),
        TextStyle::bold(60.0, Color::WHITE),
    );

    ctx.centered(
        canvas,
        "✓ Great For",
        Point::new(480.0, 180.0),
        TextStyle::bold(40.0, Color::from_rgb(0x64FF96)),
    );
    ctx.column(
        canvas,
        &GREAT_FOR,
        Point::new(200.0, 260.0),
        LINE_SPACING,
        TextStyle::regular(26.0, Color::from_rgb(0xB4E6C8)),
    );

    ctx.centered(
        canvas,
        "✗ Not For",
        Point::new(1440.0, 180.0),
        TextStyle::bold(40.0, Color::from_rgb(0xFF6464)),
    );
    ctx.column(
        canvas,
        &NOT_FOR,
        Point::new(1100.0, 260.0),
        LINE_SPACING,
        TextStyle::regular(26.0, Color::from_rgb(0xE6B4B4)),
    );

    let summary = Rect::new(200.0, 850.0, 1520.0, 150.0);
    canvas.fill_rect(summary, Color::from_rgba(0x005096, 0.12));
    canvas.stroke_rect(summary, Color::from_rgb(0x0078C8), 2.0);
    ctx.centered(
        canvas,
        "Best for: Well-defined tasks that can run independently",
        summary.center(),
        TextStyle::regular(28.0, Color::from_rgb(0x96C8FF)),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_end_above_the_summary() {
        let longest = GREAT_FOR.len().max(NOT_FOR.len());
        let last_line = 260.0 + (longest - 1) as f32 * LINE_SPACING;
        assert!(last_line + LINE_SPACING < 850.0);
    }
}
