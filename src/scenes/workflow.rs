use super::{SceneContext, backdrop};
use promo_art_common::{Canvas, Color, Point, Rect, Result, TextStyle};

const ROW: f32 = 350.0;
const BOX_WIDTH: f32 = 320.0;
const BOX_HEIGHT: f32 = 200.0;

struct Agent {
    x: f32,
    name: &'static str,
    color: u32,
    duty: &'static str,
}

const AGENTS: [Agent; 3] = [
    Agent {
        x: 320.0,
        name: "PLANNER",
        color: 0xFF9632,
        duty: "分析任务 | 制定计划",
    },
    Agent {
        x: 960.0,
        name: "WORKER",
        color: 0x32C896,
        duty: "执行任务 | 编写代码",
    },
    Agent {
        x: 1600.0,
        name: "EVALUATOR",
        color: 0x6496FF,
        duty: "验证结果 | 质量检查",
    },
];

pub fn draw(canvas: &mut Canvas, ctx: &mut SceneContext<'_>) -> Result<()> {
    backdrop(canvas, 0x0F1423, 0x080C1C)?;

    let center = canvas.width() as f32 / 2.0;
    ctx.centered(
        canvas,
        "Three-Agent Workflow",
        Point::new(center, 80.0),
        TextStyle::bold(60.0, Color::WHITE),
    );

    let link = Color::from_rgb(0x6496C8);
    for (from, to) in [(480.0, 780.0), (1140.0, 1440.0)] {
        canvas.stroke_line(Point::new(from, ROW), Point::new(to, ROW), link, 4.0);
        canvas.fill_polygon(
            &[
                Point::new(to, ROW),
                Point::new(to - 20.0, ROW - 10.0),
                Point::new(to - 20.0, ROW + 10.0),
            ],
            link,
        );
    }

    for agent in &AGENTS {
        let color = Color::from_rgb(agent.color);
        let frame = Rect::new(
            agent.x - BOX_WIDTH / 2.0,
            ROW - BOX_HEIGHT / 2.0,
            BOX_WIDTH,
            BOX_HEIGHT,
        );

        // glow, fading with distance from the frame
        for offset in [20.0, 15.0, 10.0, 5.0] {
            let alpha = 50.0 * (1.0 - offset / 20.0) / 255.0;
            canvas.stroke_rect(frame.inflate(offset), color.with_alpha(alpha), 2.0);
        }

        canvas.fill_rect(frame, color.with_alpha(0.15));
        canvas.stroke_rect(frame, color, 4.0);

        ctx.centered(
            canvas,
            agent.name,
            Point::new(agent.x, ROW - 20.0),
            TextStyle::bold(36.0, color),
        );
        ctx.centered(
            canvas,
            agent.duty,
            Point::new(agent.x, ROW + 35.0),
            TextStyle::regular(24.0, Color::WHITE.with_alpha(0.8)),
        );
    }

    ctx.centered(
        canvas,
        "协作流程：规划 → 执行 → 验证",
        Point::new(center, 550.0),
        TextStyle::regular(36.0, Color::from_rgb(0x96B4DC)),
    );
    ctx.centered(
        canvas,
        "确保代码质量和任务完整性",
        Point::new(center, 620.0),
        TextStyle::regular(36.0, Color::from_rgb(0x7896B4)),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::tests::{embedded_fonts, render_scene};

    #[test]
    fn arrowheads_point_at_the_next_agent() {
        let fonts = embedded_fonts();
        let canvas = render_scene(draw, &fonts, 0);

        // inside the arrowhead, just behind its tip, and above it
        let [r, g, b] = canvas.rgb_at(770, ROW as u32).unwrap();
        assert!(r > 80 && g > 120 && b > 160, "got {:?}", [r, g, b]);
        let above = canvas.rgb_at(770, ROW as u32 - 14).unwrap();
        assert!(above.iter().all(|&channel| channel < 60), "got {above:?}");
    }
}
