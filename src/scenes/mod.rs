use promo_art_common::{ARTWORK_FILES, Canvas, Color, FontBook, Point, Result, TextStyle};
use rand::RngCore;

mod conclusion;
mod cover;
mod quickstart;
mod scenarios;
mod workflow;

/// Everything a scene may draw with besides the canvas itself
pub struct SceneContext<'a> {
    pub fonts: &'a FontBook,
    pub rng: &'a mut dyn RngCore,
}

pub type Scene = fn(&mut Canvas, &mut SceneContext<'_>) -> Result<()>;

pub struct Artwork {
    pub file_name: &'static str,
    pub scene: Scene,
}

pub const ARTWORKS: [Artwork; 5] = [
    Artwork {
        file_name: ARTWORK_FILES[0],
        scene: cover::draw,
    },
    Artwork {
        file_name: ARTWORK_FILES[1],
        scene: workflow::draw,
    },
    Artwork {
        file_name: ARTWORK_FILES[2],
        scene: quickstart::draw,
    },
    Artwork {
        file_name: ARTWORK_FILES[3],
        scene: scenarios::draw,
    },
    Artwork {
        file_name: ARTWORK_FILES[4],
        scene: conclusion::draw,
    },
];

/// Where a label's `at` point sits relative to the text
#[derive(Clone, Copy)]
enum Anchor {
    /// horizontal and vertical middle
    Middle,
    /// left edge, vertical middle
    LeftMiddle,
}

/// Full-canvas vertical gradient every scene starts from
fn backdrop(canvas: &mut Canvas, top: u32, bottom: u32) -> Result<()> {
    canvas.fill_linear_gradient(
        canvas.bounds(),
        &[Color::from_rgb(top), Color::from_rgb(bottom)],
        90.0,
    )
}

impl SceneContext<'_> {
    fn label(&self, canvas: &mut Canvas, text: &str, anchor: Anchor, at: Point, style: TextStyle) {
        let size = self.fonts.measure(text, &style);
        let baseline = at.y - size.height / 2.0 + self.fonts.ascent(&style);
        let x = match anchor {
            Anchor::Middle => at.x - size.width / 2.0,
            Anchor::LeftMiddle => at.x,
        };

        canvas.draw_text(self.fonts, text, Point::new(x, baseline), &style);
    }

    fn centered(&self, canvas: &mut Canvas, text: &str, at: Point, style: TextStyle) {
        self.label(canvas, text, Anchor::Middle, at, style);
    }

    /// Left-aligned column of lines, `spacing` pixels apart
    fn column(
        &self,
        canvas: &mut Canvas,
        lines: &[&str],
        origin: Point,
        spacing: f32,
        style: TextStyle,
    ) {
        for (idx, line) in lines.iter().enumerate() {
            let at = Point::new(origin.x, origin.y + idx as f32 * spacing);
            self.label(canvas, line, Anchor::LeftMiddle, at, style);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use promo_art_common::{FRAME_HEIGHT, FRAME_WIDTH, render};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    pub(crate) fn embedded_fonts() -> FontBook {
        FontBook::embedded().unwrap()
    }

    pub(crate) fn render_scene(scene: Scene, fonts: &FontBook, seed: u64) -> Canvas {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = SceneContext {
            fonts,
            rng: &mut rng,
        };

        render(FRAME_WIDTH, FRAME_HEIGHT, |canvas| scene(canvas, &mut ctx)).unwrap()
    }

    #[test]
    fn file_names_are_unique_jpegs() {
        let names: HashSet<_> = ARTWORKS.iter().map(|artwork| artwork.file_name).collect();
        assert_eq!(names.len(), ARTWORKS.len());
        assert!(names.iter().all(|name| name.ends_with(".jpg")));
    }

    #[test]
    fn artworks_follow_the_shared_file_list() {
        let names: Vec<_> = ARTWORKS.iter().map(|artwork| artwork.file_name).collect();
        assert_eq!(names, ARTWORK_FILES);
    }

    #[test]
    fn every_scene_covers_the_canvas() {
        let fonts = embedded_fonts();

        for artwork in &ARTWORKS {
            let canvas = render_scene(artwork.scene, &fonts, 42);
            // the backdrop is dark navy, never pure black, so any untouched
            // corner would read as zero
            for (x, y) in [(0, 0), (FRAME_WIDTH - 1, 0), (0, FRAME_HEIGHT - 1)] {
                let pixel = canvas.rgb_at(x, y).unwrap();
                assert_ne!(pixel, [0, 0, 0], "{} corner ({x}, {y})", artwork.file_name);
            }
        }
    }

    #[test]
    fn middle_anchor_centers_on_the_point() {
        let fonts = embedded_fonts();
        let mut rng = StdRng::seed_from_u64(0);
        let ctx = SceneContext {
            fonts: &fonts,
            rng: &mut rng,
        };

        let mut canvas = Canvas::new(400, 200).unwrap();
        let style = TextStyle::regular(40.0, Color::WHITE);
        ctx.centered(&mut canvas, "HOH", Point::new(200.0, 100.0), style);

        let lit: Vec<(u32, u32)> = (0..200)
            .flat_map(|y| (0..400).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.rgb_at(x, y).unwrap()[0] > 127)
            .collect();
        let min_x = lit.iter().map(|&(x, _)| x).min().unwrap();
        let max_x = lit.iter().map(|&(x, _)| x).max().unwrap();
        let min_y = lit.iter().map(|&(_, y)| y).min().unwrap();
        let max_y = lit.iter().map(|&(_, y)| y).max().unwrap();

        assert!(((min_x + max_x) as f32 / 2.0 - 200.0).abs() <= 4.0);
        // the line box is centered, capitals sit slightly above its middle
        assert!(min_y < 100 && max_y > 100);
    }
}
