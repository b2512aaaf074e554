use crate::{Canvas, Color, Error, Point, Result, Size};
use std::{borrow::Cow, fs, path::Path};
use tiny_skia::PathBuilder;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

// only outline fonts, colour bitmap emoji fonts have nothing to fill
const FALLBACK_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

// shipped with the crate, used when no system face is found
static EMBEDDED_REGULAR: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static EMBEDDED_BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(font_size: f32, color: Color) -> Self {
        Self {
            font_size,
            weight: FontWeight::Regular,
            color,
        }
    }

    pub fn bold(font_size: f32, color: Color) -> Self {
        Self {
            font_size,
            weight: FontWeight::Bold,
            color,
        }
    }
}

struct FontFile {
    name: String,
    data: Cow<'static, [u8]>,
    index: u32,
}

impl FontFile {
    fn from_bytes(
        name: impl Into<String>,
        data: impl Into<Cow<'static, [u8]>>,
        index: u32,
    ) -> Result<Self> {
        let name = name.into();
        let data = data.into();
        Face::parse(&data, index).map_err(|err| Error::Font(format!("{name}: {err}")))?;

        Ok(Self { name, data, index })
    }

    fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|err| Error::Font(format!("{}: {err}", path.display())))?;
        Self::from_bytes(path.display().to_string(), data, 0)
    }

    fn probe(candidates: &[&str]) -> Option<Self> {
        candidates
            .iter()
            .map(Path::new)
            .filter(|path| path.is_file())
            .find_map(|path| match Self::open(path) {
                Ok(file) => Some(file),
                Err(error) => {
                    warn!(%error, "skipping unusable font");
                    None
                }
            })
    }

    fn face(&self) -> Option<Face<'_>> {
        // validated on load
        Face::parse(&self.data, self.index).ok()
    }
}

/// Regular and bold faces plus the fallback chain consulted per character
pub struct FontBook {
    regular: FontFile,
    bold: Option<FontFile>,
    fallbacks: Vec<FontFile>,
}

impl FontBook {
    /// Regular and bold DejaVu Sans compiled into the binary
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            regular: FontFile::from_bytes("embedded DejaVu Sans", EMBEDDED_REGULAR, 0)?,
            bold: Some(FontFile::from_bytes(
                "embedded DejaVu Sans Bold",
                EMBEDDED_BOLD,
                0,
            )?),
            fallbacks: Vec::new(),
        })
    }

    /// Look the faces up in the usual system font locations
    ///
    /// Missing system faces are replaced by the embedded ones.
    pub fn system() -> Result<Self> {
        let regular = match FontFile::probe(REGULAR_CANDIDATES) {
            Some(file) => file,
            None => {
                warn!("no regular system font found, using the embedded face");
                FontFile::from_bytes("embedded DejaVu Sans", EMBEDDED_REGULAR, 0)?
            }
        };
        let bold = match FontFile::probe(BOLD_CANDIDATES) {
            Some(file) => file,
            None => {
                warn!("no bold system font found, using the embedded face");
                FontFile::from_bytes("embedded DejaVu Sans Bold", EMBEDDED_BOLD, 0)?
            }
        };

        let fallbacks = FALLBACK_CANDIDATES
            .iter()
            .filter(|path| **path != regular.name)
            .filter_map(|path| FontFile::probe(&[*path]))
            .collect::<Vec<_>>();

        info!(
            regular = %regular.name,
            bold = %bold.name,
            fallbacks = fallbacks.len(),
            "loaded fonts"
        );

        Ok(Self {
            regular,
            bold: Some(bold),
            fallbacks,
        })
    }

    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            regular: FontFile::from_bytes("regular", regular, 0)?,
            bold: bold
                .map(|data| FontFile::from_bytes("bold", data, 0))
                .transpose()?,
            fallbacks: Vec::new(),
        })
    }

    /// Append a face consulted for characters the primary faces lack
    ///
    /// `index` selects the face inside a font collection.
    pub fn with_fallback(mut self, data: Vec<u8>, index: u32) -> Result<Self> {
        let name = format!("fallback #{}", self.fallbacks.len());
        self.fallbacks.push(FontFile::from_bytes(name, data, index)?);
        Ok(self)
    }

    fn primary(&self, weight: FontWeight) -> &FontFile {
        match (weight, &self.bold) {
            (FontWeight::Bold, Some(bold)) => bold,
            _ => &self.regular,
        }
    }

    /// Primary face for `weight`, then the regular face, then the fallbacks
    fn chain(&self, weight: FontWeight) -> Vec<Face<'_>> {
        let primary = self.primary(weight);
        let regular = (!std::ptr::eq(primary, &self.regular)).then_some(&self.regular);

        std::iter::once(primary)
            .chain(regular)
            .chain(&self.fallbacks)
            .filter_map(FontFile::face)
            .collect()
    }

    /// Rendered extent of `text`, without drawing it
    pub fn measure(&self, text: &str, style: &TextStyle) -> Size {
        let faces = self.chain(style.weight);
        let Some(primary) = faces.first() else {
            return Size::default();
        };

        let width = glyph_run(&faces, text, style.font_size)
            .map(|glyph| glyph.advance)
            .sum();
        let height = f32::from(primary.ascender()) - f32::from(primary.descender());

        Size {
            width,
            height: height * scale(primary, style.font_size),
        }
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(&self, style: &TextStyle) -> f32 {
        self.primary(style.weight)
            .face()
            .map(|face| f32::from(face.ascender()) * scale(&face, style.font_size))
            .unwrap_or(style.font_size)
    }
}

struct PlacedGlyph {
    face: usize,
    id: GlyphId,
    advance: f32,
}

/// First face in the chain that has a glyph wins, otherwise `.notdef` of the
/// primary face
fn glyph_run<'a>(
    faces: &'a [Face<'a>],
    text: &'a str,
    font_size: f32,
) -> impl Iterator<Item = PlacedGlyph> + 'a {
    text.chars().filter(|ch| !ch.is_control()).map(move |ch| {
        let (face, id) = faces
            .iter()
            .enumerate()
            .find_map(|(idx, face)| face.glyph_index(ch).map(|id| (idx, id)))
            .unwrap_or((0, GlyphId(0)));

        let advance = faces[face]
            .glyph_hor_advance(id)
            .map_or(0.0, |advance| f32::from(advance) * scale(&faces[face], font_size));

        PlacedGlyph { face, id, advance }
    })
}

#[inline]
fn scale(face: &Face<'_>, font_size: f32) -> f32 {
    font_size / f32::from(face.units_per_em().max(1))
}

impl Canvas {
    /// Draw `text` with its baseline starting at `origin`
    pub fn draw_text(&mut self, fonts: &FontBook, text: &str, origin: Point, style: &TextStyle) {
        if style.color.is_invisible() {
            return;
        }

        let faces = fonts.chain(style.weight);
        if faces.is_empty() {
            return;
        }

        let mut pen = origin.x;

        for glyph in glyph_run(&faces, text, style.font_size) {
            let face = &faces[glyph.face];
            let mut builder = GlyphPath::new(pen, origin.y, scale(face, style.font_size));

            if face.outline_glyph(glyph.id, &mut builder).is_some() {
                if let Some(path) = builder.builder.finish() {
                    self.fill(&path, style.color);
                }
            }

            pen += glyph.advance;
        }
    }
}

/// Maps font units (y-up) onto canvas pixels (y-down) around a pen position
struct GlyphPath {
    builder: PathBuilder,
    x: f32,
    y: f32,
    scale: f32,
}

impl GlyphPath {
    fn new(x: f32, y: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            x,
            y,
            scale,
        }
    }

    #[inline]
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.y - y * self.scale)
    }
}

impl OutlineBuilder for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
