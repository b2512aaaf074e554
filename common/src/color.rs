/// Straight (non-premultiplied) color with every channel in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Self = Self::from_rgb(0xFFFFFF);
    pub const BLACK: Self = Self::from_rgb(0x000000);
    pub const TRANSPARENT: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Unpack `0xRRGGBB`; anything above bit 23 is ignored
    pub const fn from_rgb(packed: u32) -> Self {
        Self {
            red: ((packed >> 16) & 0xFF) as f32 / 255.0,
            green: ((packed >> 8) & 0xFF) as f32 / 255.0,
            blue: (packed & 0xFF) as f32 / 255.0,
            alpha: 1.0,
        }
    }

    pub fn from_rgba(packed: u32, alpha: f32) -> Self {
        Self::from_rgb(packed).with_alpha(alpha)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        // NaN fails both comparisons inside clamp, so map it explicitly
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { alpha, ..self }
    }

    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.alpha <= 0.0
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        )
    }
}

#[inline]
fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
