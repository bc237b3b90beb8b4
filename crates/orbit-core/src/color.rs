//! Palette colors and the vertical gradient used to shade point clouds.

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// `#rrggbb`, suitable for canvas fill/stroke styles.
    pub fn css(self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    /// Per-channel multiply, used for layer tints.
    pub fn tinted(self, tint: Rgb) -> Rgb {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16 + 127) / 255) as u8;
        Rgb::new(mul(self.r, tint.r), mul(self.g, tint.g), mul(self.b, tint.b))
    }

    /// Linear blend with each channel rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb::from_hex(hex)
    }
}

pub fn palette_from_hex(hexes: &[u32]) -> Vec<Rgb> {
    hexes.iter().copied().map(Rgb::from_hex).collect()
}

/// Map a normalized vertical position in \[0, 1\] onto the palette.
///
/// Positions between two entries blend linearly; 1.0 (and anything the index
/// math lands on the last entry) returns the last color unchanged. A single
/// entry palette always returns that entry.
pub fn blend_palette(normalized_y: f32, palette: &[Rgb]) -> Rgb {
    let Some(last) = palette.len().checked_sub(1) else {
        return Rgb::WHITE;
    };
    let position = normalized_y * last as f32;
    let index = (position.floor().max(0.0) as usize).min(last);
    if index >= last {
        return palette[index];
    }
    let lower = position.floor() as usize;
    let upper = (position.ceil() as usize).min(last);
    let blend = position - lower as f32;
    palette[lower].lerp(palette[upper], blend)
}

/// Observed screen-space Y extent of one projected frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YRange {
    pub min: f32,
    pub max: f32,
}

impl YRange {
    pub fn from_values(values: impl IntoIterator<Item = f32>) -> Option<Self> {
        values.into_iter().fold(None, |acc, y| match acc {
            None => Some(YRange { min: y, max: y }),
            Some(r) => Some(YRange {
                min: r.min.min(y),
                max: r.max.max(y),
            }),
        })
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Position of `y` within the range; a flat range divides by 1 instead of 0.
    pub fn normalize(&self, y: f32) -> f32 {
        let span = self.span();
        let span = if span == 0.0 { 1.0 } else { span };
        (y - self.min) / span
    }
}
