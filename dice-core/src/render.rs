//! Die face compositing.
//!
//! Loads the base image for a die, draws the roll numeral centered on it,
//! and returns the composed buffer. Percentile rolls are drawn as two d10
//! faces side by side, tens on the left, ones on the right.
//!
//! Rendering is stateless: the same roll, assets, and font availability
//! produce pixel-identical output.

use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use image::imageops;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::assets;
use crate::dice::{DieType, Roll};

pub use image::{Rgba, RgbaImage};

/// Pixel height of the roll numeral.
const NUMERAL_SCALE: f32 = 30.0;

/// Fill color of the roll numeral.
const NUMERAL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Horizontal gap between the two faces of a percentile roll.
pub const PERCENTILE_GAP: u32 = 24;

/// Error type for die face rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing die face image for {die} at {path}: {source}")]
    AssetMissing {
        die: DieType,
        path: PathBuf,
        source: io::Error,
    },
    #[error("Unreadable die face image at {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Numeral font: a TrueType face when one is available, the built-in
/// bitmap glyphs otherwise.
pub enum DieFont {
    TrueType(FontArc),
    Builtin,
}

impl DieFont {
    /// Load the preferred font, substituting the built-in glyphs when the
    /// file is absent or unparsable. Never fails.
    pub fn load(path: &Path) -> DieFont {
        match std::fs::read(path) {
            Ok(bytes) => match FontArc::try_from_vec(bytes) {
                Ok(font) => DieFont::TrueType(font),
                Err(err) => {
                    warn!("font {} is not a usable face ({err}), using built-in glyphs", path.display());
                    DieFont::Builtin
                }
            },
            Err(err) => {
                warn!("font {} unavailable ({err}), using built-in glyphs", path.display());
                DieFont::Builtin
            }
        }
    }

    fn draw_numeral(&self, face: &mut RgbaImage, text: &str) {
        match self {
            DieFont::TrueType(font) => draw_truetype(face, font, text),
            DieFont::Builtin => draw_builtin(face, text),
        }
    }
}

/// Composes die face images for display.
pub struct Renderer {
    assets_dir: PathBuf,
    font: DieFont,
}

impl Renderer {
    pub fn new(assets_dir: PathBuf, font: DieFont) -> Renderer {
        Renderer { assets_dir, font }
    }

    /// Renderer over the default asset and font locations, honoring the
    /// environment overrides.
    pub fn from_env() -> Renderer {
        Renderer::new(assets::assets_dir(), DieFont::load(&assets::font_path()))
    }

    /// Compose the display image for a roll.
    pub fn render(&self, roll: &Roll) -> Result<RgbaImage, RenderError> {
        debug!(die = %roll.die, value = roll.value, "rendering roll");
        match roll.die {
            DieType::D100 => self.render_percentile(roll),
            _ => {
                let mut face = self.load_face(roll.die)?;
                self.font.draw_numeral(&mut face, &roll.value.to_string());
                Ok(face)
            }
        }
    }

    /// A percentile roll shows two d10 faces: tens on the left, ones on
    /// the right, composed into one buffer.
    fn render_percentile(&self, roll: &Roll) -> Result<RgbaImage, RenderError> {
        let mut tens = self.load_face(DieType::D100)?;
        let mut ones = tens.clone();
        self.font
            .draw_numeral(&mut tens, &roll.tens_component().to_string());
        self.font
            .draw_numeral(&mut ones, &roll.ones_component().to_string());

        let (width, height) = tens.dimensions();
        let mut canvas = RgbaImage::new(width * 2 + PERCENTILE_GAP, height);
        imageops::overlay(&mut canvas, &tens, 0, 0);
        imageops::overlay(&mut canvas, &ones, (width + PERCENTILE_GAP) as i64, 0);
        Ok(canvas)
    }

    fn load_face(&self, die: DieType) -> Result<RgbaImage, RenderError> {
        let path = assets::face_path(&self.assets_dir, die);
        let bytes = std::fs::read(&path).map_err(|source| RenderError::AssetMissing {
            die,
            path: path.clone(),
            source,
        })?;
        let face = image::load_from_memory(&bytes)
            .map_err(|source| RenderError::Decode { path, source })?;
        Ok(face.to_rgba8())
    }
}

/// Draw `text` centered on the face using a TrueType font, positioning by
/// the measured bounding box of the laid-out glyph run.
fn draw_truetype(face: &mut RgbaImage, font: &FontArc, text: &str) {
    let scaled = font.as_scaled(PxScale::from(NUMERAL_SCALE));

    // Lay the run out from the origin, then shift the whole run so its
    // bounding box lands centered on the face.
    let mut glyphs: Vec<Glyph> = Vec::new();
    let mut caret = 0.0f32;
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = point(caret, scaled.ascent());
        caret += scaled.h_advance(glyph.id);
        glyphs.push(glyph);
    }

    let outlined: Vec<_> = glyphs
        .into_iter()
        .filter_map(|glyph| font.outline_glyph(glyph))
        .collect();
    if outlined.is_empty() {
        return;
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for glyph in &outlined {
        let bounds = glyph.px_bounds();
        min_x = min_x.min(bounds.min.x);
        min_y = min_y.min(bounds.min.y);
        max_x = max_x.max(bounds.max.x);
        max_y = max_y.max(bounds.max.y);
    }

    let offset_x = (face.width() as f32 - (max_x - min_x)) / 2.0 - min_x;
    let offset_y = (face.height() as f32 - (max_y - min_y)) / 2.0 - min_y;

    for glyph in outlined {
        let bounds = glyph.px_bounds();
        glyph.draw(|x, y, coverage| {
            let px = (bounds.min.x + x as f32 + offset_x).round() as i64;
            let py = (bounds.min.y + y as f32 + offset_y).round() as i64;
            if px >= 0 && py >= 0 && (px as u32) < face.width() && (py as u32) < face.height() {
                blend(face.get_pixel_mut(px as u32, py as u32), coverage);
            }
        });
    }
}

/// Alpha-blend the numeral color onto a pixel at the given coverage.
fn blend(pixel: &mut Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    for channel in 0..3 {
        let drawn = NUMERAL_COLOR[channel] as f32;
        let base = pixel[channel] as f32;
        pixel[channel] = (drawn * alpha + base * (1.0 - alpha)).round() as u8;
    }
    pixel[3] = pixel[3].max((alpha * 255.0).round() as u8);
}

// Built-in glyphs: classic 5x7 digit bitmaps, scaled up to roughly the
// TrueType numeral height. Only digits are needed on a die face.

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const GLYPH_UNIT: u32 = 4;

#[rustfmt::skip]
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

/// Draw `text` centered on the face using the built-in bitmap digits.
fn draw_builtin(face: &mut RgbaImage, text: &str) {
    let digits: Vec<u32> = text.chars().filter_map(|ch| ch.to_digit(10)).collect();
    if digits.is_empty() {
        return;
    }

    let count = digits.len() as u32;
    let text_width = count * GLYPH_COLS * GLYPH_UNIT + (count - 1) * GLYPH_UNIT;
    let text_height = GLYPH_ROWS * GLYPH_UNIT;
    let origin_x = face.width().saturating_sub(text_width) / 2;
    let origin_y = face.height().saturating_sub(text_height) / 2;

    let mut pen_x = origin_x;
    for digit in digits {
        let rows = &DIGIT_GLYPHS[digit as usize];
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                    fill_cell(
                        face,
                        pen_x + col * GLYPH_UNIT,
                        origin_y + row as u32 * GLYPH_UNIT,
                    );
                }
            }
        }
        pen_x += (GLYPH_COLS + 1) * GLYPH_UNIT;
    }
}

fn fill_cell(face: &mut RgbaImage, x: u32, y: u32) {
    for py in y..(y + GLYPH_UNIT).min(face.height()) {
        for px in x..(x + GLYPH_UNIT).min(face.width()) {
            *face.get_pixel_mut(px, py) = NUMERAL_COLOR;
        }
    }
}
