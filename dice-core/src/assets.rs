//! Asset and font path resolution.
//!
//! Die faces live under one directory as `D{sides}.png`; the percentile
//! die has no face of its own and is drawn with two d10 faces. Both the
//! directory and the numeral font path honor environment overrides.

use std::env;
use std::path::{Path, PathBuf};

use crate::dice::DieType;

/// Environment override for the die face directory.
pub const ASSETS_ENV: &str = "DICEROLLER_ASSETS";
/// Environment override for the numeral font file.
pub const FONT_ENV: &str = "DICEROLLER_FONT";

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_FONT_PATH: &str = "assets/fonts/FiraCode-Regular.ttf";

/// Directory holding the die face images.
pub fn assets_dir() -> PathBuf {
    env::var_os(ASSETS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

/// Preferred TrueType font for the roll numeral. The file is optional;
/// rendering falls back to the built-in glyphs when it is absent.
pub fn font_path() -> PathBuf {
    env::var_os(FONT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH))
}

/// Die face image file for a die type.
pub fn face_path(dir: &Path, die: DieType) -> PathBuf {
    let sides = match die {
        DieType::D100 => 10,
        _ => die.sides(),
    };
    dir.join(format!("D{sides}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_paths() {
        let dir = Path::new("assets");
        assert_eq!(face_path(dir, DieType::D6), dir.join("D6.png"));
        assert_eq!(face_path(dir, DieType::D20), dir.join("D20.png"));
        // The percentile die reuses the d10 face.
        assert_eq!(face_path(dir, DieType::D100), dir.join("D10.png"));
    }
}
