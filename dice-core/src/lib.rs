//! Die model and face compositing for the dice roller.
//!
//! This crate provides:
//! - The closed set of supported die types and uniform single-die rolls
//! - Percentile (d100) tens/ones splitting
//! - Die face image compositing with the roll numeral drawn centered
//!
//! # Quick Start
//!
//! ```ignore
//! use dice_core::{DieType, Renderer, Roll};
//!
//! let renderer = Renderer::from_env();
//! let roll = Roll::new(DieType::D20);
//! let face = renderer.render(&roll)?;
//! ```

pub mod assets;
pub mod dice;
pub mod render;

// Primary public API
pub use dice::{roll, roll_sides, DiceError, DieType, Roll};
pub use render::{DieFont, RenderError, Renderer};
