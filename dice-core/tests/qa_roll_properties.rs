//! QA tests for the observable roll contract.
//!
//! These cover the end-to-end behavior a user can observe:
//! - roll results stay in range and cover every face
//! - percentile rolls split into faces that recombine to the value
//! - switching die types never reuses a stale side count
//! - the render pipeline is deterministic and reports missing assets

use dice_core::dice::{DieType, Roll};
use dice_core::render::{DieFont, RenderError, Renderer, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tempfile::TempDir;

const FACE_SIZE: u32 = 96;

fn write_faces(dir: &Path) {
    let face = RgbaImage::from_pixel(FACE_SIZE, FACE_SIZE, Rgba([230, 230, 230, 255]));
    for sides in [4u32, 6, 8, 10, 12, 20] {
        face.save(dir.join(format!("D{sides}.png"))).expect("write face");
    }
}

fn renderer_for(dir: &Path) -> Renderer {
    Renderer::new(dir.to_path_buf(), DieFont::load(&dir.join("missing.ttf")))
}

#[test]
fn qa_rolls_stay_in_range() {
    for die in DieType::ALL {
        for _ in 0..10_000 {
            let roll = Roll::new(die);
            assert!(
                roll.value >= 1 && roll.value <= die.sides(),
                "{die}: rolled {} outside [1, {}]",
                roll.value,
                die.sides()
            );
        }
    }
}

#[test]
fn qa_rolls_cover_every_face() {
    let mut rng = StdRng::seed_from_u64(42);
    for die in [DieType::D4, DieType::D6, DieType::D8, DieType::D10, DieType::D12, DieType::D20] {
        let mut seen = vec![false; die.sides() as usize + 1];
        for _ in 0..10_000 {
            seen[Roll::with_rng(die, &mut rng).value as usize] = true;
        }
        for value in 1..=die.sides() as usize {
            assert!(seen[value], "{die}: face {value} has zero observed probability");
        }
    }
}

#[test]
fn qa_percentile_faces_recombine() {
    for value in 1..=100 {
        let roll = Roll {
            die: DieType::D100,
            value,
        };
        let expected = if value == 100 { 90 } else { value };
        assert_eq!(roll.tens_component() + roll.ones_component(), expected);
    }
}

#[test]
fn qa_switching_die_uses_new_side_count() {
    // Select d20, roll, then select d6 and roll again: the second batch
    // must honor the new side count.
    let mut rng = StdRng::seed_from_u64(7);
    let first = Roll::with_rng(DieType::D20, &mut rng);
    assert!(first.value >= 1 && first.value <= 20);

    for _ in 0..1_000 {
        let second = Roll::with_rng(DieType::D6, &mut rng);
        assert!(
            second.value >= 1 && second.value <= 6,
            "stale side count: rolled {} on a d6",
            second.value
        );
    }
}

#[test]
fn qa_full_pipeline_renders_every_die() {
    let dir = TempDir::new().unwrap();
    write_faces(dir.path());
    let renderer = renderer_for(dir.path());

    let mut rng = StdRng::seed_from_u64(99);
    for die in DieType::ALL {
        let roll = Roll::with_rng(die, &mut rng);
        let composed = renderer.render(&roll).expect("render failed");
        match die {
            DieType::D100 => {
                assert_eq!(composed.height(), FACE_SIZE);
                assert!(composed.width() > FACE_SIZE * 2);
            }
            _ => assert_eq!(composed.dimensions(), (FACE_SIZE, FACE_SIZE)),
        }
    }
}

#[test]
fn qa_render_is_pixel_identical_across_calls() {
    let dir = TempDir::new().unwrap();
    write_faces(dir.path());
    let renderer = renderer_for(dir.path());

    for value in [1, 55, 100] {
        let roll = Roll {
            die: DieType::D100,
            value,
        };
        let first = renderer.render(&roll).unwrap();
        let second = renderer.render(&roll).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }
}

#[test]
fn qa_missing_asset_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    // No faces written at all.
    let renderer = renderer_for(dir.path());

    for die in DieType::ALL {
        let roll = Roll { die, value: 1 };
        match renderer.render(&roll) {
            Err(RenderError::AssetMissing { die: missing, .. }) => {
                assert_eq!(missing, die);
            }
            other => panic!("{die}: expected AssetMissing, got {other:?}"),
        }
    }
}
