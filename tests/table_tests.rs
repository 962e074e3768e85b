// Host-side tests for checkpoint interpolation.

use coverflow_core::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn clamps_to_first_checkpoint_below_span() {
    let table = InterpolationTable::coverflow();
    let first = COVERFLOW_CHECKPOINTS[0].style;
    for diff in [-2.0, -2.0001, -2.5, -3.0, -100.0, f64::NEG_INFINITY] {
        assert_eq!(table.style_at(diff), first, "diff {}", diff);
    }
}

#[test]
fn clamps_to_last_checkpoint_above_span() {
    let table = InterpolationTable::coverflow();
    let last = COVERFLOW_CHECKPOINTS[4].style;
    for diff in [2.0, 2.0001, 2.5, 3.0, 100.0, f64::INFINITY] {
        assert_eq!(table.style_at(diff), last, "diff {}", diff);
    }
}

#[test]
fn passes_through_every_checkpoint_exactly() {
    let table = InterpolationTable::coverflow();
    for cp in table.checkpoints() {
        assert_eq!(table.style_at(cp.offset), cp.style, "offset {}", cp.offset);
    }
}

#[test]
fn interpolates_each_field_linearly() {
    let table = InterpolationTable::coverflow();
    let s = table.style_at(0.5);
    assert!(approx(s.x, 80.0));
    assert!(approx(s.scale, 1.05));
    assert!(approx(s.z, 50.0));
    assert!(approx(s.rotation_deg, -7.5));
    assert!(approx(s.opacity, 0.85));

    let s = table.style_at(-1.25);
    assert!(approx(s.x, -190.0));
    assert!(approx(s.scale, 0.85));
    assert!(approx(s.z, -25.0));
    assert!(approx(s.rotation_deg, 17.5));
    assert!(approx(s.opacity, 0.625));
}

#[test]
fn table_is_mirror_symmetric() {
    let table = InterpolationTable::coverflow();
    for i in 0..=40 {
        let d = i as f64 * 0.05;
        let left = table.style_at(-d);
        let right = table.style_at(d);
        assert!(approx(left.x, -right.x), "x at {}", d);
        assert!(approx(left.rotation_deg, -right.rotation_deg), "rot at {}", d);
        assert!(approx(left.scale, right.scale), "scale at {}", d);
        assert!(approx(left.z, right.z), "z at {}", d);
        assert!(approx(left.opacity, right.opacity), "opacity at {}", d);
    }
}

#[test]
fn x_is_non_decreasing_across_span() {
    let table = InterpolationTable::coverflow();
    let mut prev = table.style_at(-2.0).x;
    for i in 1..=400 {
        let diff = -2.0 + i as f64 * 0.01;
        let x = table.style_at(diff).x;
        assert!(x >= prev - EPS, "x dropped from {} to {} at {}", prev, x, diff);
        prev = x;
    }
}

#[test]
fn nan_offset_falls_back_to_first_checkpoint() {
    let table = InterpolationTable::coverflow();
    assert_eq!(table.style_at(f64::NAN), COVERFLOW_CHECKPOINTS[0].style);
}

#[test]
fn custom_table_must_be_strictly_increasing() {
    let mut cps = COVERFLOW_CHECKPOINTS.to_vec();
    cps.swap(1, 2);
    assert!(matches!(
        InterpolationTable::new(cps),
        Err(CarouselError::InvalidTable(_))
    ));

    let mut dup = COVERFLOW_CHECKPOINTS.to_vec();
    dup[3].offset = dup[2].offset;
    assert!(InterpolationTable::new(dup).is_err());

    assert!(InterpolationTable::new(vec![COVERFLOW_CHECKPOINTS[0]]).is_err());
}

#[test]
fn custom_two_point_table_interpolates() {
    let table = InterpolationTable::new(vec![
        COVERFLOW_CHECKPOINTS[2],
        COVERFLOW_CHECKPOINTS[3],
    ])
    .unwrap();
    assert_eq!(table.span(), (0.0, 1.0));
    assert!(approx(table.style_at(0.25).x, 40.0));
    assert_eq!(table.style_at(-1.0), COVERFLOW_CHECKPOINTS[2].style);
}

#[test]
fn transform_css_formats_units() {
    let center = InterpolationTable::coverflow().style_at(0.0);
    assert_eq!(
        center.transform_css(),
        "translateX(0%) scale(1.2) translateZ(100px) rotateY(0deg)"
    );
    let left = COVERFLOW_CHECKPOINTS[0].style;
    assert_eq!(
        left.transform_css(),
        "translateX(-280%) scale(0.7) translateZ(-100px) rotateY(25deg)"
    );
}
