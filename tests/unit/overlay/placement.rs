use super::*;
use crate::transform::affine::rotated_bounds;

#[test]
fn origin_keeps_canvas_inside_background() {
    let mut rng = RandomSource::from_seed(11);
    let bg = Dims::new(800, 600);
    let canvas = Dims::new(185, 158);
    for _ in 0..500 {
        let p = sample_placement(canvas, bg, &mut rng).unwrap();
        assert!(p.x <= bg.width - canvas.width);
        assert!(p.y <= bg.height - canvas.height);
    }
}

#[test]
fn exact_fit_has_single_origin() {
    let mut rng = RandomSource::from_seed(5);
    let p = sample_placement(Dims::new(64, 48), Dims::new(64, 48), &mut rng).unwrap();
    assert_eq!(p, Placement::new(0, 0));
}

#[test]
fn rotated_full_size_card_is_oversized() {
    let bg = Dims::new(100, 100);
    let canvas = rotated_bounds(Dims::new(100, 100), 10.0);
    assert!(canvas.width > 100 && canvas.height > 100);

    let mut rng = RandomSource::from_seed(5);
    let err = sample_placement(canvas, bg, &mut rng).unwrap_err();
    match err {
        AugmentError::OversizedOverlay { canvas: c, background } => {
            assert_eq!(c, canvas);
            assert_eq!(background, bg);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversize_on_one_axis_is_rejected() {
    let mut rng = RandomSource::from_seed(5);
    assert!(sample_placement(Dims::new(10, 101), Dims::new(500, 100), &mut rng).is_err());
    assert!(sample_placement(Dims::new(501, 10), Dims::new(500, 100), &mut rng).is_err());
}

#[test]
fn draws_follow_seeded_sequence_x_then_y() {
    let bg = Dims::new(300, 200);
    let canvas = Dims::new(50, 40);
    let mut a = RandomSource::from_seed(99);
    let p = sample_placement(canvas, bg, &mut a).unwrap();

    let mut b = RandomSource::from_seed(99);
    let x = b.offset(250);
    let y = b.offset(160);
    assert_eq!(p, Placement::new(x, y));
}
