use super::*;
use crate::foundation::core::Vec2;

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([(x * 10) as u8, (y * 10) as u8, 77, 255]))
}

#[test]
fn resize_to_same_dims_is_exact_copy() {
    let src = gradient(8, 5);
    assert_eq!(resize_bilinear(&src, Dims::new(8, 5)), src);
}

#[test]
fn resize_produces_requested_dims() {
    let src = gradient(40, 20);
    let out = resize_bilinear(&src, Dims::new(20, 10));
    assert_eq!(out.dimensions(), (20, 10));
    assert!(out.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn identity_warp_reproduces_source() {
    let src = gradient(6, 4);
    let out = warp_affine_bilinear(&src, Affine::IDENTITY, Dims::new(6, 4)).unwrap();
    assert_eq!(out, src);
}

#[test]
fn warp_fills_uncovered_canvas_with_transparency() {
    let src = gradient(4, 4);
    let out = warp_affine_bilinear(
        &src,
        Affine::translate(Vec2::new(1.0, 0.0)),
        Dims::new(6, 4),
    )
    .unwrap();

    for y in 0..4 {
        assert_eq!(out.get_pixel(0, y).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(1, y).0, src.get_pixel(0, y).0);
        assert_eq!(out.get_pixel(4, y).0, src.get_pixel(3, y).0);
        assert_eq!(out.get_pixel(5, y).0, [0, 0, 0, 0]);
    }
}

#[test]
fn half_pixel_border_samples_are_partially_transparent() {
    let src = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 255]));
    let out = warp_affine_bilinear(
        &src,
        Affine::translate(Vec2::new(0.5, 0.0)),
        Dims::new(3, 2),
    )
    .unwrap();

    assert_eq!(out.get_pixel(0, 0).0, [100, 50, 25, 128]);
    assert_eq!(out.get_pixel(1, 0).0, [200, 100, 50, 255]);
}

#[test]
fn singular_matrix_is_degenerate() {
    let src = gradient(4, 4);
    let err = warp_affine_bilinear(&src, Affine::scale(0.0), Dims::new(4, 4)).unwrap_err();
    assert!(matches!(err, AugmentError::DegenerateTransform(_)));
}
