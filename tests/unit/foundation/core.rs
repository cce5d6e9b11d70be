use super::*;

#[test]
fn dims_empty_when_either_side_is_zero() {
    assert!(Dims::new(0, 10).is_empty());
    assert!(Dims::new(10, 0).is_empty());
    assert!(!Dims::new(1, 1).is_empty());
}

#[test]
fn dims_fits_within_is_inclusive() {
    let bg = Dims::new(100, 80);
    assert!(Dims::new(100, 80).fits_within(bg));
    assert!(Dims::new(20, 16).fits_within(bg));
    assert!(!Dims::new(101, 10).fits_within(bg));
    assert!(!Dims::new(10, 81).fits_within(bg));
}

#[test]
fn dims_from_images_and_display() {
    let rgb = RgbImage::new(7, 3);
    let rgba = RgbaImage::new(2, 9);
    assert_eq!(Dims::of_rgb(&rgb), Dims::new(7, 3));
    assert_eq!(Dims::of_rgba(&rgba), Dims::new(2, 9));
    assert_eq!(Dims::new(800, 600).to_string(), "800x600");
}
