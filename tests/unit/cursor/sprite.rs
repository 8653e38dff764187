use super::*;
use crate::foundation::core::FrameSize;

fn rgba(w: u32, h: u32, px: [u8; 4]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(w, h, image::Rgba(px))
}

#[test]
fn near_white_is_keyed_out() {
    let mut img = rgba(2, 1, [250, 245, 241, 255]);
    img.put_pixel(1, 0, image::Rgba([240, 250, 250, 255]));
    let sprite = CursorSprite::from_rgba(img, 1.0);
    assert_eq!(sprite.alpha_at(0, 0), Some(0.0));
    // 240 is not above the key
    assert_eq!(sprite.alpha_at(1, 0), Some(1.0));
}

#[test]
fn existing_alpha_is_kept() {
    let sprite = CursorSprite::from_rgba(rgba(1, 1, [10, 20, 30, 51]), 1.0);
    assert_eq!(sprite.alpha_at(0, 0), Some(0.2));
    assert_eq!(sprite.color_at(0, 0), Some(Rgb8::new(10, 20, 30)));
}

#[test]
fn scale_resizes_with_a_one_pixel_floor() {
    let sprite = CursorSprite::from_rgba(rgba(100, 50, [0, 0, 0, 255]), 0.2);
    assert_eq!((sprite.width(), sprite.height()), (20, 10));
    let tiny = CursorSprite::from_rgba(rgba(3, 3, [0, 0, 0, 255]), 0.1);
    assert_eq!((tiny.width(), tiny.height()), (1, 1));
}

#[test]
fn resize_does_not_pull_in_keyed_white() {
    let mut img = rgba(4, 4, [255, 255, 255, 255]);
    for y in 0..4 {
        img.put_pixel(0, y, image::Rgba([0, 0, 200, 255]));
        img.put_pixel(1, y, image::Rgba([0, 0, 200, 255]));
    }
    let sprite = CursorSprite::from_rgba(img, 0.5);
    let c = sprite.color_at(0, 0).unwrap();
    assert!(c.r < 30 && c.g < 30, "{c:?}");
}

#[test]
fn load_reads_png_from_disk() {
    let dir = std::env::temp_dir().join(format!("glimmer-sprite-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cursor.png");
    rgba(10, 10, [0, 0, 0, 255]).save(&path).unwrap();
    let sprite = CursorSprite::load(&path, 0.5).unwrap();
    assert_eq!((sprite.width(), sprite.height()), (5, 5));
    std::fs::remove_dir_all(&dir).ok();

    assert!(CursorSprite::load(&dir.join("missing.png"), 1.0).is_err());
    assert!(matches!(
        CursorSprite::load(&path, 0.0),
        Err(GlimmerError::Validation(_))
    ));
}

#[test]
fn arrow_has_tip_outline_and_transparent_corner() {
    let arrow = CursorSprite::arrow(24, 32);
    assert_eq!((arrow.width(), arrow.height()), (24, 32));
    assert_eq!(arrow.alpha_at(0, 1), Some(1.0));
    assert_eq!(arrow.color_at(0, 1), Some(Rgb8::BLACK));
    assert_eq!(arrow.alpha_at(23, 0), Some(0.0));
    assert_eq!(arrow.color_at(3, 10), Some(Rgb8::new(255, 255, 255)));
}

#[test]
fn stamp_clips_at_canvas_edges() {
    let sprite = CursorSprite::from_rgba(rgba(4, 4, [9, 8, 7, 255]), 1.0);
    let mut canvas = Canvas::new(FrameSize::new(6, 6).unwrap());
    sprite.stamp(&mut canvas, 4, 4);
    assert_eq!(canvas.color_at(5, 5), Some(Rgb8::new(9, 8, 7)));
    assert_eq!(canvas.alpha_at(5, 5), Some(1.0));
    assert_eq!(canvas.alpha_at(3, 3), Some(0.0));
}
