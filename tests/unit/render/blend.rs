use super::*;
use crate::foundation::core::FrameSize;
use crate::render::canvas::Ink;

#[test]
fn mix_endpoints() {
    let dst = Rgb8::new(10, 20, 30);
    let src = Rgb8::new(200, 100, 0);
    assert_eq!(mix(dst, src, 0.0), dst);
    assert_eq!(mix(dst, src, -1.0), dst);
    assert_eq!(mix(dst, src, 1.0), src);
    assert_eq!(mix(dst, src, 3.0), src);
}

#[test]
fn mix_truncates_midpoint() {
    let out = mix(Rgb8::new(0, 0, 0), Rgb8::new(255, 101, 3), 0.5);
    assert_eq!(out, Rgb8::new(127, 50, 1));
}

#[test]
fn zero_alpha_pixels_are_bit_exact() {
    let size = FrameSize::new(4, 3).unwrap();
    let data: Vec<u8> = (0..36).map(|i| (i * 7) as u8).collect();
    let mut frame = VideoFrame::new(4, 3, data.clone()).unwrap();
    let mut canvas = Canvas::new(size);
    // color without alpha must not leak through
    canvas.put(1, 1, Ink::paint(Rgb8::new(255, 255, 255)));
    canvas.finalize_alpha(1.0);
    blend_canvas_onto(&mut frame, &canvas).unwrap();
    assert_eq!(frame.data, data);
}

#[test]
fn covered_pixels_take_canvas_color() {
    let size = FrameSize::new(3, 3).unwrap();
    let mut frame = VideoFrame::filled(size, Rgb8::new(9, 9, 9));
    let mut canvas = Canvas::new(size);
    canvas.put(2, 0, Ink::solid(Rgb8::new(255, 0, 0), 5.0));
    canvas.finalize_alpha(1.0);
    blend_canvas_onto(&mut frame, &canvas).unwrap();
    assert_eq!(frame.pixel(2, 0), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(frame.pixel(0, 0), Some(Rgb8::new(9, 9, 9)));
}

#[test]
fn size_mismatch_is_rejected() {
    let mut frame = VideoFrame::filled(FrameSize::new(3, 3).unwrap(), Rgb8::BLACK);
    let canvas = Canvas::new(FrameSize::new(4, 3).unwrap());
    let err = blend_canvas_onto(&mut frame, &canvas).unwrap_err();
    assert!(matches!(err, GlimmerError::Validation(_)));
}
