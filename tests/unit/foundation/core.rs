use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.local(FrameIndex(4)), Some(2));
    assert_eq!(r.local(FrameIndex(5)), None);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_seconds_round_to_nearest_frame() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(1.0), 30);
    assert_eq!(fps.secs_to_frames_round(0.3), 9);
    assert_eq!(fps.secs_to_frames_round(-2.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert_eq!(ntsc.secs_to_frames_round(4.1041), 123);
}

#[test]
fn video_frame_checks_buffer_length() {
    assert!(VideoFrame::new(2, 2, vec![0; 12]).is_ok());
    assert!(VideoFrame::new(2, 2, vec![0; 11]).is_err());

    let f = VideoFrame::filled(FrameSize::new(3, 2).unwrap(), Rgb8::new(1, 2, 3));
    assert_eq!(f.pixel(2, 1), Some(Rgb8::new(1, 2, 3)));
    assert_eq!(f.pixel(3, 0), None);
}
