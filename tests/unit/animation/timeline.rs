use super::*;

fn window(start: u64, end: u64, fade_in: u32, fade_out: u32) -> AnimationWindow {
    AnimationWindow::new(
        FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap(),
        fade_in,
        fade_out,
        Ease::Linear,
    )
    .unwrap()
}

#[test]
fn active_range_is_half_open() {
    let w = window(10, 20, 0, 0);
    assert!(!w.is_active(FrameIndex(9)));
    assert!(w.is_active(FrameIndex(10)));
    assert!(w.is_active(FrameIndex(19)));
    assert!(!w.is_active(FrameIndex(20)));
}

#[test]
fn normalized_time_spans_window() {
    let w = window(10, 20, 0, 0);
    assert_eq!(w.normalized_time(FrameIndex(10)), 0.0);
    assert!((w.normalized_time(FrameIndex(15)) - 0.5).abs() < 1e-6);
    assert_eq!(w.normalized_time(FrameIndex(0)), 0.0);
    assert_eq!(w.normalized_time(FrameIndex(40)), 1.0);
}

#[test]
fn fade_in_ramps_then_holds() {
    let w = window(0, 100, 10, 0);
    assert!(w.fade(FrameIndex(0)).abs() < 1e-6);
    assert!((w.fade(FrameIndex(5)) - 0.5).abs() < 1e-6);
    assert_eq!(w.fade(FrameIndex(10)), 1.0);
    assert_eq!(w.fade(FrameIndex(50)), 1.0);
    assert_eq!(w.fade(FrameIndex(99)), 1.0);
}

#[test]
fn fade_out_ramps_down_to_window_end() {
    let w = window(0, 100, 0, 10);
    assert_eq!(w.fade(FrameIndex(0)), 1.0);
    assert_eq!(w.fade(FrameIndex(89)), 1.0);
    assert!((w.fade(FrameIndex(90)) - 1.0).abs() < 1e-6);
    assert!((w.fade(FrameIndex(99)) - 0.1).abs() < 1e-6);
}

#[test]
fn zero_length_fades_are_full_strength() {
    let w = window(0, 30, 0, 0);
    for f in 0..30 {
        assert_eq!(w.fade(FrameIndex(f)), 1.0);
    }
    assert_eq!(w.blend_scalar(FrameIndex(0), 0.5), 0.5);
    assert_eq!(w.blend_scalar(FrameIndex(0), 3.0), 1.0);
}

#[test]
fn from_seconds_rounds_and_clamps_to_source() {
    let fps = Fps::new(30, 1).unwrap();
    let secs = WindowSeconds {
        start: 1.0,
        duration: 2.0,
        fade_in: 0.3,
        fade_out: 0.3,
    };
    let w = AnimationWindow::from_seconds(fps, secs, Ease::EaseInOut, None).unwrap();
    assert_eq!((w.start_frame(), w.end_frame()), (30, 90));
    assert_eq!((w.fade_in_frames, w.fade_out_frames), (9, 9));

    let clamped = AnimationWindow::from_seconds(fps, secs, Ease::EaseInOut, Some(60)).unwrap();
    assert_eq!(clamped.end_frame(), 60);

    assert!(AnimationWindow::from_seconds(fps, secs, Ease::EaseInOut, Some(30)).is_err());
}

#[test]
fn from_seconds_rejects_bad_inputs() {
    let fps = Fps::new(30, 1).unwrap();
    let mut secs = WindowSeconds {
        start: 0.0,
        duration: 0.0,
        fade_in: 0.0,
        fade_out: 0.0,
    };
    assert!(AnimationWindow::from_seconds(fps, secs, Ease::Linear, None).is_err());
    secs.duration = f64::NAN;
    assert!(AnimationWindow::from_seconds(fps, secs, Ease::Linear, None).is_err());
    secs.duration = 1.0;
    secs.fade_in = -1.0;
    assert!(AnimationWindow::from_seconds(fps, secs, Ease::Linear, None).is_err());
}
