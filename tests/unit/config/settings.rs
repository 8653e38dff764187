use super::*;
use crate::foundation::core::Rgb8;

fn source(frames: Option<u64>) -> SourceInfo {
    SourceInfo {
        size: FrameSize::new(640, 480).unwrap(),
        fps: Fps::new(30, 1).unwrap(),
        frame_count: frames,
        has_audio: false,
    }
}

#[test]
fn defaults_follow_the_overlay_tool() {
    let s = OverlaySettings::default();
    assert_eq!(s.opacity, 0.85);
    assert_eq!(s.fade_in_seconds, 0.3);
    assert_eq!(s.easing, Ease::EaseInOut);
    assert_eq!(s.palette.len(), 5);
    assert_eq!(CursorSettings::default().scale_factor, 0.2);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let s = OverlaySettings::from_json_str(
        r#"{ "duration_seconds": 2.0, "keywords": "radar", "easing": "linear", "seed": 5 }"#,
    )
    .unwrap();
    assert_eq!(s.duration_seconds, 2.0);
    assert_eq!(s.easing, Ease::Linear);
    assert_eq!(s.opacity, 0.85);
    assert_eq!(s.seed, Some(5));
}

#[test]
fn json_rejects_unknown_fields() {
    let err = OverlaySettings::from_json_str(r#"{ "opacityy": 1.0 }"#).unwrap_err();
    assert!(matches!(err, GlimmerError::Serde(_)));
}

#[test]
fn json_round_trips() {
    let s = OverlaySettings {
        motifs: Some(vec![MotifKind::Radar]),
        cursor: Some(CursorSettings::default()),
        ..OverlaySettings::default()
    };
    let back = OverlaySettings::from_json_str(&s.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, s);
}

#[test]
fn validate_rejects_out_of_range_opacity_and_seconds() {
    let s = OverlaySettings {
        opacity: 1.5,
        ..OverlaySettings::default()
    };
    assert!(matches!(s.validate(), Err(GlimmerError::Validation(_))));

    let s = OverlaySettings {
        fade_out_seconds: f64::NAN,
        ..OverlaySettings::default()
    };
    assert!(s.validate().is_err());

    let s = OverlaySettings {
        cursor: Some(CursorSettings {
            scale_factor: 0.0,
            ..CursorSettings::default()
        }),
        ..OverlaySettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn resolve_converts_seconds_and_parses_palette() {
    let s = OverlaySettings {
        start_seconds: 1.0,
        duration_seconds: 2.0,
        palette: vec!["#ff0000".into(), "nope".into()],
        seed: Some(11),
        ..OverlaySettings::default()
    };
    let cfg = s.resolve(&source(None)).unwrap();
    assert_eq!(cfg.window.start_frame(), 30);
    assert_eq!(cfg.window.end_frame(), 90);
    assert_eq!(cfg.window.fade_in_frames, 9);
    assert_eq!(cfg.palette.colors(), &[Rgb8::new(255, 0, 0)]);
    assert_eq!(cfg.seed, 11);
    assert_eq!(cfg.frame_size, FrameSize::new(640, 480).unwrap());
    assert!(cfg.cursor.is_none());
}

#[test]
fn resolve_clamps_window_to_source_length() {
    let s = OverlaySettings {
        start_seconds: 1.0,
        duration_seconds: 10.0,
        ..OverlaySettings::default()
    };
    let cfg = s.resolve(&source(Some(45))).unwrap();
    assert_eq!(cfg.window.end_frame(), 45);

    let late = OverlaySettings {
        start_seconds: 5.0,
        ..OverlaySettings::default()
    };
    assert!(matches!(
        late.resolve(&source(Some(45))),
        Err(GlimmerError::Validation(_))
    ));
}

#[test]
fn explicit_motifs_override_keywords() {
    let s = OverlaySettings {
        keywords: "grid".into(),
        motifs: Some(vec![MotifKind::Waveform]),
        ..OverlaySettings::default()
    };
    assert_eq!(s.selection().motifs, vec![MotifKind::Waveform]);
}

#[test]
fn cursor_mode_always_selects_the_cursor() {
    let s = OverlaySettings {
        cursor: Some(CursorSettings::default()),
        ..OverlaySettings::default()
    };
    let cfg = s.resolve(&source(None)).unwrap();
    assert!(cfg.selection.cursor);
    let cursor = cfg.cursor.unwrap();
    assert_eq!(
        (cursor.sprite.width(), cursor.sprite.height()),
        DEFAULT_ARROW_SIZE
    );
}

#[test]
fn cursor_larger_than_frame_is_rejected() {
    let s = OverlaySettings {
        cursor: Some(CursorSettings {
            width: Some(700),
            ..CursorSettings::default()
        }),
        ..OverlaySettings::default()
    };
    assert!(matches!(
        s.resolve(&source(None)),
        Err(GlimmerError::Validation(_))
    ));
}

#[test]
fn missing_seed_is_filled_in() {
    let cfg = OverlaySettings::default().resolve(&source(None)).unwrap();
    let again = OverlaySettings {
        seed: Some(cfg.seed),
        ..OverlaySettings::default()
    };
    assert_eq!(again.resolve(&source(None)).unwrap().seed, cfg.seed);
}
