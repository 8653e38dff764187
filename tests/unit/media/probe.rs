use super::*;

const SAMPLE: &str = r#"{
  "streams": [
    { "codec_type": "audio", "sample_rate": "48000" },
    {
      "codec_type": "video",
      "width": 1280,
      "height": 720,
      "r_frame_rate": "30000/1001",
      "avg_frame_rate": "30/1",
      "nb_frames": "240"
    }
  ],
  "format": { "duration": "8.008" }
}"#;

#[test]
fn ratios_parse_with_and_without_denominator() {
    assert_eq!(parse_ff_ratio("30000/1001"), Some((30000, 1001)));
    assert_eq!(parse_ff_ratio("25"), Some((25, 1)));
    assert_eq!(parse_ff_ratio(" 24 / 1 "), Some((24, 1)));
}

#[test]
fn degenerate_ratios_are_rejected() {
    assert_eq!(parse_ff_ratio("0/0"), None);
    assert_eq!(parse_ff_ratio("30/0"), None);
    assert_eq!(parse_ff_ratio("abc"), None);
    assert_eq!(parse_ff_ratio(""), None);
}

#[test]
fn probe_json_reads_video_stream_and_audio_presence() {
    let info = parse_probe_json(SAMPLE.as_bytes()).unwrap();
    assert_eq!(info.size, FrameSize::new(1280, 720).unwrap());
    assert_eq!(info.fps, Fps::new(30000, 1001).unwrap());
    assert_eq!(info.frame_count, Some(240));
    assert!(info.has_audio);
}

#[test]
fn probe_json_falls_back_to_average_rate() {
    let json = r#"{ "streams": [ { "codec_type": "video", "width": 64, "height": 48,
        "r_frame_rate": "0/0", "avg_frame_rate": "25/1", "nb_frames": "0" } ] }"#;
    let info = parse_probe_json(json.as_bytes()).unwrap();
    assert_eq!(info.fps, Fps::new(25, 1).unwrap());
    assert_eq!(info.frame_count, None);
    assert!(!info.has_audio);
}

#[test]
fn probe_json_without_video_is_a_media_error() {
    let json = r#"{ "streams": [ { "codec_type": "audio" } ] }"#;
    let err = parse_probe_json(json.as_bytes()).unwrap_err();
    assert!(matches!(err, GlimmerError::Media(_)));

    let err = parse_probe_json(b"not json").unwrap_err();
    assert!(matches!(err, GlimmerError::Media(_)));
}
