use super::*;

fn cfg(width: u32, height: u32) -> EncodeConfig {
    EncodeConfig {
        size: FrameSize { width, height },
        fps: Fps::new(30000, 1001).unwrap(),
        out_path: PathBuf::from("out/overlay.mp4"),
        overwrite: true,
        audio_from: None,
    }
}

#[test]
fn odd_or_zero_dimensions_are_rejected() {
    assert!(cfg(640, 480).validate().is_ok());
    assert!(matches!(
        cfg(641, 480).validate(),
        Err(GlimmerError::Validation(_))
    ));
    assert!(matches!(
        cfg(640, 0).validate(),
        Err(GlimmerError::Validation(_))
    ));
}

#[test]
fn args_describe_rgb24_input_at_the_source_rate() {
    let args = cfg(640, 480).ffmpeg_args();
    let joined = args.join(" ");
    assert!(joined.starts_with("-f rawvideo -pix_fmt rgb24 -s 640x480 -r 30000/1001 -i pipe:0"));
    assert!(args.contains(&"-an".to_string()));
    assert!(joined.contains("-c:v libx264 -pix_fmt yuv420p"));
    assert_eq!(args.last().map(String::as_str), Some("out/overlay.mp4"));
}

#[test]
fn args_copy_audio_from_the_source_when_asked() {
    let mut c = cfg(640, 480);
    c.audio_from = Some(PathBuf::from("in.mp4"));
    let joined = c.ffmpeg_args().join(" ");
    assert!(joined.contains("-i in.mp4 -map 0:v:0 -map 1:a:0? -c:a copy -shortest"));
    assert!(!joined.contains("-an"));
}

#[test]
fn ensure_parent_dir_creates_missing_directories() {
    let root = std::env::temp_dir().join(format!("glimmer_encode_{}", std::process::id()));
    let target = root.join("a/b/out.mp4");
    ensure_parent_dir(&target).unwrap();
    assert!(root.join("a/b").is_dir());
    let _ = std::fs::remove_dir_all(root);
}
