use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glimmer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Overlay keyword-selected motifs or a caption onto a video (requires `ffmpeg` on PATH).
    Overlay(OverlayArgs),
    /// Overlay a cursor bouncing around the frame (requires `ffmpeg` on PATH).
    Cursor(CursorArgs),
    /// Render one overlaid frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input video.
    #[arg(long)]
    video: PathBuf,

    /// Settings JSON; flags given on the command line override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Window start, in seconds.
    #[arg(long)]
    start: Option<f64>,

    /// Window length, in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Keywords selecting motifs, or `text <caption>` for a caption overlay.
    #[arg(long)]
    text: Option<String>,

    /// Explicit motif list, bypassing keyword selection (comma separated).
    #[arg(long, value_delimiter = ',')]
    motifs: Option<Vec<glimmer::MotifKind>>,

    /// Seed for reproducible output; a random one is logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    opacity: Option<f32>,

    /// Fade-in length, in seconds.
    #[arg(long)]
    fade_in: Option<f64>,

    /// Fade-out length, in seconds.
    #[arg(long)]
    fade_out: Option<f64>,

    /// `linear` or `ease-in-out`.
    #[arg(long)]
    easing: Option<glimmer::Ease>,

    /// Comma separated hex colors, e.g. `#ff0000,#00ff00`.
    #[arg(long)]
    palette: Option<String>,

    /// `system` fonts or font-independent `blocks`.
    #[arg(long)]
    glyphs: Option<glimmer::GlyphMode>,
}

#[derive(Args, Debug)]
struct CursorOpts {
    /// Cursor sprite image; near-white pixels become transparent. A built-in arrow is used when
    /// omitted.
    #[arg(long = "cursor")]
    image: Option<PathBuf>,

    /// Scale applied to the sprite image.
    #[arg(long)]
    scale: Option<f32>,

    /// Average cursor speed, in pixels per second.
    #[arg(long)]
    speed: Option<f64>,

    /// Average time between heading changes, in seconds.
    #[arg(long)]
    segment: Option<f64>,
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Render frames in parallel chunks.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (defaults to the number of CPUs).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames buffered per parallel chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Drop the input's audio track instead of copying it.
    #[arg(long)]
    no_audio: bool,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Parser, Debug)]
struct CursorArgs {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    cursor: CursorOpts,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Drop the input's audio track instead of copying it.
    #[arg(long)]
    no_audio: bool,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Which overlay to preview.
    #[arg(long, value_enum, default_value_t = Mode::Overlay)]
    mode: Mode,

    #[command(flatten)]
    cursor: CursorOpts,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Overlay,
    Cursor,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Overlay(args) => cmd_overlay(args),
        Command::Cursor(args) => cmd_cursor(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let settings = build_settings(&args.common, Mode::Overlay, None)?;
    let opts = video_opts(&args.threading, args.no_audio);
    let stats = glimmer::overlay_video(&args.common.video, &args.out, &settings, &opts)
        .with_context(|| format!("overlay '{}'", args.common.video.display()))?;
    eprintln!(
        "wrote {} ({} frames, {} composited)",
        args.out.display(),
        stats.frames_total,
        stats.frames_composited
    );
    Ok(())
}

fn cmd_cursor(args: CursorArgs) -> anyhow::Result<()> {
    let settings = build_settings(&args.common, Mode::Cursor, Some(&args.cursor))?;
    let opts = video_opts(&args.threading, args.no_audio);
    let stats = glimmer::overlay_video(&args.common.video, &args.out, &settings, &opts)
        .with_context(|| format!("cursor overlay '{}'", args.common.video.display()))?;
    eprintln!(
        "wrote {} ({} frames, {} composited)",
        args.out.display(),
        stats.frames_total,
        stats.frames_composited
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cursor = (args.mode == Mode::Cursor).then_some(&args.cursor);
    let settings = build_settings(&args.common, args.mode, cursor)?;
    let frame = glimmer::preview_frame(
        &args.common.video,
        &settings,
        glimmer::FrameIndex(args.frame),
    )?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn video_opts(threading: &ThreadingArgs, no_audio: bool) -> glimmer::OverlayVideoOpts {
    glimmer::OverlayVideoOpts {
        overwrite: true,
        keep_audio: !no_audio,
        threading: glimmer::RenderThreading {
            parallel: threading.parallel,
            chunk_size: threading.chunk_size,
            threads: threading.threads,
        },
    }
}

/// Settings file (or mode defaults), then command-line overrides.
fn build_settings(
    common: &CommonArgs,
    mode: Mode,
    cursor: Option<&CursorOpts>,
) -> anyhow::Result<glimmer::OverlaySettings> {
    let mut s = match &common.settings {
        Some(path) => glimmer::OverlaySettings::from_json_file(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None if mode == Mode::Cursor => glimmer::OverlaySettings {
            opacity: 1.0,
            fade_in_seconds: 0.0,
            fade_out_seconds: 0.0,
            ..Default::default()
        },
        None => glimmer::OverlaySettings::default(),
    };

    if let Some(v) = common.start {
        s.start_seconds = v;
    }
    if let Some(v) = common.duration {
        s.duration_seconds = v;
    }
    if let Some(v) = &common.text {
        s.keywords = v.clone();
    }
    if let Some(v) = &common.motifs {
        s.motifs = Some(v.clone());
    }
    if common.seed.is_some() {
        s.seed = common.seed;
    }
    if let Some(v) = common.opacity {
        s.opacity = v;
    }
    if let Some(v) = common.fade_in {
        s.fade_in_seconds = v;
    }
    if let Some(v) = common.fade_out {
        s.fade_out_seconds = v;
    }
    if let Some(v) = common.easing {
        s.easing = v;
    }
    if let Some(v) = &common.palette {
        s.palette = v.split(',').map(|c| c.trim().to_owned()).collect();
    }
    if let Some(v) = common.glyphs {
        s.glyphs = v;
    }

    if let Some(opts) = cursor {
        let mut c = s.cursor.take().unwrap_or_default();
        if let Some(v) = &opts.image {
            c.image = Some(v.clone());
        }
        if let Some(v) = opts.scale {
            c.scale_factor = v;
        }
        if let Some(v) = opts.speed {
            c.avg_speed_px_per_sec = v;
        }
        if let Some(v) = opts.segment {
            c.avg_segment_seconds = v;
        }
        s.cursor = Some(c);
    }

    s.validate()?;
    Ok(s)
}
