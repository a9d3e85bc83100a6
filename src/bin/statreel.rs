use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "statreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single frame and print its state as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range and write one JSON line per frame.
    Render(RenderArgs),
    /// Write the built-in scene definition as JSON.
    Scene(SceneArgs),
    /// Print how many frames a spring needs to settle.
    Settle(SettleArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Scene JSON (defaults to the built-in GitHub stats scene).
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Directory of `<user>.json` profile documents.
    #[arg(long, requires = "user")]
    profile_dir: Option<PathBuf>,

    /// Profile to load from `--profile-dir`.
    #[arg(long, requires = "profile_dir")]
    user: Option<String>,

    /// How long to wait for profile data before rendering with the fallback.
    #[arg(long, default_value_t = 2000)]
    profile_timeout_ms: u64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); defaults to the scene duration.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Output scene JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SettleArgs {
    /// Spring damping.
    #[arg(long)]
    damping: f64,

    /// Spring stiffness.
    #[arg(long)]
    stiffness: f64,

    /// Spring mass.
    #[arg(long, default_value_t = 1.0)]
    mass: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Allowed distance from the target.
    #[arg(long, default_value_t = 0.005)]
    threshold: f64,
}

fn main() -> anyhow::Result<()> {
    initialise_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Settle(args) => cmd_settle(args),
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_scene(path: Option<&Path>) -> anyhow::Result<statreel::SceneDef> {
    let scene = match path {
        Some(p) => statreel::SceneDef::from_path(p)
            .with_context(|| format!("load scene '{}'", p.display()))?,
        None => statreel::SceneDef::github_stats(),
    };
    scene.validate().context("validate scene")?;
    Ok(scene)
}

fn load_profile(args: &SourceArgs) -> statreel::ProfileStats {
    let (Some(dir), Some(user)) = (&args.profile_dir, &args.user) else {
        return statreel::ProfileStats::fallback();
    };
    let provider: Arc<dyn statreel::ProfileProvider> =
        Arc::new(statreel::JsonDirProvider::new(dir));
    let slot = statreel::ProfileSlot::spawn(provider, user.as_str());
    if !slot.wait(Duration::from_millis(args.profile_timeout_ms)) {
        tracing::warn!(user = %user, "profile not ready in time, rendering with fallback");
    }
    slot.get_or_fallback().clone()
}

fn create_out(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.source.scene.as_deref())?;
    let stats = load_profile(&args.source);
    let state = statreel::Evaluator::eval_frame(&scene, &stats, statreel::FrameIndex(args.frame))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &state).context("write frame JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.source.scene.as_deref())?;
    let stats = load_profile(&args.source);
    let end = args.end.unwrap_or(scene.duration_frames);
    let range =
        statreel::FrameRange::new(statreel::FrameIndex(args.start), statreel::FrameIndex(end))?;
    let threading = statreel::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
    };

    let (frames, eval_stats) = statreel::eval_range(&scene, &stats, range, &threading)?;

    let mut out = create_out(&args.out)?;
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).context("write frame JSON line")?;
        out.write_all(b"\n")?;
    }
    out.flush()
        .with_context(|| format!("flush '{}'", args.out.display()))?;

    tracing::info!(
        frames_total = eval_stats.frames_total,
        frames_distinct = eval_stats.frames_distinct,
        "render finished"
    );
    eprintln!(
        "wrote {} ({} frames, {} distinct)",
        args.out.display(),
        eval_stats.frames_total,
        eval_stats.frames_distinct
    );
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let scene = statreel::SceneDef::github_stats();
    let mut out = create_out(&args.out)?;
    serde_json::to_writer_pretty(&mut out, &scene).context("write scene JSON")?;
    writeln!(out)?;
    out.flush()
        .with_context(|| format!("flush '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_settle(args: SettleArgs) -> anyhow::Result<()> {
    let fps = statreel::Fps::new(args.fps, 1)?;
    let config = statreel::SpringConfig {
        damping: args.damping,
        stiffness: args.stiffness,
        mass: args.mass,
        overshoot_clamping: false,
    };
    let frames = statreel::spring_settle_frames(fps, &config, args.threshold)?;
    println!("{frames}");
    Ok(())
}
