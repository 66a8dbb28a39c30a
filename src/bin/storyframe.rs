use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storyframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene table with start frames and camera targets.
    Inspect(InspectArgs),
    /// Evaluate a single frame and print its snapshot as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range and write one JSON snapshot per line.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    /// Pretty-print the snapshot.
    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive). Defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Disable the idle camera drift.
    #[arg(long)]
    no_drift: bool,

    /// Blend length for transitions that do not set one.
    #[arg(long)]
    transition_frames: Option<u64>,
}

impl EngineArgs {
    fn opts(&self) -> storyframe::EngineOpts {
        let mut opts = storyframe::EngineOpts::default();
        opts.drift.enabled = !self.no_drift;
        if let Some(n) = self.transition_frames {
            opts.default_transition_frames = n;
        }
        opts
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_engine(path: &Path, opts: storyframe::EngineOpts) -> anyhow::Result<storyframe::Engine> {
    let comp = storyframe::Composition::from_path(path)
        .with_context(|| format!("load composition '{}'", path.display()))?;
    storyframe::Engine::new(comp, opts)
        .with_context(|| format!("validate composition '{}'", path.display()))
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let engine = load_engine(&args.in_path, storyframe::EngineOpts::default())?;
    let comp = engine.composition();
    let rig = engine.camera_rig();

    println!(
        "fps {}/{}  canvas {}x{}  frames {}  widgets {}  events {}",
        comp.fps.num,
        comp.fps.den,
        comp.canvas.width,
        comp.canvas.height,
        engine.duration_frames(),
        comp.widgets.len(),
        comp.interactions.events().len(),
    );
    for (i, scene) in comp.scenes.iter().enumerate() {
        let (start, frames) = engine
            .timeline()
            .span(i)
            .with_context(|| format!("scene {i} missing from timeline"))?;
        let cam = rig.target(scene);
        println!(
            "{i:>3}  {:<16} start {start:>6}  frames {frames:>5}  {:<5} zoom {:.3} pan ({:.1}, {:.1})",
            scene.id,
            format!("{:?}", scene.transition.kind).to_ascii_lowercase(),
            cam.zoom,
            cam.pan_x,
            cam.pan_y,
        );
    }
    for w in &comp.widgets {
        println!(
            "     {:<16} scene {:<12} {:<10} settles at {:>5}",
            w.id,
            w.scene.as_deref().unwrap_or("*"),
            format!("{:?}", w.entrance.kind).to_ascii_lowercase(),
            w.entrance.settle_frames(comp.fps),
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let frame = storyframe::FrameIndex::from_signed(args.frame)?;
    let engine = load_engine(&args.in_path, args.engine.opts())?;
    let snapshot = engine.eval_frame(frame);

    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
    .with_context(|| "serialize snapshot")?;
    println!("{json}");
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let mut opts = args.engine.opts();
    opts.parallel = args.parallel;
    opts.threads = args.threads;
    let engine = load_engine(&args.in_path, opts)?;

    let end = args.end.unwrap_or_else(|| engine.duration_frames());
    let range = storyframe::FrameRange::new(
        storyframe::FrameIndex(args.start),
        storyframe::FrameIndex(end),
    )?;
    let (frames, stats) = engine.eval_range_with_stats(range)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    for snapshot in &frames {
        serde_json::to_writer(&mut w, snapshot).with_context(|| "serialize snapshot")?;
        w.write_all(b"\n")?;
    }
    w.flush()
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} static)",
        args.out.display(),
        stats.frames_total,
        stats.frames_static
    );
    Ok(())
}
