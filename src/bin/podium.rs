use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use podium::{Evaluator, Fps, FrameIndex, Roster, Showcase, SummaryFacts};

#[derive(Parser, Debug)]
#[command(name = "podium", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the planned page sequence as JSON.
    Plan(PlanArgs),
    /// Print the evaluated scene at a frame as JSON.
    Probe(ProbeArgs),
    /// Print page count and overall timeline length.
    Duration(DurationArgs),
}

#[derive(Args, Debug)]
struct TimingArgs {
    /// Input roster JSON.
    #[arg(long)]
    roster: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Scene length in frames (overrides --scene-secs).
    #[arg(long)]
    scene_frames: Option<u64>,

    /// Scene length in seconds.
    #[arg(long, default_value_t = 4.0)]
    scene_secs: f64,

    /// Winners per page.
    #[arg(long, default_value_t = 5)]
    max_per_page: usize,

    /// Season submission count for the summary scene.
    #[arg(long)]
    submissions: Option<u64>,

    /// Region coverage label for the summary scene, e.g. "15+".
    #[arg(long)]
    regions: Option<String>,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    timing: TimingArgs,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    #[command(flatten)]
    timing: TimingArgs,

    /// Global frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct DurationArgs {
    #[command(flatten)]
    timing: TimingArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Probe(args) => cmd_probe(args),
        Command::Duration(args) => cmd_duration(args),
    }
}

fn build_showcase(timing: &TimingArgs) -> anyhow::Result<Showcase> {
    let f = File::open(&timing.roster)
        .with_context(|| format!("open roster '{}'", timing.roster.display()))?;
    let roster: Roster =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse roster JSON")?;

    let mut builder = Showcase::builder(Fps::new(timing.fps, 1)?)
        .scene_secs(timing.scene_secs)
        .max_per_page(timing.max_per_page)
        .roster(roster)
        .facts(SummaryFacts {
            submissions: timing.submissions,
            regions: timing.regions.clone(),
        });
    if let Some(frames) = timing.scene_frames {
        builder = builder.scene_frames(frames);
    }

    Ok(builder.build()?)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let show = build_showcase(&args.timing)?;
    println!("{}", serde_json::to_string_pretty(show.pages())?);
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let show = build_showcase(&args.timing)?;
    let scene = Evaluator::eval_frame(&show, FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

fn cmd_duration(args: DurationArgs) -> anyhow::Result<()> {
    let show = build_showcase(&args.timing)?;
    let duration = show.duration();
    let summary = serde_json::json!({
        "pages": show.page_count(),
        "frames": duration.0,
        "seconds": show.fps().frames_to_secs(duration.0),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
