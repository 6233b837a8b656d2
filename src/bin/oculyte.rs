use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use oculyte::{CollectionInfo, CpuRenderer, Eyeball, TraitManifest, export_collection};

#[derive(Parser, Debug)]
#[command(name = "oculyte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one seed at one instant as a PNG.
    Frame(FrameArgs),
    /// Render an animation as a numbered PNG sequence.
    Animate(AnimateArgs),
    /// Print a seed's trait manifest as JSON.
    Traits(TraitsArgs),
    /// Export collection metadata (and optionally portraits) for a seed range.
    Collection(CollectionArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Seed of the eyeball to render.
    #[arg(long)]
    seed: u32,

    /// Square surface size in pixels.
    #[arg(long, default_value_t = 300)]
    size: u32,

    /// Animation time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[arg(long)]
    seed: u32,

    #[arg(long, default_value_t = 300)]
    size: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Ticks per second of pushed time.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Output directory for frame_NNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct TraitsArgs {
    #[arg(long)]
    seed: u32,
}

#[derive(Parser, Debug)]
struct CollectionArgs {
    /// First seed of the range.
    #[arg(long, default_value_t = 1)]
    start: u32,

    /// Number of consecutive seeds.
    #[arg(long)]
    count: u32,

    /// Collection name stamped on every entry.
    #[arg(long, default_value = "Oculyte Genesis")]
    name: String,

    /// Output metadata JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Also render each seed's portrait into this directory.
    #[arg(long)]
    render_dir: Option<PathBuf>,

    /// Surface size for rendered portraits.
    #[arg(long, default_value_t = 300)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Traits(args) => cmd_traits(args),
        Command::Collection(args) => cmd_collection(args),
    }
}

fn save_png(frame: &oculyte::FrameRGBA, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write PNG '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let eyeball = Eyeball::new(args.seed, args.size, args.size)?;
    let plan = eyeball.plan_at(args.time);
    let mut renderer = CpuRenderer::new();
    let frame = renderer.render(&plan)?;
    save_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0.0, "fps must be > 0");
    let mut eyeball = Eyeball::new(args.seed, args.size, args.size)?;
    let mut renderer = CpuRenderer::new();
    let dt = 1.0 / args.fps;
    for i in 0..args.frames {
        let frame = eyeball.render(&mut renderer, dt)?;
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        save_png(&frame, &path)?;
    }
    eprintln!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_traits(args: TraitsArgs) -> anyhow::Result<()> {
    let eyeball = Eyeball::new(args.seed, 300, 300)?;
    let json = serde_json::to_string_pretty(eyeball.traits().entries())?;
    println!("{json}");
    Ok(())
}

fn cmd_collection(args: CollectionArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.count > 0, "count must be > 0");
    let seeds: Vec<u32> = (0..args.count).map(|i| args.start.wrapping_add(i)).collect();

    let items: Vec<(u32, TraitManifest)> = seeds
        .iter()
        .map(|&seed| {
            let e = Eyeball::new(seed, args.size, args.size)?;
            Ok((seed, e.traits().clone()))
        })
        .collect::<anyhow::Result<_>>()?;

    let info = CollectionInfo {
        collection: args.name.clone(),
        description: "Procedurally generated animated eyeball portraits".to_string(),
        external_url: "https://github.com/oculyte/oculyte".to_string(),
        image_base: "images/".to_string(),
    };
    let json = export_collection(&items, &info)?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &json)
        .with_context(|| format!("write metadata '{}'", args.out.display()))?;
    eprintln!("wrote {} entries to {}", items.len(), args.out.display());

    if let Some(dir) = &args.render_dir {
        // Instances share nothing, so portraits render in parallel.
        seeds
            .par_iter()
            .enumerate()
            .try_for_each(|(i, &seed)| -> anyhow::Result<()> {
                let eyeball = Eyeball::new(seed, args.size, args.size)?;
                let mut renderer = CpuRenderer::new();
                let frame = renderer.render(&eyeball.plan_at(0.0))?;
                save_png(&frame, &dir.join(format!("{}.png", i + 1)))
            })?;
        eprintln!("rendered {} portraits to {}", seeds.len(), dir.display());
    }

    Ok(())
}
