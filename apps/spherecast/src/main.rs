use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spherecast_model::SceneFile;
use spherecast_render::{encode, render_world, OutputFormat, RenderSettings, World};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spherecast", version, about = "Ray cast a sphere scene into a pixel map")]
struct Cli {
    /// Log level; RUST_LOG takes precedence when set
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image file
    Render(RenderArgs),
    /// Write the built-in reference scene as JSON
    Scene(SceneArgs),
}

#[derive(Args)]
struct RenderArgs {
    #[arg(long)]
    out: PathBuf,

    /// Scene JSON; the built-in reference scene is used when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value_t = 0)]
    threads: usize,

    #[arg(long, default_value_t = 64)]
    progress_every: u32,

    /// Defaults to the output file extension
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Ppm,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ppm => OutputFormat::Ppm,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

#[derive(Args)]
struct SceneArgs {
    #[arg(long)]
    out: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render(args) => run_render(args),
        Commands::Scene(args) => run_scene(args),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let world = match &args.scene {
        Some(path) => load_world(path)?,
        None => World::reference(),
    };

    let inferred = OutputFormat::from_path(&args.out);
    let format = args.format.map(OutputFormat::from).unwrap_or(inferred);
    if format != inferred {
        warn!(
            path = %args.out.display(),
            format = format.extension(),
            "output extension does not match the selected format"
        );
    }

    let settings = RenderSettings {
        width: args.width,
        height: args.height,
        threads: args.threads,
        progress_every: args.progress_every,
    };

    let frame = render_world(&world, &settings).context("render failed")?;
    let bytes = encode(&frame, format).context("failed to encode image")?;
    atomic_write(&args.out, &bytes)?;
    info!(path = %args.out.display(), bytes = bytes.len(), "image written");
    Ok(())
}

fn run_scene(args: SceneArgs) -> Result<()> {
    write_json(&args.out, &World::reference().to_scene_file())?;
    info!(path = %args.out.display(), "scene written");
    Ok(())
}

fn load_world(path: &Path) -> Result<World> {
    let contents = fs::read_to_string(path)
        .map_err(|err| anyhow!("failed to read scene {:?}: {}", path, err))?;
    let scene: SceneFile = serde_json::from_str(&contents)
        .map_err(|err| anyhow!("failed to parse scene {:?}: {}", path, err))?;
    World::try_from(&scene).with_context(|| format!("scene {:?} rejected", path))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    atomic_write(path, &json)
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .map_err(|err| anyhow!("failed to create output directory {:?}: {}", parent, err))?;
    }

    let tmp_path = temp_path(path);
    let mut file = fs::File::create(&tmp_path)
        .map_err(|err| anyhow!("failed to create temp file {:?}: {}", tmp_path, err))?;
    file.write_all(data)
        .map_err(|err| anyhow!("failed to write temp file {:?}: {}", tmp_path, err))?;
    file.sync_all()
        .map_err(|err| anyhow!("failed to sync temp file {:?}: {}", tmp_path, err))?;

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(anyhow!("failed to replace output {:?}: {}", path, err));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("output");
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    parent.join(format!(".{}.part-{}-{}", file_name, std::process::id(), stamp))
}
