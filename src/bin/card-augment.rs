use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, bail};
use clap::Parser;

use card_augment::{CardRepository, GenerateSession, GeneratorConfig, JpegDirSink, ensure_dir};

#[derive(Parser, Debug)]
#[command(
    name = "card-augment",
    version,
    about = "Composite rotated card images onto random backgrounds"
)]
struct Cli {
    /// Directory of card images [config: cards_dir].
    cards_dir: Option<PathBuf>,

    /// Directory for generated_image_new_<index>.jpg outputs, created if missing
    /// [config: output_dir].
    output_dir: Option<PathBuf>,

    /// Background photo directory [default: img/background_samples].
    #[arg(long)]
    backgrounds: Option<PathBuf>,

    /// Seed for a reproducible run (OS entropy otherwise).
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of background images to draw from.
    #[arg(long)]
    limit: Option<usize>,

    /// JPEG quality of written images.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// JSON config file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = resolve_config(&cli)?;
    let (cards_dir, output_dir) =
        cfg.resolve_dirs(cli.cards_dir.clone(), cli.output_dir.clone())?;
    check_dirs(&cards_dir, &output_dir)?;

    let repo = CardRepository::open(&cards_dir, &cfg.backgrounds_dir, cfg.background_limit)?;
    let session = GenerateSession::new(repo, cfg.augment.clone())?;

    let mut rng = cfg.random_source();
    if let Some(seed) = rng.seed() {
        tracing::info!(seed, "using fixed seed");
    }
    let mut sink = JpegDirSink::new(&output_dir).with_quality(cfg.jpeg_quality);

    let stats = session.run(&mut rng, &mut sink)?;
    tracing::info!(
        written = stats.images_written,
        skipped = stats.images_skipped,
        out = %output_dir.display(),
        "done"
    );
    Ok(())
}

fn check_dirs(cards_dir: &Path, output_dir: &Path) -> anyhow::Result<()> {
    if !cards_dir.is_dir() {
        bail!(
            "cards directory '{}' does not exist or is not a directory",
            cards_dir.display()
        );
    }
    if !output_dir.exists() {
        tracing::info!(dir = %output_dir.display(), "creating output directory");
        ensure_dir(output_dir)?;
    } else if !output_dir.is_dir() {
        bail!("output path '{}' is not a directory", output_dir.display());
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut cfg = match &cli.config {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.backgrounds {
        cfg.backgrounds_dir = dir.clone();
    }
    if let Some(seed) = cli.seed {
        cfg.seed = Some(seed);
    }
    if let Some(limit) = cli.limit {
        cfg.background_limit = limit;
    }
    if let Some(quality) = cli.quality {
        cfg.jpeg_quality = quality;
    }
    cfg.validate()?;
    Ok(cfg)
}
