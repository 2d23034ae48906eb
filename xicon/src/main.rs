use anyhow::Result;
use clap::Parser;
use mipmap::{Color, Density, Generated, Generator, DEFAULT_RES};
use std::io::Write;
use std::path::PathBuf;

mod config;

use crate::config::Config;

/// Generates placeholder launcher icons for every android mipmap density.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Resource directory the `mipmap-*` folders are created in
    #[clap(short, long)]
    res: Option<PathBuf>,
    /// Yaml file with defaults for the other options [default: icons.yaml if present]
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Icon color as `#rrggbb` or `#rrggbbaa`
    #[clap(long)]
    color: Option<Color>,
    /// Margin in pixels around the round icon's circle
    #[clap(long)]
    inset: Option<u32>,
    /// Only generate the given densities
    #[clap(short, long = "density")]
    densities: Vec<Density>,
}

impl Args {
    fn generator(self, config: Config) -> Generator {
        let res = self
            .res
            .or(config.res)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RES));
        let mut generator = Generator::new(res);
        if let Some(color) = self.color.or(config.color) {
            generator = generator.color(color);
        }
        if let Some(inset) = self.inset.or(config.inset) {
            generator = generator.inset(inset);
        }
        let densities = if self.densities.is_empty() {
            config.densities
        } else {
            Some(self.densities)
        };
        if let Some(densities) = densities {
            generator = generator.densities(&densities);
        }
        generator
    }
}

/// Runs `generator`, writing a line per finished density to `out` and
/// `Done!` once all icons are written.
fn generate<W: Write>(generator: &Generator, out: &mut W) -> Result<Vec<Generated>> {
    let mut written = Ok(());
    let entries = generator.run(|entry| {
        if written.is_ok() {
            written = writeln!(out, "Generated {}", entry);
        }
    })?;
    written?;
    writeln!(out, "Done!")?;
    Ok(entries)
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let generator = args.generator(config);
    tracing::debug!("writing icons to {}", generator.res().display());
    generate(&generator, &mut std::io::stdout().lock())?;
    Ok(())
}
