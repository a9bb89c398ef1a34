// File: crates/figrid-demo/src/main.rs
// Summary: Renders the four-panel example layout to PNG.

mod gallery;

use anyhow::{Context, Result};
use figrid_core::{Figure, FigureConfig, RenderOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: figrid-demo [OUTPUT.png] [--config FILE.toml]";

#[derive(Debug, PartialEq)]
struct Args {
    out: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args { out: PathBuf::from("target/out/figrid_example.png"), config: None };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => anyhow::bail!("unknown option '{flag}'\n{USAGE}"),
            _ => parsed.out = PathBuf::from(arg),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => FigureConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => FigureConfig::square(10.0),
    };

    let mut fig = Figure::with_config(config);
    gallery::layout(&mut fig)?;
    tracing::info!(regions = fig.len(), "layout built");

    fig.render_to_png(&RenderOptions::default(), &args.out)
        .with_context(|| format!("failed to render '{}'", args.out.display()))?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn output_path_and_config_are_read() {
        let parsed = args(&["out.png", "--config", "fig.toml"]).unwrap();
        assert_eq!(parsed.out, PathBuf::from("out.png"));
        assert_eq!(parsed.config, Some(PathBuf::from("fig.toml")));
    }

    #[test]
    fn flags_are_not_taken_as_output_path() {
        assert!(args(&["--help"]).is_err());
        assert!(args(&["-o", "out.png"]).is_err());
        assert!(args(&["--config"]).is_err());
    }
}
