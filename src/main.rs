mod config;
mod errors;
mod geometry;
mod grating;
mod render;
mod sampler;
mod types;

use clap::Parser;
use config::{Config, Style};
use errors::GratingError;
use std::{io::Write, path::PathBuf, process::ExitCode};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;
use types::Micrometer;

/// Generates a circular polarization grating as an SVG file
///
/// Lengths are millimeters (`22`, `0.007mm`) or integer micrometers (`7um`).
#[derive(Parser, Debug)]
#[command(name = "grating", version)]
struct Args {
    /// Draw chords as stroked lines or filled rectangles
    #[arg(short, long, value_enum, default_value_t)]
    style: Style,

    /// Circle radius
    #[arg(short, long, default_value_t = Config::RADIUS)]
    radius: Micrometer,

    /// Distance between probes
    #[arg(long, default_value_t = Config::STEP)]
    step: Micrometer,

    /// Stroke width for lines, band width for rectangles
    #[arg(short, long, default_value_t = Config::WIDTH)]
    width: Micrometer,

    /// First probe position [default: 1um for line, step for rect]
    #[arg(long)]
    start: Option<Micrometer>,

    /// Output file [default: out.svg for line, out2.svg for rect]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        let style = self.style;
        Config {
            style,
            radius: self.radius,
            step: self.step,
            width: self.width,
            start: self.start.unwrap_or_else(|| style.default_start(self.step)),
            output: self
                .output
                .unwrap_or_else(|| style.default_output().into()),
        }
    }
}

fn report(e: &GratingError) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr
        .set_color(
            ColorSpec::new()
                .set_fg(Some(Color::Red))
                .set_bold(true)
                .set_intense(true),
        )
        .ok();
    writeln!(stderr, "Error: {e}").ok();
    stderr.reset().ok();
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grating=info")),
        )
        .init();

    let cfg = Args::parse().into_config();

    match grating::run(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use crate::{config::Style, types::Micrometer};
    use clap::Parser;

    #[test]
    fn default_args() {
        let cfg = Args::parse_from(["grating"]).into_config();
        assert_eq!(cfg.style, Style::Line);
        assert_eq!(cfg.radius, Micrometer(22000));
        assert_eq!(cfg.step, Micrometer(7));
        assert_eq!(cfg.width, Micrometer(5));
        assert_eq!(cfg.start, Micrometer(1));
        assert_eq!(cfg.output.to_str(), Some("out.svg"));
    }

    #[test]
    fn rect_style_defaults() {
        let cfg = Args::parse_from(["grating", "--style", "rect", "--step", "10um"]).into_config();
        assert_eq!(cfg.style, Style::Rect);
        assert_eq!(cfg.start, Micrometer(10));
        assert_eq!(cfg.output.to_str(), Some("out2.svg"));
    }

    #[test]
    fn overrides() {
        let cfg = Args::parse_from([
            "grating", "-r", "0.1", "--step", "50um", "-w", "0.005mm", "--start", "0", "-o", "x.svg",
        ])
        .into_config();
        assert_eq!(cfg.radius, Micrometer(100));
        assert_eq!(cfg.step, Micrometer(50));
        assert_eq!(cfg.width, Micrometer(5));
        assert_eq!(cfg.start, Micrometer(0));
        assert_eq!(cfg.output.to_str(), Some("x.svg"));
    }

    #[test]
    fn bad_length() {
        assert!(Args::try_parse_from(["grating", "--radius", "22cm"]).is_err());
    }
}
