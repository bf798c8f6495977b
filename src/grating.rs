//! Grating generation pipeline

use crate::{
    config::Config,
    errors::GratingError,
    render::{svg::Svg, Render},
    sampler::Sampler,
};
use tracing::info;

/// What was written
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub primitives: usize,
    pub canvas_mm: f64,
}

pub fn sampler(cfg: &Config) -> Sampler {
    Sampler::new(cfg.start, cfg.step, cfg.diameter())
}

/// Stream the whole document into `render` and close it
pub fn generate(cfg: &Config, render: &mut dyn Render) -> Result<Summary, GratingError> {
    let canvas_mm = cfg.canvas_mm();
    render.header(canvas_mm)?;

    let mut primitives = 0;
    for x in sampler(cfg) {
        cfg.style.primitive(x, cfg).draw(render)?;
        primitives += 1;
    }

    render.footer()?;
    render.close()?;

    Ok(Summary {
        primitives,
        canvas_mm,
    })
}

/// Write the grating described by `cfg` to its output file
pub fn run(cfg: &Config) -> Result<Summary, GratingError> {
    cfg.validate()?;
    info!(
        "Generating {} grating: radius {}mm, step {}mm, width {}mm, start {}mm",
        cfg.style, cfg.radius, cfg.step, cfg.width, cfg.start
    );

    let mut svg = Svg::open(&cfg.output)?;
    let summary = generate(cfg, &mut svg)?;

    info!(
        "Wrote {} primitives on a {:.3}mm canvas to {}",
        summary.primitives,
        summary.canvas_mm,
        cfg.output.display()
    );
    Ok(summary)
}
