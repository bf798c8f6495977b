//! Grating parameters

use crate::{
    errors::GratingError,
    geometry::{compute_band, compute_chord},
    render::Primitive,
    types::Micrometer,
};
use clap::ValueEnum;
use std::path::PathBuf;
use strum::Display;

/// How each probe is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Stroked line along the chord
    #[default]
    Line,
    /// Filled rectangle covering the chord
    Rect,
}

impl Style {
    pub fn default_output(self) -> &'static str {
        match self {
            Style::Line => "out.svg",
            Style::Rect => "out2.svg",
        }
    }

    /// First probe position for this style
    pub fn default_start(self, step: Micrometer) -> Micrometer {
        match self {
            Style::Line => Micrometer(1),
            Style::Rect => step,
        }
    }

    /// Drawing element for the probe at `x`
    pub fn primitive(self, x: Micrometer, cfg: &Config) -> Primitive {
        match self {
            Style::Line => Primitive::Line(compute_chord(x, cfg.radius).to_mm(cfg.width)),
            Style::Rect => Primitive::Rect(compute_band(x, cfg.width, cfg.radius).to_mm()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub style: Style,
    pub radius: Micrometer,
    pub step: Micrometer,
    /// Stroke width for lines, band width for rectangles
    pub width: Micrometer,
    pub start: Micrometer,
    pub output: PathBuf,
}

impl Config {
    pub const RADIUS: Micrometer = Micrometer(22_000);
    pub const STEP: Micrometer = Micrometer(7);
    pub const WIDTH: Micrometer = Micrometer(5);

    pub fn for_style(style: Style) -> Self {
        Self {
            style,
            radius: Self::RADIUS,
            step: Self::STEP,
            width: Self::WIDTH,
            start: style.default_start(Self::STEP),
            output: style.default_output().into(),
        }
    }

    pub fn diameter(&self) -> Micrometer {
        self.radius + self.radius
    }

    /// Canvas side, millimeters
    pub fn canvas_mm(&self) -> f64 {
        self.diameter().to_mm()
    }

    pub fn validate(&self) -> Result<(), GratingError> {
        let positive = [
            ("radius", self.radius),
            ("step", self.step),
            ("width", self.width),
        ];
        for (name, v) in positive {
            if v.0 <= 0 {
                return Err(GratingError::InvalidConfig(format!(
                    "{name} must be positive, got {v}mm"
                )));
            }
        }
        // The sampler walks past the diameter by at most one step
        let fits = self
            .radius
            .0
            .checked_mul(2)
            .and_then(|d| d.checked_add(self.step.0))
            .is_some();
        if !fits {
            return Err(GratingError::InvalidConfig(format!(
                "radius {}mm with step {}mm is too large",
                self.radius, self.step
            )));
        }
        if self.start.0 < 0 {
            return Err(GratingError::InvalidConfig(format!(
                "start must not be negative, got {}mm",
                self.start
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_style(Style::default())
    }
}
