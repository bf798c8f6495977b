//! Rendering traits

use crate::errors::GratingError;
use std::fmt::Debug;

/// Stroked vertical line, millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    pub stroke_width: f64,
}

/// Filled rectangle, millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One drawing element of the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line(Line),
    Rect(Rect),
}

impl Primitive {
    pub fn draw(&self, render: &mut dyn Render) -> Result<(), GratingError> {
        match self {
            Primitive::Line(l) => render.line(l),
            Primitive::Rect(r) => render.rect(r),
        }
    }
}

/// Streaming document sink
///
/// Calls must follow `header`, any number of `line`/`rect`, `footer`.
/// `close` may be called at any point and releases the output.
pub trait Render: Debug {
    /// Start a square canvas `size` millimeters wide
    fn header(&mut self, size: f64) -> Result<(), GratingError>;
    fn line(&mut self, line: &Line) -> Result<(), GratingError>;
    fn rect(&mut self, rect: &Rect) -> Result<(), GratingError>;
    fn footer(&mut self) -> Result<(), GratingError>;
    fn close(&mut self) -> Result<(), GratingError>;
}
