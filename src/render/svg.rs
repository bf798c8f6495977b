//! SVG render

use super::traits::{Line, Rect, Render};
use crate::errors::GratingError;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use strum::IntoStaticStr;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
enum State {
    #[strum(serialize = "unopened")]
    Unopened,
    #[strum(serialize = "after header")]
    HeaderWritten,
    #[strum(serialize = "being written")]
    BodyWriting,
    #[strum(serialize = "after footer")]
    FooterWritten,
    #[strum(serialize = "closed")]
    Closed,
}

/// A streaming SVG render
///
/// Every element goes straight to the underlying writer, nothing is kept
/// in memory.
#[derive(Debug)]
pub struct Svg<W: Write> {
    fd: W,
    state: State,
}

impl Svg<BufWriter<File>> {
    /// Create or truncate the output file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GratingError> {
        let path = path.as_ref();
        let fd = File::create(path).map_err(|source| GratingError::OutputOpen {
            path: path.to_owned(),
            source,
        })?;
        debug!("Opened {}", path.display());
        Ok(Self::new(BufWriter::new(fd)))
    }
}

impl<W: Write> Svg<W> {
    pub fn new(fd: W) -> Self {
        Self {
            fd,
            state: State::Unopened,
        }
    }

    fn require(&self, op: &'static str, allowed: &[State]) -> Result<(), GratingError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(GratingError::InvalidState {
                op,
                state: self.state.into(),
            })
        }
    }
}

impl<W: Write + std::fmt::Debug> Render for Svg<W> {
    fn header(&mut self, size: f64) -> Result<(), GratingError> {
        self.require("write header", &[State::Unopened])?;
        writeln!(self.fd, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(
            self.fd,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{size:.6}mm\" height=\"{size:.6}mm\">"
        )?;
        self.state = State::HeaderWritten;
        Ok(())
    }

    fn line(&mut self, line: &Line) -> Result<(), GratingError> {
        self.require("draw line", &[State::HeaderWritten, State::BodyWriting])?;
        let Line { x, y1, y2, stroke_width } = *line;
        trace!(x, y1, y2, "line");
        writeln!(
            self.fd,
            "\t<line x1=\"{x:.6}mm\" y1=\"{y1:.6}mm\" x2=\"{x:.6}mm\" y2=\"{y2:.6}mm\" stroke=\"black\" stroke-width=\"{stroke_width:.6}mm\"/>"
        )?;
        self.state = State::BodyWriting;
        Ok(())
    }

    fn rect(&mut self, rect: &Rect) -> Result<(), GratingError> {
        self.require("draw rectangle", &[State::HeaderWritten, State::BodyWriting])?;
        let Rect { x, y, width, height } = *rect;
        trace!(x, y, height, "rect");
        writeln!(
            self.fd,
            "\t<rect x=\"{x:.6}mm\" y=\"{y:.6}mm\" width=\"{width:.6}mm\" height=\"{height:.6}mm\" fill=\"black\"/>"
        )?;
        self.state = State::BodyWriting;
        Ok(())
    }

    fn footer(&mut self) -> Result<(), GratingError> {
        self.require("write footer", &[State::HeaderWritten, State::BodyWriting])?;
        writeln!(self.fd, "</svg>")?;
        self.state = State::FooterWritten;
        Ok(())
    }

    fn close(&mut self) -> Result<(), GratingError> {
        if self.state == State::Closed {
            return Ok(());
        }
        if self.state != State::FooterWritten {
            warn!("Closing incomplete document");
        }
        self.state = State::Closed;
        self.fd.flush()?;
        debug!("Closed output");
        Ok(())
    }
}

impl<W: Write> Drop for Svg<W> {
    fn drop(&mut self) {
        if self.state != State::Closed {
            self.fd.flush().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Svg, State};
    use crate::{
        errors::GratingError,
        render::{Line, Rect, Render},
    };
    use std::{env, fs, process};

    fn render(f: impl FnOnce(&mut dyn Render)) -> String {
        let mut out = Vec::new();
        f(&mut Svg::new(&mut out));
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_and_footer() {
        let s = render(|svg| {
            svg.header(0.2).unwrap();
            svg.footer().unwrap();
            svg.close().unwrap();
        });
        assert_eq!(
            s,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"0.200000mm\" height=\"0.200000mm\">\n\
             </svg>\n"
        );
    }

    #[test]
    fn primitives() {
        let s = render(|svg| {
            svg.header(44.0).unwrap();
            svg.line(&Line { x: 0.001, y1: 21.5, y2: 22.5, stroke_width: 0.005 }).unwrap();
            svg.rect(&Rect { x: 0.007, y: 1.25, width: 0.005, height: 41.5 }).unwrap();
            svg.footer().unwrap();
        });
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("width=\"44.000000mm\" height=\"44.000000mm\""));
        assert_eq!(
            lines[2],
            "\t<line x1=\"0.001000mm\" y1=\"21.500000mm\" x2=\"0.001000mm\" y2=\"22.500000mm\" stroke=\"black\" stroke-width=\"0.005000mm\"/>"
        );
        assert_eq!(
            lines[3],
            "\t<rect x=\"0.007000mm\" y=\"1.250000mm\" width=\"0.005000mm\" height=\"41.500000mm\" fill=\"black\"/>"
        );
        assert_eq!(lines[4], "</svg>");
    }

    #[test]
    fn out_of_order_calls() {
        let mut out = Vec::new();
        let mut svg = Svg::new(&mut out);
        let line = Line { x: 0.0, y1: 0.0, y2: 0.0, stroke_width: 0.0 };

        assert!(matches!(svg.line(&line), Err(GratingError::InvalidState { .. })));
        assert!(matches!(svg.footer(), Err(GratingError::InvalidState { .. })));

        svg.header(1.0).unwrap();
        assert!(matches!(svg.header(1.0), Err(GratingError::InvalidState { .. })));
        svg.line(&line).unwrap();
        assert_eq!(svg.state, State::BodyWriting);
        svg.footer().unwrap();

        let err = svg.line(&line).unwrap_err();
        assert_eq!(err.to_string(), "Can't draw line while document is after footer");
    }

    #[test]
    fn close_is_idempotent() {
        let mut out = Vec::new();
        let mut svg = Svg::new(&mut out);
        svg.close().unwrap();
        svg.close().unwrap();
        assert!(matches!(svg.header(1.0), Err(GratingError::InvalidState { state: "closed", .. })));
    }

    #[test]
    fn open_writes_file() {
        let path = env::temp_dir().join(format!("grating-svg-{}.svg", process::id()));
        {
            let mut svg = Svg::open(&path).unwrap();
            svg.header(1.0).unwrap();
            svg.footer().unwrap();
            svg.close().unwrap();
        }
        let s = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(s.ends_with("</svg>\n"));
    }

    #[test]
    fn drop_flushes() {
        let path = env::temp_dir().join(format!("grating-drop-{}.svg", process::id()));
        {
            let mut svg = Svg::open(&path).unwrap();
            svg.header(1.0).unwrap();
        }
        let s = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(s.starts_with("<?xml"));
    }

    #[test]
    fn open_unwritable_path() {
        let dir = env::temp_dir().join(format!("grating-missing-{}", process::id()));
        let path = dir.join("out.svg");
        let err = Svg::open(&path).unwrap_err();
        assert!(matches!(err, GratingError::OutputOpen { .. }));
        assert!(err.to_string().contains("out.svg"));
        assert!(!path.exists());
    }
}
