//! Toolpath Emitter
//!
//! Serializes a polyline set into pen-plotter G-code. Polylines are drawn in
//! the order given; travel between them is never optimized.

use std::fmt;

use plotkit_core::{
    ConversionError, ConversionResult, MachineParams, ParameterError, Point2D, PolylineSet,
};
use tracing::{debug, info};

/// Feed rate used while lowering the pen.
pub const PEN_DOWN_FEED: f64 = 300.0;

/// Optional axis words plus a trailing comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisWords {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub feed: Option<f64>,
    pub comment: Option<String>,
}

impl AxisWords {
    pub fn xy(p: Point2D) -> Self {
        Self {
            x: Some(p.x),
            y: Some(p.y),
            ..Self::default()
        }
    }

    pub fn z(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Self::default()
        }
    }

    pub fn feed(feed: f64) -> Self {
        Self {
            feed: Some(feed),
            ..Self::default()
        }
    }

    pub fn with_feed(mut self, feed: f64) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Values that round to -0.000 print as 0.000
fn clean(v: f64) -> f64 {
    if v.abs() < 0.0005 {
        0.0
    } else {
        v
    }
}

impl fmt::Display for AxisWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(x) = self.x {
            write!(f, " X{:.3}", clean(x))?;
        }
        if let Some(y) = self.y {
            write!(f, " Y{:.3}", clean(y))?;
        }
        if let Some(z) = self.z {
            write!(f, " Z{}", z + 0.0)?;
        }
        if let Some(feed) = self.feed {
            write!(f, " F{}", feed)?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " ; {}", comment)?;
        }
        Ok(())
    }
}

/// One line of the output program.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionInstruction {
    /// `; text`
    Comment(String),
    /// `G0` pen-up move
    Rapid(AxisWords),
    /// `G1` controlled move
    Linear(AxisWords),
    /// `G28` homing, limited to the given axes
    Home(AxisWords),
    /// Bare command such as `G28` or `M84`, with optional comment
    Command {
        code: String,
        comment: Option<String>,
    },
    /// Caller-supplied text, emitted verbatim
    Passthrough(String),
}

impl MotionInstruction {
    pub fn command(code: impl Into<String>, comment: Option<&str>) -> Self {
        MotionInstruction::Command {
            code: code.into(),
            comment: comment.map(str::to_string),
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, MotionInstruction::Rapid(_) | MotionInstruction::Linear(_))
    }
}

impl fmt::Display for MotionInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionInstruction::Comment(text) => write!(f, "; {}", text),
            MotionInstruction::Rapid(words) => write!(f, "G0{}", words),
            MotionInstruction::Linear(words) => write!(f, "G1{}", words),
            MotionInstruction::Home(words) => write!(f, "G28{}", words),
            MotionInstruction::Command { code, comment } => match comment {
                Some(c) => write!(f, "{} ; {}", code, c),
                None => f.write_str(code),
            },
            MotionInstruction::Passthrough(text) => f.write_str(text),
        }
    }
}

/// Distances and time estimate for an emitted toolpath.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolpathSummary {
    pub polylines: usize,
    /// Drawing distance in mm
    pub pen_down_distance: f64,
    /// Pen-up travel in mm, starting from the origin
    pub travel_distance: f64,
    /// Minutes at the configured feed rates, ignoring acceleration and Z moves
    pub estimated_minutes: f64,
}

impl fmt::Display for ToolpathSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} paths, {:.1} mm drawn, {:.1} mm travel, ~{:.1} min",
            self.polylines, self.pen_down_distance, self.travel_distance, self.estimated_minutes
        )
    }
}

/// An immutable, ordered instruction stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolpath {
    instructions: Vec<MotionInstruction>,
    summary: ToolpathSummary,
}

impl Toolpath {
    pub fn instructions(&self) -> &[MotionInstruction] {
        &self.instructions
    }

    pub fn summary(&self) -> &ToolpathSummary {
        &self.summary
    }

    /// Output lines without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.instructions.iter().map(ToString::to_string)
    }

    /// The program text, one instruction per line.
    pub fn to_gcode(&self) -> String {
        let mut gcode = String::new();
        for instruction in &self.instructions {
            gcode.push_str(&instruction.to_string());
            gcode.push('\n');
        }
        gcode
    }
}

/// Builds toolpaths for one set of machine parameters.
#[derive(Debug, Clone, Default)]
pub struct ToolpathEmitter {
    params: MachineParams,
    header: Vec<String>,
}

impl ToolpathEmitter {
    pub fn new(params: MachineParams) -> Self {
        Self {
            params,
            header: Vec::new(),
        }
    }

    /// Comment lines written before the preamble.
    pub fn with_header_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header.extend(comments.into_iter().map(Into::into));
        self
    }

    pub fn params(&self) -> &MachineParams {
        &self.params
    }

    /// Emit `set`. `prologue`/`epilogue` override the ones in the machine
    /// parameters and replace the default preamble/epilogue verbatim.
    pub fn emit(
        &self,
        set: &PolylineSet,
        prologue: Option<&str>,
        epilogue: Option<&str>,
    ) -> ConversionResult<Toolpath> {
        if set.is_empty() {
            return Err(ConversionError::NoGeometryToEmit);
        }
        self.params.validate()?;
        if set.points().any(|p| !p.is_finite()) {
            return Err(ParameterError::NotFinite {
                name: "coordinate".to_string(),
            }
            .into());
        }

        let p = &self.params;
        let prologue = prologue.or(p.prologue.as_deref());
        let epilogue = epilogue.or(p.epilogue.as_deref());

        let mut out: Vec<MotionInstruction> = self
            .header
            .iter()
            .map(|c| MotionInstruction::Comment(c.clone()))
            .collect();

        match prologue {
            Some(text) => push_passthrough(&mut out, text),
            None => {
                out.push(MotionInstruction::command("G28", Some("Home all axes")));
                out.push(MotionInstruction::command("G90", Some("Absolute positioning")));
                out.push(MotionInstruction::command("G21", Some("Millimeter units")));
            }
        }
        out.push(MotionInstruction::Rapid(
            AxisWords::feed(p.travel_rate).with_comment("Set travel speed"),
        ));
        out.push(MotionInstruction::Rapid(AxisWords::z(p.z_up)));

        let mut summary = ToolpathSummary {
            polylines: set.len(),
            ..ToolpathSummary::default()
        };
        let mut position = Point2D::new(0.0, 0.0);

        for polyline in set {
            let start = polyline.first();
            summary.travel_distance += position.distance_to(&start);
            summary.pen_down_distance += polyline.length();

            out.push(MotionInstruction::Rapid(AxisWords::xy(start)));
            out.push(MotionInstruction::Linear(
                AxisWords::z(p.z_down).with_feed(PEN_DOWN_FEED),
            ));
            out.push(MotionInstruction::Linear(
                AxisWords::feed(p.feed_rate).with_comment("Set print speed"),
            ));
            for point in &polyline.points()[1..] {
                out.push(MotionInstruction::Linear(AxisWords::xy(*point)));
            }
            out.push(MotionInstruction::Rapid(
                AxisWords::z(p.z_up).with_feed(p.travel_rate),
            ));
            position = polyline.last();
        }

        match epilogue {
            Some(text) => push_passthrough(&mut out, text),
            None => {
                out.push(MotionInstruction::Rapid(AxisWords::z(p.park_height)));
                if p.home_at_end {
                    out.push(MotionInstruction::Home(AxisWords::xy(Point2D::new(0.0, 0.0))));
                }
                if p.disable_motors_at_end {
                    out.push(MotionInstruction::command("M84", None));
                }
            }
        }

        summary.estimated_minutes =
            summary.pen_down_distance / p.feed_rate + summary.travel_distance / p.travel_rate;

        debug!("Emitted {} instructions", out.len());
        info!("Toolpath: {}", summary);

        Ok(Toolpath {
            instructions: out,
            summary,
        })
    }
}

fn push_passthrough(out: &mut Vec<MotionInstruction>, text: &str) {
    for line in text.lines() {
        out.push(MotionInstruction::Passthrough(line.to_string()));
    }
}

/// Emit `set` with `params` and no header comments.
pub fn emit(
    set: &PolylineSet,
    params: &MachineParams,
    prologue: Option<&str>,
    epilogue: Option<&str>,
) -> ConversionResult<Toolpath> {
    ToolpathEmitter::new(params.clone()).emit(set, prologue, epilogue)
}
