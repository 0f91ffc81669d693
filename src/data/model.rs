use std::fmt;

use super::resample::Method;

// ---------------------------------------------------------------------------
// RawRecord – one accepted `x,y,z` token
// ---------------------------------------------------------------------------

/// A coordinate triple exactly as read from the input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    pub x: f64,
    pub y: f64,
    /// Parsed but never used downstream.
    pub z: f64,
}

impl RawRecord {
    /// Drop the z component.
    pub fn planar(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Point2
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `[x, y]`, the layout egui_plot expects.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

// ---------------------------------------------------------------------------
// Boundary – which edge of the track a path belongs to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Inner,
    Outer,
}

impl Boundary {
    pub const ALL: [Boundary; 2] = [Boundary::Inner, Boundary::Outer];
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Inner => write!(f, "Inner Boundary"),
            Boundary::Outer => write!(f, "Outer Boundary"),
        }
    }
}

// ---------------------------------------------------------------------------
// BoundaryPath – the loaded, ordered boundary
// ---------------------------------------------------------------------------

/// Ordered (x, y) points of one boundary. Order defines the traversal
/// direction. An empty path means "no data".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryPath {
    points: Vec<Point2>,
}

impl BoundaryPath {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn from_records(records: &[RawRecord]) -> Self {
        Self::new(records.iter().map(RawRecord::planar).collect())
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    /// True when the first and last point coincide within `tolerance` on
    /// both axes.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) if self.len() > 1 => {
                (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
            }
            _ => false,
        }
    }
}

impl From<Vec<Point2>> for BoundaryPath {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

// ---------------------------------------------------------------------------
// ResampledPath – output of one interpolation method
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ResampledPath {
    pub method: Method,
    pub points: Vec<Point2>,
}

impl ResampledPath {
    pub fn empty(method: Method) -> Self {
        Self {
            method,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Snap the last point onto the first. Only meaningful for closed tracks.
    pub fn close_loop(&mut self) {
        if let Some(&first) = self.points.first() {
            if let Some(last) = self.points.last_mut() {
                *last = first;
            }
        }
    }

    /// Points as `[x, y]` pairs for plotting.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}
