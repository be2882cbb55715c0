//! Record Types
//!
//! Typed form of a well-formed input: a header count, the body records and
//! the trailer. No validation logic lives here.

use std::fmt;

use serde::Serialize;

/// One body line: a rectangle given by its lower-left corner and extents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyRecord {
    pub a: i32,
    pub b: i32,
    pub g: i32,
    pub k: i32,
}

impl BodyRecord {
    pub fn new(a: i32, b: i32, g: i32, k: i32) -> Self {
        Self { a, b, g, k }
    }

    /// Whether the closed rectangle covers the point `(x, y)`
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (a, b) = (i64::from(self.a), i64::from(self.b));
        a <= x && x <= a + i64::from(self.g) && b <= y && y <= b + i64::from(self.k)
    }
}

impl From<[i32; 4]> for BodyRecord {
    fn from([a, b, g, k]: [i32; 4]) -> Self {
        Self::new(a, b, g, k)
    }
}

impl fmt::Display for BodyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.b, self.g, self.k)
    }
}

/// The final line: a query point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrailerRecord {
    pub x: i32,
    pub y: i32,
}

impl From<[i32; 2]> for TrailerRecord {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TrailerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// A complete, well-formed input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub records: Vec<BodyRecord>,
    pub trailer: TrailerRecord,
}

impl Document {
    pub fn new(records: Vec<BodyRecord>, trailer: TrailerRecord) -> Self {
        Self { records, trailer }
    }

    /// The header value
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Canonical text form, newline-terminated
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.count())?;
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        writeln!(f, "{}", self.trailer)
    }
}
