//! Reference answer for a case: which rectangle lies on top at the query
//! point.

use crate::parser::Document;

/// 1-based index of the last record covering the trailer point, or -1.
pub fn solve(doc: &Document) -> i64 {
    let point = doc.trailer;
    doc.records
        .iter()
        .rposition(|record| record.covers(point.x, point.y))
        .map_or(-1, |idx| idx as i64 + 1)
}
