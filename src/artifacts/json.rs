//! JSON artifact: the `MatchReport` contract serialised with a 4-space
//! indent. Field order is fixed by the struct, and the report carries no
//! wall-clock timestamp, so identical inputs produce identical bytes.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::MatchReport;

pub fn render(report: &MatchReport) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    report.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8(out).expect("serialised JSON is UTF-8"))
}
