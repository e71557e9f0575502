use serde_json::{json, Value};

use crate::render::CloudDocument;
use crate::CloudSummary;

/// Machine-readable description of one run, written next to the HTML when asked.
pub fn build_summary_json(doc: &CloudDocument<'_>, summary: &CloudSummary) -> Value {
    let bounds = match summary.bounds {
        Some(bounds) => json!({ "min": bounds.min, "max": bounds.max }),
        None => Value::Null,
    };
    json!({
        "source": doc.source_name,
        "requested": doc.requested,
        "lines": summary.lines,
        "total_words": summary.words,
        "distinct_words": summary.distinct_words,
        "partial": summary.interruption.is_some(),
        "bounds": bounds,
        "entries": doc.entries.iter().map(|e| {
            json!({
                "word": e.word,
                "count": e.count,
                "font_size": e.font_size,
            })
        }).collect::<Vec<_>>(),
    })
}
