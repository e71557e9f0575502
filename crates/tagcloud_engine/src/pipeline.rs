use cloud_logging::cloud_info;
use tagcloud_core::{select, CloudConfig};

use crate::persist::{same_destination, AtomicFileWriter, PersistError};
use crate::read::{count_input, open_input};
use crate::render::{CloudDocument, Renderer};
use crate::summary::build_summary_json;
use crate::{CloudRequest, CloudSummary, EngineError};

/// Runs the whole pipeline for one request: count, select, scale, render, write.
///
/// Output destinations are checked before the input is opened, and every file
/// is written atomically, so a failed run leaves no partial output behind.
pub fn generate_tag_cloud(
    request: &CloudRequest,
    config: &CloudConfig,
    renderer: &dyn Renderer,
) -> Result<CloudSummary, EngineError> {
    let writer = AtomicFileWriter::new(request.output.clone());
    writer
        .probe()
        .map_err(|e| EngineError::output(&request.output, e))?;
    let summary_writer = request.summary.clone().map(AtomicFileWriter::new);
    if let Some(summary_writer) = &summary_writer {
        if same_destination(summary_writer.target(), &request.output) {
            return Err(EngineError::output(
                summary_writer.target(),
                PersistError::SameTarget(request.output.display().to_string()),
            ));
        }
        summary_writer
            .probe()
            .map_err(|e| EngineError::output(summary_writer.target(), e))?;
    }

    let report = {
        let reader =
            open_input(&request.input).map_err(|e| EngineError::input(&request.input, e))?;
        cloud_info!("Reading words from {:?}", request.input);
        count_input(reader, &config.separators)
            .map_err(|e| EngineError::input(&request.input, e))?
    };
    let distinct_words = report.table.len();
    let selection = select(report.table, request.words);
    let bounds = selection.bounds;
    let selected = selection.len();
    match bounds {
        Some(b) => cloud_info!(
            "Selected {} of {} distinct words, counts {}..={}",
            selected,
            distinct_words,
            b.min,
            b.max
        ),
        None => cloud_info!("Selected no words out of {}", distinct_words),
    }
    let entries = selection.scale(config.font);

    let source_name = request.input.display().to_string();
    let doc = CloudDocument {
        source_name: &source_name,
        requested: request.words,
        entries: &entries,
        font: config.font,
    };
    let html = renderer.render(&doc);

    let mut summary = CloudSummary {
        lines: report.lines,
        words: report.words,
        distinct_words,
        selected,
        bounds,
        output_path: writer.target().to_path_buf(),
        summary_path: None,
        interruption: report.interruption,
    };

    // Stage every file before renaming any, so a failure leaves none behind.
    let staged_cloud = writer
        .stage(&html)
        .map_err(|e| EngineError::output(&request.output, e))?;
    let staged_summary = match &summary_writer {
        Some(summary_writer) => {
            let json = build_summary_json(&doc, &summary);
            let staged = summary_writer
                .stage(&json.to_string())
                .map_err(|e| EngineError::output(summary_writer.target(), e))?;
            Some((summary_writer.target(), staged))
        }
        None => None,
    };

    summary.output_path = staged_cloud
        .commit()
        .map_err(|e| EngineError::output(&request.output, e))?;
    cloud_info!("Wrote tag cloud to {:?}", summary.output_path);

    if let Some((target, staged)) = staged_summary {
        let path = staged
            .commit()
            .map_err(|e| EngineError::output(target, e))?;
        cloud_info!("Wrote run summary to {:?}", path);
        summary.summary_path = Some(path);
    }

    Ok(summary)
}
