//! Pipeline orchestration.
//!
//! Wires the stages strictly forward: discovery and normalization, alpha
//! stripping, class registry, labeling, relocation, statistics. No stage is
//! re-entered within one invocation; recovery from a partial run is simply
//! re-running the whole pipeline, which every stage tolerates.

use std::path::PathBuf;

use crate::classes::ClassList;
use crate::error::ClassprepError;
use crate::label::LabelingSession;
use crate::operator::{ImageDisplay, OperatorInput};
use crate::stats::StatsReport;
use crate::{alpha, normalize, relocate, stats};

/// Explicit pipeline configuration, passed into every stage.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Directory scanned for source images (non-recursive).
    pub source_dir: PathBuf,
    /// Directory receiving one subdirectory per class.
    pub output_dir: PathBuf,
}

/// Run the full preparation pipeline once.
///
/// Returns the final statistics report after relocation. Errors abort the
/// run with a clear message; per-file failures inside the batch stages are
/// reported and skipped instead.
pub fn run_pipeline(
    config: &PipelineConfig,
    input: &mut dyn OperatorInput,
    display: &mut dyn ImageDisplay,
) -> Result<StatsReport, ClassprepError> {
    let normalize_report = normalize::normalize_directory(&config.source_dir)?;
    print!("{normalize_report}");

    let normalized_dir = normalize::normalized_dir(&config.source_dir);

    let alpha_report = alpha::strip_directory(&normalized_dir)?;
    print!("{alpha_report}");

    let classes = ClassList::from_operator(input)?;
    println!("Class names: {:?}", classes.names());

    let mapping = LabelingSession::new(display, input).label_all(&normalized_dir, &classes)?;
    println!("Image classifications: {mapping:?}");

    let relocate_report =
        relocate::relocate_images(&mapping, &normalized_dir, &config.output_dir, &classes)?;
    print!("{relocate_report}");
    println!("Images have been moved to their respective class folders.");

    let stats_report = stats::scan_output_dir(&config.output_dir)?;
    print!("{stats_report}");

    Ok(stats_report)
}
