use std::fs;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::io::{self, WorkbookSource};
use crate::reconstruct::reconstruct;
use crate::report::{ConsolidationReport, Reporter};

/// Outcome of one consolidation run: the serialized xlsx artifact plus the
/// non-fatal conditions collected along the way.
#[derive(Debug, Clone)]
pub struct Consolidation {
    /// The finished workbook, serialized as xlsx bytes.
    pub artifact: Vec<u8>,
    /// Orphaned sheets and skipped cell writes.
    pub report: ConsolidationReport,
}

/// Consolidates the data sources into a workbook shaped like the template.
///
/// Pure function of its inputs: aggregates the numeric totals, rebuilds the
/// template with the totals injected, and serializes the result to an
/// in-memory buffer. No state survives between invocations.
#[instrument(level = "info", skip_all, fields(template = template.name(), sources = sources.len()))]
pub fn consolidate<R: Read + Seek>(
    template: WorkbookSource<R>,
    sources: Vec<WorkbookSource<R>>,
    reporter: &mut dyn Reporter,
) -> Result<Consolidation> {
    let sums = aggregate(sources, reporter)?;
    info!(
        sheets = sums.sheet_count(),
        slots = sums.len(),
        "numeric totals accumulated"
    );

    let (workbook, report) = reconstruct(template, &sums, reporter)?;
    let artifact = io::artifact_bytes(&workbook)?;
    debug!(bytes = artifact.len(), "artifact serialized");

    Ok(Consolidation { artifact, report })
}

/// Path-based wrapper used by the command line host: opens the template and
/// data files, runs [`consolidate`], and writes the artifact to `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(template = %template.display(), output = %output.display())
)]
pub fn consolidate_files(
    template: &Path,
    data: &[PathBuf],
    output: &Path,
    reporter: &mut dyn Reporter,
) -> Result<ConsolidationReport> {
    let mut sources = Vec::with_capacity(data.len());
    for path in data {
        sources.push(WorkbookSource::open(path)?);
    }
    let template_source = WorkbookSource::open(template)?;

    let outcome = consolidate(template_source, sources, reporter)?;
    fs::write(output, &outcome.artifact)?;
    info!(bytes = outcome.artifact.len(), "consolidated workbook written");
    Ok(outcome.report)
}
