//! Batch driving: iterate requests, isolate per-file failures, count results.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use shapehub_core::error::ConvertError;
use shapehub_core::traits::kernel::GeometryKernel;
use shapehub_core::types::format::InputFormat;
use shapehub_core::types::outcome::ConversionOutcome;
use shapehub_core::types::request::ConversionRequest;

use crate::converter::Converter;

/// Running counters for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Files processed, whatever the result.
    pub processed: usize,
    /// Conversions that wrote a new output file.
    pub succeeded: usize,
    /// Same-format requests answered with a copy or a message.
    pub skipped: usize,
    /// Requests that ended in an error.
    pub failed: usize,
}

impl BatchSummary {
    /// Record one per-file result.
    pub fn record(&mut self, result: &Result<ConversionOutcome, ConvertError>) {
        self.processed += 1;
        match result {
            Ok(ConversionOutcome::Success { .. }) => self.succeeded += 1,
            Ok(ConversionOutcome::Skipped { .. }) | Ok(ConversionOutcome::Message { .. }) => {
                self.skipped += 1
            }
            Err(_) => self.failed += 1,
        }
    }
}

/// Per-file entry in a [`BatchReport`].
#[derive(Debug)]
pub struct BatchEntry {
    /// The request that was attempted.
    pub request: ConversionRequest,
    /// Outcome, or the error that failed this file.
    pub result: Result<ConversionOutcome, ConvertError>,
}

/// Full record of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Per-file results, in input order.
    pub entries: Vec<BatchEntry>,
    /// Aggregate counters.
    pub summary: BatchSummary,
}

/// Drives a converter over a list of requests, one file at a time.
///
/// Failures are isolated per file: an error is recorded in that file's
/// entry and the run continues with the remaining requests. Files are
/// processed strictly in order, each one fully before the next begins.
pub struct BatchRunner<'a, K> {
    converter: &'a Converter<K>,
}

impl<'a, K: GeometryKernel> BatchRunner<'a, K> {
    /// Create a runner borrowing the converter.
    pub fn new(converter: &'a Converter<K>) -> Self {
        Self { converter }
    }

    /// Lazily convert each request, yielding `(request, result)` pairs.
    ///
    /// The sequence is finite and restartable: re-invoking over the same
    /// request list starts a fresh pass, with no state shared between
    /// iterations beyond the caller-owned counters.
    pub fn results<I>(&self, requests: I) -> impl Iterator<Item = BatchEntry>
    where
        I: IntoIterator<Item = ConversionRequest>,
    {
        let converter = self.converter;
        requests.into_iter().map(move |request| {
            let result = converter.convert(&request);
            BatchEntry { request, result }
        })
    }

    /// Run all requests to completion, logging and counting each result.
    pub fn run<I>(&self, requests: I) -> BatchReport
    where
        I: IntoIterator<Item = ConversionRequest>,
    {
        let mut entries = Vec::new();
        let mut summary = BatchSummary::default();

        for entry in self.results(requests) {
            match &entry.result {
                Ok(outcome) => {
                    info!(input = %entry.request.input.display(), ?outcome, "Processed file")
                }
                Err(e) => {
                    warn!(input = %entry.request.input.display(), error = %e, "Failed to convert file")
                }
            }
            summary.record(&entry.result);
            entries.push(entry);
        }

        info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            skipped = summary.skipped,
            failed = summary.failed,
            "Batch conversion completed"
        );

        BatchReport { entries, summary }
    }
}

/// Collect supported CAD files directly inside `dir`, sorted by path.
///
/// Non-recursive; files with unsupported extensions are ignored rather than
/// reported. Sorting keeps batch runs deterministic across platforms.
pub fn collect_supported_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && InputFormat::from_path(&path).is_ok() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_kernel::TextKernel;
    use shapehub_core::types::format::OutputFormat;

    fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    fn batch_request(input: &Path, target: OutputFormat, out_dir: &Path) -> ConversionRequest {
        let mut request = ConversionRequest::new(input, target, out_dir);
        request.batch_mode = true;
        request
    }

    #[test]
    fn test_run_counts_and_failure_isolation() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out_dir = temp.path().join("out");

        let good = write_input(temp.path(), "a.step", "box\n");
        let same = write_input(temp.path(), "b.brep", "compound\n");
        let bad = write_input(temp.path(), "c.igs", "corrupt\n");
        let also_good = write_input(temp.path(), "d.iges", "face\n");

        let converter = Converter::new(TextKernel::new());
        let runner = BatchRunner::new(&converter);
        let report = runner.run(vec![
            batch_request(&good, OutputFormat::Brep, &out_dir),
            batch_request(&same, OutputFormat::Brep, &out_dir),
            batch_request(&bad, OutputFormat::Step, &out_dir),
            batch_request(&also_good, OutputFormat::Step, &out_dir),
        ]);

        assert_eq!(report.summary.processed, 4);
        assert_eq!(report.summary.succeeded, 2);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.failed, 1);

        // The failing file must not stop the files after it
        assert!(report.entries[2].result.is_err());
        assert!(report.entries[3].result.is_ok());
        assert!(out_dir.join("d_fromIGES.step").exists());
    }

    #[test]
    fn test_results_is_restartable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out_dir = temp.path().join("out");
        let input = write_input(temp.path(), "a.step", "box\n");

        let converter = Converter::new(TextKernel::new());
        let runner = BatchRunner::new(&converter);

        let requests = vec![batch_request(&input, OutputFormat::Brep, &out_dir)];
        let first = runner.run(requests.clone());
        let second = runner.run(requests);

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.summary.succeeded, 1);
    }

    #[test]
    fn test_summary_counts_message_as_skipped() {
        let mut summary = BatchSummary::default();
        summary.record(&Ok(ConversionOutcome::Message {
            text: "No point in converting a BREP file to a BREP file.".to_string(),
        }));
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.succeeded, 0);
    }

    #[test]
    fn test_collect_supported_files_filters_and_sorts() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_input(temp.path(), "b.IGS", "face\n");
        write_input(temp.path(), "a.step", "box\n");
        write_input(temp.path(), "notes.txt", "ignore me");
        write_input(temp.path(), "scan.dwg", "ignore me too");
        std::fs::create_dir(temp.path().join("sub.step")).expect("subdir");

        let files = collect_supported_files(temp.path()).expect("scan");
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().and_then(|n| n.to_str()).expect("name").to_string())
            .collect();

        assert_eq!(names, vec!["a.step", "b.IGS"]);
    }

    #[test]
    fn test_collect_supported_files_missing_dir() {
        assert!(collect_supported_files(Path::new("/nonexistent/cad")).is_err());
    }
}
