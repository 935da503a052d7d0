//! `apkdigest locate <app-id>` – resolve an installed package and print its digest.

use anyhow::Result;
use apkdigest_core::extract::ExtractError;
use apkdigest_core::locate::DirectoryLocator;
use apkdigest_core::manifest::DigestSpec;
use apkdigest_core::report::DigestReport;
use apkdigest_core::task::{DigestTask, ResultSink};
use std::path::Path;

use crate::cli::Outcome;

/// Sink that prints what it receives.
struct PrintSink<'a> {
    app_id: &'a str,
    json: bool,
    delivered: bool,
    error: Option<anyhow::Error>,
}

impl PrintSink<'_> {
    fn emit(&mut self, report: DigestReport) {
        match report.to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => self.error = Some(e),
        }
    }
}

impl ResultSink for PrintSink<'_> {
    fn on_digest(&mut self, digest: String) {
        self.delivered = true;
        if self.json {
            let report = DigestReport::from_result(&Ok(digest)).with_app_id(self.app_id);
            self.emit(report);
        } else {
            println!("{digest}");
        }
    }

    fn on_absent(&mut self, reason: &ExtractError) {
        if self.json {
            let report = DigestReport {
                app_id: Some(self.app_id.to_string()),
                reason: Some(reason.kind().to_string()),
                detail: Some(reason.to_string()),
                ..DigestReport::default()
            };
            self.emit(report);
        } else {
            eprintln!("no digest for {}: {}", self.app_id, reason);
        }
    }
}

/// Runs the background task against `root` and prints through the sink.
pub async fn run_locate(app_id: &str, root: &Path, spec: &DigestSpec, json: bool) -> Result<Outcome> {
    let task = DigestTask::new(DirectoryLocator::new(root), spec.clone());
    let mut sink = PrintSink {
        app_id,
        json,
        delivered: false,
        error: None,
    };
    task.run(app_id, &mut sink).await;

    if let Some(e) = sink.error {
        return Err(e);
    }
    Ok(if sink.delivered || json {
        Outcome::Done
    } else {
        Outcome::Absent
    })
}
