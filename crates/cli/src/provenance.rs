//! Provenance sidecars for written hull reports.
//!
//! Each report `<name>.json` gets a `<name>.provenance.json` next to it with
//! the command and parameters that produced it, the hull summary, the code
//! revision, and the callsite that wrote it.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The command invocation behind a report.
#[derive(Debug)]
pub struct Run {
    pub command: &'static str,
    /// Command-specific inputs (file path, or cloud/seed/index).
    pub params: Value,
    pub tag: Option<String>,
}

/// Counts and mode of the computed hull.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HullSummary {
    pub n_input: usize,
    pub n_hull: usize,
    pub include_collinear: bool,
    pub eps: f64,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    hull2d_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    tag: Option<&'a str>,
    params: &'a Value,
    hull: HullSummary,
    report: String,
}

/// Write the sidecar for `report` and return its path.
#[track_caller]
pub fn write_sidecar(report: &Path, run: &Run, hull: HullSummary) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: code_rev(),
        hull2d_version: hull2d::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        command: run.command,
        tag: run.tag.as_deref(),
        params: &run.params,
        hull,
        report: report.to_string_lossy().into_owned(),
    };
    let path = sidecar_path(report);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `runs/hull.json` → `runs/hull.provenance.json`.
fn sidecar_path(report: &Path) -> PathBuf {
    report.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
