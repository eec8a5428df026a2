//! Provenance for `batch` outputs: one `<stem>.provenance.json` per answers file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a batch run answered and under which tolerance.
#[derive(Debug, Serialize)]
pub struct BatchRun<'a> {
    pub input: &'a str,
    pub eps_collinear: f64,
    pub pairs: usize,
    pub hits: usize,
    pub tag: Option<String>,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    #[serde(flatten)]
    run: &'a BatchRun<'a>,
    output: String,
}

impl BatchRun<'_> {
    /// Write the sidecar beside `answers` and return its path.
    pub fn write_next_to(&self, answers: &Path) -> Result<PathBuf> {
        let path = sidecar_path(answers);
        let doc = Sidecar {
            code_rev: current_git_rev(),
            version: planar::VERSION,
            run: self,
            output: answers.display().to_string(),
        };
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), hits = self.hits, "provenance_written");
        Ok(path)
    }
}

/// `dir/answers.json` → `dir/answers.provenance.json`.
fn sidecar_path(answers: &Path) -> PathBuf {
    let stem = answers
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "answers".to_string());
    answers.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` from the environment, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
