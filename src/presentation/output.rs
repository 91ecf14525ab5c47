//! Output Rendering
//!
//! Renders fetch/execute outcomes for humans or as NDJSON (one object per
//! line) for scripts. Everything goes to the writer it is given; logs stay
//! on stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::{ExecuteOutcome, FetchOutcome, ProfileRun};
use crate::domain::entities::ReportStatus;
use crate::domain::value_objects::ProfileReference;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
        }
    }
}

/// Where a profile's files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePaths {
    pub profile: String,
    pub archive: PathBuf,
    pub archive_present: bool,
    pub report: PathBuf,
    pub report_present: bool,
}

impl ProfilePaths {
    pub fn for_profile(profile: &ProfileReference, cache_root: &Path) -> Self {
        let archive = profile.archive_path(cache_root);
        let report = profile.report_path(cache_root);
        Self {
            profile: profile.slug(),
            archive_present: archive.is_file(),
            report_present: report.is_file(),
            archive,
            report,
        }
    }
}

/// Renders outcomes to a writer
pub trait OutcomeRenderer {
    fn fetch(&self, out: &mut dyn Write, profile: &str, outcome: &FetchOutcome) -> io::Result<()>;

    fn execute(&self, out: &mut dyn Write, profile: &str, outcome: &ExecuteOutcome)
        -> io::Result<()>;

    fn paths(&self, out: &mut dyn Write, paths: &ProfilePaths) -> io::Result<()>;

    fn run(&self, out: &mut dyn Write, run: &ProfileRun) -> io::Result<()> {
        self.fetch(out, &run.profile, &run.fetch)?;
        self.execute(out, &run.profile, &run.execute)
    }
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

impl OutcomeRenderer for TextRenderer {
    fn fetch(&self, out: &mut dyn Write, profile: &str, outcome: &FetchOutcome) -> io::Result<()> {
        let icons = self.icons();
        match outcome {
            FetchOutcome::Downloaded {
                path,
                bytes,
                digest,
            } => {
                writeln!(out, "{} Fetched {}", icons.check, profile)?;
                writeln!(out, "    {} {} ({} bytes)", icons.write, path.display(), bytes)?;
                writeln!(out, "    {}", digest)
            }
            FetchOutcome::Skipped { status, cached } => {
                writeln!(out, "{} Not fetched {} (HTTP {})", icons.skip, profile, status)?;
                match cached {
                    Some(path) => writeln!(out, "    using cached {}", path.display()),
                    None => writeln!(out, "    no cached archive"),
                }
            }
            FetchOutcome::LocalPath { path } => writeln!(
                out,
                "{} {} uses local archive {}",
                icons.skip,
                profile,
                path.display()
            ),
        }
    }

    fn execute(
        &self,
        out: &mut dyn Write,
        profile: &str,
        outcome: &ExecuteOutcome,
    ) -> io::Result<()> {
        let icons = self.icons();
        match outcome {
            ExecuteOutcome::Reported {
                report_path,
                status: ReportStatus::Complete,
            } => {
                writeln!(out, "{} Executed {}", icons.check, profile)?;
                writeln!(out, "    {} {}", icons.write, report_path.display())
            }
            ExecuteOutcome::Reported {
                report_path,
                status: ReportStatus::PartialFailure { message },
            } => {
                writeln!(out, "{} Executed {} with errors", icons.cross, profile)?;
                writeln!(out, "    {}", message)?;
                writeln!(out, "    {} {}", icons.write, report_path.display())
            }
            ExecuteOutcome::Skipped { archive } => writeln!(
                out,
                "{} Not executed {}: no archive at {}",
                icons.skip,
                profile,
                archive.display()
            ),
        }
    }

    fn paths(&self, out: &mut dyn Write, paths: &ProfilePaths) -> io::Result<()> {
        let mark = |present: bool| if present { "" } else { " (missing)" };
        writeln!(out, "{}", paths.profile)?;
        writeln!(
            out,
            "  archive: {}{}",
            paths.archive.display(),
            mark(paths.archive_present)
        )?;
        writeln!(
            out,
            "  report:  {}{}",
            paths.report.display(),
            mark(paths.report_present)
        )
    }
}

/// NDJSON renderer
pub struct JsonRenderer;

impl JsonRenderer {
    fn event(out: &mut dyn Write, value: serde_json::Value) -> io::Result<()> {
        serde_json::to_writer(&mut *out, &value)?;
        out.write_all(b"\n")
    }
}

impl OutcomeRenderer for JsonRenderer {
    fn fetch(&self, out: &mut dyn Write, profile: &str, outcome: &FetchOutcome) -> io::Result<()> {
        Self::event(
            out,
            serde_json::json!({ "command": "fetch", "profile": profile, "result": outcome }),
        )
    }

    fn execute(
        &self,
        out: &mut dyn Write,
        profile: &str,
        outcome: &ExecuteOutcome,
    ) -> io::Result<()> {
        Self::event(
            out,
            serde_json::json!({ "command": "execute", "profile": profile, "result": outcome }),
        )
    }

    fn paths(&self, out: &mut dyn Write, paths: &ProfilePaths) -> io::Result<()> {
        Self::event(out, serde_json::json!({ "command": "paths", "result": paths }))
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn OutcomeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
