use crate::bulk::BulkReport;
use crate::config::WadmConfig;
use crate::directory::SNAPSHOT_FILENAME;
use crate::error::{Result, WadmError};
use crate::gam::Gam;
use crate::model::Employee;
use chrono::Utc;
use rowboat::Table;
use std::fs::File;
use std::path::{Path, PathBuf};

pub mod config;
pub mod drive;
pub mod employees;
pub mod groups;
pub mod users;

#[derive(Debug, Clone)]
pub struct WadmPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl WadmPaths {
    pub fn snapshot(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILENAME)
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub table: Option<Table>,
    pub report: Option<BulkReport>,
    pub employees: Vec<Employee>,
    pub config: Option<WadmConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_report(mut self, report: BulkReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_config(mut self, config: WadmConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Where a listing command writes its CSV export, if anywhere.
#[derive(Debug, Clone, Default)]
pub enum ExportTarget {
    /// Don't export.
    #[default]
    Skip,
    /// Timestamped default filename in the current directory.
    Default,
    /// A caller-chosen path.
    Path(PathBuf),
}

/// Timestamped CSV filename in the current directory.
pub(crate) fn default_export_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.csv",
        prefix,
        Utc::now().format("%Y-%m-%d_%H:%M:%S")
    ))
}

impl ExportTarget {
    /// The path to write, or `None` for no export. `prefix` names the
    /// default file.
    pub(crate) fn resolve(&self, prefix: &str) -> Option<PathBuf> {
        match self {
            ExportTarget::Skip => None,
            ExportTarget::Default => Some(default_export_path(prefix)),
            ExportTarget::Path(path) => Some(path.clone()),
        }
    }
}

impl From<Option<Option<PathBuf>>> for ExportTarget {
    /// Maps a clap `--export [FILE]` flag: absent, bare, or with a path.
    fn from(flag: Option<Option<PathBuf>>) -> Self {
        match flag {
            None => ExportTarget::Skip,
            Some(None) => ExportTarget::Default,
            Some(Some(path)) => ExportTarget::Path(path),
        }
    }
}

/// Write a table as CSV to `path`. Unlike the rest of the pipeline, a
/// failure here propagates as a hard error.
pub(crate) fn export_csv(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(WadmError::Io)?;
    table.write_csv(file).map_err(WadmError::Csv)?;
    Ok(())
}

/// Run one mutating tool invocation and fold its outcome into messages.
/// Tool chatter on stdout is kept as info; a non-zero exit becomes an error
/// message rather than an `Err`, so callers can keep going.
pub(crate) fn run_mutation<G: Gam>(
    gam: &mut G,
    args: Vec<String>,
    success: String,
) -> Result<CmdResult> {
    let output = gam.run(&args)?;
    let mut result = CmdResult::default();
    if output.ok() {
        let chatter = output.stdout.trim();
        if !chatter.is_empty() {
            result.add_message(CmdMessage::info(chatter));
        }
        result.add_message(CmdMessage::success(success));
    } else {
        result.add_message(CmdMessage::error(output.failure_text()));
    }
    Ok(result)
}
