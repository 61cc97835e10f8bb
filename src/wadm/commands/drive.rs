use crate::commands::{export_csv, run_mutation, CmdMessage, CmdResult, ExportTarget};
use crate::error::{Result, WadmError};
use crate::gam::{args, Gam};
use rowboat::Table;
use std::path::Path;

/// List a user's Drive files as a table, optionally exported to CSV.
pub fn files<G: Gam>(gam: &mut G, email: &str, export: &ExportTarget) -> Result<CmdResult> {
    let out = gam.run(&args(["user", email, "show", "filelist"]))?;
    if !out.ok() {
        return Err(WadmError::Tool(format!(
            "Error listing files: {}",
            out.failure_text()
        )));
    }

    let table = Table::parse(&out.stdout);
    let mut result = CmdResult::default();

    let local_part = email.split('@').next().unwrap_or(email);
    if let Some(path) = export.resolve(&format!("{}-files", local_part)) {
        export_csv(&table, &path)?;
        result.add_message(CmdMessage::success(format!(
            "Exported to {}",
            path.display()
        )));
    }

    Ok(result.with_table(table))
}

/// Transfer ownership of a single file.
pub fn transfer_file<G: Gam>(
    gam: &mut G,
    from: &str,
    to: &str,
    file_id: &str,
) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["user", from, "transfer", "file", file_id, "to", to]),
        format!("Transferred {} from {} to {}", file_id, from, to),
    )
}

/// Transfer ownership of every file named in a CSV, which the tool consumes
/// directly. The file must exist locally before handing its path over.
pub fn transfer_csv<G: Gam>(
    gam: &mut G,
    from: &str,
    to: &str,
    csv_path: &Path,
) -> Result<CmdResult> {
    if !csv_path.is_file() {
        return Err(WadmError::Api(format!(
            "CSV file not found: {}",
            csv_path.display()
        )));
    }
    let csv_arg = csv_path.to_string_lossy();
    run_mutation(
        gam,
        args([
            "user",
            from,
            "transfer",
            "drivefile",
            "csv",
            csv_arg.as_ref(),
            "to",
            to,
        ]),
        format!("Transferred files from {} to {}", from, to),
    )
}
