use crate::commands::{default_export_path, export_csv, CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, WadmError};
use crate::gam::{args, Gam};
use crate::model::Employee;
use rowboat::Table;
use std::fs;
use std::path::{Path, PathBuf};

/// Refresh the employee snapshot from the directory tool's user listing.
pub fn fetch<G: Gam>(gam: &mut G, snapshot_path: &Path) -> Result<CmdResult> {
    let out = gam.run(&args([
        "print",
        "users",
        "fields",
        "primaryemail,firstname,lastname",
    ]))?;
    if !out.ok() {
        return Err(WadmError::Tool(format!(
            "Error fetching employees: {}",
            out.failure_text()
        )));
    }

    let directory = Directory::from_listing(&Table::parse(&out.stdout));
    directory.save(snapshot_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} employees",
        directory.len()
    )));
    Ok(result.with_employees(directory.employees().to_vec()))
}

pub fn list(directory: &Directory) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if directory.is_empty() {
        result.add_message(CmdMessage::warning(
            "No employees in the snapshot. Run `wadm employees fetch` first.",
        ));
        return Ok(result);
    }
    Ok(result.with_table(directory.to_table()))
}

pub fn add(
    directory: &mut Directory,
    snapshot_path: &Path,
    name: &str,
    email: &str,
) -> Result<CmdResult> {
    if !email.contains('@') {
        return Err(WadmError::Api(format!("Not a valid email: {}", email)));
    }
    directory.upsert(Employee::new(name, email));
    directory.save(snapshot_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added {} <{}>", name, email)));
    Ok(result)
}

pub fn remove(directory: &mut Directory, snapshot_path: &Path, who: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match directory.remove(who) {
        Some(employee) => {
            directory.save(snapshot_path)?;
            result.add_message(CmdMessage::success(format!(
                "Removed {} <{}>",
                employee.name, employee.email
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No employee found for: {}", who)));
        }
    }
    Ok(result)
}

/// Merge `name,email` rows from a CSV file into the snapshot. Rows missing
/// an email, or with one that doesn't look like an email, are skipped and
/// counted; everything else upserts by email.
pub fn import(
    directory: &mut Directory,
    snapshot_path: &Path,
    csv_path: &Path,
) -> Result<CmdResult> {
    let text = fs::read_to_string(csv_path).map_err(WadmError::Io)?;
    let table = Table::parse(&text);

    let mut imported = 0;
    let mut skipped = 0;
    for row in table.rows() {
        let name = row.first().map(String::as_str).unwrap_or("");
        let email = row.get(1).map(String::as_str).unwrap_or("");
        if name.is_empty() || !email.contains('@') {
            skipped += 1;
            continue;
        }
        directory.upsert(Employee::new(name, email));
        imported += 1;
    }
    directory.save(snapshot_path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Imported: {}", imported)));
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!("Skipped: {}", skipped)));
    }
    Ok(result)
}

/// Write the snapshot as a `name,email` CSV.
pub fn export(directory: &Directory, path: Option<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if directory.is_empty() {
        result.add_message(CmdMessage::warning("Snapshot is empty; exporting header only."));
    }

    let path = path.unwrap_or_else(|| default_export_path("employees"));
    export_csv(&directory.to_table(), &path)?;
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result)
}
