use crate::bulk::{self, BulkSpec};
use crate::commands::{export_csv, run_mutation, CmdMessage, CmdResult, ExportTarget};
use crate::error::{Result, WadmError};
use crate::gam::{args, Gam};
use rowboat::Table;
use std::fs;
use std::path::Path;

/// Whether a membership operation adds to or removes from the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Add,
    Remove,
}

impl MembershipChange {
    fn verb(self) -> &'static str {
        match self {
            MembershipChange::Add => "add",
            MembershipChange::Remove => "remove",
        }
    }

    fn done(self) -> &'static str {
        match self {
            MembershipChange::Add => "Added",
            MembershipChange::Remove => "Removed",
        }
    }
}

pub fn create<G: Gam>(
    gam: &mut G,
    email: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<CmdResult> {
    let mut cmd = args(["create", "group", email]);
    if let Some(name) = name {
        cmd.push("name".to_string());
        cmd.push(name.to_string());
    }
    if let Some(description) = description {
        cmd.push("description".to_string());
        cmd.push(description.to_string());
    }
    run_mutation(gam, cmd, format!("Created group {}", email))
}

pub fn delete<G: Gam>(gam: &mut G, email: &str) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["delete", "group", email]),
        format!("Deleted group {}", email),
    )
}

/// Change one member's membership.
pub fn change_member<G: Gam>(
    gam: &mut G,
    group: &str,
    change: MembershipChange,
    user: &str,
    role: &str,
) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["update", "group", group, change.verb(), role, "user", user]),
        format!("{} {} as {} ({})", change.done(), user, role, group),
    )
}

/// Apply a membership change to every row of a CSV file.
///
/// Expected format: `email[,role]` with the role defaulting to
/// `default_role`. No header row is assumed; a line like `email,role` is
/// validated (and rejected) like any other row. Each valid row is one tool
/// invocation, and no row's outcome stops the rest.
pub fn change_members_from_csv<G: Gam>(
    gam: &mut G,
    group: &str,
    change: MembershipChange,
    csv_path: &Path,
    default_role: &str,
) -> Result<CmdResult> {
    let text = fs::read_to_string(csv_path).map_err(WadmError::Io)?;
    let table = Table::parse(&text);
    let spec = BulkSpec::with_default_modifier(default_role);

    let report = bulk::process(table.rows(), &spec, |user, role| {
        let cmd = args(["update", "group", group, change.verb(), role, "user", user]);
        match gam.run(&cmd) {
            Ok(out) if out.ok() => Ok(format!("{} {} as {}", change.done(), user, role)),
            Ok(out) => Err(format!(
                "Failed to {} {}: {}",
                change.verb(),
                user,
                out.failure_text()
            )),
            Err(err) => Err(format!("Failed to {} {}: {}", change.verb(), user, err)),
        }
    });

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Bulk {} completed for {}",
        change.verb(),
        group
    )));
    result.add_message(CmdMessage::success(format!(
        "Succeeded: {}",
        report.succeeded
    )));
    if report.failed > 0 {
        result.add_message(CmdMessage::error(format!("Failed: {}", report.failed)));
    }
    Ok(result.with_report(report))
}

/// List a group's members as a table, optionally exported to CSV.
pub fn members<G: Gam>(gam: &mut G, group: &str, export: &ExportTarget) -> Result<CmdResult> {
    let out = gam.run(&args([
        "print",
        "group-members",
        "group",
        group,
        "fields",
        "email,role",
    ]))?;
    if !out.ok() {
        return Err(WadmError::Tool(format!(
            "Error listing members: {}",
            out.failure_text()
        )));
    }

    let table = Table::parse(&out.stdout);
    let mut result = CmdResult::default();

    let local_part = group.split('@').next().unwrap_or(group);
    if let Some(path) = export.resolve(&format!("{}-members", local_part)) {
        export_csv(&table, &path)?;
        result.add_message(CmdMessage::success(format!(
            "Members exported to {}",
            path.display()
        )));
    }

    Ok(result.with_table(table))
}
