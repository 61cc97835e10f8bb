use crate::commands::{export_csv, run_mutation, CmdMessage, CmdResult, ExportTarget};
use crate::error::{Result, WadmError};
use crate::gam::{args, Gam};
use crate::model::GroupMembership;
use rowboat::Table;
use std::path::Path;

/// The ways an existing user account can be changed.
#[derive(Debug, Clone)]
pub enum UserUpdate {
    Rename { first: String, last: String },
    OrgUnit { path: String },
    /// Sets a new password and forces a change on next login.
    Password { password: String },
}

/// Per-user Gmail settings the tool can flip.
#[derive(Debug, Clone)]
pub enum GmailSetting {
    Imap { enabled: bool },
    Pop { enabled: bool },
    /// Signature text, or a path to a file holding it.
    Signature { value: String },
    /// Forward to an address (keeping a copy), or `None` to clear.
    Forward { to: Option<String> },
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

pub fn create<G: Gam>(
    gam: &mut G,
    email: &str,
    first: &str,
    last: &str,
    password: Option<&str>,
) -> Result<CmdResult> {
    let mut cmd = args([
        "create", "user", email, "firstname", first, "lastname", last,
    ]);
    if let Some(password) = password {
        cmd.push("password".to_string());
        cmd.push(password.to_string());
    }
    run_mutation(gam, cmd, format!("Created user {}", email))
}

pub fn update<G: Gam>(gam: &mut G, email: &str, update: UserUpdate) -> Result<CmdResult> {
    let (cmd, success) = match update {
        UserUpdate::Rename { first, last } => (
            args([
                "update",
                "user",
                email,
                "firstname",
                first.as_str(),
                "lastname",
                last.as_str(),
            ]),
            format!("Renamed {} to {} {}", email, first, last),
        ),
        UserUpdate::OrgUnit { path } => (
            args(["update", "user", email, "org", path.as_str()]),
            format!("Moved {} to {}", email, path),
        ),
        UserUpdate::Password { password } => (
            args([
                "update",
                "user",
                email,
                "password",
                password.as_str(),
                "changepassword",
                "on",
            ]),
            format!("Password updated for {}", email),
        ),
    };
    run_mutation(gam, cmd, success)
}

pub fn gmail<G: Gam>(gam: &mut G, email: &str, setting: GmailSetting) -> Result<CmdResult> {
    let (cmd, success) = match setting {
        GmailSetting::Imap { enabled } => (
            args(["user", email, "imap", on_off(enabled)]),
            format!("IMAP {} for {}", on_off(enabled), email),
        ),
        GmailSetting::Pop { enabled } => (
            args(["user", email, "pop", on_off(enabled)]),
            format!("POP {} for {}", on_off(enabled), email),
        ),
        GmailSetting::Signature { value } => {
            let cmd = if Path::new(&value).is_file() {
                args(["user", email, "signature", "file", value.as_str()])
            } else {
                args(["user", email, "signature", value.as_str()])
            };
            (cmd, format!("Signature updated for {}", email))
        }
        GmailSetting::Forward { to: Some(to) } => (
            args(["user", email, "forward", "to", to.as_str(), "keepcopy", "on"]),
            format!("Forwarding {} to {}", email, to),
        ),
        GmailSetting::Forward { to: None } => (
            args(["user", email, "clear", "forward"]),
            format!("Forwarding cleared for {}", email),
        ),
    };
    run_mutation(gam, cmd, success)
}

pub fn suspend<G: Gam>(gam: &mut G, email: &str) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["update", "user", email, "suspended", "on"]),
        format!("Suspended {}", email),
    )
}

pub fn reactivate<G: Gam>(gam: &mut G, email: &str) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["update", "user", email, "suspended", "off"]),
        format!("Reactivated {}", email),
    )
}

pub fn delete<G: Gam>(gam: &mut G, email: &str) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["delete", "user", email]),
        format!("Deleted {}", email),
    )
}

/// Undelete wants the account's unique id, not an email.
pub fn undelete<G: Gam>(gam: &mut G, id: &str) -> Result<CmdResult> {
    run_mutation(
        gam,
        args(["undelete", "user", id]),
        format!("Undeleted {}", id),
    )
}

fn membership_header() -> Vec<String> {
    ["user", "group", "role", "status", "delivery"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Full user lookup: the tool's own info dump, then the user's group
/// memberships as a table, optionally exported to CSV.
pub fn info<G: Gam>(gam: &mut G, email: &str, export: &ExportTarget) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let info_out = gam.run(&args(["info", "user", email]))?;
    if info_out.ok() {
        let text = info_out.stdout.trim_end();
        if !text.is_empty() {
            result.add_message(CmdMessage::info(text));
        }
    } else {
        result.add_message(CmdMessage::error(format!(
            "Error fetching user info: {}",
            info_out.failure_text()
        )));
    }

    let groups_out = gam.run(&args(["user", email, "print", "groups"]))?;
    if !groups_out.ok() {
        return Err(WadmError::Tool(format!(
            "Error fetching groups: {}",
            groups_out.failure_text()
        )));
    }

    // The listing repeats the queried user in column one; keeping only rows
    // that match also drops the header line.
    let parsed = Table::parse(&groups_out.stdout);
    let memberships: Vec<GroupMembership> = parsed
        .rows()
        .iter()
        .filter_map(|row| GroupMembership::from_row(email, row))
        .collect();

    if memberships.is_empty() {
        result.add_message(CmdMessage::warning(format!("No groups found for {}", email)));
        return Ok(result);
    }

    let mut rows = vec![membership_header()];
    rows.extend(memberships.iter().map(GroupMembership::to_row));
    let table = Table::new(rows);

    result.add_message(CmdMessage::info(format!(
        "Total groups: {}",
        memberships.len()
    )));

    let local_part = email.split('@').next().unwrap_or(email);
    if let Some(path) = export.resolve(&format!("{}-groups", local_part)) {
        export_csv(&table, &path)?;
        result.add_message(CmdMessage::success(format!(
            "Groups exported to {}",
            path.display()
        )));
    }

    Ok(result.with_table(table))
}
