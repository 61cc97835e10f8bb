use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rowboat::Table;
use wadm::api::WadmApi;
use wadm::bulk::{BulkReport, RowStatus};
use wadm::commands::config::ConfigAction;
use wadm::commands::groups::MembershipChange;
use wadm::commands::users::{GmailSetting, UserUpdate};
use wadm::commands::{CmdMessage, CmdResult, ExportTarget, MessageLevel, WadmPaths};
use wadm::config::WadmConfig;
use wadm::error::{Result, WadmError};
use wadm::gam::GamProcess;

mod args;
use args::{Cli, Commands, DriveCmd, EmployeesCmd, GmailCmd, GroupCmd, UserCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WadmApi<GamProcess>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::User(cmd) => handle_user(&mut ctx, cmd),
        Commands::Group(cmd) => handle_group(&mut ctx, cmd),
        Commands::Drive(cmd) => handle_drive(&mut ctx, cmd),
        Commands::Employees(cmd) => handle_employees(&mut ctx, cmd),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "bytewyse", "wadm").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let data_dir = proj_dirs.data_dir().to_path_buf();

    let config = WadmConfig::load(&config_dir).unwrap_or_default();
    let gam_path = cli
        .gam
        .clone()
        .unwrap_or_else(|| config.gam_path.clone());

    let paths = WadmPaths {
        config_dir,
        data_dir,
    };
    let api = WadmApi::new(GamProcess::new(gam_path), paths, config);

    Ok(AppContext { api })
}

fn handle_user(ctx: &mut AppContext, cmd: UserCmd) -> Result<()> {
    let result = match cmd {
        UserCmd::Create {
            email,
            first_name,
            last_name,
            password,
        } => ctx
            .api
            .create_user(&email, &first_name, &last_name, password.as_deref())?,
        UserCmd::Rename {
            who,
            first_name,
            last_name,
        } => ctx.api.update_user(
            &who,
            UserUpdate::Rename {
                first: first_name,
                last: last_name,
            },
        )?,
        UserCmd::Move { who, org_unit } => ctx
            .api
            .update_user(&who, UserUpdate::OrgUnit { path: org_unit })?,
        UserCmd::Password { who, password } => ctx
            .api
            .update_user(&who, UserUpdate::Password { password })?,
        UserCmd::Gmail(cmd) => {
            let (who, setting) = match cmd {
                GmailCmd::Imap { who, state } => (
                    who,
                    GmailSetting::Imap {
                        enabled: state.is_on(),
                    },
                ),
                GmailCmd::Pop { who, state } => (
                    who,
                    GmailSetting::Pop {
                        enabled: state.is_on(),
                    },
                ),
                GmailCmd::Signature { who, value } => (who, GmailSetting::Signature { value }),
                GmailCmd::Forward { who, to, clear: _ } => (who, GmailSetting::Forward { to }),
            };
            ctx.api.gmail(&who, setting)?
        }
        UserCmd::Suspend { who } => ctx.api.suspend_user(&who)?,
        UserCmd::Reactivate { who } => ctx.api.reactivate_user(&who)?,
        UserCmd::Delete { who } => ctx.api.delete_user(&who)?,
        UserCmd::Undelete { id } => ctx.api.undelete_user(&id)?,
        UserCmd::Info { who, export } => ctx.api.user_info(&who, ExportTarget::from(export))?,
    };
    print_result(&result);
    Ok(())
}

fn handle_group(ctx: &mut AppContext, cmd: GroupCmd) -> Result<()> {
    let result = match cmd {
        GroupCmd::Create {
            email,
            name,
            description,
        } => ctx
            .api
            .create_group(&email, name.as_deref(), description.as_deref())?,
        GroupCmd::Delete { email } => ctx.api.delete_group(&email)?,
        GroupCmd::Add {
            group,
            user,
            role,
            csv,
        } => membership_change(ctx, &group, MembershipChange::Add, user, role, csv)?,
        GroupCmd::Remove {
            group,
            user,
            role,
            csv,
        } => membership_change(ctx, &group, MembershipChange::Remove, user, role, csv)?,
        GroupCmd::Members { group, export } => ctx
            .api
            .group_members(&group, ExportTarget::from(export))?,
    };
    print_result(&result);
    Ok(())
}

fn membership_change(
    ctx: &mut AppContext,
    group: &str,
    change: MembershipChange,
    user: Option<String>,
    role: Option<String>,
    csv: Option<std::path::PathBuf>,
) -> Result<CmdResult> {
    match (user, csv) {
        (Some(user), None) => ctx
            .api
            .change_group_member(group, change, &user, role.as_deref()),
        (None, Some(csv)) => ctx.api.change_group_members_from_csv(group, change, &csv),
        _ => Err(WadmError::Api(
            "Provide exactly one of --user or --csv".to_string(),
        )),
    }
}

fn handle_drive(ctx: &mut AppContext, cmd: DriveCmd) -> Result<()> {
    let result = match cmd {
        DriveCmd::Files { who, export } => {
            ctx.api.drive_files(&who, ExportTarget::from(export))?
        }
        DriveCmd::Transfer {
            from,
            to,
            file_id,
            csv,
        } => match (file_id, csv) {
            (Some(file_id), None) => ctx.api.transfer_file(&from, &to, &file_id)?,
            (None, Some(csv)) => ctx.api.transfer_csv(&from, &to, &csv)?,
            _ => {
                return Err(WadmError::Api(
                    "Provide exactly one of --file-id or --csv".to_string(),
                ))
            }
        },
    };
    print_result(&result);
    Ok(())
}

fn handle_employees(ctx: &mut AppContext, cmd: EmployeesCmd) -> Result<()> {
    let result = match cmd {
        EmployeesCmd::Fetch => ctx.api.fetch_employees()?,
        EmployeesCmd::List => ctx.api.list_employees()?,
        EmployeesCmd::Add { name, email } => ctx.api.add_employee(&name, &email)?,
        EmployeesCmd::Remove { who } => ctx.api.remove_employee(&who)?,
        EmployeesCmd::Import { file } => ctx.api.import_employees(&file)?,
        EmployeesCmd::Export { file } => ctx.api.export_employees(file)?,
    };
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("gam-path"), None) => ConfigAction::ShowKey("gam-path".to_string()),
        (Some("gam-path"), Some(v)) => ConfigAction::SetGamPath(v),
        (Some("default-role"), None) => ConfigAction::ShowKey("default-role".to_string()),
        (Some("default-role"), Some(v)) => ConfigAction::SetDefaultRole(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match key.as_deref() {
            Some("gam-path") => println!("gam-path = {}", config.gam_path),
            Some("default-role") => println!("default-role = {}", config.default_role),
            _ => {
                println!("gam-path = {}", config.gam_path);
                println!("default-role = {}", config.default_role);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    if let Some(table) = &result.table {
        print_table(table);
    }
    if let Some(report) = &result.report {
        print_report(report);
    }
    print_messages(&result.messages);
}

fn print_table(table: &Table) {
    let rendered = table.render_to_string();
    if !table.has_data() {
        println!("{}", rendered.trim_end().yellow());
        return;
    }
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.blue());
    }
    for line in lines {
        println!("{}", line);
    }
}

fn print_report(report: &BulkReport) {
    for diagnostic in &report.diagnostics {
        match diagnostic.status {
            RowStatus::Succeeded => println!("{} {}", "✓".green(), diagnostic.message),
            RowStatus::Failed => println!("{} {}", "✗".red(), diagnostic.message),
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
