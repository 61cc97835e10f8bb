use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "wadm")]
#[command(version = get_version())]
#[command(about = "Google Workspace administration from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the directory tool binary (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub gam: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage user accounts
    #[command(subcommand, alias = "u")]
    User(UserCmd),

    /// Manage groups and their members
    #[command(subcommand, alias = "g")]
    Group(GroupCmd),

    /// Manage Drive files and ownership
    #[command(subcommand, alias = "d")]
    Drive(DriveCmd),

    /// Manage the local employee snapshot
    #[command(subcommand, alias = "emp")]
    Employees(EmployeesCmd),

    /// Get or set configuration
    Config {
        /// Configuration key (gam-path, default-role)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCmd {
    /// Create a user account
    Create {
        email: String,
        first_name: String,
        last_name: String,

        /// Initial password (tool-generated when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Rename a user
    Rename {
        /// Email or display name
        who: String,
        first_name: String,
        last_name: String,
    },

    /// Move a user to another org unit
    Move {
        /// Email or display name
        who: String,
        org_unit: String,
    },

    /// Set a password (forces a change on next login)
    Password {
        /// Email or display name
        who: String,
        password: String,
    },

    /// Change Gmail settings
    #[command(subcommand)]
    Gmail(GmailCmd),

    /// Suspend a user
    Suspend { who: String },

    /// Reactivate a suspended user
    Reactivate { who: String },

    /// Delete a user
    Delete { who: String },

    /// Undelete a user by unique id
    Undelete { id: String },

    /// Show user info and group memberships
    Info {
        who: String,

        /// Export the memberships to CSV (timestamped default filename)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GmailCmd {
    /// Turn IMAP on or off
    Imap { who: String, state: Toggle },

    /// Turn POP on or off
    Pop { who: String, state: Toggle },

    /// Set the signature from text or a file path
    Signature { who: String, value: String },

    /// Forward mail (keeping a copy), or clear forwarding
    Forward {
        who: String,

        /// Destination address
        #[arg(required_unless_present = "clear")]
        to: Option<String>,

        /// Remove the current forward
        #[arg(long, conflicts_with = "to")]
        clear: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[derive(Subcommand, Debug)]
pub enum GroupCmd {
    /// Create a group
    Create {
        email: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a group
    Delete { email: String },

    /// Add a member, or many from a CSV file
    Add {
        group: String,

        /// User to add (email or display name)
        #[arg(long, conflicts_with = "csv")]
        user: Option<String>,

        /// Role: member, manager or owner (default from config)
        #[arg(long, requires = "user")]
        role: Option<String>,

        /// CSV file of email[,role] rows
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },

    /// Remove a member, or many from a CSV file
    Remove {
        group: String,

        /// User to remove (email or display name)
        #[arg(long, conflicts_with = "csv")]
        user: Option<String>,

        /// Role: member, manager or owner (default from config)
        #[arg(long, requires = "user")]
        role: Option<String>,

        /// CSV file of email[,role] rows
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },

    /// List group members
    Members {
        group: String,

        /// Export the listing to CSV (timestamped default filename)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DriveCmd {
    /// List a user's Drive files
    Files {
        /// Email or display name
        who: String,

        /// Export the listing to CSV (timestamped default filename)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Transfer file ownership between users
    Transfer {
        /// Current owner (email or display name)
        from: String,

        /// New owner (email or display name)
        to: String,

        /// A single file id
        #[arg(long, conflicts_with = "csv")]
        file_id: Option<String>,

        /// CSV of files, handed to the tool as-is
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeesCmd {
    /// Refresh the snapshot from the tenant
    Fetch,

    /// List the snapshot
    #[command(alias = "ls")]
    List,

    /// Add one entry by hand
    Add { name: String, email: String },

    /// Remove an entry by name or email
    Remove { who: String },

    /// Merge entries from a name,email CSV file
    Import { file: PathBuf },

    /// Export the snapshot to CSV
    Export {
        /// Output filename (timestamped default when omitted)
        file: Option<PathBuf>,
    },
}
