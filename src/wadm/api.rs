//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for every
//! wadm operation regardless of the UI driving it. The facade dispatches to
//! `commands/*`, normalizes person arguments (a typed display name becomes a
//! primary email via the directory snapshot), and returns structured
//! `CmdResult`s. It never prints, never exits, and never assumes a terminal.
//!
//! Generic over [`Gam`] so the whole surface is testable with a scripted
//! tool instead of a live tenant.

use crate::commands::{self, CmdResult, ExportTarget, WadmPaths};
use crate::commands::config::ConfigAction;
use crate::commands::drive;
use crate::commands::employees;
use crate::commands::groups::{self, MembershipChange};
use crate::commands::users::{self, GmailSetting, UserUpdate};
use crate::config::WadmConfig;
use crate::directory::Directory;
use crate::error::Result;
use crate::gam::Gam;
use std::path::{Path, PathBuf};

pub struct WadmApi<G: Gam> {
    gam: G,
    paths: WadmPaths,
    config: WadmConfig,
}

impl<G: Gam> WadmApi<G> {
    pub fn new(gam: G, paths: WadmPaths, config: WadmConfig) -> Self {
        Self { gam, paths, config }
    }

    fn directory(&self) -> Result<Directory> {
        Directory::load(self.paths.snapshot())
    }

    /// Email or display name -> primary email.
    fn resolve(&self, who: &str) -> Result<String> {
        self.directory()?.resolve(who)
    }

    // --- users ---

    pub fn create_user(
        &mut self,
        email: &str,
        first: &str,
        last: &str,
        password: Option<&str>,
    ) -> Result<CmdResult> {
        users::create(&mut self.gam, email, first, last, password)
    }

    pub fn update_user(&mut self, who: &str, update: UserUpdate) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        users::update(&mut self.gam, &email, update)
    }

    pub fn gmail(&mut self, who: &str, setting: GmailSetting) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        users::gmail(&mut self.gam, &email, setting)
    }

    pub fn suspend_user(&mut self, who: &str) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        users::suspend(&mut self.gam, &email)
    }

    pub fn reactivate_user(&mut self, who: &str) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        users::reactivate(&mut self.gam, &email)
    }

    pub fn delete_user(&mut self, who: &str) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        users::delete(&mut self.gam, &email)
    }

    pub fn undelete_user(&mut self, id: &str) -> Result<CmdResult> {
        users::undelete(&mut self.gam, id)
    }

    pub fn user_info(&mut self, who: &str, export: ExportTarget) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        users::info(&mut self.gam, &email, &export)
    }

    // --- groups ---

    pub fn create_group(
        &mut self,
        email: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<CmdResult> {
        groups::create(&mut self.gam, email, name, description)
    }

    pub fn delete_group(&mut self, email: &str) -> Result<CmdResult> {
        groups::delete(&mut self.gam, email)
    }

    pub fn change_group_member(
        &mut self,
        group: &str,
        change: MembershipChange,
        who: &str,
        role: Option<&str>,
    ) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        let role = role.unwrap_or(&self.config.default_role).to_string();
        groups::change_member(&mut self.gam, group, change, &email, &role)
    }

    pub fn change_group_members_from_csv(
        &mut self,
        group: &str,
        change: MembershipChange,
        csv_path: &Path,
    ) -> Result<CmdResult> {
        let default_role = self.config.default_role.clone();
        groups::change_members_from_csv(&mut self.gam, group, change, csv_path, &default_role)
    }

    pub fn group_members(&mut self, group: &str, export: ExportTarget) -> Result<CmdResult> {
        groups::members(&mut self.gam, group, &export)
    }

    // --- drive ---

    pub fn drive_files(&mut self, who: &str, export: ExportTarget) -> Result<CmdResult> {
        let email = self.resolve(who)?;
        drive::files(&mut self.gam, &email, &export)
    }

    pub fn transfer_file(&mut self, from: &str, to: &str, file_id: &str) -> Result<CmdResult> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        drive::transfer_file(&mut self.gam, &from, &to, file_id)
    }

    pub fn transfer_csv(&mut self, from: &str, to: &str, csv_path: &Path) -> Result<CmdResult> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        drive::transfer_csv(&mut self.gam, &from, &to, csv_path)
    }

    // --- employees ---

    pub fn fetch_employees(&mut self) -> Result<CmdResult> {
        employees::fetch(&mut self.gam, &self.paths.snapshot())
    }

    pub fn list_employees(&self) -> Result<CmdResult> {
        employees::list(&self.directory()?)
    }

    pub fn add_employee(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let mut directory = self.directory()?;
        employees::add(&mut directory, &self.paths.snapshot(), name, email)
    }

    pub fn remove_employee(&mut self, who: &str) -> Result<CmdResult> {
        let mut directory = self.directory()?;
        employees::remove(&mut directory, &self.paths.snapshot(), who)
    }

    pub fn import_employees(&mut self, csv_path: &Path) -> Result<CmdResult> {
        let mut directory = self.directory()?;
        employees::import(&mut directory, &self.paths.snapshot(), csv_path)
    }

    pub fn export_employees(&self, path: Option<PathBuf>) -> Result<CmdResult> {
        employees::export(&self.directory()?, path)
    }

    // --- config ---

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &WadmPaths {
        &self.paths
    }
}
