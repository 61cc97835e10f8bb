//! # Employee Directory Snapshot
//!
//! A read-mostly snapshot of the tenant's users: display name and primary
//! email per person. The snapshot is fetched from the directory tool by
//! `employees fetch`, persisted as JSON in the data dir, and loaded once per
//! run by any command that needs to turn a typed name into an email address.
//!
//! The snapshot is owned by the top-level context and passed by reference;
//! nothing in here is global or shared.

use crate::error::{Result, WadmError};
use crate::model::Employee;
use rowboat::Table;
use std::fs;
use std::path::Path;

pub const SNAPSHOT_FILENAME: &str = "employees.json";

/// Minimum fields in one user-listing row: email, first name, last name.
const LISTING_FIELDS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    employees: Vec<Employee>,
}

impl Directory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Build from the tool's user listing (`email,first,last` after a header
    /// row). Rows with fewer than three fields are skipped.
    pub fn from_listing(table: &Table) -> Self {
        let employees = table
            .data()
            .iter()
            .filter(|row| row.len() >= LISTING_FIELDS && !row[0].is_empty())
            .map(|row| Employee::from_listing(&row[0], &row[1], &row[2]))
            .collect();
        Self { employees }
    }

    /// Load the snapshot, or an empty directory if none has been fetched.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(WadmError::Io)?;
        let employees: Vec<Employee> =
            serde_json::from_str(&content).map_err(WadmError::Serialization)?;
        Ok(Self { employees })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(WadmError::Io)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&self.employees).map_err(WadmError::Serialization)?;
        fs::write(path, content).map_err(WadmError::Io)?;
        Ok(())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Add or replace (by email) one entry.
    pub fn upsert(&mut self, employee: Employee) {
        match self
            .employees
            .iter_mut()
            .find(|e| e.email.eq_ignore_ascii_case(&employee.email))
        {
            Some(existing) => *existing = employee,
            None => self.employees.push(employee),
        }
    }

    /// Remove by email or display name. Returns the removed entry.
    pub fn remove(&mut self, who: &str) -> Option<Employee> {
        let pos = self.employees.iter().position(|e| {
            e.email.eq_ignore_ascii_case(who) || e.name.eq_ignore_ascii_case(who)
        })?;
        Some(self.employees.remove(pos))
    }

    /// Turn a person argument into a primary email. Anything containing `@`
    /// passes through untouched; otherwise it is treated as a display name
    /// and looked up case-insensitively.
    pub fn resolve(&self, who: &str) -> Result<String> {
        if who.contains('@') {
            return Ok(who.to_string());
        }
        self.employees
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(who))
            .map(|e| e.email.clone())
            .ok_or_else(|| WadmError::UnknownEmployee(who.to_string()))
    }

    /// The snapshot as a `name,email` table, header included, for display
    /// and CSV export.
    pub fn to_table(&self) -> Table {
        let mut rows = vec![vec!["name".to_string(), "email".to_string()]];
        rows.extend(
            self.employees
                .iter()
                .map(|e| vec![e.name.clone(), e.email.clone()]),
        );
        Table::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        Directory::new(vec![
            Employee::new("Jane Doe", "jane@x.com"),
            Employee::new("Sam Po", "sam@x.com"),
        ])
    }

    #[test]
    fn from_listing_skips_header_and_short_rows() {
        let table = Table::parse(
            "primaryEmail,name.givenName,name.familyName\n\
             jane@x.com,Jane,Doe\n\
             broken-row\n\
             sam@x.com,Sam,Po\n",
        );
        let dir = Directory::from_listing(&table);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.employees()[0].name, "Jane Doe");
    }

    #[test]
    fn resolve_passes_emails_through() {
        assert_eq!(sample().resolve("other@y.com").unwrap(), "other@y.com");
    }

    #[test]
    fn resolve_names_case_insensitively() {
        assert_eq!(sample().resolve("jane doe").unwrap(), "jane@x.com");
    }

    #[test]
    fn resolve_unknown_name_is_a_typed_error() {
        let err = sample().resolve("nobody").unwrap_err();
        assert!(matches!(err, WadmError::UnknownEmployee(_)));
    }

    #[test]
    fn upsert_replaces_by_email() {
        let mut dir = sample();
        dir.upsert(Employee::new("Jane D.", "JANE@x.com"));
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.employees()[0].name, "Jane D.");
    }

    #[test]
    fn remove_accepts_name_or_email() {
        let mut dir = sample();
        assert!(dir.remove("Sam Po").is_some());
        assert!(dir.remove("jane@x.com").is_some());
        assert!(dir.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join(SNAPSHOT_FILENAME);

        let dir = sample();
        dir.save(&path).unwrap();
        let loaded = Directory::load(&path).unwrap();
        assert_eq!(loaded, dir);
    }

    #[test]
    fn load_missing_snapshot_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let dir = Directory::load(temp.path().join("none.json")).unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn to_table_has_header_and_rows() {
        let table = sample().to_table();
        assert_eq!(table.header().unwrap()[0], "name");
        assert_eq!(table.data().len(), 2);
    }
}
