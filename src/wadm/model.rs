use serde::{Deserialize, Serialize};

/// One person in the Workspace tenant: display name plus primary email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub email: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build from the directory tool's user listing fields. The display name
    /// is "first last", falling back to whichever half exists, and finally
    /// to the local part of the email.
    pub fn from_listing(email: &str, first: &str, last: &str) -> Self {
        let name = if !first.is_empty() && !last.is_empty() {
            format!("{} {}", first, last)
        } else if !first.is_empty() {
            first.to_string()
        } else if !last.is_empty() {
            last.to_string()
        } else {
            email.split('@').next().unwrap_or(email).to_string()
        };
        Self::new(name, email)
    }
}

/// A user's membership in one group, as reported by the tool's group
/// listing. `status` and `delivery` are optional trailing fields with
/// tool-side defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMembership {
    pub user: String,
    pub group: String,
    pub role: String,
    pub status: String,
    pub delivery: String,
}

const DEFAULT_STATUS: &str = "ACTIVE";
const DEFAULT_DELIVERY: &str = "ALL_MAIL";

impl GroupMembership {
    /// Read one membership from a `user,group,role[,status[,delivery]]` row.
    /// Rows with fewer than three fields, or describing a different user,
    /// are not memberships of `email` and yield `None`.
    pub fn from_row(email: &str, row: &[String]) -> Option<Self> {
        if row.len() < 3 || row[0] != email {
            return None;
        }
        Some(Self {
            user: row[0].clone(),
            group: row[1].clone(),
            role: row[2].clone(),
            status: row
                .get(3)
                .filter(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            delivery: row
                .get(4)
                .filter(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| DEFAULT_DELIVERY.to_string()),
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.group.clone(),
            self.role.clone(),
            self.status.clone(),
            self.delivery.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn listing_name_prefers_both_halves() {
        let emp = Employee::from_listing("jd@x.com", "Jane", "Doe");
        assert_eq!(emp.name, "Jane Doe");
    }

    #[test]
    fn listing_name_falls_back_to_one_half() {
        assert_eq!(Employee::from_listing("jd@x.com", "Jane", "").name, "Jane");
        assert_eq!(Employee::from_listing("jd@x.com", "", "Doe").name, "Doe");
    }

    #[test]
    fn listing_name_falls_back_to_local_part() {
        assert_eq!(Employee::from_listing("jd@x.com", "", "").name, "jd");
    }

    #[test]
    fn membership_defaults_for_short_rows() {
        let m = GroupMembership::from_row("a@x.com", &row(&["a@x.com", "g@x.com", "MEMBER"]))
            .unwrap();
        assert_eq!(m.status, "ACTIVE");
        assert_eq!(m.delivery, "ALL_MAIL");
    }

    #[test]
    fn membership_keeps_explicit_trailing_fields() {
        let m = GroupMembership::from_row(
            "a@x.com",
            &row(&["a@x.com", "g@x.com", "OWNER", "SUSPENDED", "DIGEST"]),
        )
        .unwrap();
        assert_eq!(m.status, "SUSPENDED");
        assert_eq!(m.delivery, "DIGEST");
    }

    #[test]
    fn membership_rejects_other_users_and_short_rows() {
        assert!(GroupMembership::from_row("a@x.com", &row(&["b@x.com", "g@x.com", "MEMBER"]))
            .is_none());
        assert!(GroupMembership::from_row("a@x.com", &row(&["a@x.com", "g@x.com"])).is_none());
    }
}
