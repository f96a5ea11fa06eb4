use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::AggregateRoot;

// ============================================================================
// Gender
// ============================================================================

/// Anything other than `Female` read from the wire is taken as `Male`,
/// matching how the edit form seeds its radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Exact, case-sensitive match on the wire spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Female" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Employee record as held by the backend.
///
/// Dates travel as ISO-8601 instant strings and are kept verbatim; see
/// [`super::schema`] for the conversion to calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub joined_date: String,
}

impl Employee {
    /// Body for POST/PUT built from this record
    pub fn to_upsert(&self) -> EmployeeUpsert {
        EmployeeUpsert {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_address: self.email_address.clone(),
            phone_number: self.phone_number.clone(),
            gender: self.gender,
            date_of_birth: self.date_of_birth.clone(),
            joined_date: self.joined_date.clone(),
        }
    }
}

impl AggregateRoot for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "employee"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Record minus `id`: body of both create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpsert {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub joined_date: String,
}

impl EmployeeUpsert {
    /// Attach a server-assigned id
    pub fn into_employee(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            joined_date: self.joined_date,
        }
    }
}
