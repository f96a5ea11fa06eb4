//! Validation schema for the employee form.
//!
//! A draft is checked against an ordered list of per-field rules plus one
//! cross-field rule. Every rule runs on every pass; for each field the first
//! failing rule supplies the message. The cross-field rule only runs when both
//! dates parsed and reports on `joined_date` alone.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

use super::aggregate::{Employee, EmployeeUpsert, Gender};
use super::phone::{is_valid_sg_phone, SG_PHONE_MESSAGE};
use crate::shared::dates::{
    date_to_iso_instant, format_input_date, iso_instant_to_date, parse_input_date,
};

pub const NAME_MIN_CHARS: usize = 6;
pub const NAME_MAX_CHARS: usize = 10;

pub const MSG_NAME_MIN: &str = "Min 6 chars";
pub const MSG_NAME_MAX: &str = "Max 10 chars";
pub const MSG_EMAIL: &str = "Invalid email";
pub const MSG_GENDER: &str = "Select gender";
pub const MSG_DATE_REQUIRED: &str = "Required";
pub const MSG_JOINED_BEFORE_BIRTH: &str = "Joined date must be after Date of Birth";

// ============================================================================
// Fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    FirstName,
    LastName,
    EmailAddress,
    PhoneNumber,
    Gender,
    DateOfBirth,
    JoinedDate,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 7] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::EmailAddress,
        EmployeeField::PhoneNumber,
        EmployeeField::Gender,
        EmployeeField::DateOfBirth,
        EmployeeField::JoinedDate,
    ];

    /// Wire / form key
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::FirstName => "first_name",
            EmployeeField::LastName => "last_name",
            EmployeeField::EmailAddress => "email_address",
            EmployeeField::PhoneNumber => "phone_number",
            EmployeeField::Gender => "gender",
            EmployeeField::DateOfBirth => "date_of_birth",
            EmployeeField::JoinedDate => "joined_date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::FirstName => "First Name",
            EmployeeField::LastName => "Last Name",
            EmployeeField::EmailAddress => "Email",
            EmployeeField::PhoneNumber => "Phone (+65…)",
            EmployeeField::Gender => "Gender",
            EmployeeField::DateOfBirth => "Date of Birth",
            EmployeeField::JoinedDate => "Joined Date",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Draft
// ============================================================================

/// In-progress form values. Every field is a raw string; dates hold the
/// `yyyy-mm-dd` value of a date input and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: String,
    pub joined_date: String,
}

impl EmployeeDraft {
    /// Starting point of the create form
    pub fn blank() -> Self {
        Self {
            gender: Gender::Male.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Seed the edit form from a fetched record. Instants become local
    /// calendar dates; an unreadable instant leaves the date empty.
    pub fn from_employee(employee: &Employee) -> Self {
        let to_input = |value: &str| {
            iso_instant_to_date(value)
                .map(format_input_date)
                .unwrap_or_default()
        };
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email_address: employee.email_address.clone(),
            phone_number: employee.phone_number.clone(),
            gender: employee.gender.as_str().to_string(),
            date_of_birth: to_input(&employee.date_of_birth),
            joined_date: to_input(&employee.joined_date),
        }
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::EmailAddress => &self.email_address,
            EmployeeField::PhoneNumber => &self.phone_number,
            EmployeeField::Gender => &self.gender,
            EmployeeField::DateOfBirth => &self.date_of_birth,
            EmployeeField::JoinedDate => &self.joined_date,
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::EmailAddress => &mut self.email_address,
            EmployeeField::PhoneNumber => &mut self.phone_number,
            EmployeeField::Gender => &mut self.gender,
            EmployeeField::DateOfBirth => &mut self.date_of_birth,
            EmployeeField::JoinedDate => &mut self.joined_date,
        };
        *slot = value;
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: EmployeeField,
    pub message: &'static str,
}

/// Every field that failed, in field order, one message per field
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: EmployeeField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn contains(&self, field: EmployeeField) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> Vec<EmployeeField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Keeps the first message recorded for a field
    fn push(&mut self, field: EmployeeField, message: &'static str) {
        if !self.contains(field) {
            self.errors.push(FieldError { field, message });
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

type FieldRule = (EmployeeField, fn(&EmployeeDraft) -> Option<&'static str>);

fn min_name(value: &str) -> Option<&'static str> {
    (value.chars().count() < NAME_MIN_CHARS).then_some(MSG_NAME_MIN)
}

fn max_name(value: &str) -> Option<&'static str> {
    (value.chars().count() > NAME_MAX_CHARS).then_some(MSG_NAME_MAX)
}

/// Dotted host with an alphabetic top-level label, anchored at the end
static EMAIL_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
        .expect("email domain pattern must compile")
});

fn valid_email(value: &str) -> bool {
    value.validate_email() && EMAIL_DOMAIN.is_match(value)
}

fn required_date(value: &str) -> Option<&'static str> {
    parse_input_date(value).is_none().then_some(MSG_DATE_REQUIRED)
}

const FIELD_RULES: &[FieldRule] = &[
    (EmployeeField::FirstName, |d| min_name(&d.first_name)),
    (EmployeeField::FirstName, |d| max_name(&d.first_name)),
    (EmployeeField::LastName, |d| min_name(&d.last_name)),
    (EmployeeField::LastName, |d| max_name(&d.last_name)),
    (EmployeeField::EmailAddress, |d| {
        (!valid_email(&d.email_address)).then_some(MSG_EMAIL)
    }),
    (EmployeeField::PhoneNumber, |d| {
        (!is_valid_sg_phone(&d.phone_number)).then_some(SG_PHONE_MESSAGE)
    }),
    (EmployeeField::Gender, |d| {
        Gender::parse(&d.gender).is_none().then_some(MSG_GENDER)
    }),
    (EmployeeField::DateOfBirth, |d| required_date(&d.date_of_birth)),
    (EmployeeField::JoinedDate, |d| required_date(&d.joined_date)),
];

/// Draft that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub joined_date: NaiveDate,
}

impl ValidatedEmployee {
    /// Wire body with both dates serialized as ISO instants
    pub fn to_api_payload(&self) -> EmployeeUpsert {
        EmployeeUpsert {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_address: self.email_address.clone(),
            phone_number: self.phone_number.clone(),
            gender: self.gender,
            date_of_birth: date_to_iso_instant(self.date_of_birth),
            joined_date: date_to_iso_instant(self.joined_date),
        }
    }
}

pub fn validate(draft: &EmployeeDraft) -> Result<ValidatedEmployee, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for (field, rule) in FIELD_RULES {
        if let Some(message) = rule(draft) {
            errors.push(*field, message);
        }
    }

    let date_of_birth = parse_input_date(&draft.date_of_birth);
    let joined_date = parse_input_date(&draft.joined_date);
    if let (Some(born), Some(joined)) = (date_of_birth, joined_date) {
        if joined <= born {
            errors.push(EmployeeField::JoinedDate, MSG_JOINED_BEFORE_BIRTH);
        }
    }

    errors.errors.sort_by_key(|e| e.field);

    match (errors.is_empty(), Gender::parse(&draft.gender), date_of_birth, joined_date) {
        (true, Some(gender), Some(date_of_birth), Some(joined_date)) => Ok(ValidatedEmployee {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email_address: draft.email_address.clone(),
            phone_number: draft.phone_number.clone(),
            gender,
            date_of_birth,
            joined_date,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Adeline".into(),
            last_name: "Tanakaa".into(),
            email_address: "adeline@example.com".into(),
            phone_number: "+65 91234567".into(),
            gender: "Female".into(),
            date_of_birth: "1990-05-01".into(),
            joined_date: "2020-01-15".into(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let validated = validate(&valid_draft()).unwrap();
        assert_eq!(validated.gender, Gender::Female);
        assert_eq!(
            validated.joined_date,
            NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_blank_draft_flags_all_required_fields() {
        let errors = validate(&EmployeeDraft::blank()).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![
                EmployeeField::FirstName,
                EmployeeField::LastName,
                EmployeeField::EmailAddress,
                EmployeeField::PhoneNumber,
                EmployeeField::DateOfBirth,
                EmployeeField::JoinedDate,
            ]
        );
        assert_eq!(errors.get(EmployeeField::FirstName), Some(MSG_NAME_MIN));
        assert_eq!(errors.get(EmployeeField::EmailAddress), Some(MSG_EMAIL));
        assert_eq!(errors.get(EmployeeField::PhoneNumber), Some(SG_PHONE_MESSAGE));
        assert_eq!(errors.get(EmployeeField::DateOfBirth), Some(MSG_DATE_REQUIRED));
        assert!(!errors.contains(EmployeeField::Gender));
    }

    #[test]
    fn test_name_length_bounds() {
        let mut draft = valid_draft();
        draft.first_name = "Abcde".into();
        draft.last_name = "Abcdefghijk".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(EmployeeField::FirstName), Some(MSG_NAME_MIN));
        assert_eq!(errors.get(EmployeeField::LastName), Some(MSG_NAME_MAX));

        draft.first_name = "Abcdef".into();
        draft.last_name = "Abcdefghij".into();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut draft = valid_draft();
        // Six characters, twelve bytes
        draft.first_name = "Zoë Ïñ".into();
        assert!(!validate(&draft)
            .err()
            .is_some_and(|e| e.contains(EmployeeField::FirstName)));
    }

    #[test]
    fn test_gender_must_be_exact() {
        let mut draft = valid_draft();
        draft.gender = "female".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields(), vec![EmployeeField::Gender]);
        assert_eq!(errors.get(EmployeeField::Gender), Some(MSG_GENDER));
    }

    #[test]
    fn test_email_and_phone_rules() {
        let mut draft = valid_draft();
        draft.email_address = "adeline.example.com".into();
        draft.phone_number = "71234567".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![EmployeeField::EmailAddress, EmployeeField::PhoneNumber]
        );
    }

    #[test]
    fn test_email_needs_dotted_domain() {
        for bad in ["a@b", "user@localhost", "a@[127.0.0.1]", "a@b.c", "a@b.c0"] {
            let mut draft = valid_draft();
            draft.email_address = bad.into();
            let errors = validate(&draft).unwrap_err();
            assert_eq!(errors.get(EmployeeField::EmailAddress), Some(MSG_EMAIL), "{bad}");
        }
        for good in ["a@b.co", "first.last@mail.example.sg", "x@sub-domain.io"] {
            let mut draft = valid_draft();
            draft.email_address = good.into();
            assert!(validate(&draft).is_ok(), "{good}");
        }
    }

    #[test]
    fn test_invalid_calendar_date_is_required_error() {
        let mut draft = valid_draft();
        draft.date_of_birth = "1990-02-30".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields(), vec![EmployeeField::DateOfBirth]);
        assert_eq!(errors.get(EmployeeField::DateOfBirth), Some(MSG_DATE_REQUIRED));
    }

    #[test]
    fn test_joined_not_after_birth_flags_joined_only() {
        for joined in ["1990-05-01", "1989-12-31", "1900-01-01"] {
            let mut draft = valid_draft();
            draft.joined_date = joined.into();
            let errors = validate(&draft).unwrap_err();
            assert_eq!(errors.fields(), vec![EmployeeField::JoinedDate], "{joined}");
            assert_eq!(
                errors.get(EmployeeField::JoinedDate),
                Some(MSG_JOINED_BEFORE_BIRTH)
            );
        }
    }

    #[test]
    fn test_joined_after_birth_passes_cross_field_rule() {
        for joined in ["1990-05-02", "2001-01-01"] {
            let mut draft = valid_draft();
            draft.joined_date = joined.into();
            assert!(validate(&draft).is_ok(), "{joined}");
        }
    }

    #[test]
    fn test_cross_field_rule_skipped_when_a_date_is_missing() {
        let mut draft = valid_draft();
        draft.date_of_birth.clear();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields(), vec![EmployeeField::DateOfBirth]);
    }

    #[test]
    fn test_errors_are_collected_not_short_circuited() {
        let mut draft = valid_draft();
        draft.first_name = "x".into();
        draft.phone_number = "123".into();
        draft.joined_date = "1980-01-01".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![
                EmployeeField::FirstName,
                EmployeeField::PhoneNumber,
                EmployeeField::JoinedDate
            ]
        );
    }

    #[test]
    fn test_payload_round_trips_through_record() {
        let draft = valid_draft();
        let payload = validate(&draft).unwrap().to_api_payload();
        assert!(payload.date_of_birth.ends_with('Z'));

        // Same path as a POST followed by GET /employee/{id}
        let body = serde_json::to_value(&payload).unwrap();
        let mut record = body.as_object().unwrap().clone();
        record.insert("id".into(), "17".into());
        let fetched: Employee = serde_json::from_value(record.into()).unwrap();

        assert_eq!(fetched.to_upsert(), payload);
        assert_eq!(EmployeeDraft::from_employee(&fetched), draft);
    }

    #[test]
    fn test_set_field_and_field_agree() {
        let mut draft = EmployeeDraft::blank();
        for (i, field) in EmployeeField::ALL.iter().enumerate() {
            draft.set_field(*field, format!("v{i}"));
        }
        for (i, field) in EmployeeField::ALL.iter().enumerate() {
            assert_eq!(draft.field(*field), format!("v{i}"));
        }
    }
}
