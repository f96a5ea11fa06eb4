pub mod aggregate;
pub mod phone;
pub mod schema;

pub use aggregate::{Employee, EmployeeUpsert, Gender};
pub use phone::is_valid_sg_phone;
pub use schema::{
    validate, EmployeeDraft, EmployeeField, FieldError, ValidatedEmployee, ValidationErrors,
};
