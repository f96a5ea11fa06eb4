pub mod a001_employee;
pub mod common;
