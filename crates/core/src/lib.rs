//! Core library - Employee record
//!
//! Crate này chứa model `EmployeeRecord`: tên, lương, email suy ra từ tên,
//! và hệ số tăng lương mặc định theo kiểu, có thể ghi đè theo từng instance.

pub mod employee;

pub use employee::{full_name, EmployeeRecord};
