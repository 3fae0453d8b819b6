//! Utils library - Các tiện ích dùng chung
//!
//! Hiện tại chỉ có cấu hình đọc từ environment cho CLI.

pub mod config;

pub use config::*;
