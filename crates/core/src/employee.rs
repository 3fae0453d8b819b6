//! Employee model

use serde::Serialize;
use std::fmt;

/// Domain gắn vào mọi email được suy ra từ tên.
const EMAIL_DOMAIN: &str = "abc.com";

/// Một nhân viên: tên, lương và email suy ra lúc khởi tạo.
///
/// Hệ số tăng lương dùng chung cho cả kiểu là
/// [`EmployeeRecord::DEFAULT_RAISE_MULTIPLIER`]. Mỗi record có thể ghi đè
/// bằng giá trị riêng mà không ảnh hưởng tới record khác.
///
/// `email` được tính một lần trong [`EmployeeRecord::new`] và lưu lại. Tên
/// không có setter nên email không thể lệch khỏi tên.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    first_name: String,
    last_name: String,
    pay: i64,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raise_multiplier: Option<f64>,
}

impl EmployeeRecord {
    /// Hệ số tăng lương mặc định của kiểu.
    pub const DEFAULT_RAISE_MULTIPLIER: f64 = 1.04;

    /// Tạo employee mới.
    ///
    /// Không validate gì cả: tên rỗng hay lương âm đều được nhận nguyên trạng.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, pay: i64) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = format!("{}.{}@{}", first_name, last_name, EMAIL_DOMAIN);

        Self {
            first_name,
            last_name,
            pay,
            email,
            raise_multiplier: None,
        }
    }

    /// Set raise multiplier khi build
    pub fn with_raise_multiplier(mut self, multiplier: f64) -> Self {
        self.set_raise_multiplier(multiplier);
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn pay(&self) -> i64 {
        self.pay
    }

    /// Họ tên đầy đủ, cách nhau một dấu cách.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Hệ số thực sự được dùng khi tăng lương: override nếu có, nếu không
    /// thì mặc định của kiểu.
    pub fn raise_multiplier(&self) -> f64 {
        self.raise_multiplier.unwrap_or(Self::DEFAULT_RAISE_MULTIPLIER)
    }

    /// Override riêng của record này, nếu đã set.
    pub fn raise_override(&self) -> Option<f64> {
        self.raise_multiplier
    }

    /// Ghi đè hệ số cho riêng record này.
    pub fn set_raise_multiplier(&mut self, multiplier: f64) {
        log::debug!("{}: raise multiplier set to {}", self.email, multiplier);
        self.raise_multiplier = Some(multiplier);
    }

    /// Bỏ override, quay về hệ số mặc định.
    pub fn clear_raise_multiplier(&mut self) {
        if self.raise_multiplier.take().is_some() {
            log::debug!("{}: raise multiplier override cleared", self.email);
        }
    }

    /// Tăng lương: `pay = trunc(pay * multiplier)`.
    ///
    /// Phần thập phân bị cắt về phía 0, không làm tròn. Gọi nhiều lần thì
    /// hệ số được nhân dồn.
    pub fn apply_raise(&mut self) {
        let multiplier = self.raise_multiplier();
        let before = self.pay;
        // `as` cắt phần thập phân về phía 0 (và bão hòa ở biên của i64)
        self.pay = (before as f64 * multiplier) as i64;
        log::debug!(
            "{}: raise x{} applied, pay {} -> {}",
            self.email,
            multiplier,
            before,
            self.pay
        );
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} <{}>", self.first_name, self.last_name, self.pay, self.email)
    }
}

/// Dạng hàm tự do của [`EmployeeRecord::full_name`].
pub fn full_name(employee: &EmployeeRecord) -> String {
    employee.full_name()
}
