//! Demo command - walkthrough với hai nhân viên

use anyhow::Result;
use employee_core::EmployeeRecord;

/// Những giá trị walkthrough in ra, theo đúng thứ tự.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    pub emails: [String; 2],
    pub full_name: String,
    pub multiplier: f64,
    pub pay_before: i64,
    pub pay_after: i64,
    pub untouched_multiplier: f64,
}

/// Chạy walkthrough: John Doe 5000 và Test User 6000, chỉ John được ghi đè hệ số.
pub fn run() -> Walkthrough {
    let mut emp_1 = EmployeeRecord::new("John", "Doe", 5000);
    let emp_2 = EmployeeRecord::new("Test", "User", 6000);

    let emails = [emp_1.email().to_string(), emp_2.email().to_string()];

    // Gọi qua đường dẫn kiểu, tương đương emp_2.full_name()
    let full_name = EmployeeRecord::full_name(&emp_2);

    emp_1.set_raise_multiplier(1.05);
    let pay_before = emp_1.pay();
    emp_1.apply_raise();

    Walkthrough {
        emails,
        full_name,
        multiplier: emp_1.raise_multiplier(),
        pay_before,
        pay_after: emp_1.pay(),
        untouched_multiplier: emp_2.raise_multiplier(),
    }
}

pub fn handle() -> Result<()> {
    let walkthrough = run();

    println!("📧 Emails:");
    for email in &walkthrough.emails {
        println!("  {}", email);
    }

    println!("👤 {}", walkthrough.full_name);

    println!(
        "💰 John Doe x{} (default x{})",
        walkthrough.multiplier,
        EmployeeRecord::DEFAULT_RAISE_MULTIPLIER
    );
    println!("  before: {}", walkthrough.pay_before);
    println!("  after:  {}", walkthrough.pay_after);

    log::debug!("Test User still uses x{}", walkthrough.untouched_multiplier);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough_values() {
        let walkthrough = run();

        assert_eq!(walkthrough.emails, ["John.Doe@abc.com", "Test.User@abc.com"]);
        assert_eq!(walkthrough.full_name, "Test User");
        assert_eq!(walkthrough.multiplier, 1.05);
        assert_eq!(walkthrough.pay_before, 5000);
        assert_eq!(walkthrough.pay_after, 5250);
        assert_eq!(walkthrough.untouched_multiplier, 1.04);
    }

    #[test]
    fn test_handle_succeeds() {
        assert!(handle().is_ok());
    }
}
