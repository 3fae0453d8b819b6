//! Employee commands

use anyhow::Result;
use clap::Args;
use employee_core::EmployeeRecord;
use employee_utils::AppConfig;

#[derive(Args, Debug)]
pub struct EmployeeArgs {
    /// First name
    #[arg(short, long)]
    pub first: String,

    /// Last name
    #[arg(short, long)]
    pub last: String,

    /// Current pay
    #[arg(short, long, allow_negative_numbers = true)]
    pub pay: i64,

    /// Raise multiplier for this employee only (default 1.04)
    #[arg(short, long)]
    pub multiplier: Option<f64>,
}

impl EmployeeArgs {
    pub fn build(&self) -> EmployeeRecord {
        let employee = EmployeeRecord::new(&self.first, &self.last, self.pay);
        match self.multiplier {
            Some(multiplier) => employee.with_raise_multiplier(multiplier),
            None => employee,
        }
    }
}

#[derive(Args, Debug)]
pub struct RaiseArgs {
    #[command(flatten)]
    pub employee: EmployeeArgs,

    /// Number of raises to apply
    #[arg(short, long, default_value_t = 1)]
    pub times: u32,
}

pub fn show(config: &AppConfig, args: EmployeeArgs) -> Result<()> {
    let employee = args.build();

    println!("👤 {}", employee.full_name());
    println!("{}", config.to_json(&employee)?);

    Ok(())
}

pub fn raise(args: RaiseArgs) -> Result<()> {
    let mut employee = args.employee.build();

    println!(
        "💰 {} ({}) x{}",
        employee.full_name(),
        employee.email(),
        employee.raise_multiplier()
    );
    println!("  start: {}", employee.pay());
    for round in 1..=args.times {
        employee.apply_raise();
        println!("  raise {}: {}", round, employee.pay());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(multiplier: Option<f64>) -> EmployeeArgs {
        EmployeeArgs {
            first: "John".to_string(),
            last: "Doe".to_string(),
            pay: 5000,
            multiplier,
        }
    }

    #[test]
    fn test_build_without_multiplier() {
        let employee = args(None).build();
        assert_eq!(employee.email(), "John.Doe@abc.com");
        assert_eq!(employee.raise_override(), None);
    }

    #[test]
    fn test_build_with_multiplier() {
        let mut employee = args(Some(1.05)).build();
        employee.apply_raise();
        assert_eq!(employee.pay(), 5250);
    }
}
