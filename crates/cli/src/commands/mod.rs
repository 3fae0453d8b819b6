//! CLI Commands

pub mod config;
pub mod demo;
pub mod employee;

use clap::{Parser, Subcommand};

/// Employee record CLI
#[derive(Parser, Debug)]
#[command(name = "employee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a record and print it
    Show(employee::EmployeeArgs),

    /// Apply one or more raises and print the pay after each
    Raise(employee::RaiseArgs),

    /// Replay the two-employee walkthrough
    Demo,

    /// Show configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "employee", "show", "--first", "John", "--last", "Doe", "--pay", "5000",
        ])
        .unwrap();

        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.first, "John");
                assert_eq!(args.pay, 5000);
                assert_eq!(args.multiplier, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_raise_defaults_to_one_time() {
        let cli = Cli::try_parse_from([
            "employee", "raise", "-f", "John", "-l", "Doe", "-p", "5000", "-m", "1.05",
        ])
        .unwrap();

        match cli.command {
            Commands::Raise(args) => {
                assert_eq!(args.times, 1);
                assert_eq!(args.employee.multiplier, Some(1.05));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_pay() {
        let cli = Cli::try_parse_from([
            "employee", "show", "--first", "A", "--last", "B", "--pay=-10",
        ])
        .unwrap();

        match cli.command {
            Commands::Show(args) => assert_eq!(args.pay, -10),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_pay_is_rejected() {
        assert!(Cli::try_parse_from(["employee", "show", "--first", "A", "--last", "B"]).is_err());
    }
}
