use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[arg(
        short,
        long,
        default_value = "configuration",
        help = "Directory holding base.toml and the per environment overrides"
    )]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Log in, the password is read from stdin
    Login { username: String },
    /// End the session on the server and forget it locally
    Logout,
    /// Show who is logged in and what they may do
    Whoami,
    /// Reload the permissions of the logged in user
    RefreshPermissions,
    /// List orders
    Orders {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Products at or below the stock threshold
    LowStock {
        #[arg(long)]
        threshold: Option<u32>,
    },
    /// Finance summary
    IncomeStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["apexflow", "whoami"], Command::Whoami)]
    #[case(&["apexflow", "login", "alice"], Command::Login { username: "alice".into() })]
    #[case(
        &["apexflow", "orders", "--page", "2", "--keyword", "abc"],
        Command::Orders { page: 2, page_size: 10, keyword: Some("abc".into()) }
    )]
    #[case(&["apexflow", "low-stock"], Command::LowStock { threshold: None })]
    fn parses(#[case] args: &[&str], #[case] expected: Command) {
        let actual = Cli::try_parse_from(args).unwrap();
        assert_eq!(actual.command, expected);
        assert!(!actual.is_to_std_out);
        assert_eq!(actual.config_dir, PathBuf::from("configuration"));
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["apexflow"]).is_err());
    }
}
