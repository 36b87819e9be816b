use crate::console::Palette;
use clap::Parser;
use std::path::PathBuf;

/// Browse and settle peer-to-peer transfers from a terminal
#[derive(Parser, Debug)]
#[command(name = "transfer-ledger")]
#[command(about = "Browse and settle peer-to-peer transfers from a terminal", long_about = None)]
pub struct CliArgs {
    /// Accounts CSV file: account_id, username, balance
    #[arg(
        long = "accounts",
        value_name = "FILE",
        help = "Path to the accounts CSV file"
    )]
    pub accounts: PathBuf,

    /// Transfers CSV file: transfer_id, transfer_type_id, transfer_status_id, account_from, account_to, amount
    #[arg(
        long = "transfers",
        value_name = "FILE",
        help = "Path to the transfers CSV file (optional, starts with no transfers)"
    )]
    pub transfers: Option<PathBuf>,

    /// Log in as this user and skip the login menu
    #[arg(long = "user", value_name = "USERNAME")]
    pub user: Option<String>,

    /// Disable colors in tables
    #[arg(long = "plain", help = "Render tables without ANSI colors")]
    pub plain: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = crate::logging::DEFAULT_LEVEL,
        help = "Log filter, e.g. 'info' or 'transfer_ledger=debug' (RUST_LOG overrides)"
    )]
    pub log_level: String,
}

impl CliArgs {
    pub fn palette(&self) -> Palette {
        if self.plain {
            Palette::Plain
        } else {
            Palette::Ansi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::accounts_only(&["program", "--accounts", "a.csv"], None, None)]
    #[case::with_transfers(&["program", "--accounts", "a.csv", "--transfers", "t.csv"], Some("t.csv"), None)]
    #[case::with_user(&["program", "--accounts", "a.csv", "--user", "bob"], None, Some("bob"))]
    fn test_file_and_user_options(
        #[case] args: &[&str],
        #[case] transfers: Option<&str>,
        #[case] user: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.accounts, PathBuf::from("a.csv"));
        assert_eq!(parsed.transfers, transfers.map(PathBuf::from));
        assert_eq!(parsed.user.as_deref(), user);
    }

    #[rstest]
    #[case::default(&["program", "--accounts", "a.csv"], Palette::Ansi)]
    #[case::plain(&["program", "--accounts", "a.csv", "--plain"], Palette::Plain)]
    fn test_palette(#[case] args: &[&str], #[case] expected: Palette) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.palette(), expected);
    }

    #[rstest]
    #[case::default(&["program", "--accounts", "a.csv"], "warn")]
    #[case::explicit(&["program", "--accounts", "a.csv", "--log-level", "debug"], "debug")]
    fn test_log_level(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[rstest]
    #[case::missing_accounts(&["program"])]
    #[case::missing_value(&["program", "--accounts"])]
    #[case::unknown_flag(&["program", "--accounts", "a.csv", "--strategy", "sync"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
