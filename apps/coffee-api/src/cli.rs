//! Command-line arguments for the `hot-coffee` binary.

use std::path::PathBuf;

use clap::Parser;

/// Coffee shop management REST API.
///
/// Inventory, menu and orders are stored as JSON files in the data directory.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hot-coffee", version, about)]
pub struct Cli {
    /// Port number to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to the data directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "hot-coffee",
            "--port",
            "8080",
            "--dir",
            "/srv/coffee",
            "--config",
            "coffee.toml",
        ])
        .unwrap();

        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/coffee")));
        assert_eq!(cli.config, Some(PathBuf::from("coffee.toml")));
    }

    #[test]
    fn test_flags_are_optional() {
        let cli = Cli::try_parse_from(["hot-coffee"]).unwrap();
        assert!(cli.port.is_none());
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["hot-coffee", "--port", "99999"]).is_err());
    }
}
