use clap::Parser;
use std::path::PathBuf;

/// A command-driven single-line text editor.
#[derive(Debug, Parser)]
#[command(name = "strand", version)]
pub struct Cli {
    /// Initial line content to edit.
    pub text: Option<String>,

    /// Path to a strand.toml config file.
    #[arg(long, env = "STRAND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path (or directory for the pid-stamped default name).
    #[arg(long, env = "STRAND_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_initial_text_and_flags() {
        let cli = Cli::parse_from(["strand", "hello world", "--config", "/tmp/strand.toml"]);
        assert_eq!(cli.text.as_deref(), Some("hello world"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/strand.toml")));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn all_arguments_are_optional() {
        let cli = Cli::parse_from(["strand"]);
        assert_eq!(cli.text, None);
        assert_eq!(cli.config, None);
    }
}
