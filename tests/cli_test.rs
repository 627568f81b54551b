//! CLI and config tests
//!
//! Argument parsing, config loading from disk and the merge of the two.

use std::path::PathBuf;

use clap::Parser;
use taptext::cli::{Cli, LogLevel};
use taptext::config::{Config, ConfigError};
use taptext::PhraseList;

/// Write `contents` to a fresh file under the temp dir
fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("taptext-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

mod cli_parsing {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["taptext"]);
        assert!(cli.config.is_none());
        assert!(cli.assets.is_none());
        assert!(!cli.mute);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from([
            "taptext",
            "--config",
            "phrases.toml",
            "--assets",
            "./cues",
            "--mute",
            "--log-file",
            "taptext.log",
            "--log-level",
            "trace",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("phrases.toml")));
        assert_eq!(cli.assets, Some(PathBuf::from("./cues")));
        assert!(cli.mute);
        assert_eq!(cli.log_file, Some(PathBuf::from("taptext.log")));
        assert_eq!(cli.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let result = Cli::try_parse_from(["taptext", "--log-level", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        let result = Cli::try_parse_from(["taptext", "search", "x"]);
        assert!(result.is_err());
    }
}

mod config_loading {
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let path = temp_config(
            "phrases.toml",
            r#"phrases = ["Hi. ", "Bye."]
mute = true
"#,
        );
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.phrase_list(), PhraseList::new(["Hi. ", "Bye."]));
        assert_eq!(config.mute, Some(true));
    }

    #[test]
    fn test_load_invalid_toml() {
        let path = temp_config("broken.toml", "phrases = [\"unterminated");
        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_settings_from_file_and_flags() {
        let path = temp_config(
            "settings.toml",
            r#"phrases = ["a ", "b"]
assets = "/opt/cues"
"#,
        );
        let cli = Cli::parse_from(["taptext", "-c", path.to_str().unwrap(), "-m"]);
        let config = Config::load(cli.config.as_deref()).unwrap();
        let settings = cli.settings(config);

        assert_eq!(settings.phrases, PhraseList::new(["a ", "b"]));
        assert_eq!(settings.assets, Some(PathBuf::from("/opt/cues")));
        assert!(settings.mute);
    }
}
