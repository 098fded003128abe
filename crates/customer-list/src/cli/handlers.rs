//! Handlers for the `config` subcommands.

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

use super::ConfigCommand;

/// Execute a `config` subcommand.
///
/// `config_path` is the global `--config` override. Only `show` loads the
/// active configuration; `validate` loads just the file it checks.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, fails validation,
/// or output cannot be written.
pub fn handle_config<W: Write>(
    cmd: ConfigCommand,
    config_path: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
            } else {
                writeln!(out, "Current Configuration")?;
                writeln!(out, "=====================")?;
                writeln!(out)?;
                writeln!(out, "[Record]")?;
                writeln!(
                    out,
                    "  Max last name length: {}",
                    config.record.max_last_name_len
                )?;
                writeln!(out)?;
                writeln!(out, "[Menu]")?;
                writeln!(out, "  Show banner:          {}", config.menu.show_banner)?;
                writeln!(out, "  Prompt:               {:?}", config.menu.prompt)?;
                writeln!(
                    out,
                    "  Allocation trace:     {}",
                    config.menu.allocation_trace
                )?;
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            writeln!(out, "Validating configuration: {}", path.display())?;
            Config::load_from(Some(path))?;
            writeln!(out, "Configuration is valid.")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    use std::io::Write as _;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{contents}").unwrap();
        file
    }

    fn run(cmd: ConfigCommand, config_path: Option<PathBuf>) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = handle_config(cmd, config_path, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_validate_good_file_ignores_broken_active_config() {
        let broken = config_file("[menu]\nprompt = \"\"");
        let good = config_file("[record]\nmax_last_name_len = 20");

        let (result, output) = run(
            ConfigCommand::Validate {
                file: Some(good.path().to_path_buf()),
            },
            Some(broken.path().to_path_buf()),
        );

        assert!(result.is_ok());
        assert!(output.contains("Configuration is valid."));
    }

    #[test]
    fn test_validate_bad_file_fails() {
        let bad = config_file("[menu]\nprompt = \"\"");

        let (result, output) = run(
            ConfigCommand::Validate {
                file: Some(bad.path().to_path_buf()),
            },
            None,
        );

        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
        assert!(!output.contains("Configuration is valid."));
    }

    #[test]
    fn test_validate_falls_back_to_global_config_path() {
        let bad = config_file("[record]\nmax_last_name_len = \"many\"");

        let (result, _) = run(
            ConfigCommand::Validate { file: None },
            Some(bad.path().to_path_buf()),
        );

        assert!(matches!(result, Err(Error::ConfigLoad(_))));
    }

    #[test]
    fn test_show_json() {
        let file = config_file("[record]\nmax_last_name_len = 12");

        let (result, output) = run(
            ConfigCommand::Show { json: true },
            Some(file.path().to_path_buf()),
        );

        assert!(result.is_ok());
        let shown: Config = serde_json::from_str(&output).unwrap();
        assert_eq!(shown.record.max_last_name_len, 12);
    }

    #[test]
    fn test_show_text() {
        let (result, output) = run(
            ConfigCommand::Show { json: false },
            Some(PathBuf::from("/nonexistent/config.toml")),
        );

        assert!(result.is_ok());
        assert!(output.contains("Max last name length: 49"));
    }

    #[test]
    fn test_path_prefers_override() {
        let (result, output) = run(
            ConfigCommand::Path,
            Some(PathBuf::from("/custom/config.toml")),
        );

        assert!(result.is_ok());
        assert_eq!(output, "/custom/config.toml\n");
    }
}
