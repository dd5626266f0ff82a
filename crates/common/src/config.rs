use std::path::PathBuf;

use llf_domain::SizeFormat;

use crate::LlfError;

/// How the result is written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<path> <size>` per entry
    #[default]
    Line,
    Table,
    Json,
}

/// Run configuration, assembled from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: PathBuf,
    /// How many of the largest files to report
    pub top: usize,
    pub size_format: SizeFormat,
    pub output: OutputFormat,
    pub max_depth: Option<usize>,
    pub skip_hidden: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            top: 1,
            size_format: SizeFormat::default(),
            output: OutputFormat::default(),
            max_depth: None,
            skip_hidden: false,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), LlfError> {
        if self.top == 0 {
            return Err(LlfError::InvalidArgument(
                "--top must be at least 1".to_string(),
            ));
        }
        if self.root.as_os_str().is_empty() {
            return Err(LlfError::InvalidArgument(
                "directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_scans_current_dir() {
        let config = AppConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.top, 1);
        assert_eq!(config.output, OutputFormat::Line);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_rejected() {
        let config = AppConfig {
            top: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(LlfError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_root_rejected() {
        let config = AppConfig {
            root: PathBuf::new(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(LlfError::InvalidArgument(_))));
    }
}
