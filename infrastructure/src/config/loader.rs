//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment variable prefix, e.g. `GROWTH_INDEX_REPORT__ADMIN_EMAIL`
pub const ENV_PREFIX: &str = "GROWTH_INDEX_";

const PROJECT_FILES: [&str; 2] = ["growth-index.toml", ".growth-index.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `GROWTH_INDEX_` (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./growth-index.toml` or `./.growth-index.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/growth-index/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("growth-index").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations, in priority order
    pub fn describe_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}*", ENV_PREFIX));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_config::EmailTransportKind;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.email.transport, EmailTransportKind::Smtp);
        assert!(config.output.write_artifacts);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("growth-index"));
        }
    }

    /// Point the global config lookup into the jail
    fn isolate_global_config(jail: &mut figment::Jail) {
        let dir = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", dir.display());
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                "custom.toml",
                r#"
                [report]
                admin_email = "ops@tgc.test"

                [email]
                transport = "outbox"
                "#,
            )?;

            let path = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.report.admin_email, "ops@tgc.test");
            assert_eq!(config.email.transport, EmailTransportKind::Outbox);
            // Untouched sections keep their defaults
            assert_eq!(config.email.smtp.port, 587);
            assert_eq!(config.report.sender_email, "reports@example.com");
            Ok(())
        });
    }

    #[test]
    fn test_type_errors_are_reported() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("custom.toml", "[email.smtp]\nport = \"not a number\"")?;

            assert!(ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                "growth-index.toml",
                r#"
                [report]
                admin_email = "file@tgc.test"
                organization = "From File"
                "#,
            )?;
            jail.set_env("GROWTH_INDEX_REPORT__ADMIN_EMAIL", "env@tgc.test");
            jail.set_env("GROWTH_INDEX_EMAIL__TRANSPORT", "outbox");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.report.admin_email, "env@tgc.test");
            assert_eq!(config.report.organization, "From File");
            assert_eq!(config.email.transport, EmailTransportKind::Outbox);
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_lists_explicit_path() {
        let path = PathBuf::from("/definitely/missing/growth-index.toml");
        let lines = ConfigLoader::describe_sources(Some(&path));
        assert!(lines.iter().any(|l| l.contains("[MISS ] Explicit")));
        assert!(lines.last().unwrap().contains("Default"));
    }
}
