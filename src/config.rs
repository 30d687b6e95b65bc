//! Configuration and data directory resolution.
//!
//! Everything lives under one data directory, resolved through a chain:
//!
//! 1. `--home <dir>`: explicit per-command override
//! 2. `TROCA_TURNO_HOME` env var
//! 3. `~/.troca-turno`
//!
//! The config file is `<data dir>/config.toml`. Every key is optional and a
//! missing file means defaults.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

/// Environment variable naming the data directory.
pub const HOME_ENV: &str = "TROCA_TURNO_HOME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory; pass --home or set {}", HOME_ENV)]
    NoHome,

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Shift names accepted by `shift`. Empty accepts any name.
    pub shifts: Vec<String>,

    /// Where reports are written. Defaults to the current directory.
    pub output_dir: Option<PathBuf>,

    /// Rasterization scale for PNG export.
    pub render_scale: f32,

    /// Program used to open the print document.
    /// Defaults to the platform opener.
    pub open_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shifts: vec!["A".into(), "B".into(), "C".into()],
            output_dir: None,
            render_scale: 2.0,
            open_command: None,
        }
    }
}

impl Config {
    /// Loads `<home>/config.toml`, falling back to defaults when it is missing.
    pub fn load(home: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(home);

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn path(home: &Path) -> PathBuf {
        home.join("config.toml")
    }

    /// Whether `shift` is one of the configured shifts. Blank names never are.
    pub fn accepts_shift(&self, shift: &str) -> bool {
        if shift.trim().is_empty() {
            return false;
        }
        self.shifts.is_empty() || self.shifts.iter().any(|s| s == shift)
    }

    /// The program that opens files with their default application.
    pub fn opener(&self) -> &str {
        if let Some(command) = &self.open_command
            && !command.is_empty()
        {
            return command;
        }
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(windows) {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

/// Resolves the data directory from the resolution chain.
pub fn resolve_home(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = env::var(HOME_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    dirs::home_dir()
        .map(|h| h.join(".troca-turno"))
        .ok_or(ConfigError::NoHome)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn explicit_home_wins() {
        let home = resolve_home(Some(Path::new("/tmp/turnos"))).unwrap();
        assert_eq!(home, PathBuf::from("/tmp/turnos"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.shifts, ["A", "B", "C"]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            Config::path(dir.path()),
            "shifts = [\"Manhã\", \"Tarde\", \"Noite\"]\nrender-scale = 1.5\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.shifts, ["Manhã", "Tarde", "Noite"]);
        assert!((config.render_scale - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(Config::path(dir.path()), "shifts = 3").unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn shift_validation() {
        let config = Config::default();
        assert!(config.accepts_shift("B"));
        assert!(!config.accepts_shift("D"));

        let open = Config {
            shifts: vec![],
            ..Config::default()
        };
        assert!(open.accepts_shift("qualquer"));
        assert!(!open.accepts_shift(""));
        assert!(!open.accepts_shift(" "));
    }

    #[test]
    fn configured_opener_overrides_platform_default() {
        let config = Config {
            open_command: Some("firefox".into()),
            ..Config::default()
        };
        assert_eq!(config.opener(), "firefox");
    }
}
