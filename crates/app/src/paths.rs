//! Filesystem locations for a settings host, project/app scoped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Paths used by one application: its settings file and log directory,
/// all under a single base directory.
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_path: PathBuf,
    app_id: &'static str,
}

impl AppPaths {
    /// Base under the platform config directory, falling back to the
    /// working directory when the platform reports none.
    pub fn new(project_id: &str, app_id: &'static str) -> Self {
        let base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(project_id);
        Self::with_base_path(base, app_id)
    }

    /// Explicit base directory (tests, debug builds).
    pub fn with_base_path(base_path: PathBuf, app_id: &'static str) -> Self {
        Self { base_path, app_id }
    }

    pub fn app_id(&self) -> &'static str {
        self.app_id
    }

    pub fn app_dir(&self) -> PathBuf {
        self.base_path.join(self.app_id)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.app_dir().join("settings.ron")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_dir().join("logs")
    }

    /// Log file for the current run, timestamped per start.
    pub fn log_file_now(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
        self.logs_dir().join(format!("{}_{stamp}.log", self.app_id))
    }

    pub fn ensure_directories(&self) -> io::Result<()> {
        fs::create_dir_all(self.app_dir())?;
        fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_nest_under_the_app_dir() {
        let paths = AppPaths::with_base_path(PathBuf::from("/tmp/slate-test"), "slate_settings");
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/slate-test/slate_settings/settings.ron")
        );
        assert!(paths.log_file_now().starts_with("/tmp/slate-test/slate_settings/logs"));
    }

    #[test]
    fn ensure_directories_creates_the_tree() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = AppPaths::with_base_path(dir.path().to_path_buf(), "slate_settings");
        paths.ensure_directories().unwrap();
        assert!(paths.logs_dir().is_dir());
    }
}
