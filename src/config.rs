use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DEFAULT_DB_FILE: &str = "store.db";
pub(crate) const DB_ENV: &str = "STORE_DB";
pub(crate) const ECHO_ENV: &str = "STORE_ECHO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    /// Log every SQL statement at debug level.
    pub(crate) echo: bool,
}

impl Config {
    /// Resolves configuration from the process arguments and environment.
    /// Returns the config and the arguments left after removing `--db <path>`.
    pub(crate) fn from_env(args: &[String]) -> Result<(Self, Vec<String>)> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// `--db <path>` wins over `STORE_DB`, which wins over `./store.db`.
    pub(crate) fn resolve(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Vec<String>)> {
        let mut rest = Vec::with_capacity(args.len());
        let mut flag_path = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--db" {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--db requires a path"))?;
                flag_path = Some(PathBuf::from(path));
            } else {
                rest.push(arg.clone());
            }
        }

        let db_path = flag_path
            .or_else(|| env(DB_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        let echo = env(ECHO_ENV)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok((Self { db_path, echo }, rest))
    }

    /// Creates the parent directory of the database file if it is missing.
    pub(crate) fn ensure_db_dir(&self) -> Result<()> {
        if let Some(dir) = self.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }
        Ok(())
    }
}
