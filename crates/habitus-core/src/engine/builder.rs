//! Builder for creating and configuring a SQLite-backed QueryEngine.

use std::path::{Path, PathBuf};

use log::debug;

use super::QueryEngine;
use crate::{
    db::Database,
    error::{HabitusError, Result},
    models::ItemFilter,
};

/// Builder for creating and configuring [`QueryEngine`] instances over a
/// [`Database`].
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    database_path: Option<PathBuf>,
    filter: ItemFilter,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/habitus/habitus.db` or `~/.local/share/habitus/habitus.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the filter the engine starts with.
    pub fn with_filter(mut self, filter: ItemFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Opens the database and builds the engine.
    ///
    /// # Errors
    ///
    /// Returns `HabitusError::FileSystem` if the database directory cannot be
    /// created, `HabitusError::XdgDirectory` if no default location exists,
    /// and `HabitusError::Database` or `HabitusError::Configuration` if the
    /// database cannot be opened or has an unsupported schema.
    pub fn build(self) -> Result<QueryEngine<Database>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| HabitusError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("opening database at {}", db_path.display());
        let database = Database::new(&db_path)?;
        Ok(QueryEngine::with_filter(database, self.filter))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("habitus")
            .place_data_file("habitus.db")
            .map_err(|e| HabitusError::XdgDirectory(e.to_string()))
    }
}
