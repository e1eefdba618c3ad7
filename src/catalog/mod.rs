//! catalog
//!
//! Catalog seed schema and loading.
//!
//! # Overview
//!
//! A catalog seed describes the books and users to register, in order.
//! Commands either use the built-in seed (the stock demo data) or load a
//! TOML file passed via `--catalog`.
//!
//! Unlike optional config files, a catalog named on the command line must
//! exist and parse; both failures are errors.
//!
//! # Example
//!
//! ```
//! use circulate::catalog::CatalogFile;
//!
//! let registry = CatalogFile::default_seed().into_registry();
//! assert_eq!(registry.books().len(), 2);
//! assert_eq!(registry.users().len(), 2);
//! ```

pub mod schema;

pub use schema::{BookSeed, CatalogFile, UserSeed};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

impl CatalogFile {
    /// Load a catalog seed from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ReadError`] if the file cannot be read and
    /// [`CatalogError::ParseError`] if it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_well_formed_catalog() {
        let file = write_catalog(
            r#"
            [[books]]
            id = 1
            title = "The Great Gatsby"
            author = "F. Scott Fitzgerald"

            [[users]]
            id = 105
            name = "Alok"
            age = 24
            role = "patron"
            "#,
        );
        let catalog = CatalogFile::load(file.path()).unwrap();
        assert_eq!(catalog.books.len(), 1);
        assert_eq!(catalog.users.len(), 1);
        assert_eq!(catalog.books[0].title, "The Great Gatsby");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = CatalogFile::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::ReadError { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.toml"));
    }

    #[test]
    fn unknown_role_is_a_parse_error() {
        let file = write_catalog(
            r#"
            [[users]]
            id = 1
            name = "X"
            age = 1
            role = "janitor"
            "#,
        );
        let err = CatalogFile::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_catalog(
            r#"
            [[books]]
            id = 1
            title = "T"
            author = "A"
            isbn = "not-a-field"
            "#,
        );
        assert!(matches!(
            CatalogFile::load(file.path()),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn empty_sections_default_to_empty_lists() {
        let file = write_catalog("");
        let catalog = CatalogFile::load(file.path()).unwrap();
        assert!(catalog.books.is_empty());
        assert!(catalog.users.is_empty());
    }
}
