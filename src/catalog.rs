//! Static hole and language catalog
//!
//! Loaded once at startup and read-only afterwards. Lookups never fail:
//! an unknown hole id yields an empty [`Hole`].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Hole, Lang},
};

/// On-disk layout of the catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    holes: Vec<Hole>,
    #[serde(default)]
    langs: Vec<Lang>,
}

/// Immutable lookup over every configured hole and the ordered language roster
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    holes: HashMap<String, Hole>,
    langs: Vec<Lang>,
    empty: Hole,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate hole or language ids
    pub fn new(holes: Vec<Hole>, langs: Vec<Lang>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(holes.len());
        for hole in holes {
            if by_id.contains_key(&hole.id) {
                return Err(AppError::Configuration(format!("duplicate hole id: {}", hole.id)));
            }
            by_id.insert(hole.id.clone(), hole);
        }

        for (i, lang) in langs.iter().enumerate() {
            if langs[..i].iter().any(|l| l.id == lang.id) {
                return Err(AppError::Configuration(format!("duplicate lang id: {}", lang.id)));
            }
        }

        Ok(Self {
            holes: by_id,
            langs,
            empty: Hole::default(),
        })
    }

    /// Parse a catalog from TOML source
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let file: CatalogFile = toml::from_str(source)
            .map_err(|e| AppError::Configuration(format!("invalid catalog: {e}")))?;
        Self::new(file.holes, file.langs)
    }

    /// Read and parse the catalog file at `path`
    pub fn load(path: &Path) -> AppResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Look up a hole, falling back to an empty one
    pub fn hole(&self, id: &str) -> &Hole {
        self.holes.get(id).unwrap_or(&self.empty)
    }

    /// The language roster in configured order
    pub fn langs(&self) -> &[Lang] {
        &self.langs
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
        [[holes]]
        id = "fizzbuzz"
        name = "FizzBuzz"
        preamble = "<p>Print the numbers from 1 to 100.</p>"

        [[holes]]
        id = "fibonacci"
        name = "Fibonacci"

        [[langs]]
        id = "python"
        name = "Python"

        [[langs]]
        id = "go"
        name = "Go"
    "#;

    #[test]
    fn test_lookup_known_hole() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let hole = catalog.hole("fizzbuzz");
        assert_eq!(hole.name, "FizzBuzz");
        assert_eq!(hole.preamble, "<p>Print the numbers from 1 to 100.</p>");
        assert_eq!(catalog.hole("fibonacci").preamble, "");
        assert_eq!(catalog.hole_count(), 2);
    }

    #[test]
    fn test_unknown_hole_is_empty() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let hole = catalog.hole("no-such-hole");
        assert_eq!(hole.name, "");
        assert_eq!(hole.preamble, "");
    }

    #[test]
    fn test_roster_keeps_file_order() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let ids: Vec<_> = catalog.langs().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["python", "go"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dup_hole = r#"
            [[holes]]
            id = "a"
            name = "A"
            [[holes]]
            id = "a"
            name = "Again"
        "#;
        assert!(matches!(
            Catalog::from_toml_str(dup_hole),
            Err(AppError::Configuration(_))
        ));

        let dup_lang = r#"
            [[langs]]
            id = "c"
            name = "C"
            [[langs]]
            id = "c"
            name = "C"
        "#;
        assert!(Catalog::from_toml_str(dup_lang).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.langs().len(), 2);

        assert!(Catalog::load(Path::new("/nonexistent/catalog.toml")).is_err());
    }
}
