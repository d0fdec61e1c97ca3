//! Stop directory: informal name → canonical stop.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::error::StopError;

/// One row of the stop catalogue.
///
/// The catalogue may carry extra columns (such as a leading index column);
/// only `name` and `id` are read.
#[derive(Debug, Deserialize)]
struct StopRecord {
    name: String,
    id: String,
}

/// Derive the lookup key for a stop display name.
///
/// The key is the text before the first comma, lowercased. Whitespace is
/// kept as-is.
///
/// # Examples
///
/// ```
/// use trip_client::stops::stop_key;
///
/// assert_eq!(stop_key("Oslo S, Oslo"), "oslo s");
/// assert_eq!(stop_key("Forskningsparken"), "forskningsparken");
/// ```
pub fn stop_key(name: &str) -> String {
    name.split(',').next().unwrap_or_default().to_lowercase()
}

/// A named stop with its canonical service identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    name: String,
    id: String,
    key: String,
}

impl Stop {
    /// Create a stop, deriving its lookup key from `name`.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        let name = name.into();
        let key = stop_key(&name);
        Self {
            name,
            id: id.into(),
            key,
        }
    }

    /// Display name, e.g. "Oslo S, Oslo".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical identifier, e.g. "NSR:StopPlace:59872".
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Normalized lookup key, e.g. "oslo s".
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Read-only lookup over the stop catalogue.
///
/// Built once and never mutated, so it can be shared freely between
/// independent pipelines.
#[derive(Debug, Clone, Default)]
pub struct StopDirectory {
    by_key: HashMap<String, Vec<Stop>>,
    len: usize,
}

impl StopDirectory {
    /// Build a directory from already-constructed stops.
    ///
    /// Duplicate keys are accepted here; they only surface as
    /// [`StopError::Ambiguous`] when looked up.
    pub fn from_stops(stops: impl IntoIterator<Item = Stop>) -> Self {
        let mut by_key: HashMap<String, Vec<Stop>> = HashMap::new();
        let mut len = 0;
        for stop in stops {
            by_key.entry(stop.key.clone()).or_default().push(stop);
            len += 1;
        }
        Self { by_key, len }
    }

    /// Load a catalogue from CSV with at least `name` and `id` columns.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, StopError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let stops = csv_reader
            .deserialize::<StopRecord>()
            .map(|row| row.map(|r| Stop::new(r.name, r.id)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_stops(stops))
    }

    /// Load a catalogue from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StopError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let directory = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            stops = directory.len(),
            "loaded stop catalogue"
        );
        Ok(directory)
    }

    /// Resolve an informal stop name to exactly one stop.
    ///
    /// The input is lowercased and compared against each stop's key.
    pub fn resolve(&self, informal_name: &str) -> Result<&Stop, StopError> {
        let key = informal_name.to_lowercase();
        match self.by_key.get(&key).map(Vec::as_slice) {
            None | Some([]) => Err(StopError::NotFound { key }),
            Some([stop]) => Ok(stop),
            Some(matches) => Err(StopError::Ambiguous {
                count: matches.len(),
                key,
            }),
        }
    }

    /// Number of stops in the catalogue (including ones with shared keys).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_directory() -> StopDirectory {
        StopDirectory::from_stops([
            Stop::new("Oslo S, Oslo", "NSR:StopPlace:59872"),
            Stop::new("Lillestrøm stasjon, Lillestrøm", "NSR:StopPlace:451"),
            Stop::new("Forskningsparken, Oslo", "NSR:StopPlace:59600"),
        ])
    }

    #[test]
    fn key_is_text_before_first_comma_lowercased() {
        assert_eq!(stop_key("Oslo S, Oslo"), "oslo s");
        assert_eq!(stop_key("A, B, C"), "a");
        assert_eq!(stop_key("NoComma"), "nocomma");
        assert_eq!(stop_key(""), "");
    }

    #[test]
    fn stop_derives_key() {
        let stop = Stop::new("Oslo S, Oslo", "NSR:StopPlace:59872");
        assert_eq!(stop.name(), "Oslo S, Oslo");
        assert_eq!(stop.id(), "NSR:StopPlace:59872");
        assert_eq!(stop.key(), "oslo s");
    }

    #[test]
    fn resolve_informal_name() {
        let dir = sample_directory();
        let stop = dir.resolve("oslo s").unwrap();
        assert_eq!(stop.id(), "NSR:StopPlace:59872");
        assert_eq!(stop.name(), "Oslo S, Oslo");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let dir = sample_directory();
        assert_eq!(
            dir.resolve("Lillestrøm stasjon").unwrap().id(),
            "NSR:StopPlace:451"
        );
        assert_eq!(dir.resolve("OSLO S").unwrap().id(), "NSR:StopPlace:59872");
    }

    #[test]
    fn resolve_unknown_is_not_found() {
        let dir = sample_directory();
        let err = dir.resolve("nonexistent").unwrap_err();
        assert!(matches!(err, StopError::NotFound { key } if key == "nonexistent"));
    }

    #[test]
    fn resolve_full_display_name_is_not_found() {
        // Only the part before the comma is a key.
        let dir = sample_directory();
        assert!(matches!(
            dir.resolve("Oslo S, Oslo"),
            Err(StopError::NotFound { .. })
        ));
    }

    #[test]
    fn resolve_duplicate_key_is_ambiguous() {
        let dir = StopDirectory::from_stops([
            Stop::new("Storo, Oslo", "NSR:StopPlace:1"),
            Stop::new("Storo, Bærum", "NSR:StopPlace:2"),
        ]);
        assert_eq!(dir.len(), 2);
        let err = dir.resolve("storo").unwrap_err();
        assert!(matches!(err, StopError::Ambiguous { count: 2, .. }));
    }

    #[test]
    fn from_reader_ignores_index_column() {
        let csv = "\
,name,id
0,\"Oslo S, Oslo\",NSR:StopPlace:59872
1,\"Forskningsparken, Oslo\",NSR:StopPlace:59600
";
        let dir = StopDirectory::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(
            dir.resolve("forskningsparken").unwrap().id(),
            "NSR:StopPlace:59600"
        );
    }

    #[test]
    fn from_reader_rejects_missing_column() {
        let csv = "name\nOslo S\n";
        assert!(matches!(
            StopDirectory::from_reader(csv.as_bytes()),
            Err(StopError::Csv(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            StopDirectory::load("/nonexistent/stops.csv"),
            Err(StopError::Io(_))
        ));
    }

    #[test]
    fn load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,id").unwrap();
        writeln!(file, "\"Oslo S, Oslo\",NSR:StopPlace:59872").unwrap();

        let dir = StopDirectory::load(file.path()).unwrap();
        assert_eq!(dir.len(), 1);
        assert!(!dir.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Keys never contain a comma
        #[test]
        fn key_has_no_comma(name in "[A-Za-z ,]{0,30}") {
            prop_assert!(!stop_key(&name).contains(','));
        }

        /// Normalizing a key again leaves it unchanged
        #[test]
        fn key_is_idempotent(name in "[A-Za-z ,]{0,30}") {
            let key = stop_key(&name);
            prop_assert_eq!(stop_key(&key), key);
        }

        /// With unique keys, any casing of a stop's key resolves to that stop
        #[test]
        fn unique_keys_resolve(
            names in proptest::collection::btree_set("[a-z]{1,8}", 1..10),
            pick in any::<prop::sample::Index>(),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let stops = names
                .iter()
                .enumerate()
                .map(|(i, n)| Stop::new(format!("{n}, Town"), format!("NSR:StopPlace:{i}")));
            let dir = StopDirectory::from_stops(stops);

            let i = pick.index(names.len());
            let stop = dir.resolve(&names[i].to_uppercase()).unwrap();
            prop_assert_eq!(stop.id(), format!("NSR:StopPlace:{i}"));
        }
    }
}
