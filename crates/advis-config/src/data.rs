//! Snapshot data location.

use std::collections::BTreeMap;
use std::path::PathBuf;

use advis_core::enums::TableKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding the CSV snapshot. Empty means "use the snapshot
    /// compiled into the binary".
    #[serde(default)]
    pub dir: String,

    /// Per-table file name overrides keyed by table name (`students`,
    /// `lms_events`, ...). Tables without an entry use their default name.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl DataConfig {
    /// Whether a snapshot directory is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.dir.is_empty()
    }

    /// Configured directory, if any.
    #[must_use]
    pub fn dir_path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(&self.dir))
    }

    /// File name for `table`, honouring overrides.
    #[must_use]
    pub fn file_name(&self, table: TableKind) -> &str {
        self.files
            .get(table.as_str())
            .map_or_else(|| table.default_file_name(), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_by_default() {
        let config = DataConfig::default();
        assert!(!config.is_configured());
        assert!(config.dir_path().is_none());
        assert_eq!(config.file_name(TableKind::Students), "students.csv");
    }

    #[test]
    fn file_override_applies_to_one_table() {
        let mut config = DataConfig::default();
        config
            .files
            .insert(String::from("lms_events"), String::from("LMS.csv"));
        assert_eq!(config.file_name(TableKind::LmsEvents), "LMS.csv");
        assert_eq!(config.file_name(TableKind::TermGpas), "term_gpas.csv");
    }
}
