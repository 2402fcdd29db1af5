//! Test fixture loader for rulecast CSV datasets.
//!
//! Fixtures live next to this crate under `rules/` and `frequencies/`.
//! Paths resolve from this crate's manifest dir, so they work from any
//! crate in the workspace.

use std::path::PathBuf;

/// Root directory of the test-fixtures folder (this crate's manifest dir).
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// List all CSV files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    files
}

/// Fixture paths used across crates.
pub mod paths {
    /// Small hand-checked rule table (the worked examples).
    pub const RULES_BASIC: &str = "rules/basic_rules.csv";
    /// Rules as written by pandas from an itemset miner (index column, frozensets, inf conviction).
    pub const RULES_MINED: &str = "rules/mined_rules.csv";
    /// Rules with one bad antecedent row and one overlapping row.
    pub const RULES_MALFORMED: &str = "rules/malformed_rules.csv";
    /// Service frequencies, sorted descending.
    pub const SERVICE_FREQUENCIES: &str = "frequencies/sorted_service_frequencies.csv";
}
