//! Test fixture loader for YSRN golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

// --- Decomposition ---

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedDecomposition {
    pub relevant: f64,
    pub supplementary: f64,
    pub noise: f64,
    /// snake_case label name: "relevant", "supplementary", or "noise".
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecompositionCase {
    pub name: String,
    pub query: Vec<f32>,
    pub context: Vec<f32>,
    /// Ordered (constraint id, weight) pairs.
    pub constraints: Vec<(String, f64)>,
    pub expected: ExpectedDecomposition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecompositionFixture {
    pub description: String,
    pub cases: Vec<DecompositionCase>,
}

pub fn decomposition_reference() -> DecompositionFixture {
    load_fixture("golden/decomposition/reference_pairs.json")
}

// --- Retrieval ---

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCandidate {
    pub id: String,
    pub embedding: Vec<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalCase {
    pub name: String,
    pub query: Vec<f32>,
    pub candidates: Vec<FixtureCandidate>,
    pub constraints: Vec<(String, f64)>,
    pub k: usize,
    pub min_relevance: f64,
    pub diversity_threshold: f64,
    pub expected_ids: Vec<String>,
    /// Gated scores in result order, when the case pins them.
    #[serde(default)]
    pub expected_scores: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalFixture {
    pub description: String,
    pub cases: Vec<RetrievalCase>,
}

pub fn retrieval_cases() -> RetrievalFixture {
    load_fixture("golden/retrieval/ranking_cases.json")
}
