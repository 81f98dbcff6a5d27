//! Collection descriptor (`bruno.json`)

use serde::Serialize;

pub const BRUNO_JSON: &str = "bruno.json";

/// Entries Bruno skips when scanning the collection directory
const IGNORED_PATHS: [&str; 2] = ["node_modules", ".git"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrunoConfig {
    pub version: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ignore: Vec<String>,
}

impl BrunoConfig {
    pub fn new(name: &str) -> Self {
        Self {
            version: "1".to_string(),
            name: name.to_string(),
            kind: "collection".to_string(),
            ignore: IGNORED_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Render the `bruno.json` descriptor for a collection named `name`
pub fn render_bruno_json(name: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&BrunoConfig::new(name))
}
