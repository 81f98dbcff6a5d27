//! Sub-environment rendering
//!
//! Each entry of `environments.subEnvironments` becomes one `vars` file under
//! the collection's `environments/` directory.

use indexmap::IndexMap;

use crate::document::{
    child_path, index_path, map_field, opt_field, opt_seq_field, scalar_to_string, str_field,
    DocumentError, Node,
};
use crate::BRU_EXTENSION;

/// A named set of variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEnvironment {
    pub name: String,
    /// Variables in document order
    pub vars: IndexMap<String, String>,
}

/// Outcome of looking up the sub-environments of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentLookup {
    /// The document has no `environments` entry
    NoEnvironments,
    /// `environments` exists but has no `subEnvironments` list
    NoSubEnvironments,
    Found(Vec<SubEnvironment>),
}

/// Extract every sub-environment of the document
pub fn parse_sub_environments(document: &Node) -> Result<EnvironmentLookup, DocumentError> {
    let Some(environments) = opt_field(document, "environments", "")? else {
        return Ok(EnvironmentLookup::NoEnvironments);
    };
    let Some(entries) = opt_seq_field(environments, "subEnvironments", "environments")? else {
        return Ok(EnvironmentLookup::NoSubEnvironments);
    };

    let list_path = "environments.subEnvironments";
    let sub_environments = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_sub_environment(entry, &index_path(list_path, index)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EnvironmentLookup::Found(sub_environments))
}

fn parse_sub_environment(node: &Node, path: &str) -> Result<SubEnvironment, DocumentError> {
    let name = str_field(node, "name", path)?;
    let data_path = child_path(path, "data");
    let data = map_field(node, "data", path)?;

    let mut vars = IndexMap::with_capacity(data.len());
    for (key, value) in data {
        let key = scalar_to_string(key, &data_path)?;
        let value = scalar_to_string(value, &child_path(&data_path, &key))?;
        vars.insert(key, value);
    }

    Ok(SubEnvironment {
        name: name.to_string(),
        vars,
    })
}

/// File name of a rendered environment, relative to `environments/`
pub fn environment_file_name(name: &str) -> String {
    format!("{}.{}", name.replace('/', "_"), BRU_EXTENSION)
}

/// Render the `vars` block for a sub-environment
pub fn render_environment(environment: &SubEnvironment) -> String {
    let lines: Vec<String> = environment
        .vars
        .iter()
        .map(|(key, value)| format!("  {key}: {value}"))
        .collect();

    format!("vars {{\n{}\n}}", lines.join("\n"))
}
