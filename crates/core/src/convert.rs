//! Whole-document conversion plan
//!
//! The plan lists every directory and file of the output collection. It is
//! built completely before anything touches the filesystem, so a malformed
//! export is rejected without leaving a half-written collection behind.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::bruno::{render_bruno_json, BRUNO_JSON};
use crate::collection::plan_collection;
use crate::document::{opt_seq_field, DocumentError, Node};
use crate::environment::{
    environment_file_name, parse_sub_environments, render_environment, EnvironmentLookup,
};

/// Directory holding the rendered sub-environments
pub const ENVIRONMENTS_DIR: &str = "environments";

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unsupported item type: {0}")]
    UnsupportedItem(String),

    #[error("Folder name escapes the collection directory: {0}")]
    UnsafeFolderName(String),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Failed to render bruno.json: {0}")]
    Descriptor(#[from] serde_json::Error),
}

/// One entry of the output collection, relative to its root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Directory(PathBuf),
    File { path: PathBuf, contents: String },
}

impl Artifact {
    pub fn path(&self) -> &Path {
        match self {
            Artifact::Directory(path) => path,
            Artifact::File { path, .. } => path,
        }
    }
}

/// Something worth telling the user that does not stop the conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoEnvironments,
    NoSubEnvironments,
    NoCollection,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoEnvironments => write!(f, "No environments found in the Insomnia file."),
            Notice::NoSubEnvironments => {
                write!(f, "No sub-environments found in the Insomnia file.")
            }
            Notice::NoCollection => write!(f, "No collection found in the Insomnia file."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPlan {
    pub artifacts: Vec<Artifact>,
    pub notices: Vec<Notice>,
    /// Number of request files in the plan
    pub requests: usize,
}

/// Build the full output plan for an export document
///
/// The plan starts with `bruno.json` and the `environments/` directory, which
/// are always produced, followed by one file per sub-environment and then the
/// collection tree.
pub fn plan_conversion(
    document: &Node,
    collection_name: &str,
) -> Result<ConversionPlan, ConvertError> {
    let mut plan = ConversionPlan::default();

    plan.artifacts.push(Artifact::File {
        path: PathBuf::from(BRUNO_JSON),
        contents: render_bruno_json(collection_name)?,
    });

    plan.artifacts.push(Artifact::Directory(ENVIRONMENTS_DIR.into()));

    match parse_sub_environments(document)? {
        EnvironmentLookup::NoEnvironments => plan.notices.push(Notice::NoEnvironments),
        EnvironmentLookup::NoSubEnvironments => plan.notices.push(Notice::NoSubEnvironments),
        EnvironmentLookup::Found(environments) => {
            for environment in &environments {
                plan.artifacts.push(Artifact::File {
                    path: Path::new(ENVIRONMENTS_DIR)
                        .join(environment_file_name(&environment.name)),
                    contents: render_environment(environment),
                });
            }
        }
    }

    match opt_seq_field(document, "collection", "")? {
        Some(items) => {
            let tree = plan_collection(items, "collection")?;
            plan.requests = tree
                .iter()
                .filter(|artifact| matches!(artifact, Artifact::File { .. }))
                .count();
            plan.artifacts.extend(tree);
        }
        None => plan.notices.push(Notice::NoCollection),
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    const EXPORT: &str = r#"
type: collection.insomnia.rest/5.0
name: Example
meta:
  id: wrk_1
collection:
  - name: Auth
    meta:
      id: fld_auth
    children:
      - name: Login
        meta:
          id: req_login
        method: POST
        url: https://api.example.com/login
        body:
          mimeType: application/json
          text: "{}"
        headers:
          - name: Content-Type
            value: application/json
environments:
  name: Base Environment
  meta:
    id: env_base
  subEnvironments:
    - name: dev
      meta:
        id: env_dev
      data:
        API_KEY: abc
"#;

    fn file<'a>(plan: &'a ConversionPlan, path: &str) -> &'a str {
        plan.artifacts
            .iter()
            .find_map(|artifact| match artifact {
                Artifact::File { path: p, contents } if p == Path::new(path) => {
                    Some(contents.as_str())
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("no file planned at {path}"))
    }

    #[test]
    fn test_plan_conversion_full_export() {
        let document = parse_document(EXPORT).unwrap();
        let plan = plan_conversion(&document, "Example").unwrap();

        assert!(plan.notices.is_empty());
        assert_eq!(
            plan.artifacts[1],
            Artifact::Directory(PathBuf::from("environments"))
        );
        assert!(file(&plan, "bruno.json").contains("\"name\": \"Example\""));
        assert_eq!(file(&plan, "environments/dev.bru"), "vars {\n  API_KEY: abc\n}");

        let login = file(&plan, "Auth/Login_req_login.bru");
        assert!(login.contains("post {"));
        assert!(login.contains("  body: json"));
        assert!(login.contains("headers {\n  content-type: application/json\n}"));
        assert_eq!(plan.requests, 1);
    }

    #[test]
    fn test_plan_conversion_without_environments() {
        let document = parse_document("collection: []").unwrap();
        let plan = plan_conversion(&document, "Empty").unwrap();

        assert_eq!(plan.notices, vec![Notice::NoEnvironments]);
        assert_eq!(plan.artifacts.len(), 2);
        assert_eq!(plan.requests, 0);
    }

    #[test]
    fn test_plan_conversion_without_sub_environments() {
        let document = parse_document("collection: []\nenvironments:\n  name: Base\n").unwrap();
        let plan = plan_conversion(&document, "Empty").unwrap();
        assert_eq!(plan.notices, vec![Notice::NoSubEnvironments]);
    }

    #[test]
    fn test_plan_conversion_without_collection() {
        let document = parse_document("name: Empty").unwrap();
        let plan = plan_conversion(&document, "Empty").unwrap();
        assert_eq!(
            plan.notices,
            vec![Notice::NoEnvironments, Notice::NoCollection]
        );
    }

    #[test]
    fn test_plan_conversion_rejects_non_mapping_document() {
        let document = parse_document("just text").unwrap();
        assert!(matches!(
            plan_conversion(&document, "Broken"),
            Err(ConvertError::Document(DocumentError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_plan_conversion_unsupported_item_aborts() {
        let document =
            parse_document("collection:\n  - name: Odd\n    meta:\n      id: xyz_1\n").unwrap();
        let err = plan_conversion(&document, "Broken").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported item type: xyz_1");
    }
}
