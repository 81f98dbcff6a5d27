//! Request item rendering
//!
//! Turns a request node of the export into the text of a `.bru` request file.

use std::fmt;

use indexmap::IndexMap;

use crate::document::{
    child_path, field, index_path, opt_field, opt_seq_field, opt_str_field, str_field,
    DocumentError, Node,
};
use crate::BRU_EXTENSION;

/// Header that is never carried over to the generated request
const DROPPED_HEADER: &str = "User-Agent";

/// Coarse classification of a request body's encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Json,
    MultipartForm,
    FormUrlEncoded,
    None,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Json => "json",
            BodyType::MultipartForm => "multipartForm",
            BodyType::FormUrlEncoded => "formUrlEncoded",
            BodyType::None => "none",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a MIME type by its suffix
///
/// Suffix matching tolerates anything prepended to the MIME string.
pub fn body_type(mime_type: &str) -> BodyType {
    if mime_type.ends_with("application/json") {
        BodyType::Json
    } else if mime_type.ends_with("multipart/form-data") {
        BodyType::MultipartForm
    } else if mime_type.ends_with("application/x-www-form-urlencoded") {
        BodyType::FormUrlEncoded
    } else {
        BodyType::None
    }
}

/// A request item, extracted from the document and ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: String,
    pub name: String,
    /// Lower-cased HTTP method
    pub method: String,
    pub url: String,
    pub body_type: BodyType,
    /// Lower-cased header names in first-seen order
    pub headers: IndexMap<String, String>,
}

impl Request {
    /// Extract a request from the item node at `path`
    pub fn from_node(node: &Node, path: &str) -> Result<Self, DocumentError> {
        let meta_path = child_path(path, "meta");
        let meta = field(node, "meta", path)?;
        let id = str_field(meta, "id", &meta_path)?;
        let name = str_field(node, "name", path)?;
        let method = str_field(node, "method", path)?;
        let url = opt_str_field(node, "url", path)?.unwrap_or_default();

        let body_path = child_path(path, "body");
        let mime_type = match opt_field(node, "body", path)? {
            Some(body) => opt_str_field(body, "mimeType", &body_path)?.unwrap_or_default(),
            None => "",
        };

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            method: method.to_lowercase(),
            url: url.to_string(),
            body_type: body_type(mime_type),
            headers: collect_headers(node, path)?,
        })
    }

    pub fn file_name(&self) -> String {
        request_file_name(&self.name, &self.id)
    }
}

/// Collect the headers of the request node at `path`
///
/// Header names are lower-cased and `User-Agent` is dropped. Entries without a
/// string name and value are skipped. A repeated name keeps its first position
/// and takes the last value, so duplicated headers collapse into one.
pub fn collect_headers(node: &Node, path: &str) -> Result<IndexMap<String, String>, DocumentError> {
    let mut headers = IndexMap::new();

    let Some(entries) = opt_seq_field(node, "headers", path)? else {
        return Ok(headers);
    };

    let headers_path = child_path(path, "headers");
    for (index, entry) in entries.iter().enumerate() {
        let entry_path = index_path(&headers_path, index);
        if entry.as_mapping().is_none() {
            continue;
        }
        let (Ok(Some(name)), Ok(Some(value))) = (
            opt_str_field(entry, "name", &entry_path),
            opt_str_field(entry, "value", &entry_path),
        ) else {
            continue;
        };
        if name == DROPPED_HEADER {
            continue;
        }
        headers.insert(name.to_lowercase(), value.to_string());
    }

    Ok(headers)
}

/// File name of a rendered request: `{name}_{id}.bru` with `/` replaced by `_`
pub fn request_file_name(name: &str, id: &str) -> String {
    format!("{}_{}.{}", name.replace('/', "_"), id, BRU_EXTENSION)
}

/// Render the `.bru` file contents for a request
pub fn render_request(request: &Request) -> String {
    let mut blocks = Vec::with_capacity(4);

    blocks.push(format!(
        "meta {{\n  name: {}\n  type: http\n  seq: 1\n}}",
        request.name
    ));

    blocks.push(format!(
        "{} {{\n  url: {}\n  body: {}\n  auth: inherit\n}}",
        request.method, request.url, request.body_type
    ));

    if !request.headers.is_empty() {
        let lines: Vec<String> = request
            .headers
            .iter()
            .map(|(name, value)| format!("  {name}: {value}"))
            .collect();
        blocks.push(format!("headers {{\n{}\n}}", lines.join("\n")));
    }

    blocks.push("settings {\n  encodeUrl: true\n}".to_string());

    blocks.join("\n\n")
}
