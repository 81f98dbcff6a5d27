use std::fs;
use std::path::Path;

use bruconv_core::document::{parse_document, Node};

use crate::prelude::*;

/// Read the export at `path` and parse it into a document tree
///
/// Nothing useful can be produced from an unreadable export, so both failures
/// are returned to the caller as fatal.
pub fn load_document(path: &Path) -> Result<Node, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
