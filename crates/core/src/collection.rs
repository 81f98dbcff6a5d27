//! Collection tree walk
//!
//! Items are classified once by the prefix of their `meta.id`, then folders
//! become directories and requests become `.bru` files below them.

use std::path::{Component, Path, PathBuf};

use crate::convert::{Artifact, ConvertError};
use crate::document::{child_path, field, index_path, seq_field, str_field, Node};
use crate::request::{render_request, Request};

pub const FOLDER_PREFIX: &str = "fld_";
pub const REQUEST_PREFIX: &str = "req_";

/// Variant of a collection item, decided by its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    Request,
    Unsupported(String),
}

/// Classify an item by the prefix of its identifier
pub fn classify(id: &str) -> ItemKind {
    if id.starts_with(FOLDER_PREFIX) {
        ItemKind::Folder
    } else if id.starts_with(REQUEST_PREFIX) {
        ItemKind::Request
    } else {
        ItemKind::Unsupported(id.to_string())
    }
}

/// Directory for the folder `name` below `dir`
///
/// The name stays inside `dir`: root and prefix components are dropped, so
/// `/users` maps to `users`, and a `..` component is rejected. A `/` inside the
/// name still nests directories.
pub fn folder_path(dir: &Path, name: &str) -> Result<PathBuf, ConvertError> {
    let mut folder = dir.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => folder.push(part),
            Component::ParentDir => return Err(ConvertError::UnsafeFolderName(name.to_string())),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    Ok(folder)
}

/// Walk the collection depth-first and return what has to be written
///
/// `path` is the document location of `items`, used in error messages.
/// Artifact paths are relative to the collection root and come out in
/// document order, each directory before its contents.
pub fn plan_collection(items: &[Node], path: &str) -> Result<Vec<Artifact>, ConvertError> {
    let mut artifacts = Vec::new();
    walk(items, Path::new(""), path, &mut artifacts)?;
    Ok(artifacts)
}

fn walk(
    items: &[Node],
    dir: &Path,
    path: &str,
    artifacts: &mut Vec<Artifact>,
) -> Result<(), ConvertError> {
    for (index, item) in items.iter().enumerate() {
        let item_path = index_path(path, index);
        let meta = field(item, "meta", &item_path)?;
        let id = str_field(meta, "id", &child_path(&item_path, "meta"))?;

        match classify(id) {
            ItemKind::Folder => {
                let name = str_field(item, "name", &item_path)?;
                let folder = folder_path(dir, name)?;
                artifacts.push(Artifact::Directory(folder.clone()));

                let children = seq_field(item, "children", &item_path)?;
                walk(
                    children,
                    &folder,
                    &child_path(&item_path, "children"),
                    artifacts,
                )?;
            }
            ItemKind::Request => {
                let request = Request::from_node(item, &item_path)?;
                artifacts.push(Artifact::File {
                    path: dir.join(request.file_name()),
                    contents: render_request(&request),
                });
            }
            ItemKind::Unsupported(id) => return Err(ConvertError::UnsupportedItem(id)),
        }
    }

    Ok(())
}
