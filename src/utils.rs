use crate::error::Error;
use crate::result::Result;
use std::path::{Component, Path};

/// Convert a relative path into a zip entry name.
///
/// Entry names always use `/` and carry no leading `./` or `/`.
pub fn entry_name(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    Error::custom(format!("non UTF-8 path: {}", path.display()))
                })?;
                parts.push(part);
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                return Err(Error::custom(format!(
                    "path escapes the archive root: {}",
                    path.display()
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(Error::custom(format!("empty entry name for {}", path.display())));
    }

    Ok(parts.join("/"))
}
