use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::LoadConfig;
use crate::convert::parse_registry;
use crate::error::{Result, SchemaError};
use crate::model::NetworksRegistry;

/// Read and parse a registry file with the default config.
pub fn load_registry(path: &Path) -> Result<NetworksRegistry> {
    load_registry_with_config(path, &LoadConfig::default())
}

/// Read and parse a registry file.
pub fn load_registry_with_config(path: &Path, config: &LoadConfig) -> Result<NetworksRegistry> {
    let content = read_document(path, config)?;
    parse_registry(&content)
}

/// Read a registry file as text, enforcing the load policy.
pub fn read_document(path: &Path, config: &LoadConfig) -> Result<String> {
    let io_error = |source: std::io::Error| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    };

    let link_metadata = std::fs::symlink_metadata(path).map_err(io_error)?;
    if link_metadata.file_type().is_symlink() && !config.allow_symlinks {
        warn!(path = %path.display(), "refusing registry symlink");
        return Err(SchemaError::LoadFailed(format!(
            "refusing to load registry symlink: {}",
            path.display()
        )));
    }

    let file = std::fs::File::open(path).map_err(io_error)?;
    let metadata = file.metadata().map_err(io_error)?;
    if !metadata.is_file() {
        return Err(SchemaError::LoadFailed(format!(
            "not a regular file: {}",
            path.display()
        )));
    }

    let max_bytes = config.max_document_size;
    if metadata.len() > max_bytes as u64 {
        warn!(path = %path.display(), size = metadata.len(), max = max_bytes, "registry too large");
        return Err(SchemaError::LoadFailed(format!(
            "registry file too large ({} bytes, max {max_bytes}): {}",
            metadata.len(),
            path.display()
        )));
    }

    // The file may grow between stat and read.
    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(io_error)?;
    if content.len() > max_bytes {
        return Err(SchemaError::LoadFailed(format!(
            "registry file too large while reading: {}",
            path.display()
        )));
    }

    debug!(path = %path.display(), bytes = content.len(), "read registry file");
    Ok(content)
}
