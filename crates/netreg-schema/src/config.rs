/// Controls how registry files are read from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Maximum bytes accepted for a registry file.
    pub max_document_size: usize,
    /// When false, a registry path that is a symlink is refused.
    pub allow_symlinks: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_document_size: 16 * 1024 * 1024,
            allow_symlinks: true,
        }
    }
}
