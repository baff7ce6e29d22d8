//! Configuration for tree walking

/// Configuration for traversal behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Capacity of the working path buffer, in bytes. A directory is only
    /// entered if its path plus a separator plus a full name slot plus a
    /// terminator fits.
    pub path_cap: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { path_cap: 512 }
    }
}
