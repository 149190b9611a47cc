//! Run configuration

use std::path::PathBuf;

/// Work items shown per interactive batch unless overridden
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Labeling run configuration
#[derive(Debug, Clone)]
pub struct LabelConfig {
    /// Collection file read at start and overwritten at the end
    pub json_path: PathBuf,

    /// Work items per batch (never zero)
    pub chunk_size: usize,

    /// Place each batch prompt on the clipboard
    pub auto_copy: bool,
}

impl LabelConfig {
    pub fn new(json_path: impl Into<PathBuf>) -> Self {
        Self {
            json_path: json_path.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            auto_copy: true,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_auto_copy(mut self, auto_copy: bool) -> Self {
        self.auto_copy = auto_copy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LabelConfig::new("news.json");
        assert_eq!(config.json_path, PathBuf::from("news.json"));
        assert_eq!(config.chunk_size, 100);
        assert!(config.auto_copy);
    }

    #[test]
    fn test_zero_chunk_size_is_clamped() {
        let config = LabelConfig::new("news.json").with_chunk_size(0);
        assert_eq!(config.chunk_size, 1);
    }
}
