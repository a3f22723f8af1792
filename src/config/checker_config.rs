/// Configuration for resume format checking
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum resume document size in bytes (Default: 1MB)
    pub max_document_size: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_document_size: 1_000_000, // 1MB
        }
    }
}

impl CheckerConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_size == 0 {
            return Err("max_document_size must be greater than 0".to_string());
        }

        Ok(())
    }
}
