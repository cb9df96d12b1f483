use std::fmt;

pub const DEFAULT_MAX_UPLOAD_KB: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub max_upload_kb: u32,
}

impl FormConfig {
    pub fn new(max_upload_kb: u32) -> Result<Self, ConfigError> {
        if max_upload_kb == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(Self { max_upload_kb })
    }

    /// Returns a copy with the upload limit replaced by a raw override value
    /// (compile-time env var or query parameter).
    pub fn with_max_upload_override(self, raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Empty);
        }
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| ConfigError::NotANumber {
                value: trimmed.to_string(),
            })?;
        Self::new(value)
    }

    pub fn max_upload_bytes(&self) -> u64 {
        u64::from(self.max_upload_kb) * 1024
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_upload_kb: DEFAULT_MAX_UPLOAD_KB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Empty,
    NotANumber { value: String },
    ZeroLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty => write!(f, "upload limit override is empty"),
            ConfigError::NotANumber { value } => {
                write!(f, "upload limit '{value}' is not a whole number of kilobytes")
            }
            ConfigError::ZeroLimit => write!(f, "upload limit must be at least 1 KB"),
        }
    }
}

impl std::error::Error for ConfigError {}
