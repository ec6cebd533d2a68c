use anyhow::Context as _;
use std::path::Path;

/// Add context to file read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read from: {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to snapshot store errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} snapshot for key: {}", operation, key)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
