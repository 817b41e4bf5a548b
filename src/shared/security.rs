use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for plan and config files (1 MB)
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum length of an identifier that will be placed in a request URL or body
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validates an opaque identifier before it is placed in a request.
///
/// Identifiers come from the command line, config files and plan files, so
/// they are checked for length and for characters that would alter the
/// request URL.
///
/// # Arguments
/// * `value` - The identifier to validate
/// * `description` - Name of the identifier (e.g., "companyId") for error messages
///
/// # Errors
/// Returns an error if the value is blank, too long, or contains
/// path separators, `..`, URL metacharacters, or control characters
pub fn validate_identifier(value: &str, description: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", description);
    }

    if value.len() > MAX_IDENTIFIER_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            description,
            value.len(),
            MAX_IDENTIFIER_LENGTH
        );
    }

    if value.contains('/') || value.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if value.contains("..") {
        anyhow::bail!("Security: {} contains '..' which is not allowed", description);
    }

    if value
        .chars()
        .any(|c| c == '#' || c == '?' || c == '&' || c == '=' || c.is_control())
    {
        anyhow::bail!("Security: {} contains URL-unsafe characters", description);
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size` bytes
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}
