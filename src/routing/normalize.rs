//! URI normalization shared by registration and dispatch.

use crate::error::RouterError;

/// Trim surrounding whitespace and strip at most one trailing slash.
///
/// Internal slashes, case and percent-encoding are left untouched. The
/// emptiness check happens before stripping, so `"/"` normalizes to `""`.
pub fn normalize_uri(uri: &str) -> Result<String, RouterError> {
    let trimmed = uri.trim();
    if trimmed.is_empty() {
        return Err(RouterError::EmptyInput);
    }

    let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_strips_one_slash() {
        assert_eq!(normalize_uri("  /a/b/  ").unwrap(), "/a/b");
        assert_eq!(normalize_uri("/a//").unwrap(), "/a/");
        assert_eq!(normalize_uri("\t/x\n").unwrap(), "/x");
    }

    #[test]
    fn test_blank_is_rejected() {
        assert!(matches!(normalize_uri("   "), Err(RouterError::EmptyInput)));
        assert!(matches!(normalize_uri(""), Err(RouterError::EmptyInput)));
    }

    #[test]
    fn test_trailing_slash_idempotence() {
        for uri in ["/a", "/a/b", "about", " /x ", "/A/B"] {
            let with_slash = format!("{}/", uri.trim());
            assert_eq!(normalize_uri(&with_slash).unwrap(), normalize_uri(uri).unwrap());
        }
    }

    #[test]
    fn test_leaves_case_and_encoding_alone() {
        assert_eq!(normalize_uri("/Users/%20x/").unwrap(), "/Users/%20x");
        assert_eq!(normalize_uri("a//b").unwrap(), "a//b");
    }

    #[test]
    fn test_root_becomes_empty_string() {
        // Only the trimmed input is checked for emptiness.
        assert_eq!(normalize_uri("/").unwrap(), "");
    }
}
