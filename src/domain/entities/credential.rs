//! Bearer credential value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque bearer token proving identity to the booking API.
///
/// The raw value never appears in `Debug` or `Display` output and is wiped
/// from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    value: String,
}

impl Credential {
    const VISIBLE_CHARS: usize = 4;

    /// Creates a credential, rejecting blank values.
    ///
    /// Trims in place so the only copy of the token is the one wiped on drop.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let mut value = value.into();
        let end = value.trim_end().len();
        value.truncate(end);
        let start = value.len() - value.trim_start().len();
        value.drain(..start);

        if value.is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Returns credential as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }

    /// Returns masked credential for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let len = self.value.chars().count();
        if len <= Self::VISIBLE_CHARS * 2 + 2 {
            return "*".repeat(len);
        }

        let prefix: String = self.value.chars().take(Self::VISIBLE_CHARS).collect();
        let suffix: String = self
            .value
            .chars()
            .skip(len - Self::VISIBLE_CHARS)
            .collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "eyJhbGciOiJIUzI1NiJ9.payload.signature";

    #[test]
    fn test_blank_credential_rejected() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   \n").is_none());
    }

    #[test]
    fn test_credential_is_trimmed() {
        let credential = Credential::new(format!("  {RAW}\n")).unwrap();
        assert_eq!(credential.as_str(), RAW);
    }

    #[test]
    fn test_trimming_keeps_caller_buffer() {
        let raw = format!("  {RAW}\n");
        let buffer = raw.as_ptr();

        let credential = Credential::new(raw).unwrap();

        assert_eq!(credential.as_str().as_ptr(), buffer);
        assert_eq!(credential.as_str(), RAW);
    }

    #[test]
    fn test_bearer_header() {
        let credential = Credential::new("abc").unwrap();
        assert_eq!(credential.bearer(), "Bearer abc");
    }

    #[test]
    fn test_masking() {
        let credential = Credential::new(RAW).unwrap();
        assert_eq!(credential.masked(), "eyJh...ture");

        let short = Credential::new("abc").unwrap();
        assert_eq!(short.masked(), "***");
    }

    #[test]
    fn test_debug_does_not_leak_credential() {
        let credential = Credential::new(RAW).unwrap();
        let debug_output = format!("{credential:?}");

        assert!(!debug_output.contains(RAW));
        assert!(!credential.to_string().contains(RAW));
    }
}
