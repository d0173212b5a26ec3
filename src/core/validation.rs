//! Input validation for gangway configuration values.
//!
//! These are the provider's own naming rules, enforced locally so a bad
//! value fails in `gangway check` instead of minutes into a deploy.

use crate::error::{Result, ValidationError};

/// Validate a stack name.
///
/// CloudFormation stack names are 1-128 characters, ASCII letters, digits,
/// and hyphens, and must start with a letter.
///
/// # Errors
///
/// Returns `ValidationError::InvalidStackName` on violation.
pub fn validate_stack_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| ValidationError::InvalidStackName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("cannot be empty").into());
    }
    if name.len() > 128 {
        return Err(invalid("longer than 128 characters").into());
    }

    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        if !first.is_ascii_alphabetic() {
            return Err(invalid("must start with a letter").into());
        }
    }
    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '-' {
            return Err(invalid(&format!(
                "invalid character '{}' at position {}. Only letters, digits, and hyphen are allowed",
                ch,
                i + 1
            ))
            .into());
        }
    }

    Ok(())
}

/// Validate an EC2 key-pair record name.
///
/// Up to 255 printable ASCII characters, no leading or trailing whitespace.
///
/// # Errors
///
/// Returns `ValidationError::InvalidKeyName` on violation.
pub fn validate_key_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| ValidationError::InvalidKeyName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("cannot be empty").into());
    }
    if name.len() > 255 {
        return Err(invalid("longer than 255 characters").into());
    }
    if name != name.trim() {
        return Err(invalid("leading or trailing whitespace").into());
    }
    if let Some(ch) = name.chars().find(|c| !c.is_ascii_graphic() && *c != ' ') {
        return Err(invalid(&format!("non-printable character '{}'", ch.escape_default())).into());
    }

    Ok(())
}

/// Validate an instance size class, e.g. `t2.micro` or `m5a.2xlarge`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidInstanceType` on violation.
pub fn validate_instance_type(value: &str) -> Result<()> {
    let invalid = |reason: &str| ValidationError::InvalidInstanceType {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (family, size) = value
        .split_once('.')
        .ok_or_else(|| invalid("expected <family>.<size>"))?;

    if family.is_empty() || size.is_empty() {
        return Err(invalid("family and size must both be non-empty").into());
    }
    if !family.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        return Err(invalid("family must start with a lowercase letter").into());
    }
    if !family.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return Err(invalid("family must be lowercase alphanumeric").into());
    }
    // Sizes like "metal-24xl" carry a hyphen
    if !size
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid("size must be lowercase alphanumeric").into());
    }

    Ok(())
}

/// Validate that an availability zone belongs to a region.
///
/// A zone is its region plus a single letter suffix, e.g. `eu-central-1a`
/// in `eu-central-1`.
///
/// # Errors
///
/// Returns `ValidationError::ZoneOutsideRegion` on mismatch.
pub fn validate_availability_zone(zone: &str, region: &str) -> Result<()> {
    let suffix = zone.strip_prefix(region);
    let valid = matches!(
        suffix.map(|s| s.as_bytes()),
        Some([c]) if c.is_ascii_lowercase()
    );

    if !valid {
        return Err(ValidationError::ZoneOutsideRegion {
            zone: zone.to_string(),
            region: region.to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_stack_names() {
        assert!(validate_stack_name("gangway-dev").is_ok());
        assert!(validate_stack_name("a").is_ok());
        assert!(validate_stack_name("Web1-Staging").is_ok());
    }

    #[test]
    fn test_invalid_stack_names() {
        assert!(validate_stack_name("").is_err());
        assert!(validate_stack_name("1-starts-with-digit").is_err());
        assert!(validate_stack_name("-starts-with-hyphen").is_err());
        assert!(validate_stack_name("has_underscore").is_err());
        assert!(validate_stack_name("has space").is_err());
        assert!(validate_stack_name(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_valid_key_names() {
        assert!(validate_key_name("gangway-key").is_ok());
        assert!(validate_key_name("alice key 2026").is_ok());
    }

    #[test]
    fn test_invalid_key_names() {
        assert!(validate_key_name("").is_err());
        assert!(validate_key_name(" padded ").is_err());
        assert!(validate_key_name("tab\there").is_err());
        assert!(validate_key_name(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_valid_instance_types() {
        assert!(validate_instance_type("t2.micro").is_ok());
        assert!(validate_instance_type("m5a.2xlarge").is_ok());
        assert!(validate_instance_type("c6gd.metal-24xl").is_ok());
    }

    #[test]
    fn test_invalid_instance_types() {
        assert!(validate_instance_type("t2micro").is_err());
        assert!(validate_instance_type("t2.").is_err());
        assert!(validate_instance_type(".micro").is_err());
        assert!(validate_instance_type("T2.micro").is_err());
        assert!(validate_instance_type("t2.Micro").is_err());
    }

    #[test]
    fn test_availability_zone_in_region() {
        assert!(validate_availability_zone("eu-central-1a", "eu-central-1").is_ok());
        assert!(validate_availability_zone("us-east-1f", "us-east-1").is_ok());
    }

    #[test]
    fn test_availability_zone_outside_region() {
        assert!(validate_availability_zone("us-west-2a", "eu-central-1").is_err());
        assert!(validate_availability_zone("eu-central-1", "eu-central-1").is_err());
        assert!(validate_availability_zone("eu-central-1ab", "eu-central-1").is_err());
        assert!(validate_availability_zone("eu-central-1A", "eu-central-1").is_err());
    }
}
