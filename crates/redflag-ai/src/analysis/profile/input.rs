pub const MAX_PROFILE_CHARS: usize = 2000;
pub const MIN_PROFILE_CHARS: usize = 10;

/// Boundary validation for submitted profile text. The classifier itself accepts anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileInputError {
    #[error("profile text is empty")]
    Empty,
    #[error("minimum {min} characters required for analysis (found {found})")]
    TooShort { min: usize, found: usize },
    #[error("maximum {max} characters exceeded (found {found})")]
    TooLong { max: usize, found: usize },
}

/// Checks length in characters, not bytes, so emoji-heavy profiles are measured as typed.
pub fn validate_profile_text(text: &str) -> Result<&str, ProfileInputError> {
    if text.trim().is_empty() {
        return Err(ProfileInputError::Empty);
    }

    let found = text.chars().count();
    if found < MIN_PROFILE_CHARS {
        return Err(ProfileInputError::TooShort {
            min: MIN_PROFILE_CHARS,
            found,
        });
    }
    if found > MAX_PROFILE_CHARS {
        return Err(ProfileInputError::TooLong {
            max: MAX_PROFILE_CHARS,
            found,
        });
    }

    Ok(text)
}
