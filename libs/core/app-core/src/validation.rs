use std::borrow::Cow;
use validator::ValidationError;

/// Rejects strings that are empty or whitespace only.
///
/// ```ignore
/// #[validate(custom(function = "app_core::validation::not_blank"))]
/// pub name: String,
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}
