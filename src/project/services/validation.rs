//! Request validation for provisioning operations.

use crate::project::domain::ProjectRecord;
use crate::project::error::ProvisioningError;

/// Descriptions longer than this are shortened at ingestion.
pub(crate) const DESCRIPTION_CHAR_LIMIT: usize = 100;

/// Length a shortened description is cut to.
pub(crate) const SHORTENED_DESCRIPTION_CHARS: usize = 99;

/// Rejects create requests lacking mandatory fields.
///
/// The project key cannot be blank by construction, so only the name needs
/// checking here.
///
/// # Errors
///
/// Returns [`ProvisioningError::InvalidRequest`] when the name is blank.
pub fn ensure_create_request(record: &ProjectRecord) -> Result<(), ProvisioningError> {
    if record.name.trim().is_empty() {
        return Err(ProvisioningError::InvalidRequest(
            "project name must not be blank".to_owned(),
        ));
    }
    Ok(())
}

/// Shortens an over-long description in place.
///
/// Descriptions longer than 100 characters are cut to their first 99
/// characters, without an ellipsis. Shorter descriptions stay untouched.
pub fn shorten_description(record: &mut ProjectRecord) {
    let Some(description) = record.description.as_ref() else {
        return;
    };
    if description.chars().count() > DESCRIPTION_CHAR_LIMIT {
        let shortened: String = description.chars().take(SHORTENED_DESCRIPTION_CHARS).collect();
        record.description = Some(shortened);
    }
}
