use tracing::info;
use validator::{Validate, ValidationErrors};

use crate::shared::errors::{DomainError, DomainResult};

pub fn validate_pagination(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}

/// Reject an input with a human-readable reason.
pub fn invalid(reason: impl Into<String>) -> DomainError {
    let reason = reason.into();
    info!(reason = %reason, "Validation failed");
    DomainError::Validation(reason)
}

/// Run the derived field checks of `value`, folding every violation into one
/// `Validation` error.
pub fn validate_fields<T: Validate>(value: &T) -> DomainResult<()> {
    value.validate().map_err(|errors| invalid(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: {}", field, e.code))
            })
        })
        .collect();
    messages.sort();

    if messages.is_empty() {
        "validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
