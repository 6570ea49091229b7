use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    /// An error annotated with the operation that was running when it surfaced.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Wrap this error with the name of the failing operation.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, below every `Context` layer.
    pub fn root_cause(&self) -> &DomainError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.root_cause(), Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), Self::NotFound { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.root_cause(), Self::Unauthorized(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Log-and-wrap for failures coming back from a repository or port.
pub trait ResultExt<T> {
    fn context(self, context: &'static str) -> DomainResult<T>;
}

impl<T> ResultExt<T> for DomainResult<T> {
    fn context(self, context: &'static str) -> DomainResult<T> {
        self.map_err(|err| {
            warn!(error = %err, "{}", context);
            err.context(context)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_message() {
        let err = DomainError::not_found("Company", "id", "42").context("getting company by id");
        assert_eq!(
            err.to_string(),
            "getting company by id: Not found: Company with id=42"
        );
    }

    #[test]
    fn root_cause_skips_every_layer() {
        let err = DomainError::Validation("bad quarter".into())
            .context("creating financial report")
            .context("creating reports for period");

        assert!(matches!(err.root_cause(), DomainError::Validation(msg) if msg == "bad quarter"));
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn result_ext_wraps_errors_only() {
        let ok: DomainResult<i32> = Ok(7);
        assert_eq!(ok.context("noop").unwrap(), 7);

        let failed: DomainResult<()> = Err(DomainError::Storage("disk full".into()));
        let err = failed.context("updating skill").unwrap_err();
        assert_eq!(err.to_string(), "updating skill: Storage error: disk full");
        assert!(std::error::Error::source(&err).is_some());
    }
}
