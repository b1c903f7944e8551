//! The result vocabulary shared by both transport bindings

use binder_interfaces::StoreError;
use tracing::error;

/// Outcome of a registry operation
///
/// Store failures are folded into [`RegistryOutcome::BadDatabase`] before
/// they reach a binding.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryOutcome<T> {
    Success(T),
    BadDatabase,
    DoesNotExist,
    NotStarted,
    Invalid { reason: String },
}

impl<T> RegistryOutcome<T> {
    pub fn invalid(reason: impl Into<String>) -> Self {
        RegistryOutcome::Invalid {
            reason: reason.into(),
        }
    }

    /// Translate a store failure
    ///
    /// `NotOpen` means the store was closed underneath a request, which the
    /// caller sees as the module not being started.
    pub fn from_store_error(err: StoreError) -> Self {
        match err {
            StoreError::NotOpen => RegistryOutcome::NotStarted,
            other => {
                error!("Template store failure: {}", other);
                RegistryOutcome::BadDatabase
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RegistryOutcome<U> {
        match self {
            RegistryOutcome::Success(value) => RegistryOutcome::Success(f(value)),
            RegistryOutcome::BadDatabase => RegistryOutcome::BadDatabase,
            RegistryOutcome::DoesNotExist => RegistryOutcome::DoesNotExist,
            RegistryOutcome::NotStarted => RegistryOutcome::NotStarted,
            RegistryOutcome::Invalid { reason } => RegistryOutcome::Invalid { reason },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RegistryOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            RegistryOutcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, StoreError>> for RegistryOutcome<T> {
    fn from(result: Result<T, StoreError>) -> Self {
        match result {
            Ok(value) => RegistryOutcome::Success(value),
            Err(err) => RegistryOutcome::from_store_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_fold_to_outcomes() {
        let bad: RegistryOutcome<()> = Err(StoreError::query("locked")).into();
        assert_eq!(bad, RegistryOutcome::BadDatabase);

        let closed: RegistryOutcome<()> = Err(StoreError::NotOpen).into();
        assert_eq!(closed, RegistryOutcome::NotStarted);

        let ok: RegistryOutcome<u8> = Ok(3).into();
        assert_eq!(ok.map(|n| n * 2).success(), Some(6));
    }
}
