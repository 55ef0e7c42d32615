//! # Fetch State
//!
//! What a view knows about one Product Source request: still loading, the
//! data, or the error. There is no fourth state and no retry.

use crate::error::{CatalogError, CatalogResult};

/// Tri-state result of a single catalog request.
#[derive(Debug)]
pub enum FetchState<T> {
    /// Request in flight.
    Loading,
    /// Request succeeded.
    Ready(T),
    /// Request failed; the error is terminal.
    Failed(CatalogError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> From<CatalogResult<T>> for FetchState<T> {
    fn from(result: CatalogResult<T>) -> Self {
        Self::from_result(result)
    }
}

impl<T> FetchState<T> {
    /// Settles a finished request.
    pub fn from_result(result: CatalogResult<T>) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => FetchState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// The data, once the request succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The error, once the request failed.
    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// True when the product does not exist (the "not found" fallback view).
    pub fn is_not_found(&self) -> bool {
        self.error().is_some_and(CatalogError::is_not_found)
    }

    /// Maps the ready value, keeping loading and failure as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(data) => FetchState::Ready(f(data)),
            FetchState::Failed(err) => FetchState::Failed(err),
        }
    }

    /// Converts back into a result. `Loading` yields `None`.
    pub fn into_result(self) -> Option<CatalogResult<T>> {
        match self {
            FetchState::Loading => None,
            FetchState::Ready(data) => Some(Ok(data)),
            FetchState::Failed(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: FetchState<u32> = FetchState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
        assert!(!state.is_not_found());
        assert!(state.into_result().is_none());
    }

    #[test]
    fn test_from_result() {
        let ready = FetchState::from_result(Ok(3));
        assert!(ready.is_ready());
        assert_eq!(ready.data(), Some(&3));
        assert_eq!(ready.map(|n| n * 2).data(), Some(&6));

        let failed: FetchState<u32> = Err(CatalogError::Timeout).into();
        assert!(matches!(failed.error(), Some(CatalogError::Timeout)));
        assert!(!failed.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let state: FetchState<u32> = FetchState::from_result(Err(CatalogError::NotFound {
            id: "nope".into(),
        }));
        assert!(state.is_not_found());
        assert!(matches!(state.into_result(), Some(Err(CatalogError::NotFound { .. }))));
    }
}
