//! Status of a single fetch, as shown by a page.

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

/// Idle until requested, then loading until the response settles it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> QueryState<T> {
    #[must_use]
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
