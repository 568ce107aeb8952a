//! Result of the one asynchronous operation a game has: fetching the solution

/// A value that is being loaded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    /// Request in flight
    #[default]
    Pending,
    /// Request succeeded
    Ready(T),
    /// Request failed; the message is shown until the game is restarted
    Failed(String),
}

impl<T> Loadable<T> {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Map the loaded value, keeping the loading state
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Pending => Loadable::Pending,
            Self::Ready(value) => Loadable::Ready(f(value)),
            Self::Failed(message) => Loadable::Failed(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Loadable<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
