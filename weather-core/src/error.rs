use thiserror::Error;

/// Failure reported back to the caller of a fetch.
///
/// `Custom` carries the provider's own explanation (a parseable 404 body,
/// e.g. "city not found"); everything else collapses into `Unknown`, and it
/// is up to the presentation layer to pick a user-facing fallback string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WeatherError {
    #[error("unknown error")]
    Unknown,

    #[error("{0}")]
    Custom(String),
}
