use serde::{Deserialize, Serialize};

/// Status field returned in every response body. This crate never inspects
/// it: a body with `ZERO_RESULTS` or `INVALID_REQUEST` still resolves as a
/// normal response, and the caller decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    ZeroResults,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    NotFound,
    #[serde(other)]
    UnknownError,
}
