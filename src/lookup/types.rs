use serde::Deserialize;

/// Status reply from the lookup service.
///
/// All three keys are required; a reply missing any of them fails to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupResponse {
    /// BIN echoed back by the service
    pub bin: String,
    pub status: String,
    pub response: String,
}
