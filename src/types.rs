use serde::{Deserialize, Serialize};

/// Body returned by the token endpoint, for either grant type.
///
/// The client-credentials grant omits `refresh_token` and `scope`, so both are
/// optional. The struct is serialized back to the browser as-is on
/// `/callback`; fields the upstream left out are dropped from the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}
