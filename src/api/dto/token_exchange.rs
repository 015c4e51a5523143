//! DTO for the token-exchange form endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token-exchange parameters posted as `application/x-www-form-urlencoded`.
///
/// No field is required and nothing is validated: absent fields bind to
/// empty strings and the record is echoed back as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenExchangeRequest {
    pub client_id: String,
    pub client_secret: String,
    pub grant_type: String,
    pub subject_token: String,
    pub subject_issuer: String,
    pub subject_token_type: String,
    pub audience: String,
}

impl fmt::Display for TokenExchangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokenExchangeRequest(client_id={}, client_secret={}, grant_type={}, \
             subject_token={}, subject_issuer={}, subject_token_type={}, audience={})",
            self.client_id,
            self.client_secret,
            self.grant_type,
            self.subject_token,
            self.subject_issuer,
            self.subject_token_type,
            self.audience,
        )
    }
}
