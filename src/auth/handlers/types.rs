/**
 * Identity Surface Types
 *
 * Request and response bodies for the authentication service. Response
 * fields are camelCased on the wire; the same types are reused by the
 * bundled API client for decoding.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Login request
///
/// Both fields are optional at the deserialization layer so that an
/// absent field reaches the handler, which answers with the endpoint's
/// own 400 instead of an extractor rejection.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Username (exact match)
    pub username: Option<String>,
    /// Password (verified against the stored hash)
    pub password: Option<String>,
}

/// Login response carrying the bearer token
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Signed token, valid for one hour
    pub token: String,
}

/// Profile response (no sensitive data)
///
/// `birth_date` serializes as a calendar date (`YYYY-MM-DD`), never with
/// a time component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}
