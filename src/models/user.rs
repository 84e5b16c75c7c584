use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids;

/// Subscription plan of a library member.
///
/// Unknown plan names are kept verbatim so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionType {
    Monthly,
    Annual,
    Trial,
    Other(String),
}

impl SubscriptionType {
    /// Length of the plan in days. Unknown plans expire on their start day.
    pub fn duration_days(&self) -> i64 {
        match self {
            SubscriptionType::Monthly => 30,
            SubscriptionType::Annual => 365,
            SubscriptionType::Trial => 7,
            SubscriptionType::Other(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionType::Monthly => "monthly",
            SubscriptionType::Annual => "annual",
            SubscriptionType::Trial => "trial",
            SubscriptionType::Other(raw) => raw,
        }
    }
}

impl From<String> for SubscriptionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "monthly" => SubscriptionType::Monthly,
            "annual" => SubscriptionType::Annual,
            "trial" => SubscriptionType::Trial,
            _ => SubscriptionType::Other(raw),
        }
    }
}

impl From<&str> for SubscriptionType {
    fn from(raw: &str) -> Self {
        SubscriptionType::from(raw.to_string())
    }
}

impl From<SubscriptionType> for String {
    fn from(kind: SubscriptionType) -> Self {
        match kind {
            SubscriptionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A library member, optionally holding one book on loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub subscription_type: SubscriptionType,
    pub subscription_date: String,
    #[serde(
        default,
        deserialize_with = "ids::optional_book_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub issued_book: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

/// Fixture file layout: `{ "users": [...] }`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    #[serde(default)]
    pub users: Vec<User>,
}
