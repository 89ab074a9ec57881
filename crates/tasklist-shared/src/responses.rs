//! Bodies the API responds with. The conventions are uneven but fixed: the
//! username check returns a bare object, collection and detail reads wrap
//! their payload in [`DataEnvelope`] and mutations return an [`ApiMessage`].

use crate::id::UserId;

/// Body of the username check; `id` is absent or null when no user matched.
/// A blank id string is delivered as-is, callers treat it as no match. Any
/// other fields the server includes are ignored.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CheckUsernameResponse {
    #[serde(default)]
    pub id: Option<UserId>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Returned by mutation endpoints, displayed in success notifications
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::match_found(r#"{"id":"42"}"#, Some(UserId::from("42")))]
    #[case::extra_fields_ignored(r#"{"id":"42","username":"ali"}"#, Some(UserId::from("42")))]
    #[case::empty_id(r#"{"id":""}"#, Some(UserId::from("")))]
    #[case::null_id(r#"{"id":null}"#, None)]
    #[case::missing_id(r#"{}"#, None)]
    fn check_username_body_parses(#[case] body: &str, #[case] expected: Option<UserId>) {
        // Act
        let actual: CheckUsernameResponse = serde_json::from_str(body).unwrap();

        // Assert
        assert_eq!(actual.id, expected);
    }
}
