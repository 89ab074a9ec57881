//! Types for the sharing records of a task list

use crate::{
    id::{ShareId, UserId},
    user::Username,
};
use tasklist_time::Timestamp;

/// Access tier granted to a shared user
#[derive(
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SharePermission {
    #[default]
    View,
    Edit,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SharedUser {
    pub id: UserId,
    pub username: Username,
}

/// One entry of the "currently shared with" list of a task list
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SharedWith {
    pub id: ShareId,
    pub permission: SharePermission,
    pub user: SharedUser,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::view(SharePermission::View, "\"view\"")]
    #[case::edit(SharePermission::Edit, "\"edit\"")]
    fn permission_wire_form_is_lowercase(
        #[case] permission: SharePermission,
        #[case] expected: &str,
    ) {
        let actual = serde_json::to_string(&permission).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(permission.to_string(), expected.trim_matches('"'));
    }
}
