//! Wire format of the Firestore REST API.

use hamk_core::entities::UserProfile;
use serde_json::{json, Value};

pub(super) const USERS_COLLECTION: &str = "users";

pub(super) fn database_name(project_id: &str) -> String {
    format!("projects/{project_id}/databases/(default)")
}

/// A commit that writes the profile document of a user.
///
/// The creation time is set by the server.
pub(super) fn profile_commit(database: &str, uid: &str, profile: &UserProfile) -> Value {
    let UserProfile {
        full_name,
        email,
        role,
        ..
    } = profile;
    json!({
        "writes": [
            {
                "update": {
                    "name": format!("{database}/documents/{USERS_COLLECTION}/{uid}"),
                    "fields": {
                        "fullName": { "stringValue": full_name },
                        "email": { "stringValue": email },
                        "role": { "stringValue": role.to_string() }
                    }
                },
                "updateTransforms": [
                    {
                        "fieldPath": "createdAt",
                        "setToServerValue": "REQUEST_TIME"
                    }
                ]
            }
        ]
    })
}
