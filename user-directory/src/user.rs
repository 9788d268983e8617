use serde::{Deserialize, Serialize};

/// Identifier assigned by the [`UserStore`](crate::store::UserStore).
pub type UserId = i64;

/// A single user record.
///
/// Every field is free-form text; nothing is validated. Fields missing from an
/// incoming JSON body decode as empty strings so that an update always replaces
/// the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
}

impl User {
    /// Returns the record with its id replaced by `id`.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_empty() {
        let user: User = serde_json::from_str(r#"{"first_name":"Ada"}"#).expect("decode");
        assert_eq!(
            user,
            User {
                first_name: "Ada".into(),
                ..User::default()
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let user: User =
            serde_json::from_str(r#"{"id":7,"email":"a@l.com","nickname":"ada"}"#).expect("decode");
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "a@l.com");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let user = User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            dob: "1815-12-10".into(),
            phone: "555".into(),
            email: "a@l.com".into(),
        };
        let value = serde_json::to_value(&user).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "dob": "1815-12-10",
                "phone": "555",
                "email": "a@l.com",
            })
        );
    }
}
