use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    // passport, license, national_id
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Guest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn summary(&self) -> GuestSummary {
        GuestSummary {
            name: self.full_name(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestSummary {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewGuest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
}

impl NewGuest {
    /// Splits a display name on the first space: "Mary Ann Lee" becomes
    /// first name "Mary" and last name "Ann Lee".
    pub fn from_display_name(name: &str, email: &str) -> Self {
        let name = name.trim();
        let (first, last) = match name.split_once(' ') {
            Some((first, rest)) => (first, rest.trim()),
            None => (name, ""),
        };
        Self {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_splits_on_first_space() {
        let guest = NewGuest::from_display_name("Mary Ann Lee", "mary@example.com");
        assert_eq!(guest.first_name, "Mary");
        assert_eq!(guest.last_name, "Ann Lee");
        assert_eq!(guest.email, "mary@example.com");
    }

    #[test]
    fn single_word_name_has_empty_last_name() {
        let guest = NewGuest::from_display_name("Cher", "cher@example.com");
        assert_eq!(guest.first_name, "Cher");
        assert_eq!(guest.last_name, "");
    }
}
