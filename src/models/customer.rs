use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    /// Unset until the store assigns one on the first save.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: String,
}

impl Customer {
    pub fn new(first_name: String, last_name: String, phone: String, notes: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            phone,
            notes,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
