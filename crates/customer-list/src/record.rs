//! Customer record type.
//!
//! A [`Record`] is the value stored in every node of a
//! [`RecordList`](crate::list::RecordList).

use serde::{Deserialize, Serialize};

/// A single customer record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Record {
    /// The customer's last name.
    pub last_name: String,
}

impl Record {
    /// Create a record for the given last name.
    #[must_use]
    pub fn new(last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
        }
    }

    /// Get the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Schmidt");
        assert_eq!(record.last_name(), "Schmidt");
        assert_eq!(record, Record::new(String::from("Schmidt")));
    }

    #[test]
    fn test_record_display_is_last_name() {
        assert_eq!(Record::new("Müller").to_string(), "Müller");
        assert_eq!(Record::default().to_string(), "");
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_string(&Record::new("Weber")).unwrap();
        assert_eq!(json, r#"{"last_name":"Weber"}"#);
    }
}
