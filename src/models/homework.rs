// src/models/homework.rs

//! Wire types for the homework-status API.

use serde::Deserialize;

/// One submission entry from the `homeworks` list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Homework {
    /// Submission display name; the API omits it on occasion
    #[serde(default)]
    pub homework_name: Option<String>,

    /// Review status code (`rejected`, `approved`, `reviewing`)
    #[serde(default)]
    pub status: Option<String>,
}

/// Decoded body of one status poll.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeworkStatuses {
    /// Submissions updated since the requested watermark, newest first.
    /// `None` when the key is missing, which is the response-shape error.
    #[serde(default)]
    pub homeworks: Option<Vec<Homework>>,

    /// Server-side timestamp to carry into the next poll
    #[serde(default)]
    pub current_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_body() {
        let body = r#"{
            "homeworks": [{"homework_name": "diplom", "status": "approved"}],
            "current_date": 1714000000
        }"#;
        let decoded: HomeworkStatuses = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.current_date, Some(1714000000));
        let list = decoded.homeworks.unwrap();
        assert_eq!(list[0].homework_name.as_deref(), Some("diplom"));
        assert_eq!(list[0].status.as_deref(), Some("approved"));
    }

    #[test]
    fn test_decode_missing_keys() {
        let decoded: HomeworkStatuses = serde_json::from_str("{}").unwrap();
        assert!(decoded.homeworks.is_none());
        assert!(decoded.current_date.is_none());
    }

    #[test]
    fn test_decode_null_date_and_empty_list() {
        let body = r#"{"homeworks": [], "current_date": null}"#;
        let decoded: HomeworkStatuses = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.homeworks.as_deref(), Some(&[][..]));
        assert!(decoded.current_date.is_none());
    }

    #[test]
    fn test_decode_entry_without_name_or_status() {
        let body = r#"{"homeworks": [{}], "current_date": 1}"#;
        let decoded: HomeworkStatuses = serde_json::from_str(body).unwrap();
        let list = decoded.homeworks.unwrap();
        assert!(list[0].homework_name.is_none());
        assert!(list[0].status.is_none());
    }
}
