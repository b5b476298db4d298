// src/services/verdict.rs

//! Maps the most recent submission to a chat-facing verdict message.
//!
//! Output is always a single formatted string; unrecognized status codes
//! produce the "unknown status" message instead of an error.

use crate::models::Homework;

/// Fixed message for a polled window with no submissions.
///
/// Doubles as the initial "last announced" sentinel, so an empty window
/// never triggers a notification on its own.
pub const NO_STATUS_CHANGE: &str = "Изменений статуса домашки не найдено.";

/// Placeholder used when the API omits the submission name.
const UNNAMED_HOMEWORK: &str = "Нет имени работы";

/// Verdict texts for the known review statuses.
fn verdict_text(status: &str) -> Option<&'static str> {
    match status {
        "rejected" => Some("К сожалению, в работе нашлись ошибки."),
        "approved" => Some("Ревьюеру всё понравилось, работа зачтена!"),
        "reviewing" => Some("Работа отправилась на ревью."),
        _ => None,
    }
}

/// Render the most recent submission (or its absence) into one message.
pub fn interpret(latest: Option<&Homework>) -> String {
    let Some(homework) = latest else {
        return NO_STATUS_CHANGE.to_string();
    };

    let name = homework.homework_name.as_deref().unwrap_or(UNNAMED_HOMEWORK);
    match homework.status.as_deref().and_then(verdict_text) {
        Some(verdict) => format!("У вас проверили работу \"{name}\"!\n\n{verdict}"),
        None => format!("На запрос статуса работы \"{name}\" получен неизвестный статус."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homework(name: Option<&str>, status: Option<&str>) -> Homework {
        Homework {
            homework_name: name.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn test_approved_submission() {
        let hw = homework(Some("diplom"), Some("approved"));
        assert_eq!(
            interpret(Some(&hw)),
            "У вас проверили работу \"diplom\"!\n\nРевьюеру всё понравилось, работа зачтена!"
        );
    }

    #[test]
    fn test_rejected_and_reviewing_submissions() {
        let rejected = homework(Some("sprint1"), Some("rejected"));
        assert_eq!(
            interpret(Some(&rejected)),
            "У вас проверили работу \"sprint1\"!\n\nК сожалению, в работе нашлись ошибки."
        );

        let reviewing = homework(Some("sprint1"), Some("reviewing"));
        assert_eq!(
            interpret(Some(&reviewing)),
            "У вас проверили работу \"sprint1\"!\n\nРабота отправилась на ревью."
        );
    }

    #[test]
    fn test_empty_window_returns_fixed_sentinel() {
        assert_eq!(interpret(None), NO_STATUS_CHANGE);
    }

    #[test]
    fn test_unknown_status_names_the_submission() {
        let hw = homework(Some("x"), Some("bogus"));
        assert_eq!(
            interpret(Some(&hw)),
            "На запрос статуса работы \"x\" получен неизвестный статус."
        );
    }

    #[test]
    fn test_missing_status_is_treated_as_unknown() {
        let hw = homework(Some("x"), None);
        assert!(interpret(Some(&hw)).contains("неизвестный статус"));
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let hw = homework(None, Some("approved"));
        assert!(interpret(Some(&hw)).contains(UNNAMED_HOMEWORK));
    }

    #[test]
    fn test_name_appears_verbatim_for_every_status() {
        for status in ["rejected", "approved", "reviewing", "weird"] {
            let hw = homework(Some("итоговый-проект_v2"), Some(status));
            assert!(interpret(Some(&hw)).contains("итоговый-проект_v2"));
        }
    }
}
