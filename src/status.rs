use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::errors::WatchError;

static HOMEWORK_VERDICTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
        ("reviewing", "Работа взята на проверку ревьюером."),
        ("rejected", "Работа проверена: у ревьюера есть замечания."),
    ])
});

pub fn check_response(response: &Value) -> Result<&[Value], WatchError> {
    let object = response.as_object().ok_or(WatchError::TypeMismatch {
        expected: "an object at the top level",
        found: json_type(response),
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(WatchError::MissingField("homeworks"))?;

    let list = homeworks.as_array().ok_or(WatchError::TypeMismatch {
        expected: "a list under `homeworks`",
        found: json_type(homeworks),
    })?;

    Ok(list)
}

#[derive(Debug, Clone)]
pub struct HomeworkRecord {
    pub name: String,
    pub verdict: &'static str,
}

impl HomeworkRecord {
    pub fn from_value(homework: &Value) -> Result<Self, WatchError> {
        let name = homework
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(WatchError::UnknownField("homework_name"))?;

        let status = homework
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("<missing>");

        let verdict = HOMEWORK_VERDICTS
            .get(status)
            .copied()
            .ok_or_else(|| WatchError::UnknownStatus(status.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            verdict,
        })
    }

    pub fn status_line(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name, self.verdict
        )
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_homeworks_is_valid() {
        let response = json!({ "homeworks": [] });
        let homeworks = check_response(&response).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn test_homeworks_order_is_preserved() {
        let response = json!({
            "homeworks": [
                { "homework_name": "hw2", "status": "reviewing" },
                { "homework_name": "hw1", "status": "approved" },
            ],
            "current_date": 1700000000,
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
    }

    #[test]
    fn test_top_level_not_an_object() {
        let err = check_response(&json!(["hw1"])).unwrap_err();
        assert!(matches!(err, WatchError::TypeMismatch { .. }));
    }

    #[test]
    fn test_missing_homeworks_key() {
        let err = check_response(&json!({ "current_date": 1700000000 })).unwrap_err();
        assert!(matches!(err, WatchError::MissingField("homeworks")));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let err = check_response(&json!({ "homeworks": "hw1" })).unwrap_err();
        assert!(matches!(
            err,
            WatchError::TypeMismatch {
                found: "a string",
                ..
            }
        ));
    }

    #[test]
    fn test_approved_status_line() {
        let homework = json!({ "homework_name": "hw1", "status": "approved" });
        let record = HomeworkRecord::from_value(&homework).unwrap();
        assert_eq!(
            record.status_line(),
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_each_verdict_has_its_own_sentence() {
        let mut lines = Vec::new();
        for status in ["approved", "reviewing", "rejected"] {
            let homework = json!({ "homework_name": "hw1", "status": status });
            let record = HomeworkRecord::from_value(&homework).unwrap();
            lines.push(record.status_line());
        }
        lines.dedup();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_missing_homework_name() {
        let homework = json!({ "status": "approved" });
        let err = HomeworkRecord::from_value(&homework).unwrap_err();
        assert!(matches!(err, WatchError::UnknownField("homework_name")));
    }

    #[test]
    fn test_missing_status() {
        let homework = json!({ "homework_name": "hw1" });
        let err = HomeworkRecord::from_value(&homework).unwrap_err();
        assert!(matches!(err, WatchError::UnknownStatus(_)));
    }

    #[test]
    fn test_unrecognized_status() {
        let homework = json!({ "homework_name": "hw1", "status": "graded" });
        let err = HomeworkRecord::from_value(&homework).unwrap_err();
        match err {
            WatchError::UnknownStatus(status) => assert_eq!(status, "graded"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }
}
