//! Response Parser — turns raw model output into a validated question list.
//!
//! Models routinely wrap structured output in markdown code fences despite
//! instructions not to, so fences are stripped before decoding.

use crate::errors::AppError;
use crate::models::interview::Question;

/// Parses raw model output into an ordered question list.
///
/// Pure and idempotent: re-parsing identical text yields identical output.
/// Fails with `MalformedOutput` (carrying the raw text) on the first
/// structural violation — nothing is coerced, no partial list is returned.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, AppError> {
    let cleaned = strip_code_fences(raw);

    let questions: Vec<Question> = serde_json::from_str(cleaned).map_err(|e| {
        AppError::MalformedOutput {
            reason: format!("invalid JSON: {e}"),
            raw: raw.to_string(),
        }
    })?;

    for (index, question) in questions.iter().enumerate() {
        if question.question.trim().is_empty() {
            return Err(AppError::MalformedOutput {
                reason: format!("question at index {index} has empty text"),
                raw: raw.to_string(),
            });
        }
    }

    Ok(questions)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interview::QuestionCategory;

    #[test]
    fn test_parses_fenced_json_with_tag() {
        let raw = "```json\n[{\"question\":\"Explain closures\",\"type\":\"Technical\"}]\n```";
        let questions = parse_questions(raw).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Explain closures");
        assert_eq!(questions[0].category, QuestionCategory::Technical);
    }

    #[test]
    fn test_parses_fenced_json_without_tag() {
        let raw = "```\n[{\"question\":\"Tell me about a conflict\",\"type\":\"Behavioral\"}]\n```";
        let questions = parse_questions(raw).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, QuestionCategory::Behavioral);
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let body = r#"[{"question":"Describe a hard bug you fixed","type":"Experience"}]"#;
        let fenced = format!("```json\n{body}\n```");

        assert_eq!(parse_questions(body).unwrap(), parse_questions(&fenced).unwrap());
    }

    #[test]
    fn test_natural_language_refusal_is_malformed() {
        let result = parse_questions("Sorry, I cannot help.");
        assert!(matches!(
            result,
            Err(AppError::MalformedOutput { ref raw, .. }) if raw == "Sorry, I cannot help."
        ));
    }

    #[test]
    fn test_invalid_category_is_malformed_with_no_partial_list() {
        let raw = r#"[
            {"question": "Valid one", "type": "Technical"},
            {"question": "Bad one", "type": "Trivia"}
        ]"#;
        let result = parse_questions(raw);
        assert!(matches!(result, Err(AppError::MalformedOutput { .. })));
    }

    #[test]
    fn test_empty_question_text_is_malformed() {
        let raw = r#"[{"question": "   ", "type": "Leadership"}]"#;
        let result = parse_questions(raw);
        assert!(matches!(
            result,
            Err(AppError::MalformedOutput { ref reason, .. }) if reason.contains("index 0")
        ));
    }

    #[test]
    fn test_json_object_instead_of_array_is_malformed() {
        let raw = r#"{"question": "Explain closures", "type": "Technical"}"#;
        assert!(matches!(
            parse_questions(raw),
            Err(AppError::MalformedOutput { .. })
        ));
    }

    #[test]
    fn test_round_trip_preserves_questions() {
        let questions = vec![
            Question {
                question: "Explain ownership in Rust".to_string(),
                category: QuestionCategory::Technical,
            },
            Question {
                question: "How would you debug a production outage?".to_string(),
                category: QuestionCategory::ProblemSolving,
            },
            Question {
                question: "Tell me about leading a migration".to_string(),
                category: QuestionCategory::Leadership,
            },
        ];

        let serialized = serde_json::to_string(&questions).unwrap();
        assert_eq!(parse_questions(&serialized).unwrap(), questions);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let raw = "```json\n[{\"question\":\"Why this company?\",\"type\":\"Behavioral\"}]\n```";
        assert_eq!(parse_questions(raw).unwrap(), parse_questions(raw).unwrap());
    }

    #[test]
    fn test_strip_code_fences_leaves_plain_text_alone() {
        assert_eq!(strip_code_fences("[1, 2]"), "[1, 2]");
    }

    #[test]
    fn test_order_is_preserved() {
        let raw = r#"[
            {"question": "first", "type": "Technical"},
            {"question": "second", "type": "Behavioral"},
            {"question": "third", "type": "Experience"}
        ]"#;
        let questions = parse_questions(raw).unwrap();
        let texts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
