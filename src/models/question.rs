use serde::{Deserialize, Serialize};

use crate::service::text::decode_entities;

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub results: Vec<Question>,
}

/// A single multiple-choice question as delivered by the source. The text
/// fields may still carry HTML entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
        }
    }

    pub fn prompt(&self) -> String {
        decode_entities(&self.question)
    }

    pub fn correct(&self) -> String {
        decode_entities(&self.correct_answer)
    }

    pub fn answer_set(&self) -> Vec<String> {
        self.incorrect_answers
            .iter()
            .chain(std::iter::once(&self.correct_answer))
            .map(|answer| decode_entities(answer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_payload_and_ignores_extra_fields() {
        let body = r#"{
            "response_code": 0,
            "results": [{
                "type": "multiple",
                "difficulty": "easy",
                "category": "Film",
                "question": "Who directed &quot;Jaws&quot;?",
                "correct_answer": "Steven Spielberg",
                "incorrect_answers": ["George Lucas", "James Cameron", "Ridley Scott"]
            }]
        }"#;

        let response: QuestionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].prompt(), "Who directed \"Jaws\"?");
    }

    #[test]
    fn missing_results_field_is_an_error() {
        let result = serde_json::from_str::<QuestionsResponse>(r#"{"questions": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn answer_set_contains_correct_answer_once() {
        let question = Question::new(
            "Q",
            "Caf&eacute;",
            vec!["Tea".into(), "Rock &amp; Roll".into()],
        );

        let answers = question.answer_set();
        assert_eq!(answers, vec!["Tea", "Rock & Roll", "Café"]);
        assert_eq!(
            answers.iter().filter(|a| **a == question.correct()).count(),
            1
        );
    }
}
