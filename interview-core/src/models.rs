//! Domain records shared by the flow, the store and the HTTP layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of question handed to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Technical,
    Coding,
}

/// A question as returned to the client. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub question_type: QuestionType,
    /// Free-form: an experience level, `"adaptive"` or `"practical"`.
    pub difficulty: String,
    pub topic: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        question_type: QuestionType,
        difficulty: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            question_type,
            difficulty: difficulty.into(),
            topic: topic.into(),
        }
    }
}

/// Scored feedback for one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// 1..=10.
    pub score: u8,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

/// One evaluated answer kept on a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub question: String,
    pub candidate_answer: String,
    pub score: u8,
    pub feedback: String,
}

impl ResponseRecord {
    /// Pairs an answer with the feedback it received; suggestions are not kept.
    pub fn new(question: &str, candidate_answer: &str, feedback: &Feedback) -> Self {
        Self {
            question: question.to_string(),
            candidate_answer: candidate_answer.to_string(),
            score: feedback.score,
            feedback: feedback.feedback.clone(),
        }
    }
}

/// In-memory interview session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub candidate: String,
    pub level: String,
    pub focus_areas: Vec<String>,
    pub questions_asked: Vec<Question>,
    pub responses: Vec<ResponseRecord>,
}

impl Session {
    /// Opens a session whose history starts with `first_question`.
    pub fn open(
        candidate: &str,
        level: &str,
        focus_areas: &[String],
        first_question: Question,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: session_id(candidate, now),
            candidate: candidate.to_string(),
            level: level.to_string(),
            focus_areas: focus_areas.to_vec(),
            questions_asked: vec![first_question],
            responses: Vec::new(),
        }
    }
}

/// `"{candidate}_{local ISO-8601 timestamp, microseconds}"`.
///
/// Two sessions for the same name within one microsecond collide.
pub fn session_id(candidate: &str, now: NaiveDateTime) -> String {
    format!("{candidate}_{}", now.format("%Y-%m-%dT%H:%M:%S%.6f"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|d| d.and_hms_micro_opt(9, 3, 7, 42))
            .unwrap()
    }

    #[test]
    fn session_id_format() {
        assert_eq!(session_id("Ada", at()), "Ada_2024-05-17T09:03:07.000042");
    }

    #[test]
    fn question_serializes_lowercase_type() {
        let q = Question::new("Q?", QuestionType::Coding, "practical", "programming");
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "question": "Q?",
                "question_type": "coding",
                "difficulty": "practical",
                "topic": "programming"
            })
        );
    }

    #[test]
    fn response_record_keeps_score_and_raw_feedback() {
        let fb = Feedback {
            score: 6,
            feedback: " Decent.\nScore: 6 ".into(),
            suggestions: vec!["Review the topic".into()],
        };
        let rec = ResponseRecord::new("What is GC?", "It frees memory", &fb);
        assert_eq!(
            rec,
            ResponseRecord {
                question: "What is GC?".into(),
                candidate_answer: "It frees memory".into(),
                score: 6,
                feedback: " Decent.\nScore: 6 ".into(),
            }
        );
    }

    #[test]
    fn open_session_holds_first_question() {
        let q = Question::new("Q?", QuestionType::Technical, "junior", "core_java");
        let s = Session::open("Ada", "junior", &["core_java".into()], q.clone(), at());
        assert_eq!(s.questions_asked, vec![q]);
        assert!(s.responses.is_empty());
        assert_eq!(s.focus_areas, vec!["core_java".to_string()]);
    }
}
