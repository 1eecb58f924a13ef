//! The four interview steps: prompt, one gateway call, fallback on failure.
//!
//! None of these functions fail. A gateway error is logged and replaced by
//! a deterministic fallback value; there is no retry.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::{
    gateway::Gateway,
    knowledge_base::{self, DEFAULT_TOPIC},
    models::{Feedback, Question, QuestionType, Session},
    persona::{EVALUATOR, INTERVIEWER},
    picker::QuestionPicker,
    prompt,
    score::extract_score,
};

/// Opening question when the knowledge base has nothing for the pair.
pub const DEFAULT_OPENING: &str = "What is your experience with Java development?";

const EMPTY_LOOKUP_FALLBACK: &str = "Tell me about your Java experience.";

pub const FOLLOW_UP_FALLBACK: &str =
    "Can you explain a challenging technical problem you've solved recently?";

pub const CODING_FALLBACK: &str = "Write a Java method to find the second largest element in an array of integers. Handle edge cases appropriately.";

pub const EVALUATION_FALLBACK: &str =
    "Unable to evaluate response at this time. Please try again.";

pub const FALLBACK_SCORE: u8 = 5;

const SUGGESTIONS: [&str; 3] = [
    "Practice with more examples",
    "Review the fundamentals",
    "Focus on implementation details",
];

const FALLBACK_SUGGESTIONS: [&str; 2] = ["Review the topic", "Practice more examples"];

/// Who is being interviewed.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub experience_level: &'a str,
    pub focus_areas: &'a [String],
}

impl Candidate<'_> {
    /// First focus area, or `core_java`.
    pub fn topic(&self) -> &str {
        self.focus_areas
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_TOPIC)
    }
}

/// Result of [`start_interview`]. `session` is `None` when the fallback was used.
#[derive(Debug, Clone)]
pub struct StartOutcome {
    pub question: Question,
    pub session: Option<Session>,
}

/// Picks a canned question and has the interviewer present it.
pub async fn start_interview(
    gateway: &dyn Gateway,
    picker: &QuestionPicker,
    candidate: Candidate<'_>,
    now: NaiveDateTime,
) -> StartOutcome {
    let topic = candidate.topic();
    let level = candidate.experience_level;
    let questions = knowledge_base::lookup(topic, level);

    let selected = if knowledge_base::is_sentinel(&questions) {
        DEFAULT_OPENING.to_string()
    } else {
        picker
            .pick(&questions)
            .await
            .unwrap_or_else(|| DEFAULT_OPENING.to_string())
    };
    debug!(topic, level, selected = %selected, "opening question selected");

    let instruction =
        prompt::start_interview(candidate.name, level, candidate.focus_areas, &selected);

    match gateway.generate(&INTERVIEWER, &instruction).await {
        Ok(text) => {
            let question = Question::new(text.trim(), QuestionType::Technical, level, topic);
            let session = Session::open(
                candidate.name,
                level,
                candidate.focus_areas,
                question.clone(),
                now,
            );
            StartOutcome {
                question,
                session: Some(session),
            }
        }
        Err(err) => {
            warn!(
                error = %err,
                topic,
                level,
                "start_interview: generation failed, using canned question"
            );
            // First canned entry, which is the sentinel text itself for unknown pairs.
            let fallback = questions
                .into_iter()
                .next()
                .unwrap_or_else(|| EMPTY_LOOKUP_FALLBACK.to_string());
            StartOutcome {
                question: Question::new(fallback, QuestionType::Technical, level, topic),
                session: None,
            }
        }
    }
}

/// Follow-up question based on the previous exchange.
pub async fn next_question(
    gateway: &dyn Gateway,
    question: &str,
    candidate_answer: &str,
) -> Question {
    let instruction = prompt::next_question(question, candidate_answer);
    match gateway.generate(&INTERVIEWER, &instruction).await {
        Ok(text) => Question::new(text.trim(), QuestionType::Technical, "adaptive", "follow_up"),
        Err(err) => {
            warn!(error = %err, "next_question: generation failed, using fallback");
            Question::new(
                FOLLOW_UP_FALLBACK,
                QuestionType::Technical,
                "adaptive",
                "problem_solving",
            )
        }
    }
}

/// Standalone coding exercise.
pub async fn coding_question(gateway: &dyn Gateway) -> Question {
    match gateway.generate(&INTERVIEWER, prompt::CODING_QUESTION).await {
        Ok(text) => Question::new(text.trim(), QuestionType::Coding, "practical", "programming"),
        Err(err) => {
            warn!(error = %err, "coding_question: generation failed, using fallback");
            Question::new(CODING_FALLBACK, QuestionType::Coding, "practical", "programming")
        }
    }
}

/// Scores an answer. Suggestions are fixed and do not depend on the answer.
pub async fn evaluate_response(
    gateway: &dyn Gateway,
    question: &str,
    candidate_answer: &str,
) -> Feedback {
    let instruction = prompt::evaluate_response(question, candidate_answer);
    match gateway.generate(&EVALUATOR, &instruction).await {
        Ok(text) => Feedback {
            score: extract_score(&text),
            feedback: text,
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        },
        Err(err) => {
            warn!(error = %err, "evaluate_response: generation failed, using fallback");
            Feedback {
                score: FALLBACK_SCORE,
                feedback: EVALUATION_FALLBACK.to_string(),
                suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            }
        }
    }
}
