use core::fmt;

use crate::models::question::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    Presenting(usize),
    Finished,
    Failed(String),
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizPhase::Loading => write!(f, "loading"),
            QuizPhase::Presenting(index) => write!(f, "presenting({})", index),
            QuizPhase::Finished => write!(f, "finished"),
            QuizPhase::Failed(_) => write!(f, "failed"),
        }
    }
}

/// One run of the quiz. `position` never passes `questions.len()` and
/// `score` grows at most once per question.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    score: u32,
    answered: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            position: 0,
            score: 0,
            answered: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// Records the outcome for the current question. Returns `false` when
    /// the question was already answered or the session is over.
    pub fn record_answer(&mut self, correct: bool) -> bool {
        if self.answered || self.is_finished() {
            return false;
        }

        self.answered = true;
        if correct {
            self.score += 1;
        }
        true
    }

    pub fn advance(&mut self) -> Option<usize> {
        if !self.is_finished() {
            self.position += 1;
        }
        self.answered = false;

        if self.is_finished() {
            None
        } else {
            Some(self.position)
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.score = 0;
        self.answered = false;
    }
}
