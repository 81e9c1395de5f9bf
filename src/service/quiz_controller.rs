use rand::{Rng, seq::SliceRandom};
use tracing::{debug, error, info, warn};

use crate::{
    api::quiz_source::QuestionSource,
    models::{
        error::ClientError,
        quiz_session::{QuizPhase, QuizSession},
        view::{AnswerControl, AnswerMark, QuizView, result_heading},
    },
    service::shuffle::draw,
};

/// Drives a quiz through `Loading -> Presenting(0..n) -> Finished`, keeping
/// the session and the view it implies in step.
pub struct QuizController<S, R> {
    source: S,
    rng: R,
    pool_size: usize,
    session: QuizSession,
    phase: QuizPhase,
    view: QuizView,
}

impl<S, R> QuizController<S, R>
where
    S: QuestionSource,
    R: Rng,
{
    pub fn new(source: S, rng: R, pool_size: usize) -> Self {
        Self {
            source,
            rng,
            pool_size,
            session: QuizSession::default(),
            phase: QuizPhase::Loading,
            view: QuizView::default(),
        }
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn view(&self) -> &QuizView {
        &self.view
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.phase = QuizPhase::Loading;
        self.view.clear_answers();

        let pool = match self.source.fetch_pool().await {
            Ok(pool) => pool,
            Err(e) => return Err(self.fail(e)),
        };

        let pool_len = pool.len();
        let questions = draw(pool, self.pool_size, &mut self.rng);
        if questions.is_empty() {
            return Err(self.fail(ClientError::EmptyPool));
        }

        self.session = QuizSession::new(questions);
        info!(
            "Quiz session started with {} of {} questions",
            self.session.len(),
            pool_len
        );

        self.phase = QuizPhase::Presenting(0);
        self.present(0);
        Ok(())
    }

    fn fail(&mut self, e: ClientError) -> ClientError {
        error!("Failed to load questions: {}", e);
        self.session = QuizSession::default();
        self.view.question.clear();
        self.phase = QuizPhase::Failed(e.user_message());
        e
    }

    // Only the current, unanswered question can be rendered.
    fn present(&mut self, index: usize) -> bool {
        if index != self.session.position() || self.session.is_answered() {
            warn!(
                "Refusing to present question {} at position {}",
                index,
                self.session.position()
            );
            return false;
        }

        let Some(question) = self.session.questions().get(index) else {
            warn!("Tried to present question {} of {}", index, self.session.len());
            return false;
        };

        self.view.clear_answers();
        self.view.question = question.prompt();

        let mut answers = question.answer_set();
        answers.shuffle(&mut self.rng);
        self.view.answers = answers.into_iter().map(AnswerControl::new).collect();

        debug!("Presenting question {}", index);
        true
    }

    /// Only the first selection per question is accepted.
    pub fn select(&mut self, selected: &str) -> bool {
        let QuizPhase::Presenting(index) = self.phase else {
            warn!("Ignoring answer while {}", self.phase);
            return false;
        };

        if self.session.is_answered() {
            warn!("Question {} already answered", index);
            return false;
        }

        if !self.view.answers.iter().any(|a| a.enabled && a.text == selected) {
            warn!("No answer control with text {:?}", selected);
            return false;
        }

        let Some(correct) = self.session.current().map(|q| q.correct()) else {
            return false;
        };

        for control in self.view.answers.iter_mut() {
            control.enabled = false;
            control.mark = if control.text == correct {
                AnswerMark::Correct
            } else {
                AnswerMark::Wrong
            };
        }

        let is_correct = selected == correct;
        self.session.record_answer(is_correct);
        self.view.advance_enabled = true;

        debug!(
            "Question {} answered {}, score {}",
            index,
            if is_correct { "correctly" } else { "wrongly" },
            self.session.score()
        );
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match self.view.answers.get(index) {
            Some(control) => {
                let text = control.text.clone();
                self.select(&text)
            }
            None => {
                warn!("No answer control at {}", index);
                false
            }
        }
    }

    pub fn advance(&mut self) -> &QuizPhase {
        if !matches!(self.phase, QuizPhase::Presenting(_)) || !self.view.advance_enabled {
            warn!("Advance ignored while {}", self.phase);
            return &self.phase;
        }

        match self.session.advance() {
            Some(index) => {
                self.phase = QuizPhase::Presenting(index);
                self.present(index);
            }
            None => {
                self.phase = QuizPhase::Finished;
                self.show_result();
            }
        }

        &self.phase
    }

    pub fn show_result(&mut self) {
        self.view.quiz_box_visible = false;
        self.view.result.visible = true;
        self.view.result.heading = result_heading(self.session.score(), self.session.len());
        info!("{}", self.view.result.heading);
    }

    pub async fn retry(&mut self) -> Result<(), ClientError> {
        self.session.reset();
        self.view.result.visible = false;
        self.view.quiz_box_visible = true;
        self.load().await
    }
}
