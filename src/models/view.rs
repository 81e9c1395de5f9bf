#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMark {
    Unmarked,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerControl {
    pub text: String,
    pub enabled: bool,
    pub mark: AnswerMark,
}

impl AnswerControl {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
            mark: AnswerMark::Unmarked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    pub visible: bool,
    pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub question: String,
    pub answers: Vec<AnswerControl>,
    pub advance_enabled: bool,
    pub quiz_box_visible: bool,
    pub result: ResultView,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            question: String::new(),
            answers: vec![],
            advance_enabled: false,
            quiz_box_visible: true,
            result: ResultView::default(),
        }
    }
}

impl QuizView {
    pub fn clear_answers(&mut self) {
        self.advance_enabled = false;
        self.answers.clear();
    }
}

pub fn result_heading(score: u32, total: usize) -> String {
    format!("Você acertou {} de {} perguntas!", score, total)
}
