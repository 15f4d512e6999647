//! Quiz model and quiz-taking session.
//!
//! DESIGN
//! ======
//! The backend identifies correct answers by option text. On arrival each
//! option gets a stable id and correct answers are resolved to ids once, so
//! scoring compares id sets and never re-matches strings.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use std::collections::{BTreeSet, HashMap};

use crate::net::types::{BackendQuestion, QuestionType, QuizResponse};

/// How many options a question accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    YesNo,
}

impl From<QuestionType> for QuestionKind {
    fn from(value: QuestionType) -> Self {
        match value {
            QuestionType::SingleCorrect => Self::SingleChoice,
            QuestionType::MultipleCorrect => Self::MultipleChoice,
            QuestionType::YesNo => Self::YesNo,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<QuizOption>,
    pub correct: BTreeSet<String>,
}

impl Question {
    fn from_backend(index: usize, backend: &BackendQuestion) -> Self {
        let options: Vec<QuizOption> = backend
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| QuizOption { id: format!("opt-{index}-{i}"), text: text.clone() })
            .collect();
        let kind = QuestionKind::from(backend.kind);
        let wanted: Vec<&String> = match kind {
            QuestionKind::MultipleChoice => backend.correct_answers.iter().collect(),
            QuestionKind::SingleChoice | QuestionKind::YesNo => backend.correct_answers.iter().take(1).collect(),
        };
        let correct = wanted
            .into_iter()
            .filter_map(|answer| options.iter().find(|o| &o.text == answer).map(|o| o.id.clone()))
            .collect();
        Self { id: format!("q-{index}"), text: backend.question.clone(), kind, options, correct }
    }

    pub fn allows_multiple(&self) -> bool {
        self.kind == QuestionKind::MultipleChoice
    }

    pub fn is_correct_option(&self, option_id: &str) -> bool {
        self.correct.contains(option_id)
    }

    /// Whether `selected` matches the correct set exactly. An unanswered
    /// question only counts for multiple choice with no resolved answers.
    pub fn is_answered_correctly(&self, selected: Option<&BTreeSet<String>>) -> bool {
        match selected {
            Some(selected) => selected == &self.correct,
            None => self.allows_multiple() && self.correct.is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn from_response(response: &QuizResponse, file_name: Option<&str>) -> Self {
        Self {
            title: quiz_title(file_name),
            questions: response.questions.iter().enumerate().map(|(i, q)| Question::from_backend(i, q)).collect(),
        }
    }
}

pub fn quiz_title(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if !name.is_empty() => format!("Quiz from {name}"),
        _ => "Generated Quiz".to_owned(),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Submitted,
}

/// How an option should be highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Selected,
    /// Submitted: chosen and correct.
    Correct,
    /// Submitted: correct but not chosen.
    Missed,
    /// Submitted: chosen but wrong.
    Wrong,
}

/// One attempt at a quiz, with an optional countdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    quiz: Quiz,
    time_limit_secs: u32,
    time_left: u32,
    phase: QuizPhase,
    answers: HashMap<String, BTreeSet<String>>,
    score: Option<usize>,
}

impl QuizSession {
    /// `time_limit_secs == 0` means untimed.
    pub fn new(quiz: Quiz, time_limit_secs: u32) -> Self {
        Self {
            quiz,
            time_limit_secs,
            time_left: time_limit_secs,
            phase: QuizPhase::NotStarted,
            answers: HashMap::new(),
            score: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn has_time_limit(&self) -> bool {
        self.time_limit_secs > 0
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn start(&mut self) {
        self.phase = QuizPhase::InProgress;
        self.answers.clear();
        self.score = None;
        self.time_left = self.time_limit_secs;
    }

    /// Back to the pre-start screen, discarding answers.
    pub fn reset(&mut self) {
        self.phase = QuizPhase::NotStarted;
        self.answers.clear();
        self.score = None;
        self.time_left = self.time_limit_secs;
    }

    /// Record a choice. Multiple-choice questions toggle the option; the
    /// others replace any previous choice. Ignored unless in progress.
    pub fn select(&mut self, question_id: &str, option_id: &str) {
        if self.phase != QuizPhase::InProgress {
            return;
        }
        let Some(question) = self.quiz.questions.iter().find(|q| q.id == question_id) else {
            return;
        };
        let entry = self.answers.entry(question_id.to_owned()).or_default();
        if question.allows_multiple() {
            if !entry.remove(option_id) {
                entry.insert(option_id.to_owned());
            }
        } else {
            entry.clear();
            entry.insert(option_id.to_owned());
        }
    }

    pub fn is_selected(&self, question_id: &str, option_id: &str) -> bool {
        self.answers.get(question_id).is_some_and(|s| s.contains(option_id))
    }

    pub fn option_mark(&self, question: &Question, option_id: &str) -> OptionMark {
        let selected = self.is_selected(&question.id, option_id);
        if self.phase != QuizPhase::Submitted {
            return if selected { OptionMark::Selected } else { OptionMark::Idle };
        }
        match (selected, question.is_correct_option(option_id)) {
            (true, true) => OptionMark::Correct,
            (false, true) => OptionMark::Missed,
            (true, false) => OptionMark::Wrong,
            (false, false) => OptionMark::Idle,
        }
    }

    pub fn is_question_correct(&self, question: &Question) -> bool {
        question.is_answered_correctly(self.answers.get(&question.id))
    }

    /// Advance the countdown by one second. Returns `true` when this tick
    /// ran the clock out and submitted the quiz.
    pub fn tick(&mut self) -> bool {
        if self.phase != QuizPhase::InProgress || !self.has_time_limit() {
            return false;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.submit();
            return true;
        }
        self.time_left -= 1;
        false
    }

    /// Finish the attempt and return the number of correct questions.
    pub fn submit(&mut self) -> usize {
        let correct = self.quiz.questions.iter().filter(|q| self.is_question_correct(q)).count();
        self.phase = QuizPhase::Submitted;
        self.score = Some(correct);
        correct
    }
}

/// `M:SS` countdown text.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
