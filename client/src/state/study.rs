//! Dashboard study workflow: which step the user is on, plus the settings
//! forms that turn into generation requests.
//!
//! DESIGN
//! ======
//! Stages form a small state machine driven by the dashboard. Transitions
//! that need data (a selected document, a generated quiz or deck) take it
//! as an argument so a stage is never entered without its payload.

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

use crate::net::types::{FlashcardRequest, QuizRequest};
use crate::state::flashcards::Deck;
use crate::state::quiz::Quiz;

pub const MISSING_FILE_ID: &str = "No uploaded file ID found. Please upload a file first.";
pub const QUIZ_COUNT_REQUIRED: &str = "Please specify at least one question type count greater than zero.";
pub const FLASHCARD_COUNT_REQUIRED: &str = "Please specify a number of flashcards greater than zero.";

pub const QUIZ_LANGUAGES: &[(&str, &str)] =
    &[("en", "English"), ("es", "Spanish"), ("fr", "French"), ("ja", "Japanese"), ("de", "German")];

pub const FLASHCARD_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudyStage {
    #[default]
    Library,
    ChooseTool,
    QuizSettings,
    TimeLimit,
    TakingQuiz,
    FlashcardSettings,
    ViewingFlashcards,
}

/// The document the current workflow operates on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudySource {
    pub file_id: String,
    pub file_name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudyFlow {
    stage: StudyStage,
    source: Option<StudySource>,
    quiz: Option<Quiz>,
    time_limit_secs: u32,
    deck: Option<Deck>,
}

impl StudyFlow {
    pub fn stage(&self) -> StudyStage {
        self.stage
    }

    pub fn source(&self) -> Option<&StudySource> {
        self.source.as_ref()
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn file_id(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.file_id.as_str())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.file_name.as_str())
    }

    pub fn select_source(&mut self, source: StudySource) {
        self.source = Some(source);
        self.quiz = None;
        self.deck = None;
        self.stage = StudyStage::ChooseTool;
    }

    pub fn choose_quiz(&mut self) {
        if self.stage == StudyStage::ChooseTool {
            self.stage = StudyStage::QuizSettings;
        }
    }

    pub fn choose_flashcards(&mut self) {
        if self.stage == StudyStage::ChooseTool {
            self.stage = StudyStage::FlashcardSettings;
        }
    }

    pub fn quiz_ready(&mut self, quiz: Quiz) {
        self.quiz = Some(quiz);
        self.stage = StudyStage::TimeLimit;
    }

    pub fn start_quiz(&mut self, time_limit_secs: u32) {
        if self.quiz.is_some() {
            self.time_limit_secs = time_limit_secs;
            self.stage = StudyStage::TakingQuiz;
        }
    }

    pub fn deck_ready(&mut self, deck: Deck) {
        self.deck = Some(deck);
        self.stage = StudyStage::ViewingFlashcards;
    }

    /// One step back along the path that led to the current stage.
    pub fn back(&mut self) {
        self.stage = match self.stage {
            StudyStage::Library | StudyStage::ChooseTool => StudyStage::Library,
            StudyStage::QuizSettings | StudyStage::FlashcardSettings => StudyStage::ChooseTool,
            StudyStage::TimeLimit => StudyStage::QuizSettings,
            StudyStage::TakingQuiz => StudyStage::TimeLimit,
            StudyStage::ViewingFlashcards => StudyStage::FlashcardSettings,
        };
        if self.stage == StudyStage::Library {
            self.source = None;
        }
    }

    pub fn back_to_library(&mut self) {
        *self = Self::default();
    }
}

/// Parse a numeric form field; blanks and junk count as zero.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    pub language: String,
    pub single_correct: u32,
    pub multiple_correct: u32,
    pub yes_no: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self { language: "en".to_owned(), single_correct: 5, multiple_correct: 3, yes_no: 2 }
    }
}

impl QuizSettings {
    pub fn total(&self) -> u32 {
        self.single_correct.saturating_add(self.multiple_correct).saturating_add(self.yes_no)
    }

    pub fn to_request(&self, file_id: Option<&str>) -> Result<QuizRequest, &'static str> {
        let file_id = file_id.filter(|id| !id.is_empty()).ok_or(MISSING_FILE_ID)?;
        if self.total() == 0 {
            return Err(QUIZ_COUNT_REQUIRED);
        }
        Ok(QuizRequest {
            file_id: file_id.to_owned(),
            total_questions: self.total(),
            num_single_correct: self.single_correct,
            num_multiple_correct: self.multiple_correct,
            num_yes_no: self.yes_no,
            language: self.language.clone(),
            quizzes_type: "mixed".to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardSettings {
    pub language: String,
    pub count: u32,
}

impl Default for FlashcardSettings {
    fn default() -> Self {
        Self { language: "en".to_owned(), count: 10 }
    }
}

impl FlashcardSettings {
    pub fn to_request(&self, file_id: Option<&str>) -> Result<FlashcardRequest, &'static str> {
        let file_id = file_id.filter(|id| !id.is_empty()).ok_or(MISSING_FILE_ID)?;
        if self.count == 0 {
            return Err(FLASHCARD_COUNT_REQUIRED);
        }
        Ok(FlashcardRequest {
            file_id: file_id.to_owned(),
            total_flashcards: self.count,
            language: self.language.clone(),
        })
    }
}
