//! Translation-tools state: three independent tab forms over the
//! translation endpoints.

#[cfg(test)]
#[path = "translation_test.rs"]
mod translation_test;

use crate::net::types::QuizQuestion;

/// Which translation tab is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationTab {
    #[default]
    General,
    Educational,
    Quiz,
}

/// General text translation form.
#[derive(Clone, Debug)]
pub struct TextForm {
    pub text: String,
    pub from_lang: String,
    pub to_lang: String,
    pub translated: String,
    pub busy: bool,
}

impl Default for TextForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            from_lang: "en".to_owned(),
            to_lang: "es".to_owned(),
            translated: String::new(),
            busy: false,
        }
    }
}

impl TextForm {
    /// Swap source and target languages along with their texts, so a
    /// completed translation can be translated back.
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.from_lang, &mut self.to_lang);
        std::mem::swap(&mut self.text, &mut self.translated);
    }

    pub fn translated_received(&mut self, translated: String) {
        self.translated = translated;
        self.busy = false;
    }
}

/// Educational-content translation form.
#[derive(Clone, Debug)]
pub struct EducationalForm {
    pub content: String,
    pub content_type: String,
    pub from_lang: String,
    pub to_lang: String,
    pub translated: String,
    pub busy: bool,
}

impl Default for EducationalForm {
    fn default() -> Self {
        Self {
            content: String::new(),
            content_type: "text".to_owned(),
            from_lang: "en".to_owned(),
            to_lang: "es".to_owned(),
            translated: String::new(),
            busy: false,
        }
    }
}

/// Quiz translation form: questions are authored inline, then translated
/// as a batch.
#[derive(Clone, Debug)]
pub struct QuizForm {
    pub questions: Vec<QuizQuestion>,
    pub from_lang: String,
    pub to_lang: String,
    pub translated: Vec<QuizQuestion>,
    pub busy: bool,
}

impl Default for QuizForm {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            from_lang: "en".to_owned(),
            to_lang: "es".to_owned(),
            translated: Vec::new(),
            busy: false,
        }
    }
}

impl QuizForm {
    /// Append an empty four-option question for inline editing.
    pub fn add_question(&mut self) {
        self.questions.push(QuizQuestion {
            question: String::new(),
            options: vec![String::new(); 4],
            correct_answer: 0,
            explanation: None,
            topic: None,
            difficulty: None,
        });
    }

    /// Update the prompt text of the question at `index`.
    pub fn set_question_text(&mut self, index: usize, text: String) {
        if let Some(question) = self.questions.get_mut(index) {
            question.question = text;
        }
    }

    /// Update one option of the question at `index`.
    pub fn set_option(&mut self, index: usize, option: usize, text: String) {
        if let Some(slot) = self
            .questions
            .get_mut(index)
            .and_then(|question| question.options.get_mut(option))
        {
            *slot = text;
        }
    }

    pub fn remove_question(&mut self, index: usize) {
        if index < self.questions.len() {
            self.questions.remove(index);
        }
    }
}
