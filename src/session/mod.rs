use thiserror::Error;

use crate::model::{Flash, Phase, Question};
use crate::timer::{Clock, FeedbackTimers};

// Submódulos
pub mod actions;
pub mod paging;
pub mod queries;
pub mod resets;
pub mod scoring;
pub mod view_models;

/// Error de programación, no de usuario: se señala, nunca se recorta
/// el índice en silencio.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("índice de pregunta fuera de rango: {index} (el banco tiene {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Configuración fija de la sesión.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Preguntas por página; la última página puede quedar corta.
    pub page_size: usize,
    /// Penalización sobre la puntuación final por cada pista revelada.
    pub hint_penalty: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            hint_penalty: 0.25,
        }
    }
}

/// Motor de la sesión: todo el estado mutable del quiz vive aquí.
/// La capa de presentación solo lee instantáneas y despacha operaciones;
/// nunca recibe colecciones mutables.
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<String>,
    hint_levels: Vec<usize>,
    hints_used: u32,
    page: usize,
    phase: Phase,
    config: SessionConfig,
    clock: Clock,
    timers: FeedbackTimers,
    answer_flash: Option<Flash>,
    page_flash: Option<Flash>,
}

impl QuizSession {
    /// Crea una sesión sobre un banco ya cargado y validado
    /// (ver [`crate::data::read_questions_embedded`]).
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_config(questions, SessionConfig::default())
    }

    pub fn with_config(questions: Vec<Question>, config: SessionConfig) -> Self {
        let count = questions.len();
        Self {
            questions,
            answers: vec![String::new(); count],
            hint_levels: vec![0; count],
            hints_used: 0,
            page: 0,
            phase: Phase::InProgress,
            config,
            clock: Clock::default(),
            timers: FeedbackTimers::default(),
            answer_flash: None,
            page_flash: None,
        }
    }

    fn ensure_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.questions.len() {
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange {
                index,
                count: self.questions.len(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod test_bank {
    use std::time::Instant;

    use super::{QuizSession, SessionConfig};
    use crate::model::Question;
    use crate::timer::Clock;

    pub fn question(prompt: &str, answer: &str) -> Question {
        Question {
            prompt: prompt.to_owned(),
            translation: String::new(),
            answer: answer.to_owned(),
        }
    }

    /// Banco sintético: la respuesta de la pregunta `i` es `r{i}`.
    pub fn bank(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| question(&format!("pregunta {i} ___"), &format!("r{i}")))
            .collect()
    }

    /// Sesión con reloj fijo para probar las ventanas transitorias.
    pub fn fixed_session(n: usize) -> QuizSession {
        fixed_session_with(bank(n), SessionConfig::default())
    }

    pub fn fixed_session_with(questions: Vec<Question>, config: SessionConfig) -> QuizSession {
        let mut session = QuizSession::with_config(questions, config);
        session.clock = Clock::fixed(Instant::now());
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_bank::bank;

    #[test]
    fn new_session_starts_clean() {
        let session = QuizSession::new(bank(12));
        assert_eq!(session.answers.len(), 12);
        assert!(session.answers.iter().all(String::is_empty));
        assert!(session.hint_levels.iter().all(|&h| h == 0));
        assert_eq!(session.hints_used, 0);
        assert_eq!(session.page, 0);
        assert_eq!(session.phase, Phase::InProgress);
        assert!(session.answer_flash.is_none());
        assert!(session.page_flash.is_none());
    }

    #[test]
    fn default_config_matches_the_observed_variants() {
        let config = SessionConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.hint_penalty, 0.25);
    }
}
