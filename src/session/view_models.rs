use super::*;

// Re-export de view models
pub use crate::view_models::{PageInfo, QuestionRow, SessionSnapshot};

impl QuizSession {
    /// Instantánea completa de solo lectura para la capa de presentación.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            answers: self.answers.clone(),
            hint_levels: self.hint_levels.clone(),
            page: self.page,
            page_count: self.page_count(),
            phase: self.phase,
            raw_score: self.raw_score(),
            score: self.score(),
            hints_used: self.hints_used,
            answer_flash: self.answer_flash.clone(),
            page_flash: self.page_flash.clone(),
        }
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            number: self.page + 1,
            total: self.page_count(),
        }
    }

    /// Filas de la página actual para pintar el formulario.
    pub fn page_rows(&self) -> Vec<QuestionRow> {
        self.page_range().map(|i| self.row(i)).collect()
    }

    /// Filas de todo el banco, para el resumen final.
    pub fn summary_rows(&self) -> Vec<QuestionRow> {
        (0..self.questions.len()).map(|i| self.row(i)).collect()
    }

    fn row(&self, index: usize) -> QuestionRow {
        let question = &self.questions[index];
        QuestionRow {
            index,
            number: index + 1,
            prompt: question.prompt.clone(),
            translation: question.translation.clone(),
            answer: self.answers[index].clone(),
            expected: question.answer.clone(),
            hint_preview: question.hint_prefix(self.hint_levels[index]),
            done: self.is_correct(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_bank::bank;

    #[test]
    fn snapshot_reflects_the_session_state() {
        let mut session = QuizSession::new(bank(12));
        session.set_answer(0, "r0").unwrap();
        session.request_hint(1).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.answers.len(), 12);
        assert_eq!(snapshot.answers[0], "r0");
        assert_eq!(snapshot.hint_levels[1], 1);
        assert_eq!(snapshot.page, 0);
        assert_eq!(snapshot.page_count, 2);
        assert_eq!(snapshot.raw_score, 1);
        assert_eq!(snapshot.score, 0.75);
    }

    #[test]
    fn page_rows_cover_only_the_current_page() {
        let session = QuizSession::new(bank(12));
        let rows = session.page_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[9].index, 9);
        assert_eq!(session.summary_rows().len(), 12);
    }

    #[test]
    fn rows_carry_the_revealed_prefix() {
        let mut session = QuizSession::new(bank(2));
        session.request_hint(1).unwrap();
        let rows = session.page_rows();
        assert_eq!(rows[1].hint_preview, "r");
        assert!(!rows[1].done);
    }
}
