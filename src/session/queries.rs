use super::*;

impl QuizSession {
    // Accesores seguros
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Result<&Question, SessionError> {
        self.ensure_index(index)?;
        Ok(&self.questions[index])
    }

    pub fn answer(&self, index: usize) -> Result<&str, SessionError> {
        self.ensure_index(index)?;
        Ok(&self.answers[index])
    }

    pub fn hint_level(&self, index: usize) -> Result<usize, SessionError> {
        self.ensure_index(index)?;
        Ok(self.hint_levels[index])
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }
}
