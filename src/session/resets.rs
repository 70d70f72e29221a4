use super::*;

impl QuizSession {
    /// Vuelve al estado inicial conservando el banco tal cual:
    /// ni se recarga ni se vuelve a barajar.
    pub fn retry(&mut self) {
        let count = self.questions.len();
        self.answers = vec![String::new(); count];
        self.hint_levels = vec![0; count];
        self.hints_used = 0;
        self.page = 0;
        self.phase = Phase::InProgress;
        self.answer_flash = None;
        self.page_flash = None;
        self.timers.clear();
        log::info!("sesión reiniciada");
    }
}
