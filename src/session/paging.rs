use std::ops::Range;
use std::time::Instant;

use super::*;
use crate::model::PageOutcome;
use crate::timer::{FlashKind, PAGE_FLASH_WINDOW};

impl QuizSession {
    /// Total de páginas (división hacia arriba; la última puede quedar corta).
    pub fn page_count(&self) -> usize {
        let page_size = self.config.page_size;
        (self.questions.len() + page_size - 1) / page_size
    }

    /// Índices de las preguntas de la página actual.
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page * self.config.page_size;
        let end = (start + self.config.page_size).min(self.questions.len());
        start..end
    }

    fn is_last_page(&self) -> bool {
        self.page + 1 >= self.page_count()
    }

    /// Condición de cierre: todas las respuestas de la página actual
    /// coinciden (recortadas) con las esperadas. Solo cuenta lo que hay
    /// de verdad en la página, también en la última si quedó corta.
    pub fn check_page(&mut self) -> PageOutcome {
        match self.phase {
            Phase::Finished => return PageOutcome::Cleared { finished: true },
            Phase::PageCleared => return PageOutcome::Cleared { finished: false },
            Phase::InProgress => {}
        }

        let range = self.page_range();
        let total = range.len();
        let correct = range.filter(|&i| self.is_correct(i)).count();
        if correct < total {
            return PageOutcome::Pending { correct, total };
        }

        // Página completada: celebración y, si era la última, fin.
        let finished = self.is_last_page();
        self.phase = if finished {
            Phase::Finished
        } else {
            Phase::PageCleared
        };
        self.page_flash = Some(Flash::PageCleared);
        let now = self.clock.now();
        self.timers.schedule(FlashKind::Page, now, PAGE_FLASH_WINDOW);
        log::info!("página {} completada (fin: {finished})", self.page + 1);
        PageOutcome::Cleared { finished }
    }

    /// Caduca las señales transitorias vencidas. Al agotarse la ventana
    /// de celebración se avanza a la página siguiente.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if self.timers.take_expired(FlashKind::Answer, now) {
            self.answer_flash = None;
        }
        if self.timers.take_expired(FlashKind::Page, now) {
            self.page_flash = None;
            if self.phase == Phase::PageCleared {
                self.page += 1;
                self.phase = Phase::InProgress;
            }
        }
    }

    /// Próximo vencimiento pendiente, para que la UI programe el repintado.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}
