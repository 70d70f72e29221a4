pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::model::Phase;
use crate::session::QuizSession;

/// Capa de presentación. El motor es el único dueño del estado del quiz;
/// aquí solo viven los buffers de los campos de texto y el último aviso
/// de página, y cada entrada del usuario se despacha como operación.
pub struct QuizUi {
    pub session: QuizSession,
    inputs: Vec<String>,
    message: String,
}

impl QuizUi {
    pub fn new(session: QuizSession) -> Self {
        let inputs = vec![String::new(); session.question_count()];
        Self {
            session,
            inputs,
            message: String::new(),
        }
    }
}

impl App for QuizUi {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Caduca señales transitorias antes de pintar.
        self.session.tick();

        // Dispatch por fase a las vistas
        match self.session.phase() {
            Phase::InProgress | Phase::PageCleared => views::quiz::ui_quiz(self, ctx),
            Phase::Finished => views::summary::ui_summary(self, ctx),
        }

        // Repintar justo cuando venza el próximo temporizador.
        if let Some(deadline) = self.session.next_expiry() {
            let wait = deadline.saturating_duration_since(std::time::Instant::now());
            ctx.request_repaint_after(wait);
        }
    }
}
