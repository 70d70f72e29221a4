// src/view_models.rs

use crate::model::{Flash, Phase};

#[derive(Clone, Debug)]
pub struct PageInfo {
    pub number: usize, // 1-based, para mostrar
    pub total: usize,
}

impl PageInfo {
    pub fn label(&self) -> String {
        format!("Página {} de {}", self.number, self.total)
    }
}

#[derive(Clone, Debug)]
pub struct QuestionRow {
    pub index: usize,  // índice 0-based en el banco
    pub number: usize, // número "humano" (1,2,3…)
    pub prompt: String,
    pub translation: String,
    pub answer: String, // lo que escribió el usuario, tal cual
    pub expected: String,
    pub hint_preview: String,
    pub done: bool,
}

impl QuestionRow {
    pub fn state_label(&self) -> &'static str {
        if self.done { "✅ Correcta" } else { "❌ Pendiente" }
    }
}

/// Copia de solo lectura del estado de la sesión; la presentación
/// nunca recibe las colecciones del motor.
#[derive(Clone, Debug)]
pub struct SessionSnapshot {
    pub answers: Vec<String>,
    pub hint_levels: Vec<usize>,
    pub page: usize,
    pub page_count: usize,
    pub phase: Phase,
    pub raw_score: usize,
    pub score: f64,
    pub hints_used: u32,
    pub answer_flash: Option<Flash>,
    pub page_flash: Option<Flash>,
}

impl Flash {
    /// Texto listo para pintar; la presentación decide cuándo dejar de mostrarlo.
    pub fn label(&self) -> String {
        match self {
            Flash::Correct { .. } => "✅ ¡Correcto!".to_owned(),
            Flash::Incorrect { expected, .. } => {
                format!("❌ Incorrecto. La respuesta era: {expected}")
            }
            Flash::HintExhausted { .. } => "💡 No quedan más pistas.".to_owned(),
            Flash::PageCleared => "🎉 ¡Página completada!".to_owned(),
        }
    }
}
