use serde::{Deserialize, Serialize};

/// Una pregunta de rellenar el hueco del banco JLPT N5.
/// Los alias `jp`/`en` aceptan los nombres de campo del JSON original.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(alias = "jp")]
    pub prompt: String, // Frase con hueco
    #[serde(alias = "en")]
    pub translation: String, // Glosa en inglés
    pub answer: String, // Respuesta esperada
}

impl Question {
    /// Longitud de la respuesta en caracteres. Las respuestas son japonesas:
    /// los bytes no sirven como unidad de pista.
    pub fn answer_chars(&self) -> usize {
        self.answer.chars().count()
    }

    /// Prefijo revelado hasta `level` caracteres.
    pub fn hint_prefix(&self, level: usize) -> String {
        self.answer.chars().take(level).collect()
    }

    /// La comparación recorta ambos lados; en todo lo demás es exacta
    /// (mayúsculas y espacios interiores cuentan).
    pub fn matches(&self, input: &str) -> bool {
        input.trim() == self.answer.trim()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    PageCleared,
    Finished,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::InProgress
    }
}

/// Veredicto de comprobar una sola respuesta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
}

/// Resultado de pedir una pista. Agotarlas no es un error:
/// la presentación siempre tiene algo que pintar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    Revealed(String),
    Exhausted,
}

/// Resultado de evaluar la condición de cierre de la página actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Cleared { finished: bool },
    Pending { correct: usize, total: usize },
}

/// Señal transitoria para la capa de presentación; caduca sola vía `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Correct { index: usize },
    Incorrect { index: usize, expected: String },
    HintExhausted { index: usize },
    PageCleared,
}
