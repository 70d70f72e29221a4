// src/data.rs

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::Question;

/// Fallos fatales al cargar el banco: sin banco no hay sesión.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no se pudo parsear el banco de preguntas: {0}")]
    Malformed(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    Empty,
    #[error("la pregunta {index} no tiene respuesta")]
    EmptyAnswer { index: usize },
}

/// Carga el banco de preguntas desde el YAML embebido.
pub fn read_questions_embedded() -> Result<Vec<Question>, LoadError> {
    read_questions_from_str(include_str!("data/quiz_questions.yaml"))
}

/// Parsea y valida un banco de preguntas en YAML.
pub fn read_questions_from_str(contents: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_yaml::from_str(contents)?;
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    for (index, question) in questions.iter().enumerate() {
        if question.answer.trim().is_empty() {
            return Err(LoadError::EmptyAnswer { index });
        }
    }
    log::debug!("banco cargado: {} preguntas", questions.len());
    Ok(questions)
}

/// Permutación uniforme del banco (Fisher–Yates, vía `rand`).
/// No muta el original: devuelve una copia barajada.
pub fn shuffled<R: Rng>(questions: &[Question], rng: &mut R) -> Vec<Question> {
    let mut copy = questions.to_vec();
    copy.shuffle(rng);
    copy
}
