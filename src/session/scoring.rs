use super::*;

impl QuizSession {
    pub(crate) fn is_correct(&self, index: usize) -> bool {
        self.questions[index].matches(&self.answers[index])
    }

    /// Aciertos en todo el banco, sin penalizaciones.
    pub fn raw_score(&self) -> usize {
        (0..self.questions.len())
            .filter(|&i| self.is_correct(i))
            .count()
    }

    /// Puntuación final: aciertos menos la penalización por pistas,
    /// nunca negativa, redondeada a dos decimales para que el resultado
    /// sea reproducible.
    pub fn score(&self) -> f64 {
        let raw = self.raw_score() as f64;
        let penalty = f64::from(self.hints_used) * self.config.hint_penalty;
        round2((raw - penalty).max(0.0))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
