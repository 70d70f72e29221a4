use super::*;
use crate::model::{HintOutcome, Verdict};
use crate::timer::{ANSWER_FLASH_WINDOW, FlashKind};

impl QuizSession {
    /// Guarda la respuesta tal cual se escribió; el recorte se aplica
    /// solo al comparar.
    pub fn set_answer(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_index(index)?;
        self.answers[index] = text.into();
        Ok(())
    }

    /// Compara la respuesta recortada con la esperada y deja la señal
    /// transitoria correspondiente. No cambia de fase.
    pub fn check_answer(&mut self, index: usize) -> Result<Verdict, SessionError> {
        self.ensure_index(index)?;
        let question = &self.questions[index];
        let verdict = if question.matches(&self.answers[index]) {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                expected: question.answer.trim().to_owned(),
            }
        };

        let flash = match &verdict {
            Verdict::Correct => Flash::Correct { index },
            Verdict::Incorrect { expected } => Flash::Incorrect {
                index,
                expected: expected.clone(),
            },
        };
        self.flash_answer(flash);
        Ok(verdict)
    }

    /// Revela un carácter más de la respuesta y lo suma al contador de
    /// penalización. Con la respuesta entera ya revelada no hace nada
    /// y lo señala como `Exhausted`.
    pub fn request_hint(&mut self, index: usize) -> Result<HintOutcome, SessionError> {
        self.ensure_index(index)?;
        let total = self.questions[index].answer_chars();
        if self.hint_levels[index] >= total {
            self.flash_answer(Flash::HintExhausted { index });
            return Ok(HintOutcome::Exhausted);
        }

        self.hint_levels[index] += 1;
        self.hints_used += 1;
        let prefix = self.questions[index].hint_prefix(self.hint_levels[index]);
        log::debug!(
            "pista {}/{} en la pregunta {}",
            self.hint_levels[index],
            total,
            index
        );
        Ok(HintOutcome::Revealed(prefix))
    }

    // Una señal nueva sustituye a la pendiente de su categoría:
    // nunca hay dos temporizadores de respuesta vivos a la vez.
    fn flash_answer(&mut self, flash: Flash) {
        self.answer_flash = Some(flash);
        let now = self.clock.now();
        self.timers.schedule(FlashKind::Answer, now, ANSWER_FLASH_WINDOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_bank::{bank, fixed_session_with, question};

    #[test]
    fn set_answer_stores_the_text_exactly() {
        let mut session = QuizSession::new(bank(3));
        session.set_answer(1, "  r1  ").unwrap();
        assert_eq!(session.answers[1], "  r1  ");
    }

    #[test]
    fn out_of_range_index_is_signalled() {
        let mut session = QuizSession::new(bank(3));
        let err = session.set_answer(3, "x").unwrap_err();
        assert_eq!(err, SessionError::IndexOutOfRange { index: 3, count: 3 });
        assert!(session.check_answer(7).is_err());
        assert!(session.request_hint(99).is_err());
    }

    #[test]
    fn check_answer_trims_only_for_comparison() {
        let mut session = QuizSession::new(bank(2));
        session.set_answer(0, "  r0 ").unwrap();
        assert_eq!(session.check_answer(0).unwrap(), Verdict::Correct);
        // El texto guardado sigue intacto.
        assert_eq!(session.answers[0], "  r0 ");
    }

    #[test]
    fn check_answer_is_idempotent() {
        let mut session = QuizSession::new(bank(2));
        session.set_answer(0, "mal").unwrap();
        let first = session.check_answer(0).unwrap();
        let second = session.check_answer(0).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            Verdict::Incorrect {
                expected: "r0".to_owned()
            }
        );
    }

    #[test]
    fn hints_reveal_char_prefixes_in_order() {
        let questions = vec![question("ごはんを ___ ください。", "たべて")];
        let mut session = fixed_session_with(questions, SessionConfig::default());

        assert_eq!(
            session.request_hint(0).unwrap(),
            HintOutcome::Revealed("た".to_owned())
        );
        assert_eq!(
            session.request_hint(0).unwrap(),
            HintOutcome::Revealed("たべ".to_owned())
        );
        assert_eq!(
            session.request_hint(0).unwrap(),
            HintOutcome::Revealed("たべて".to_owned())
        );

        // La cuarta no revela nada y el prefijo se queda como estaba.
        assert_eq!(session.request_hint(0).unwrap(), HintOutcome::Exhausted);
        assert_eq!(session.hint_levels[0], 3);
        assert_eq!(session.questions[0].hint_prefix(session.hint_levels[0]), "たべて");
        assert_eq!(session.hints_used, 3);
    }

    #[test]
    fn hint_level_is_monotonic_and_bounded() {
        let mut session = QuizSession::new(bank(1));
        let cap = session.questions[0].answer_chars();
        let mut previous = 0;
        for _ in 0..(cap + 5) {
            let _ = session.request_hint(0).unwrap();
            assert!(session.hint_levels[0] >= previous);
            assert!(session.hint_levels[0] <= cap);
            previous = session.hint_levels[0];
        }
        assert_eq!(session.hint_levels[0], cap);
        assert_eq!(session.hints_used, cap as u32);
    }

    #[test]
    fn a_new_answer_flash_supersedes_the_pending_one() {
        let mut session = fixed_session_with(bank(2), SessionConfig::default());
        session.set_answer(0, "r0").unwrap();
        session.check_answer(0).unwrap();
        assert_eq!(session.answer_flash, Some(Flash::Correct { index: 0 }));

        session.check_answer(1).unwrap();
        assert_eq!(
            session.answer_flash,
            Some(Flash::Incorrect {
                index: 1,
                expected: "r1".to_owned()
            })
        );
        assert!(session.timers.is_pending(FlashKind::Answer));
    }
}
