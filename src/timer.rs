use std::time::{Duration, Instant};

/// Ventana del emoji de acierto/fallo por pregunta.
pub const ANSWER_FLASH_WINDOW: Duration = Duration::from_secs(1);
/// Ventana de la celebración al completar una página.
pub const PAGE_FLASH_WINDOW: Duration = Duration::from_secs(10);

/// Reloj intercambiable para que los tests no dependan del tiempo real.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Real,
    Fixed(Instant),
}

impl Clock {
    pub fn fixed(at: Instant) -> Self {
        Clock::Fixed(at)
    }

    pub fn now(&self) -> Instant {
        match self {
            Clock::Real => Instant::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Avanza un reloj fijo; sobre el reloj real no hace nada.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Categorías de señal transitoria. Como mucho un vencimiento
/// pendiente por categoría.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Answer,
    Page,
}

/// Vencimientos de las señales transitorias. Programar una categoría
/// sustituye su vencimiento pendiente: los temporizadores no se solapan
/// y no quedan banderas viejas encendidas.
#[derive(Debug, Clone, Default)]
pub struct FeedbackTimers {
    answer: Option<Instant>,
    page: Option<Instant>,
}

impl FeedbackTimers {
    fn slot(&self, kind: FlashKind) -> Option<Instant> {
        match kind {
            FlashKind::Answer => self.answer,
            FlashKind::Page => self.page,
        }
    }

    fn slot_mut(&mut self, kind: FlashKind) -> &mut Option<Instant> {
        match kind {
            FlashKind::Answer => &mut self.answer,
            FlashKind::Page => &mut self.page,
        }
    }

    /// Programa (o reprograma) el vencimiento de una categoría.
    pub fn schedule(&mut self, kind: FlashKind, now: Instant, window: Duration) {
        *self.slot_mut(kind) = Some(now + window);
    }

    pub fn cancel(&mut self, kind: FlashKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn is_pending(&self, kind: FlashKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Consume el vencimiento si ya pasó. Devuelve `true` una sola vez.
    pub fn take_expired(&mut self, kind: FlashKind, now: Instant) -> bool {
        match self.slot(kind) {
            Some(deadline) if now >= deadline => {
                *self.slot_mut(kind) = None;
                true
            }
            _ => false,
        }
    }

    /// El vencimiento pendiente más próximo, para programar repintados.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.answer, self.page) {
            (Some(a), Some(p)) => Some(a.min(p)),
            (a, p) => a.or(p),
        }
    }

    pub fn clear(&mut self) {
        self.answer = None;
        self.page = None;
    }
}
