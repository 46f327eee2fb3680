//! Intervalo recorrente explícito, com start/stop e re-arm.
//!
//! Não usa thread: o dono chama [`IntervalTimer::poll`] a cada frame e usa
//! [`IntervalTimer::remaining`] para agendar o próximo repaint.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    /// Cria o timer parado. Período zero é tratado como 1 ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    /// (Re)arma: o próximo disparo fica a um período de `now`.
    /// Qualquer prazo anterior é descartado.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Retorna `true` se o prazo venceu. Dispara no máximo uma vez por
    /// chamada; atrasos longos não geram rajada, o prazo é realinhado
    /// para depois de `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.period;
        if next <= now {
            let behind = now.duration_since(due).as_nanos() / self.period.as_nanos();
            let skip = u32::try_from(behind).unwrap_or(u32::MAX);
            next = due + self.period.saturating_mul(skip.saturating_add(1));
        }
        self.next_due = Some(next);
        true
    }

    /// Tempo até o próximo disparo (`None` se parado).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
