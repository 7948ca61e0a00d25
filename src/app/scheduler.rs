//! Periodischer Tick-Geber für die Animation.
//!
//! Ersetzt einen sich selbst neu einplanenden Intervall-Callback durch einen
//! expliziten Zustand mit genau einem Besitzer (`AppState`) und Start/Stop-
//! Lebenszyklus. Der Host meldet pro Frame die vergangene Zeit, der Scheduler
//! rechnet sie in ganze Ticks um.

use std::time::Duration;

/// Wandelt vergangene Zeit in ganze Ticks fester Periode um.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    max_catch_up: u32,
    accumulated: Duration,
    running: bool,
}

impl TickScheduler {
    /// Erstellt einen gestoppten Scheduler. Eine Periode von 0 wird auf 1 ms angehoben.
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            max_catch_up: max_catch_up.max(1),
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    /// Startet den Timer. Ohne Wirkung, wenn er bereits läuft.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.accumulated = Duration::ZERO;
        log::info!("Animations-Timer gestartet (Periode {:?})", self.period);
    }

    /// Stoppt den Timer und verwirft angesammelte Zeit.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.accumulated = Duration::ZERO;
        log::info!("Animations-Timer gestoppt");
    }

    /// Gibt zurück, ob der Timer läuft.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick-Periode.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Addiert `elapsed` und liefert die Anzahl fälliger Ticks.
    ///
    /// Der Rest unterhalb einer Periode bleibt für den nächsten Aufruf stehen.
    /// Mehr als `max_catch_up` fällige Ticks werden gekappt, der Überhang verfällt.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulated += elapsed;
        let period_nanos = self.period.as_nanos();
        let due = self.accumulated.as_nanos() / period_nanos;
        let remainder = self.accumulated.as_nanos() % period_nanos;
        // remainder < period, passt damit sicher in u64
        self.accumulated = Duration::from_nanos(remainder as u64);

        let ticks = due.min(u128::from(self.max_catch_up)) as u32;
        if due > u128::from(ticks) {
            log::debug!("{} Animations-Ticks verworfen", due - u128::from(ticks));
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(period_ms: u64, max_catch_up: u32) -> TickScheduler {
        let mut scheduler = TickScheduler::new(Duration::from_millis(period_ms), max_catch_up);
        scheduler.start();
        scheduler
    }

    #[test]
    fn stopped_scheduler_yields_nothing() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(10), 10);

        assert_eq!(scheduler.advance(Duration::from_millis(500)), 0);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn remainder_is_carried() {
        let mut scheduler = running(10, 10);

        assert_eq!(scheduler.advance(Duration::from_millis(25)), 2);
        assert_eq!(scheduler.advance(Duration::from_millis(4)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn catch_up_is_capped() {
        let mut scheduler = running(10, 3);

        assert_eq!(scheduler.advance(Duration::from_millis(1005)), 3);
        // Überhang verfällt, nur der Rest von 5 ms bleibt
        assert_eq!(scheduler.advance(Duration::from_millis(5)), 1);
    }

    #[test]
    fn stop_discards_accumulated_time() {
        let mut scheduler = running(10, 10);
        scheduler.advance(Duration::from_millis(9));

        scheduler.stop();
        scheduler.start();

        assert_eq!(scheduler.advance(Duration::from_millis(2)), 0);
    }

    #[test]
    fn zero_period_is_clamped() {
        let scheduler = TickScheduler::new(Duration::ZERO, 0);

        assert_eq!(scheduler.period(), Duration::from_millis(1));
    }
}
