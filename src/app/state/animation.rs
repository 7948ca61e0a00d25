use crate::app::scheduler::TickScheduler;
use crate::shared::PulseOptions;
use casteljau_pulse_engine::AnimationClock;

/// Zustand der Puls-Animation: Countdown-Uhr und Tick-Geber.
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Countdown, aus dem `t` abgeleitet wird
    pub clock: AnimationClock,
    /// Tick-Geber (Besitzer des Timers)
    pub scheduler: TickScheduler,
}

impl AnimationState {
    /// Erstellt Uhr und gestoppten Scheduler aus den Optionen.
    pub fn from_options(options: &PulseOptions) -> Self {
        Self {
            clock: AnimationClock::new(options.cycle_ticks),
            scheduler: TickScheduler::new(options.tick_period(), options.max_catch_up_ticks),
        }
    }

    /// Aktueller Animationsparameter.
    pub fn t(&self) -> f32 {
        self.clock.t()
    }
}
