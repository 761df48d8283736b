use crate::config::Config;
use crate::error::{interval_millis, Error};
use crate::source::BoolSource;
use crate::timekeeper::{elapsed_since, Clock};
use core::convert::Infallible;
use core::time::Duration;

/// Debounces a [`BoolSource`] into a stable value plus one-update-wide `rose`/`fell` edges.
///
/// Nothing happens between calls to [`update`](Debouncer::update); call it from the main loop.
/// A raw change is accepted only after the raw reading has disagreed with the stable value
/// on consecutive updates spanning at least `interval` milliseconds.  Any update that sees the
/// stable value again throws the pending change away.
pub struct Debouncer<S, C> {
    source: S,
    clock: C,
    interval_millis: u32,
    raw_state: bool,
    stable_state: bool,
    previous_stable_state: bool,
    changed: bool,
    /// When the current run of disagreement was first seen.
    pending_since: Option<u32>,
    state_changed_millis: u32,
    last_duration_millis: u32,
}

impl<S: BoolSource, C: Clock> Debouncer<S, C> {
    pub fn new(source: S, clock: C) -> Result<Self, Error<S::Error>> {
        Self::with_config(source, clock, Config::default())
    }

    pub fn with_config(mut source: S, clock: C, config: Config) -> Result<Self, Error<S::Error>> {
        let interval_millis = interval_millis::<S::Error>(config.interval)?;
        let initial = match config.initial {
            Some(initial) => initial,
            None => source.read().map_err(Error::Source)?,
        };
        let now = clock.millis();

        Ok(Debouncer {
            source,
            clock,
            interval_millis,
            raw_state: initial,
            stable_state: initial,
            previous_stable_state: initial,
            changed: false,
            pending_since: None,
            state_changed_millis: now,
            last_duration_millis: 0,
        })
    }

    /// Sample the source and advance the state machine.
    ///
    /// If the read fails the error is returned as-is and nothing about the debouncer changes,
    /// including `rose` and `fell`.
    pub fn update(&mut self) -> Result<(), S::Error> {
        let raw = self.source.read()?;
        self.apply(raw);
        Ok(())
    }

    /// Advance the state machine with a reading obtained elsewhere, bypassing the source.
    pub fn update_from(&mut self, raw: bool) {
        self.apply(raw)
    }

    fn apply(&mut self, raw: bool) {
        let now = self.clock.millis();
        self.changed = false;
        self.raw_state = raw;

        if raw == self.stable_state {
            if let Some(since) = self.pending_since.take() {
                log::trace!(
                    "bounce: back to {} after {}ms",
                    raw,
                    elapsed_since(now, since)
                );
            }
            return;
        }

        match self.pending_since {
            None => {
                log::trace!("raw {} disagrees with stable value, waiting", raw);
                self.pending_since = Some(now);
            }
            Some(since) => {
                if elapsed_since(now, since) >= self.interval_millis {
                    self.confirm(raw, now);
                }
            }
        }
    }

    fn confirm(&mut self, raw: bool, now: u32) {
        self.previous_stable_state = self.stable_state;
        self.stable_state = raw;
        self.changed = true;
        self.pending_since = None;
        self.last_duration_millis = elapsed_since(now, self.state_changed_millis);
        self.state_changed_millis = now;
        log::debug!(
            "debounced {} -> {} after {}ms stable",
            self.previous_stable_state,
            self.stable_state,
            self.last_duration_millis
        );
    }

    /// How long the stable value had held before the most recent transition.
    pub fn last_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.last_duration_millis))
    }

    /// Time since the most recent transition, or since construction if there has been none.
    pub fn current_duration(&self) -> Duration {
        let millis = elapsed_since(self.clock.millis(), self.state_changed_millis);
        Duration::from_millis(u64::from(millis))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<S, C> Debouncer<S, C> {
    pub fn value(&self) -> bool {
        self.stable_state
    }

    pub fn rose(&self) -> bool {
        self.changed && !self.previous_stable_state && self.stable_state
    }

    pub fn fell(&self) -> bool {
        self.changed && self.previous_stable_state && !self.stable_state
    }

    /// The unfiltered reading from the most recent update.
    pub fn raw(&self) -> bool {
        self.raw_state
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_millis))
    }

    /// Takes effect immediately, including for a change that is already pending.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), Error<Infallible>> {
        self.interval_millis = interval_millis::<Infallible>(interval)?;
        Ok(())
    }

    pub fn release(self) -> (S, C) {
        (self.source, self.clock)
    }
}
