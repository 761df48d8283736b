//! Click counting and long-press detection on top of a [`Debouncer`].
//!
//! A series of short presses is reported once, after the button has stayed released for longer than
//! `short_duration`.  A press held past `long_duration` is reported as a long press as soon as the
//! threshold is crossed; any clicks that came just before it are reported in the same update.

use crate::config::ButtonConfig;
use crate::debouncer::Debouncer;
use crate::error::{interval_millis, Error};
use crate::source::BoolSource;
use crate::timekeeper::{elapsed_since, Clock};

pub struct Button<S, C> {
    debouncer: Debouncer<S, C>,
    value_when_pressed: bool,
    short_millis: u32,
    long_millis: u32,
    last_change_millis: u32,
    short_counter: u32,
    short_to_show: u32,
    long_registered: bool,
    long_to_show: bool,
}

impl<S: BoolSource, C: Clock> Button<S, C> {
    pub fn new(source: S, clock: C) -> Result<Self, Error<S::Error>> {
        Self::with_config(source, clock, ButtonConfig::default())
    }

    pub fn with_config(source: S, clock: C, config: ButtonConfig) -> Result<Self, Error<S::Error>> {
        let short_millis = interval_millis::<S::Error>(config.short_duration)?;
        let long_millis = interval_millis::<S::Error>(config.long_duration)?;
        let debouncer = Debouncer::with_config(source, clock, config.debounce)?;
        let last_change_millis = debouncer.clock().millis();

        Ok(Button {
            debouncer,
            value_when_pressed: config.value_when_pressed,
            short_millis,
            long_millis,
            last_change_millis,
            short_counter: 0,
            short_to_show: 0,
            long_registered: false,
            long_to_show: false,
        })
    }

    /// Sample the input.  On a failed read nothing changes and the error is returned as-is.
    pub fn update(&mut self) -> Result<(), S::Error> {
        self.debouncer.update()?;
        self.track_presses();
        Ok(())
    }

    pub fn update_from(&mut self, raw: bool) {
        self.debouncer.update_from(raw);
        self.track_presses();
    }

    fn track_presses(&mut self) {
        let now = self.debouncer.clock().millis();
        self.short_to_show = 0;
        self.long_to_show = false;

        if self.pressed() {
            self.last_change_millis = now;
            self.short_counter += 1;
        } else if self.released() {
            self.last_change_millis = now;
            self.long_registered = false;
        } else {
            let held = self.debouncer.value() == self.value_when_pressed;
            let duration = elapsed_since(now, self.last_change_millis);
            if held && !self.long_registered && duration > self.long_millis {
                self.long_registered = true;
                self.long_to_show = true;
                // the press that turned long was counted as a click; it is not one
                self.short_to_show = self.short_counter.saturating_sub(1);
                self.short_counter = 0;
                log::debug!("long press after {} clicks", self.short_to_show);
            } else if !held && self.short_counter > 0 && duration > self.short_millis {
                self.short_to_show = self.short_counter;
                self.short_counter = 0;
                log::debug!("{} clicks", self.short_to_show);
            }
        }
    }
}

impl<S, C> Button<S, C> {
    /// The button went down on the most recent update.
    pub fn pressed(&self) -> bool {
        if self.value_when_pressed {
            self.debouncer.rose()
        } else {
            self.debouncer.fell()
        }
    }

    /// The button came up on the most recent update.
    pub fn released(&self) -> bool {
        if self.value_when_pressed {
            self.debouncer.fell()
        } else {
            self.debouncer.rose()
        }
    }

    pub fn is_held(&self) -> bool {
        self.debouncer.value() == self.value_when_pressed
    }

    /// Number of short presses in a series that ended on the most recent update, otherwise 0.
    pub fn short_count(&self) -> u32 {
        self.short_to_show
    }

    /// A long press was recognized on the most recent update.
    pub fn long_press(&self) -> bool {
        self.long_to_show
    }

    pub fn debouncer(&self) -> &Debouncer<S, C> {
        &self.debouncer
    }

    pub fn into_debouncer(self) -> Debouncer<S, C> {
        self.debouncer
    }
}
