use core::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);
pub const DEFAULT_SHORT_DURATION: Duration = Duration::from_millis(200);
pub const DEFAULT_LONG_DURATION: Duration = Duration::from_millis(500);

/// Construction parameters for a [`Debouncer`](crate::Debouncer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How long the raw reading must disagree with the stable value before the change is accepted.
    /// Zero accepts a change on the next update that still sees it.
    pub interval: Duration,
    /// Assumed stable value.  `None` samples the source once during construction.
    pub initial: Option<bool>,
}

impl Config {
    pub fn new() -> Self {
        Config {
            interval: DEFAULT_INTERVAL,
            initial: None,
        }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn initial(mut self, initial: bool) -> Self {
        self.initial = Some(initial);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

//

/// Construction parameters for a [`Button`](crate::Button).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub debounce: Config,
    /// Longest gap after a release that still continues a series of clicks.
    pub short_duration: Duration,
    /// Hold time after which a press counts as a long press.
    pub long_duration: Duration,
    /// Debounced value while the button is held.  `false` suits a switch to ground with a pull-up.
    pub value_when_pressed: bool,
}

impl ButtonConfig {
    pub fn new() -> Self {
        ButtonConfig {
            debounce: Config::new(),
            short_duration: DEFAULT_SHORT_DURATION,
            long_duration: DEFAULT_LONG_DURATION,
            value_when_pressed: false,
        }
    }

    pub fn debounce(mut self, debounce: Config) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn short_duration(mut self, short_duration: Duration) -> Self {
        self.short_duration = short_duration;
        self
    }

    pub fn long_duration(mut self, long_duration: Duration) -> Self {
        self.long_duration = long_duration;
        self
    }

    pub fn value_when_pressed(mut self, value_when_pressed: bool) -> Self {
        self.value_when_pressed = value_when_pressed;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}
