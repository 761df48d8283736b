//! Debounce a noisy boolean input (a switch, a pin, any predicate) into a stable value with
//! `rose`/`fell` edges.
//!
//! Everything is pull-based: call `update()` once per pass of the main loop and read the results.
//!
//! ```
//! use core::cell::Cell;
//! use core::time::Duration;
//! use debouncer::{Config, Debouncer, Predicate, Timekeeper};
//!
//! let tk = Timekeeper::new(0);
//! let contact = Cell::new(false);
//! let config = Config::new().interval(Duration::from_millis(50));
//! let mut switch = Debouncer::with_config(Predicate::new(|| contact.get()), &tk, config).unwrap();
//!
//! contact.set(true);
//! switch.update().unwrap();
//! tk.incr_timestamp(50);
//! switch.update().unwrap();
//! assert!(switch.value() && switch.rose());
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod button;
pub mod config;
#[cfg(feature = "cortex-m")]
pub mod cycle_clock;
pub mod debouncer;
#[cfg(feature = "alloc")]
pub mod dynamic_source;
pub mod error;
pub mod source;
pub mod timekeeper;

pub use crate::button::Button;
pub use crate::config::{ButtonConfig, Config, DEFAULT_INTERVAL};
pub use crate::debouncer::Debouncer;
pub use crate::error::Error;
pub use crate::source::{ActiveLow, BoolSource, FallibleSource, PinSource, Predicate};
pub use crate::timekeeper::{elapsed_since, Clock, Timekeeper};

#[cfg(feature = "cortex-m")]
pub use crate::cycle_clock::CycleCounterClock;
#[cfg(feature = "alloc")]
pub use crate::dynamic_source::DynamicSource;
