use core::time::Duration;

/// Reasons a debouncer could not be built or reconfigured.
///
/// Read failures during `update` are not wrapped in this type; they come back as the source's own error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<E> {
    /// Sampling the source for the initial stable value failed.
    #[error("initial read of the input failed")]
    Source(E),
    /// The interval is longer than a `u32` millisecond counter can measure.
    #[error("debounce interval {0:?} does not fit in a u32 millisecond counter")]
    IntervalOutOfRange(Duration),
}

pub(crate) fn interval_millis<E>(interval: Duration) -> Result<u32, Error<E>> {
    let millis = interval.as_millis();
    if millis > u128::from(u32::MAX) {
        return Err(Error::IntervalOutOfRange(interval));
    }
    Ok(millis as u32)
}
