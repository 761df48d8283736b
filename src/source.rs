//! Things that can be asked "what is your boolean value right now?"

use core::convert::Infallible;
use embedded_hal::digital::v2::InputPin;

/// A boolean input that the debouncer samples once per update.
///
/// A failed read is handed straight back to whoever called `update`.
pub trait BoolSource {
    type Error;

    fn read(&mut self) -> Result<bool, Self::Error>;
}

impl<S: BoolSource + ?Sized> BoolSource for &mut S {
    type Error = S::Error;

    fn read(&mut self) -> Result<bool, Self::Error> {
        (**self).read()
    }
}

//

/// Wraps a closure that cannot fail.
pub struct Predicate<F> {
    function: F,
}

impl<F: FnMut() -> bool> Predicate<F> {
    pub fn new(function: F) -> Self {
        Predicate { function }
    }
}

impl<F: FnMut() -> bool> BoolSource for Predicate<F> {
    type Error = Infallible;

    fn read(&mut self) -> Result<bool, Infallible> {
        Ok((self.function)())
    }
}

//

/// Wraps a closure that reports its own failures.
pub struct FallibleSource<F> {
    function: F,
}

impl<F, E> FallibleSource<F>
where
    F: FnMut() -> Result<bool, E>,
{
    pub fn new(function: F) -> Self {
        FallibleSource { function }
    }
}

impl<F, E> BoolSource for FallibleSource<F>
where
    F: FnMut() -> Result<bool, E>,
{
    type Error = E;

    fn read(&mut self) -> Result<bool, E> {
        (self.function)()
    }
}

//

/// Reads a digital input pin.  High is `true`.
pub struct PinSource<P> {
    pin: P,
}

impl<P: InputPin> PinSource<P> {
    pub fn new(pin: P) -> Self {
        PinSource { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> BoolSource for PinSource<P> {
    type Error = P::Error;

    fn read(&mut self) -> Result<bool, P::Error> {
        self.pin.is_high()
    }
}

//

/// A switch configured with a pull-up resistor that will be overwhelmed by a connection to ground.
/// Reports `true` while the wrapped source reads `false`.
pub struct ActiveLow<S> {
    base: S,
}

impl<S: BoolSource> ActiveLow<S> {
    pub fn new(base: S) -> Self {
        ActiveLow { base }
    }

    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: BoolSource> BoolSource for ActiveLow<S> {
    type Error = S::Error;

    fn read(&mut self) -> Result<bool, S::Error> {
        self.base.read().map(|level| !level)
    }
}
