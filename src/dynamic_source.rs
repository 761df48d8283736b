use crate::source::BoolSource;
use alloc::boxed::Box;

/// A boxed source with its concrete type erased, so differently-typed pins can share one array.
pub struct DynamicSource<'a, E> {
    base: Box<dyn BoolSource<Error = E> + 'a>,
}

impl<'a, E> DynamicSource<'a, E> {
    pub fn new<S: BoolSource<Error = E> + 'a>(source: S) -> DynamicSource<'a, E> {
        DynamicSource {
            base: Box::new(source),
        }
    }
}

impl<'a, E> BoolSource for DynamicSource<'a, E> {
    type Error = E;

    fn read(&mut self) -> Result<bool, E> {
        self.base.read()
    }
}

#[cfg(test)]
mod tests {
    use super::DynamicSource;
    use crate::source::{ActiveLow, BoolSource, Predicate};
    use core::cell::Cell;
    use core::convert::Infallible;

    #[test]
    pub fn test_mixed_array() {
        let level = Cell::new(true);
        let mut sources: [DynamicSource<Infallible>; 2] = [
            DynamicSource::new(Predicate::new(|| level.get())),
            DynamicSource::new(ActiveLow::new(Predicate::new(|| level.get()))),
        ];

        let readings: Vec<bool> = sources
            .iter_mut()
            .map(|s| s.read().unwrap_or(false))
            .collect();
        assert_eq!(readings, vec![true, false]);
    }
}
