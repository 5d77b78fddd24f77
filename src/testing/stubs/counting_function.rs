use std::cell::Cell;

/// Wraps a function and counts how many times it was evaluated.
pub struct CountingFunction<F> {
    inner: F,
    calls: Cell<usize>,
}

impl<F: Fn(f64) -> f64> CountingFunction<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn call(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        (self.inner)(x)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}
