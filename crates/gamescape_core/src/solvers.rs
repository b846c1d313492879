use crate::traits::{DynamicalSystem, Scalar, Steppable};

/// Explicit (forward) Euler stepper.
///
/// Keeps the slope evaluated at the start of the most recent step so callers
/// can test for convergence without re-evaluating the system.
pub struct ForwardEuler<T: Scalar> {
    k: Vec<T>,
}

impl<T: Scalar> ForwardEuler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k: vec![T::zero(); dim],
        }
    }

    /// Slope used by the last call to `step`.
    pub fn slope(&self) -> &[T] {
        &self.k
    }
}

impl<T: Scalar> Steppable<T> for ForwardEuler<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T) {
        // y_next = y + dt * f(t, y)
        system.apply(*t, state, &mut self.k);
        for i in 0..state.len() {
            state[i] = state[i] + dt * self.k[i];
        }
        *t = *t + dt;
    }
}
