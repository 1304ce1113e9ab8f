use crate::pathing_grid::PathingGrid;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives control after every step of a search so the grid can be redrawn. The grid is passed
/// read-only; the cell classifications reflect the state right after the step.
pub trait StepObserver {
    fn on_step(&mut self, grid: &PathingGrid);
}

impl<F> StepObserver for F
where
    F: FnMut(&PathingGrid),
{
    fn on_step(&mut self, grid: &PathingGrid) {
        self(grid)
    }
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _: &PathingGrid) {}
}

/// Shared cancellation signal checked by the engine after each observer call. Clones refer to
/// the same flag, so an observer, a signal handler or another thread can hold one.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> CancelFlag {
        CancelFlag::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
    /// Re-arms the flag for another search.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
