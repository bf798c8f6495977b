//! Probe positions across the circle

use crate::types::Micrometer;

/// Half-open range of x-offsets `start, start + step, ...` below `end`
///
/// Cloning a fresh sampler restarts the sequence.
#[derive(Debug, Clone)]
pub struct Sampler {
    next: Micrometer,
    step: Micrometer,
    end: Micrometer,
}

impl Sampler {
    /// `step` must be positive
    pub fn new(start: Micrometer, step: Micrometer, end: Micrometer) -> Self {
        debug_assert!(step.0 > 0, "Bug: non-positive sampling step");
        Self {
            next: start,
            step,
            end,
        }
    }
}

impl Iterator for Sampler {
    type Item = Micrometer;

    fn next(&mut self) -> Option<Micrometer> {
        if self.next >= self.end {
            return None;
        }
        let x = self.next;
        self.next = Micrometer(self.next.0.saturating_add(self.step.0));
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end.0 as i128 - self.next.0 as i128;
        let step = self.step.0 as i128;
        let n = if left > 0 {
            ((left + step - 1) / step) as usize
        } else {
            0
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Sampler {}
