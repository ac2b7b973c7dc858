//! Sliding-window sharpness history shared by the variant-info panel and
//! the autofocus-debug widget.
//!
//! This is process-local state the frame orchestrator owns for the
//! lifetime of the compositor instance; it is mutated only while those
//! widgets render.

/// One sharpness sample: the raw score plus the EMA value as of this push.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub score: f32,
    pub ema: f32,
    pub monotonic_us: u64,
}

/// Ring buffer over a fixed time window, with an exponential moving
/// average maintained alongside the raw samples.
pub struct SharpnessHistory {
    window_us: u64,
    samples: Vec<Sample>,
    ema: Option<f32>,
    ema_alpha: f32,
}

impl SharpnessHistory {
    pub fn new(window_seconds: f64, ema_alpha: f32) -> Self {
        SharpnessHistory {
            window_us: (window_seconds * 1_000_000.0) as u64,
            samples: Vec::new(),
            ema: None,
            ema_alpha,
        }
    }

    /// Record a new sample and evict anything older than the window. The
    /// sample's `ema` field snapshots the running average as of this push,
    /// so the plotted curve can read it straight off each retained sample.
    pub fn push(&mut self, score: f32, monotonic_us: u64) {
        let ema = match self.ema {
            Some(prev) => prev + self.ema_alpha * (score - prev),
            None => score,
        };
        self.ema = Some(ema);
        self.samples.push(Sample { score, ema, monotonic_us });
        let cutoff = monotonic_us.saturating_sub(self.window_us);
        self.samples.retain(|s| s.monotonic_us >= cutoff);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn smoothed(&self) -> Option<f32> {
        self.ema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_samples_are_evicted() {
        let mut h = SharpnessHistory::new(1.0, 0.1);
        h.push(0.5, 0);
        h.push(0.6, 2_000_000);
        assert_eq!(h.samples().len(), 1);
        assert_eq!(h.samples()[0].monotonic_us, 2_000_000);
    }

    #[test]
    fn ema_moves_toward_new_samples() {
        let mut h = SharpnessHistory::new(30.0, 0.5);
        h.push(0.0, 0);
        h.push(1.0, 1);
        assert!(h.smoothed().unwrap() > 0.0 && h.smoothed().unwrap() < 1.0);
    }
}
