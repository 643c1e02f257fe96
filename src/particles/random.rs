use rand::Rng;

/// Source of uniform samples for the spawn factory.
///
/// Every `rand` generator already qualifies; tests can also script exact
/// sequences with [`SequenceRandom`].
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn uniform(&mut self) -> f32;

    /// Uniform sample in `[min, max)`
    fn uniform_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.uniform() * (max - min)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        debug_assert!(!values.is_empty(), "sequence needs at least one sample");
        Self { values, cursor: 0 }
    }

    /// Always returns the same sample
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn uniform(&mut self) -> f32 {
        let Some(&value) = self.values.get(self.cursor) else {
            return 0.0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
