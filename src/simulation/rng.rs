/// Source of uniform draws for placement and movement
pub trait RandomSource {
    /// Uniform integer in `0..upper`; `upper` is never zero
    fn below(&mut self, upper: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        self.usize(..upper)
    }
}

/// Replays a fixed sequence of draws, recording the bounds it was asked for.
///
/// Panics when the script runs out or a value is out of range; test use only.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct ScriptedRng {
    script: std::collections::VecDeque<usize>,
    bounds: Vec<usize>,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Upper bounds of every draw so far
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, upper: usize) -> usize {
        self.bounds.push(upper);
        let value = self
            .script
            .pop_front()
            .unwrap_or_else(|| panic!("scripted rng exhausted (draw below {upper})"));
        assert!(value < upper, "scripted value {value} out of range 0..{upper}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastrand_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        for upper in 1..10 {
            for _ in 0..50 {
                assert!(rng.below(upper) < upper);
            }
        }
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new([1, 0, 2]);

        assert_eq!(rng.below(2), 1);
        assert_eq!(rng.below(5), 0);
        assert_eq!(rng.below(3), 2);
        assert_eq!(rng.bounds(), &[2, 5, 3]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_panics_when_empty() {
        ScriptedRng::default().below(1);
    }
}
