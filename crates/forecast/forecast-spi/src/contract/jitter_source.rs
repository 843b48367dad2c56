//! Trait for the randomness applied to projected values

/// Source of unit samples in `[0, 1)`.
///
/// A sample of `0.5` means "no perturbation" for every domain.
pub trait JitterSource: Send {
    fn sample(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list
    struct Scripted {
        values: Vec<f64>,
        pos: usize,
    }

    impl JitterSource for Scripted {
        fn sample(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn JitterSource> = Box::new(Scripted {
            values: vec![0.1, 0.9],
            pos: 0,
        });
        assert_eq!(boxed.sample(), 0.1);
        assert_eq!(boxed.sample(), 0.9);
        assert_eq!(boxed.sample(), 0.1);
    }
}
