//! Resource limits shared by both notations.
//!
//! Ranges are unbounded unless a cap is set. Callers exposed to untrusted input
//! (a request like `1-4000000000` would allocate gigabytes) opt in through
//! [Limits::new] or the `parser.max_range_len` setting.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of verses contributed by one range token, if any.
    pub max_range_len: Option<usize>,
}

impl Limits {
    /// Cap every range at `max_range_len` verses.
    pub fn new(max_range_len: usize) -> Self {
        Self {
            max_range_len: Some(max_range_len),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The cap, when a range contributing `len` values goes over it.
    pub fn exceeded_by(&self, len: u64) -> Option<usize> {
        self.max_range_len.filter(|&limit| len > limit as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_applies_above_the_limit() {
        let limits = Limits::new(3);
        assert_eq!(limits.exceeded_by(0), None);
        assert_eq!(limits.exceeded_by(3), None);
        assert_eq!(limits.exceeded_by(4), Some(3));
    }

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(Limits::default(), Limits::unbounded());
        assert_eq!(Limits::default().exceeded_by(u64::from(u32::MAX) + 1), None);
    }
}
