use thiserror::Error;

/// Reasons a search bracket is rejected before any evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("bracket endpoints must be finite")]
    NonFinite,
    /// Both endpoints are the same value.
    #[error("bracket endpoints must differ")]
    ZeroWidth,
}

/// Current bracket bounds and the residual sign at the lower bound.
///
/// Only the lower sign is kept: the lower bound moves only to a midpoint
/// whose residual has that same sign, so it never needs re-evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lower: f64,
    upper: f64,
    lower_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from validated bounds and the lower residual sign.
    pub(super) fn new(bounds: Bounds, lower_sign: Sign) -> Self {
        Self {
            lower: bounds.lower,
            upper: bounds.upper,
            lower_sign,
        }
    }

    /// Returns `[lower, upper]`.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint, halving each bound first so large finite
    /// bounds cannot overflow.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.lower + 0.5 * self.upper
    }

    /// Keeps the half of the bracket that still contains the sign change.
    pub(super) fn shrink(&mut self, mid: f64, mid_sign: Sign) {
        if self.lower_sign == mid_sign {
            self.lower = mid;
        } else {
            self.upper = mid;
        }
    }
}

/// Residual sign used to decide which half of the bracket to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    /// Zero or above.
    Positive,
    /// Below zero.
    Negative,
}

impl Sign {
    /// Classifies a residual; zero counts as positive.
    pub(super) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Validated endpoints with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Checks the endpoints and swaps them if given in reverse.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] for a non-finite or zero-width bracket.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [lower, upper] = bracket;

        if !lower.is_finite() || !upper.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if lower == upper {
            return Err(BracketError::ZeroWidth);
        }

        Ok(Self {
            lower: lower.min(upper),
            upper: lower.max(upper),
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bounds.lower, 1.0);
        assert_relative_eq!(bounds.upper, 3.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn sign_treats_zero_as_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-0.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let bounds = Bounds::new([0.0, 2.0]).expect("valid bounds");
        let mut bracket = Bracket::new(bounds, Sign::Negative);

        // Same sign as the lower bound: the root is in the upper half.
        bracket.shrink(1.0, Sign::Negative);
        let [lower, upper] = bracket.as_array();
        assert_relative_eq!(lower, 1.0);
        assert_relative_eq!(upper, 2.0);

        // Opposite sign: the root is in the lower half.
        bracket.shrink(1.5, Sign::Positive);
        let [lower, upper] = bracket.as_array();
        assert_relative_eq!(lower, 1.0);
        assert_relative_eq!(upper, 1.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }

    #[test]
    fn midpoint_of_huge_bounds_stays_finite() {
        let bounds = Bounds::new([1.0e308, f64::MAX]).expect("valid bounds");
        let bracket = Bracket::new(bounds, Sign::Negative);

        let mid = bracket.midpoint();
        assert!(mid.is_finite());
        assert!(mid > 1.0e308 && mid < f64::MAX);
    }
}
