// ============================================================================
// Rounding Modes
// Registry of (major, minor) rounding modes and their inverse maps
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Major / Minor Components
// ============================================================================

/// Primary rule selecting between the two representable values that bracket
/// an inexact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MajorMode {
    /// Away from zero
    Up,
    /// Toward zero
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Rounding is an error
    Unnecessary,
    /// Upper candidate iff it is a multiple of five
    Nearest05,
    /// Boundary at (a + b) / 2
    ArithmeticMean,
    /// Boundary at sqrt(a * b)
    GeometricMean,
    /// Boundary at 2ab / (a + b)
    HarmonicMean,
    /// Boundary at sqrt((a² + b²) / 2)
    QuadraticMean,
    /// Boundary at cbrt((a³ + b³) / 2)
    CubicMean,
}

impl MajorMode {
    /// True for the five majors whose boundary is a mean of the candidates.
    #[inline]
    pub const fn is_mean(self) -> bool {
        matches!(
            self,
            MajorMode::ArithmeticMean
                | MajorMode::GeometricMean
                | MajorMode::HarmonicMean
                | MajorMode::QuadraticMean
                | MajorMode::CubicMean
        )
    }

    /// True for majors whose mean is undefined across a sign change.
    #[inline]
    pub const fn requires_common_sign(self) -> bool {
        matches!(
            self,
            MajorMode::GeometricMean | MajorMode::HarmonicMean | MajorMode::QuadraticMean
        )
    }
}

/// Tie-break rule used when a value sits exactly on a mean boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MinorMode {
    Up,
    Down,
    Ceiling,
    Floor,
    Even,
    Odd,
    None,
}

/// Policy for rounding an exact zero that lies strictly between an allowed
/// negative and an allowed positive candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroRoundingMode {
    /// Choose the positive candidate
    ToPlus,
    /// Choose the negative candidate
    ToMinus,
    /// Choose the closer candidate, positive on a tie
    ClosestPreferPlus,
    /// Choose the closer candidate, negative on a tie
    ClosestPreferMinus,
    /// Reaching the zero policy is an error
    #[default]
    Unnecessary,
}

// ============================================================================
// Rounding Mode
// ============================================================================

/// A registered `(major, minor)` rounding mode.
///
/// Only the simple majors with [`MinorMode::None`] and the five mean majors
/// with a concrete tie-break are valid. All 36 are listed in
/// [`RoundingMode::ALL`] and the position in that table is the mode's ordinal.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundingMode {
    major: MajorMode,
    minor: MinorMode,
}

macro_rules! rounding_modes {
    ($($name:ident = ($major:ident, $minor:ident);)*) => {
        impl RoundingMode {
            $(
                pub const $name: Self = Self {
                    major: MajorMode::$major,
                    minor: MinorMode::$minor,
                };
            )*

            /// Every registered mode, in ordinal order.
            pub const ALL: &'static [RoundingMode] = &[$(Self::$name),*];

            /// Canonical constant name of the mode.
            pub const fn name(self) -> &'static str {
                $(
                    if matches!(self.major, MajorMode::$major)
                        && matches!(self.minor, MinorMode::$minor)
                    {
                        return stringify!($name);
                    }
                )*
                "UNREGISTERED"
            }
        }
    };
}

rounding_modes! {
    UP = (Up, None);
    DOWN = (Down, None);
    CEILING = (Ceiling, None);
    FLOOR = (Floor, None);
    UNNECESSARY = (Unnecessary, None);
    NEAREST_05 = (Nearest05, None);
    HALF_UP = (ArithmeticMean, Up);
    HALF_DOWN = (ArithmeticMean, Down);
    HALF_CEILING = (ArithmeticMean, Ceiling);
    HALF_FLOOR = (ArithmeticMean, Floor);
    HALF_EVEN = (ArithmeticMean, Even);
    HALF_ODD = (ArithmeticMean, Odd);
    GEOMETRIC_UP = (GeometricMean, Up);
    GEOMETRIC_DOWN = (GeometricMean, Down);
    GEOMETRIC_CEILING = (GeometricMean, Ceiling);
    GEOMETRIC_FLOOR = (GeometricMean, Floor);
    GEOMETRIC_EVEN = (GeometricMean, Even);
    GEOMETRIC_ODD = (GeometricMean, Odd);
    HARMONIC_UP = (HarmonicMean, Up);
    HARMONIC_DOWN = (HarmonicMean, Down);
    HARMONIC_CEILING = (HarmonicMean, Ceiling);
    HARMONIC_FLOOR = (HarmonicMean, Floor);
    HARMONIC_EVEN = (HarmonicMean, Even);
    HARMONIC_ODD = (HarmonicMean, Odd);
    QUADRATIC_UP = (QuadraticMean, Up);
    QUADRATIC_DOWN = (QuadraticMean, Down);
    QUADRATIC_CEILING = (QuadraticMean, Ceiling);
    QUADRATIC_FLOOR = (QuadraticMean, Floor);
    QUADRATIC_EVEN = (QuadraticMean, Even);
    QUADRATIC_ODD = (QuadraticMean, Odd);
    CUBIC_UP = (CubicMean, Up);
    CUBIC_DOWN = (CubicMean, Down);
    CUBIC_CEILING = (CubicMean, Ceiling);
    CUBIC_FLOOR = (CubicMean, Floor);
    CUBIC_EVEN = (CubicMean, Even);
    CUBIC_ODD = (CubicMean, Odd);
}

impl RoundingMode {
    /// Build a mode from its components.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for combinations outside the registry: a
    /// simple major with a tie-break, or a mean major without one.
    pub fn new(major: MajorMode, minor: MinorMode) -> NumericResult<Self> {
        let valid = if major.is_mean() {
            minor != MinorMode::None
        } else {
            minor == MinorMode::None
        };
        if valid {
            Ok(Self { major, minor })
        } else {
            Err(NumericError::InvalidArgument(
                "minor mode does not combine with this major mode",
            ))
        }
    }

    #[inline]
    pub const fn major(self) -> MajorMode {
        self.major
    }

    #[inline]
    pub const fn minor(self) -> MinorMode {
        self.minor
    }

    /// Stable index of this mode in [`RoundingMode::ALL`].
    pub const fn ordinal(self) -> usize {
        let minor = Self::minor_offset(self.minor);
        match self.major {
            MajorMode::Up => 0,
            MajorMode::Down => 1,
            MajorMode::Ceiling => 2,
            MajorMode::Floor => 3,
            MajorMode::Unnecessary => 4,
            MajorMode::Nearest05 => 5,
            MajorMode::ArithmeticMean => 6 + minor,
            MajorMode::GeometricMean => 12 + minor,
            MajorMode::HarmonicMean => 18 + minor,
            MajorMode::QuadraticMean => 24 + minor,
            MajorMode::CubicMean => 30 + minor,
        }
    }

    const fn minor_offset(minor: MinorMode) -> usize {
        match minor {
            MinorMode::Up => 0,
            MinorMode::Down => 1,
            MinorMode::Ceiling => 2,
            MinorMode::Floor => 3,
            MinorMode::Even => 4,
            MinorMode::Odd => 5,
            MinorMode::None => 0,
        }
    }

    /// Mode to apply to `1/x` so that it rounds consistently with `x`.
    ///
    /// Directions flip and the arithmetic and harmonic means trade places;
    /// the geometric mean is its own inverse. Quadratic and cubic means have
    /// no counterpart in the registry and map to themselves.
    pub const fn mul_inverse(self) -> Self {
        let major = match self.major {
            MajorMode::Up => MajorMode::Down,
            MajorMode::Down => MajorMode::Up,
            MajorMode::Ceiling => MajorMode::Floor,
            MajorMode::Floor => MajorMode::Ceiling,
            MajorMode::ArithmeticMean => MajorMode::HarmonicMean,
            MajorMode::HarmonicMean => MajorMode::ArithmeticMean,
            other => other,
        };
        let minor = match self.minor {
            MinorMode::Up => MinorMode::Down,
            MinorMode::Down => MinorMode::Up,
            MinorMode::Ceiling => MinorMode::Floor,
            MinorMode::Floor => MinorMode::Ceiling,
            other => other,
        };
        Self { major, minor }
    }

    /// Mode to apply to `-x` so that it rounds consistently with `x`.
    pub const fn add_inverse(self) -> Self {
        let major = match self.major {
            MajorMode::Ceiling => MajorMode::Floor,
            MajorMode::Floor => MajorMode::Ceiling,
            other => other,
        };
        let minor = match self.minor {
            MinorMode::Ceiling => MinorMode::Floor,
            MinorMode::Floor => MinorMode::Ceiling,
            other => other,
        };
        Self { major, minor }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        Self::HALF_EVEN
    }
}

impl PartialOrd for RoundingMode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RoundingMode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl Hash for RoundingMode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal().hash(state);
    }
}

impl fmt::Debug for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundingMode::{}", self.name())
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROUND_{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_size_and_ordinals() {
        assert_eq!(RoundingMode::ALL.len(), 36);
        for (i, mode) in RoundingMode::ALL.iter().enumerate() {
            assert_eq!(mode.ordinal(), i, "{:?}", mode);
        }
        let unique: HashSet<_> = RoundingMode::ALL.iter().collect();
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn test_new_validates_combination() {
        assert_eq!(
            RoundingMode::new(MajorMode::GeometricMean, MinorMode::Odd),
            Ok(RoundingMode::GEOMETRIC_ODD)
        );
        assert!(RoundingMode::new(MajorMode::Up, MinorMode::Even).is_err());
        assert!(RoundingMode::new(MajorMode::CubicMean, MinorMode::None).is_err());
    }

    #[test]
    fn test_inverses_are_involutions() {
        for mode in RoundingMode::ALL {
            assert_eq!(mode.mul_inverse().mul_inverse(), *mode);
            assert_eq!(mode.add_inverse().add_inverse(), *mode);
        }
    }

    #[test]
    fn test_mul_inverse() {
        assert_eq!(RoundingMode::UP.mul_inverse(), RoundingMode::DOWN);
        assert_eq!(RoundingMode::CEILING.mul_inverse(), RoundingMode::FLOOR);
        assert_eq!(RoundingMode::HALF_UP.mul_inverse(), RoundingMode::HARMONIC_DOWN);
        assert_eq!(
            RoundingMode::GEOMETRIC_EVEN.mul_inverse(),
            RoundingMode::GEOMETRIC_EVEN
        );
        assert_eq!(
            RoundingMode::QUADRATIC_CEILING.mul_inverse(),
            RoundingMode::QUADRATIC_FLOOR
        );
    }

    #[test]
    fn test_add_inverse() {
        assert_eq!(RoundingMode::UP.add_inverse(), RoundingMode::UP);
        assert_eq!(RoundingMode::FLOOR.add_inverse(), RoundingMode::CEILING);
        assert_eq!(
            RoundingMode::HALF_CEILING.add_inverse(),
            RoundingMode::HALF_FLOOR
        );
        assert_eq!(RoundingMode::CUBIC_ODD.add_inverse(), RoundingMode::CUBIC_ODD);
    }

    #[test]
    fn test_display() {
        assert_eq!(RoundingMode::HALF_EVEN.to_string(), "ROUND_HALF_EVEN");
        assert_eq!(format!("{:?}", RoundingMode::CUBIC_UP), "RoundingMode::CUBIC_UP");
    }
}
