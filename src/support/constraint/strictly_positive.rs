use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level, for example a heliocentric distance or a
/// starting temperature in kelvin.
///
/// # Examples
///
/// ```
/// use comet_sublimation::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::astronomical_unit};
///
/// // Generic constructor:
/// let rh = Constrained::<_, StrictlyPositive>::new(Length::new::<astronomical_unit>(2.0));
/// assert!(rh.is_ok());
///
/// // Associated constructor:
/// let t = StrictlyPositive::new(190.0).unwrap();
/// assert_eq!(t.into_inner(), 190.0);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermodynamicTemperature},
        length::astronomical_unit,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn heliocentric_distances() {
        let rh = Length::new::<astronomical_unit>(5.2);
        let rh = StrictlyPositive::new(rh).unwrap();
        assert!(rh.as_ref().get::<astronomical_unit>() > 5.19);

        let rh = Length::new::<astronomical_unit>(0.0);
        assert!(StrictlyPositive::new(rh).is_err());

        let rh = Length::new::<astronomical_unit>(-1.0);
        assert!(StrictlyPositive::new(rh).is_err());
    }

    #[test]
    fn absolute_temperatures() {
        let t = ThermodynamicTemperature::new::<kelvin>(60.0);
        assert!(StrictlyPositive::new(t.get::<kelvin>()).is_ok());

        let t = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(StrictlyPositive::new(t.get::<kelvin>()).is_err());
    }
}
