//! The field-source capability.
//!
//! A field source answers two questions about an event `(x, y, z, t)`: what
//! is the electric field there, and what is the magnetic field there. Both
//! queries are pure; they take `&self` and cannot fail.

use crate::vector::{FieldSample, FieldVector};
use std::sync::Arc;

/// Anything that can report electric and magnetic fields at a point in space and time.
///
/// Both queries default to [`FieldVector::ZERO`], so an implementor only
/// overrides the field(s) it actually produces. Any real input is accepted,
/// including non-finite values; a source that has a restricted domain decides
/// for itself what to return outside it.
///
/// ```rust
/// use fieldsource::{FieldSource, FieldVector};
///
/// struct AlongX;
///
/// impl FieldSource for AlongX {
///     fn electric_field(&self, _x: f64, _y: f64, _z: f64, _t: f64) -> FieldVector {
///         FieldVector::new(1.0, 0.0, 0.0)
///     }
/// }
///
/// let src: &dyn FieldSource = &AlongX;
/// assert_eq!(src.electric_field(5.0, -3.0, 2.0, 10.0), FieldVector::new(1.0, 0.0, 0.0));
/// assert_eq!(src.magnetic_field(5.0, -3.0, 2.0, 10.0), FieldVector::ZERO);
/// ```
pub trait FieldSource {
    /// Electric field at `(x, y, z)` and time `t`.
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        let _ = (x, y, z, t);
        FieldVector::ZERO
    }

    /// Magnetic field at `(x, y, z)` and time `t`.
    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        let _ = (x, y, z, t);
        FieldVector::ZERO
    }

    /// Both fields at the same event.
    fn field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldSample {
        FieldSample {
            electric: self.electric_field(x, y, z, t),
            magnetic: self.magnetic_field(x, y, z, t),
        }
    }
}

/// Thread-shareable, type-erased handle to a field source.
pub type SharedFieldSource = Arc<dyn FieldSource + Send + Sync>;

/// The base source: overrides nothing and reports zero fields everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseFieldSource;

impl BaseFieldSource {
    pub fn new() -> Self {
        Self
    }
}

impl FieldSource for BaseFieldSource {}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (**self).electric_field(x, y, z, t)
    }

    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (**self).magnetic_field(x, y, z, t)
    }

    fn field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldSample {
        (**self).field(x, y, z, t)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for Box<T> {
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (**self).electric_field(x, y, z, t)
    }

    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (**self).magnetic_field(x, y, z, t)
    }

    fn field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldSample {
        (**self).field(x, y, z, t)
    }
}

impl<T: FieldSource + ?Sized> FieldSource for Arc<T> {
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (**self).electric_field(x, y, z, t)
    }

    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (**self).magnetic_field(x, y, z, t)
    }

    fn field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldSample {
        (**self).field(x, y, z, t)
    }
}
