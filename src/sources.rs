//! Generic building blocks for field sources.
//!
//! None of these model a physical field. They are algebra over the
//! [`FieldSource`] capability: constants, closures, scaling and sums.

use crate::source::FieldSource;
use crate::vector::{FieldSample, FieldVector};
use std::fmt;

/// Same electric and magnetic vectors at every event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UniformField {
    pub electric: FieldVector,
    pub magnetic: FieldVector,
}

impl UniformField {
    pub fn new(electric: FieldVector, magnetic: FieldVector) -> Self {
        Self { electric, magnetic }
    }

    pub fn electric_only(electric: FieldVector) -> Self {
        Self::new(electric, FieldVector::ZERO)
    }

    pub fn magnetic_only(magnetic: FieldVector) -> Self {
        Self::new(FieldVector::ZERO, magnetic)
    }
}

impl FieldSource for UniformField {
    fn electric_field(&self, _x: f64, _y: f64, _z: f64, _t: f64) -> FieldVector {
        self.electric
    }

    fn magnetic_field(&self, _x: f64, _y: f64, _z: f64, _t: f64) -> FieldVector {
        self.magnetic
    }
}

/// Plain function pointer with the query signature; used for the absent half
/// of a one-sided [`FnFieldSource`].
pub type FieldFn = fn(f64, f64, f64, f64) -> FieldVector;

fn zero_field(_x: f64, _y: f64, _z: f64, _t: f64) -> FieldVector {
    FieldVector::ZERO
}

/// Field source backed by two closures `(x, y, z, t) -> FieldVector`.
#[derive(Clone)]
pub struct FnFieldSource<E, B> {
    electric: E,
    magnetic: B,
}

impl<E, B> FnFieldSource<E, B>
where
    E: Fn(f64, f64, f64, f64) -> FieldVector,
    B: Fn(f64, f64, f64, f64) -> FieldVector,
{
    pub fn new(electric: E, magnetic: B) -> Self {
        Self { electric, magnetic }
    }
}

impl<E> FnFieldSource<E, FieldFn>
where
    E: Fn(f64, f64, f64, f64) -> FieldVector,
{
    /// Closure for the electric field; magnetic field is zero.
    pub fn electric(electric: E) -> Self {
        Self {
            electric,
            magnetic: zero_field as FieldFn,
        }
    }
}

impl<B> FnFieldSource<FieldFn, B>
where
    B: Fn(f64, f64, f64, f64) -> FieldVector,
{
    /// Closure for the magnetic field; electric field is zero.
    pub fn magnetic(magnetic: B) -> Self {
        Self {
            electric: zero_field as FieldFn,
            magnetic,
        }
    }
}

impl<E, B> fmt::Debug for FnFieldSource<E, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFieldSource").finish_non_exhaustive()
    }
}

impl<E, B> FieldSource for FnFieldSource<E, B>
where
    E: Fn(f64, f64, f64, f64) -> FieldVector,
    B: Fn(f64, f64, f64, f64) -> FieldVector,
{
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (self.electric)(x, y, z, t)
    }

    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        (self.magnetic)(x, y, z, t)
    }
}

/// Multiplies another source's fields by fixed factors.
///
/// Hosts use this for unit conversion or amplitude control without touching
/// the wrapped source.
#[derive(Debug, Clone)]
pub struct Scaled<S> {
    inner: S,
    electric_scale: f64,
    magnetic_scale: f64,
}

impl<S: FieldSource> Scaled<S> {
    pub fn new(inner: S, electric_scale: f64, magnetic_scale: f64) -> Self {
        Self {
            inner,
            electric_scale,
            magnetic_scale,
        }
    }

    /// Same factor for both fields.
    pub fn uniform(inner: S, scale: f64) -> Self {
        Self::new(inner, scale, scale)
    }

    pub fn electric_scale(&self) -> f64 {
        self.electric_scale
    }

    pub fn magnetic_scale(&self) -> f64 {
        self.magnetic_scale
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: FieldSource> FieldSource for Scaled<S> {
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        self.inner.electric_field(x, y, z, t) * self.electric_scale
    }

    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        self.inner.magnetic_field(x, y, z, t) * self.magnetic_scale
    }

    fn field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldSample {
        let s = self.inner.field(x, y, z, t);
        FieldSample {
            electric: s.electric * self.electric_scale,
            magnetic: s.magnetic * self.magnetic_scale,
        }
    }
}

/// Component-wise sum of an ordered list of sources.
///
/// An empty superposition reports zero fields.
#[derive(Default)]
pub struct Superposition {
    sources: Vec<Box<dyn FieldSource + Send + Sync>>,
}

impl Superposition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, source: impl FieldSource + Send + Sync + 'static) -> Self {
        self.push(source);
        self
    }

    pub fn push(&mut self, source: impl FieldSource + Send + Sync + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn push_boxed(&mut self, source: Box<dyn FieldSource + Send + Sync>) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl fmt::Debug for Superposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Superposition")
            .field("len", &self.sources.len())
            .finish()
    }
}

impl FromIterator<Box<dyn FieldSource + Send + Sync>> for Superposition {
    fn from_iter<I: IntoIterator<Item = Box<dyn FieldSource + Send + Sync>>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

impl FieldSource for Superposition {
    fn electric_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        let mut acc = FieldVector::ZERO;
        for s in &self.sources {
            acc += s.electric_field(x, y, z, t);
        }
        acc
    }

    fn magnetic_field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldVector {
        let mut acc = FieldVector::ZERO;
        for s in &self.sources {
            acc += s.magnetic_field(x, y, z, t);
        }
        acc
    }

    fn field(&self, x: f64, y: f64, z: f64, t: f64) -> FieldSample {
        let mut acc = FieldSample::ZERO;
        for s in &self.sources {
            let sample = s.field(x, y, z, t);
            acc.electric += sample.electric;
            acc.magnetic += sample.magnetic;
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BaseFieldSource;
    use proptest::prelude::*;

    fn v(x: f64, y: f64, z: f64) -> FieldVector {
        FieldVector::new(x, y, z)
    }

    #[test]
    fn uniform_ignores_event() {
        let u = UniformField::new(v(1.0, 2.0, 3.0), v(0.0, 0.0, -1.0));
        for (x, y, z, t) in [(0.0, 0.0, 0.0, 0.0), (5.0, -3.0, 2.0, 10.0)] {
            assert_eq!(u.electric_field(x, y, z, t), v(1.0, 2.0, 3.0));
            assert_eq!(u.magnetic_field(x, y, z, t), v(0.0, 0.0, -1.0));
        }
        assert_eq!(
            UniformField::electric_only(v(1.0, 0.0, 0.0)).magnetic,
            FieldVector::ZERO
        );
        assert_eq!(
            UniformField::magnetic_only(v(0.0, 1.0, 0.0)).electric,
            FieldVector::ZERO
        );
    }

    #[test]
    fn closures_see_the_event() {
        let src = FnFieldSource::new(|x, y, z, _t| v(x, y, z), |_x, _y, _z, t| v(0.0, 0.0, t));
        let s = src.field(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.electric, v(1.0, 2.0, 3.0));
        assert_eq!(s.magnetic, v(0.0, 0.0, 4.0));
    }

    #[test]
    fn one_sided_closures_zero_the_other_half() {
        let e = FnFieldSource::electric(|_x, _y, _z, t| v(t, 0.0, 0.0));
        assert_eq!(e.electric_field(0.0, 0.0, 0.0, 2.0), v(2.0, 0.0, 0.0));
        assert_eq!(e.magnetic_field(0.0, 0.0, 0.0, 2.0), FieldVector::ZERO);

        let b = FnFieldSource::magnetic(|x, _y, _z, _t| v(0.0, x, 0.0));
        assert_eq!(b.electric_field(3.0, 0.0, 0.0, 0.0), FieldVector::ZERO);
        assert_eq!(b.magnetic_field(3.0, 0.0, 0.0, 0.0), v(0.0, 3.0, 0.0));
    }

    #[test]
    fn scaled_applies_separate_factors() {
        let s = Scaled::new(UniformField::new(v(1.0, 2.0, 0.0), v(0.0, 1.0, 1.0)), 2.0, -0.5);
        assert_eq!(s.electric_field(0.0, 0.0, 0.0, 0.0), v(2.0, 4.0, 0.0));
        assert_eq!(s.magnetic_field(0.0, 0.0, 0.0, 0.0), v(0.0, -0.5, -0.5));
        assert_eq!(
            s.field(0.0, 0.0, 0.0, 0.0),
            FieldSample {
                electric: v(2.0, 4.0, 0.0),
                magnetic: v(0.0, -0.5, -0.5),
            }
        );
        assert_eq!(s.electric_scale(), 2.0);
        assert_eq!(s.magnetic_scale(), -0.5);
    }

    #[test]
    fn scaled_base_is_still_zero() {
        let s = Scaled::uniform(BaseFieldSource, 1e9);
        assert_eq!(s.field(1.0, 1.0, 1.0, 1.0), FieldSample::ZERO);
        assert_eq!(s.into_inner(), BaseFieldSource);
    }

    #[test]
    fn empty_superposition_is_zero() {
        let sup = Superposition::new();
        assert!(sup.is_empty());
        assert_eq!(sup.field(1.0, 2.0, 3.0, 4.0), FieldSample::ZERO);
    }

    #[test]
    fn superposition_sums_in_order() {
        let sup = Superposition::new()
            .with(UniformField::electric_only(v(1.0, 0.0, 0.0)))
            .with(UniformField::magnetic_only(v(0.0, 0.0, 2.0)))
            .with(FnFieldSource::electric(|x, _y, _z, _t| v(0.0, x, 0.0)))
            .with(BaseFieldSource);
        assert_eq!(sup.len(), 4);
        let s = sup.field(3.0, 0.0, 0.0, 0.0);
        assert_eq!(s.electric, v(1.0, 3.0, 0.0));
        assert_eq!(s.magnetic, v(0.0, 0.0, 2.0));
        assert_eq!(sup.electric_field(3.0, 0.0, 0.0, 0.0), s.electric);
        assert_eq!(sup.magnetic_field(3.0, 0.0, 0.0, 0.0), s.magnetic);
    }

    #[test]
    fn superposition_collects_from_boxes() {
        let parts: Vec<Box<dyn FieldSource + Send + Sync>> = vec![
            Box::new(UniformField::electric_only(v(1.0, 1.0, 1.0))),
            Box::new(UniformField::electric_only(v(-1.0, 0.0, 1.0))),
        ];
        let sup: Superposition = parts.into_iter().collect();
        assert_eq!(sup.electric_field(0.0, 0.0, 0.0, 0.0), v(0.0, 1.0, 2.0));
    }

    proptest! {
        #[test]
        fn superposition_of_uniforms_is_their_sum(
            es in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3), 0..8),
        ) {
            let mut sup = Superposition::new();
            let mut expected = FieldVector::ZERO;
            for &(x, y, z) in &es {
                sup.push(UniformField::electric_only(v(x, y, z)));
                expected += v(x, y, z);
            }
            let got = sup.electric_field(0.0, 0.0, 0.0, 0.0);
            prop_assert!((got - expected).norm() < 1e-9);
            prop_assert_eq!(sup.magnetic_field(0.0, 0.0, 0.0, 0.0), FieldVector::ZERO);
        }
    }
}
