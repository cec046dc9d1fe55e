//! # fieldsource
//!
//! Electric and magnetic field sources: ask for the field at `(x, y, z, t)`,
//! get back two 3-vectors.
//!
//! ## The Problem
//!
//! A particle tracker, a beam-line model or a plasma push loop needs field
//! values at arbitrary points in space and time, and should not care whether
//! they come from an analytic model, an interpolated map or a coupled solver.
//! [`FieldSource`] is that seam.
//!
//! ## Key Items
//!
//! | Item | Use Case |
//! |------|----------|
//! | [`FieldSource`] | The query capability (`electric_field`, `magnetic_field`) |
//! | [`BaseFieldSource`] | Overrides nothing; zero fields everywhere |
//! | [`UniformField`], [`FnFieldSource`] | Constant or closure-backed sources |
//! | [`Scaled`], [`Superposition`] | Unit/amplitude factors and linear sums |
//! | [`sampling::sample_points`] | Batch evaluation over an `n x 3` array |
//! | [`sampling::probe`] | Seeded random sweep reporting peak magnitudes |
//! | [`config::FieldConfig`] | Build a source tree from TOML |
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldsource::{FieldSource, FieldVector, Superposition, UniformField};
//!
//! struct AlongX;
//!
//! impl FieldSource for AlongX {
//!     fn electric_field(&self, _x: f64, _y: f64, _z: f64, _t: f64) -> FieldVector {
//!         FieldVector::new(1.0, 0.0, 0.0)
//!     }
//! }
//!
//! let total = Superposition::new()
//!     .with(AlongX)
//!     .with(UniformField::magnetic_only(FieldVector::new(0.0, 0.0, 0.5)));
//!
//! let s = total.field(5.0, -3.0, 2.0, 10.0);
//! assert_eq!(s.electric, FieldVector::new(1.0, 0.0, 0.0));
//! assert_eq!(s.magnetic, FieldVector::new(0.0, 0.0, 0.5));
//! ```
//!
//! ## Units
//!
//! None are assumed. Each source defines its own; wrap it in [`Scaled`] to
//! convert before mixing sources that disagree.
//!
//! ## What Can Go Wrong
//!
//! 1. **Silent zeros**: forgetting to override one of the two queries leaves
//!    the default, which is zero rather than an error.
//! 2. **Non-finite output**: queries never fail, so a source with a
//!    singularity may hand back NaN or infinity. [`sampling::probe`] counts these.
//! 3. **Thread safety**: the trait has no `Send`/`Sync` bound. Use
//!    [`SharedFieldSource`] when a source crosses threads.

use thiserror::Error;

pub mod config;
pub mod sampling;
pub mod source;
pub mod sources;
pub mod vector;

pub use source::{BaseFieldSource, FieldSource, SharedFieldSource};
pub use sources::{FieldFn, FnFieldSource, Scaled, Superposition, UniformField};
pub use vector::{FieldSample, FieldVector};

/// Field source error variants.
///
/// Field queries themselves never fail; these come from the batch, probe and
/// configuration helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Point array has the wrong number of columns.
    #[error("point array must have {expected} columns, got {got}")]
    PointShape { expected: usize, got: usize },

    /// Domain error (invalid inputs for a helper).
    #[error("{0}")]
    Domain(&'static str),

    /// Configuration parsed but describes an invalid source tree.
    #[error("invalid field config: {0}")]
    InvalidConfig(String),

    /// Configuration is not valid TOML for a source tree.
    #[error("failed to parse field config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("failed to read field config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for field source helpers.
pub type Result<T> = std::result::Result<T, Error>;
