//! Batch evaluation of field sources.
//!
//! Hosts rarely query one point at a time. These helpers evaluate a source
//! over `ndarray` point sets and run a seeded random probe over a space-time
//! box, which is useful for sanity-checking a source before a long run.

use crate::source::FieldSource;
use crate::{Error, Result};
use ndarray::{Array2, ArrayView2};
use tracing::{debug, trace};

/// Field values for a batch of events, one row per event.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArrays {
    /// `n x 3` electric field components.
    pub electric: Array2<f64>,
    /// `n x 3` magnetic field components.
    pub magnetic: Array2<f64>,
}

impl FieldArrays {
    fn zeros(n: usize) -> Self {
        Self {
            electric: Array2::zeros((n, 3)),
            magnetic: Array2::zeros((n, 3)),
        }
    }

    fn write_row<S: FieldSource + ?Sized>(&mut self, i: usize, source: &S, event: [f64; 4]) {
        let [x, y, z, t] = event;
        let s = source.field(x, y, z, t);
        for (k, c) in s.electric.to_array().into_iter().enumerate() {
            self.electric[[i, k]] = c;
        }
        for (k, c) in s.magnetic.to_array().into_iter().enumerate() {
            self.magnetic[[i, k]] = c;
        }
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.electric.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluate `source` at every row `(x, y, z)` of `points`, all at time `t`.
///
/// # Errors
///
/// [`Error::PointShape`] if `points` does not have exactly 3 columns.
///
/// # Example
///
/// ```rust
/// use fieldsource::{sampling::sample_points, FieldVector, UniformField};
/// use ndarray::array;
///
/// let src = UniformField::electric_only(FieldVector::new(1.0, 0.0, 0.0));
/// let points = array![[0.0, 0.0, 0.0], [5.0, -3.0, 2.0]];
/// let out = sample_points(&src, &points.view(), 10.0).unwrap();
/// assert_eq!(out.electric, array![[1.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
/// ```
pub fn sample_points<S: FieldSource + ?Sized>(
    source: &S,
    points: &ArrayView2<f64>,
    t: f64,
) -> Result<FieldArrays> {
    if points.ncols() != 3 {
        return Err(Error::PointShape {
            expected: 3,
            got: points.ncols(),
        });
    }
    let n = points.nrows();
    trace!(n, t, "sampling points");

    let mut out = FieldArrays::zeros(n);
    for (i, row) in points.rows().into_iter().enumerate() {
        out.write_row(i, source, [row[0], row[1], row[2], t]);
    }
    Ok(out)
}

/// Evaluate `source` at every row `(x, y, z, t)` of `events`.
///
/// # Errors
///
/// [`Error::PointShape`] if `events` does not have exactly 4 columns.
pub fn sample_events<S: FieldSource + ?Sized>(
    source: &S,
    events: &ArrayView2<f64>,
) -> Result<FieldArrays> {
    if events.ncols() != 4 {
        return Err(Error::PointShape {
            expected: 4,
            got: events.ncols(),
        });
    }
    let n = events.nrows();
    trace!(n, "sampling events");

    let mut out = FieldArrays::zeros(n);
    for (i, row) in events.rows().into_iter().enumerate() {
        out.write_row(i, source, [row[0], row[1], row[2], row[3]]);
    }
    Ok(out)
}

/// Configuration for [`probe`].
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Lower corner `(x, y, z, t)` of the probed box.
    pub lower: [f64; 4],
    /// Upper corner `(x, y, z, t)`. An axis with `lower == upper` is held fixed.
    pub upper: [f64; 4],
    /// Number of random events.
    pub samples: usize,
    /// RNG seed (deterministic by default).
    pub seed: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            lower: [-1.0, -1.0, -1.0, 0.0],
            upper: [1.0, 1.0, 1.0, 1.0],
            samples: 1_024,
            seed: 42,
        }
    }
}

/// Summary of a [`probe`] run.
///
/// Non-finite samples are counted but excluded from the maxima. The `*_at`
/// locations are `None` only when every sample was non-finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub samples: usize,
    pub max_electric: f64,
    pub max_electric_at: Option<[f64; 4]>,
    pub max_magnetic: f64,
    pub max_magnetic_at: Option<[f64; 4]>,
    /// Events where either field had a NaN or infinite component.
    pub non_finite: usize,
}

/// Draw `cfg.samples` events uniformly from the box and record the largest
/// field magnitudes seen.
///
/// # Errors
///
/// [`Error::Domain`] for zero samples, non-finite bounds, or `lower > upper`.
pub fn probe<S: FieldSource + ?Sized>(source: &S, cfg: &ProbeConfig) -> Result<ProbeReport> {
    if cfg.samples == 0 {
        return Err(Error::Domain("samples must be >= 1"));
    }
    if cfg.lower.iter().chain(&cfg.upper).any(|b| !b.is_finite()) {
        return Err(Error::Domain("probe bounds must be finite"));
    }
    if cfg.lower.iter().zip(&cfg.upper).any(|(lo, hi)| lo > hi) {
        return Err(Error::Domain("probe lower bound exceeds upper bound"));
    }

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rand_distr::Uniform;

    debug!(samples = cfg.samples, seed = cfg.seed, "probe starting");

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let unit = Uniform::new(0.0f64, 1.0);

    let mut report = ProbeReport {
        samples: cfg.samples,
        max_electric: 0.0,
        max_electric_at: None,
        max_magnetic: 0.0,
        max_magnetic_at: None,
        non_finite: 0,
    };

    for _ in 0..cfg.samples {
        let mut event = [0.0f64; 4];
        for (k, e) in event.iter_mut().enumerate() {
            let (lo, hi) = (cfg.lower[k], cfg.upper[k]);
            let u: f64 = rng.sample(&unit);
            // Convex combination: no `hi - lo` span that could overflow.
            *e = if lo == hi {
                lo
            } else {
                (lo * (1.0 - u) + hi * u).clamp(lo, hi)
            };
        }
        let [x, y, z, t] = event;
        let s = source.field(x, y, z, t);
        if !s.electric.is_finite() || !s.magnetic.is_finite() {
            report.non_finite += 1;
            trace!(x, y, z, t, "non-finite field sample");
            continue;
        }
        let e = s.electric.norm();
        if report.max_electric_at.is_none() || e > report.max_electric {
            report.max_electric = e;
            report.max_electric_at = Some(event);
        }
        let b = s.magnetic.norm();
        if report.max_magnetic_at.is_none() || b > report.max_magnetic {
            report.max_magnetic = b;
            report.max_magnetic_at = Some(event);
        }
    }

    debug!(
        max_electric = report.max_electric,
        max_magnetic = report.max_magnetic,
        non_finite = report.non_finite,
        "probe complete"
    );
    Ok(report)
}
