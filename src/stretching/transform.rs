//! Closed-form stretched-mesh transform and its metric terms.
//!
//! A uniform computational coordinate `η` is mapped to the physical
//! coordinate `y` through an inverse-tangent transform. The derivative
//! operators work on the uniform mesh; the metric terms convert their
//! results to the stretched mesh:
//!
//! ```text
//! ∂f/∂y   = ppy · ∂f/∂η
//! ∂²f/∂y² = pp2y · ∂²f/∂η² − pp4y · ∂f/∂y
//! ```
//!
//! With `yinf = −yly/2` the mapping parameter is
//!
//! ```text
//! α = | (−yinf − sqrt(π²β² + yinf²)) / (2 β yinf) |
//! ```
//!
//! Values are produced both at the mesh points (`yp`) and at the staggered
//! half-step positions (`ypi`).

use std::f64::consts::PI;

use log::{trace, warn};

use super::mode::{StretchMode, validate_beta};
use crate::error::{MeshError, Result};

/// Sentinel stored at the first point of the degenerate mapping.
pub const DEGENERATE_SENTINEL: f64 = -1.0e10;

/// Output of [`stretch`]: coordinates and metric terms at the mesh points
/// and at the staggered half-step positions. Every array has length `ny`.
#[derive(Clone, Debug, PartialEq)]
pub struct StretchedGrid {
    /// Stretching mode used
    pub mode: StretchMode,
    /// Mapping parameter α
    pub alpha: f64,
    /// Physical coordinates at the mesh points
    pub yp: Vec<f64>,
    /// First-derivative scale factor at the mesh points
    pub ppy: Vec<f64>,
    /// Second-derivative scale factor (`ppy²`) at the mesh points
    pub pp2y: Vec<f64>,
    /// Second-derivative correction term at the mesh points
    pub pp4y: Vec<f64>,
    /// Physical coordinates at the staggered positions
    pub ypi: Vec<f64>,
    /// First-derivative scale factor at the staggered positions
    pub ppyi: Vec<f64>,
    /// Second-derivative scale factor at the staggered positions
    pub pp2yi: Vec<f64>,
    /// Second-derivative correction term at the staggered positions
    pub pp4yi: Vec<f64>,
}

impl StretchedGrid {
    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.yp.len()
    }

    /// Whether the grid has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.yp.is_empty()
    }

    /// Coordinates and metric terms at the mesh points, in the order
    /// `(yp, ppy, pp2y, pp4y)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.yp, self.ppy, self.pp2y, self.pp4y)
    }
}

/// Compute the stretched coordinate and its metric terms.
///
/// # Arguments
///
/// * `mode` - Stretching mode; [`StretchMode::None`] must be handled by the
///   caller and is rejected with [`MeshError::UnsupportedMode`]
/// * `beta` - Refinement parameter (> 0)
/// * `yly` - Physical length of the axis (> 0)
/// * `my` - Number of intervals
/// * `ny` - Number of points
///
/// # Example
///
/// ```
/// use compact_mesh::stretching::{StretchMode, stretch};
///
/// let grid = stretch(StretchMode::Center, 1.0, 1.0, 16, 17).unwrap();
/// assert_eq!(grid.yp.len(), 17);
/// assert_eq!(grid.yp[0], 0.0);
/// assert!((grid.yp[16] - 1.0).abs() < 1e-10);
/// ```
pub fn stretch(
    mode: StretchMode,
    beta: f64,
    yly: f64,
    my: usize,
    ny: usize,
) -> Result<StretchedGrid> {
    if !mode.is_stretched() {
        return Err(MeshError::UnsupportedMode(mode.code()));
    }
    validate_beta(beta)?;
    if !(yly.is_finite() && yly > 0.0) {
        return Err(MeshError::out_of_range(
            "yly",
            yly,
            "must be finite and greater than zero",
        ));
    }
    if my == 0 {
        return Err(MeshError::out_of_range("my", my, "must be at least one interval"));
    }
    if ny == 0 {
        return Err(MeshError::out_of_range("ny", ny, "must be at least one point"));
    }

    let alpha = mapping_alpha(beta, yly);
    trace!("stretch: mode={mode} beta={beta} yly={yly} my={my} ny={ny} alpha={alpha}");

    let (yeta, yp, yetai, ypi) = if alpha == 0.0 {
        warn!("stretch: alpha == 0, using the degenerate cotangent mapping");
        let (yeta, yp) = degenerate_profile(beta, ny);
        (yeta.clone(), yp.clone(), yeta, yp)
    } else {
        let map = Mapping::new(mode, alpha, beta, yly);

        let mut yeta = vec![0.0; ny];
        let mut yp = vec![0.0; ny];
        yeta[0] = map.first_eta();
        for j in 1..ny {
            yeta[j] = map.eta(j, my);
            yp[j] = map.physical(yeta[j]);
        }

        let yetai: Vec<f64> = (0..ny).map(|j| map.eta_staggered(j, my)).collect();
        let ypi: Vec<f64> = yetai.iter().map(|&eta| map.physical(eta)).collect();

        (yeta, yp, yetai, ypi)
    };

    let (ppy, pp2y, pp4y) = metric_terms(mode, alpha, beta, yly, &yeta);
    let (ppyi, pp2yi, pp4yi) = metric_terms(mode, alpha, beta, yly, &yetai);

    Ok(StretchedGrid {
        mode,
        alpha,
        yp,
        ppy,
        pp2y,
        pp4y,
        ypi,
        ppyi,
        pp2yi,
        pp4yi,
    })
}

/// Mapping parameter α for a given refinement and length.
pub fn mapping_alpha(beta: f64, yly: f64) -> f64 {
    let yinf = -0.5 * yly;
    let den = 2.0 * beta * yinf;
    let xnum = -yinf - (PI * PI * beta * beta + yinf * yinf).sqrt();
    (xnum / den).abs()
}

/// Inverse-tangent mapping from the normalised coordinate η to `y`.
struct Mapping {
    mode: StretchMode,
    yly: f64,
    yinf: f64,
    xnum: f64,
    den: f64,
    den1: f64,
    cst: f64,
    alpha: f64,
    beta: f64,
}

impl Mapping {
    fn new(mode: StretchMode, alpha: f64, beta: f64, yly: f64) -> Self {
        let den1 = (alpha * beta + 1.0).sqrt();
        let sqrt_a_pi = (alpha / PI).sqrt();
        let sqrt_pi = PI.sqrt();
        Self {
            mode,
            yly,
            yinf: -0.5 * yly,
            xnum: den1 / sqrt_a_pi / beta.sqrt() / sqrt_pi,
            den: 2.0 * sqrt_a_pi * beta.sqrt() * PI * sqrt_pi,
            den1,
            cst: beta.sqrt() * PI / (2.0 * alpha.sqrt() * den1),
            alpha,
            beta,
        }
    }

    /// η at the first mesh point.
    fn first_eta(&self) -> f64 {
        match self.mode {
            StretchMode::BothSides | StretchMode::Bottom => -0.5,
            _ => 0.0,
        }
    }

    /// η at mesh point `j`.
    fn eta(&self, j: usize, my: usize) -> f64 {
        let (j, my) = (j as f64, my as f64);
        match self.mode {
            StretchMode::Bottom => 0.5 * j / my - 0.5,
            StretchMode::BothSides => j / my - 0.5,
            _ => j / my,
        }
    }

    /// η half a step above mesh point `j`.
    fn eta_staggered(&self, j: usize, my: usize) -> f64 {
        let (j, my) = (j as f64 + 0.5, my as f64);
        match self.mode {
            StretchMode::Bottom => j * (0.5 / my) - 0.5,
            StretchMode::BothSides => j * (1.0 / my) - 0.5,
            _ => j * (1.0 / my),
        }
    }

    fn physical(&self, eta: f64) -> f64 {
        let s = (PI * eta).sin();
        let den3 = s * s / self.beta / PI + self.alpha / PI;
        let den4 = 2.0 * self.alpha * self.beta - (2.0 * PI * eta).cos() + 1.0;
        let xnum1 = (self.xnum * (PI * eta).tan()).atan() * den4 / self.den1 / den3 / self.den;

        // Branch on the side of the mid-point; the mid-point itself is exact.
        let branch = if eta < 0.5 {
            xnum1 - self.cst
        } else if eta == 0.5 {
            0.0
        } else {
            xnum1 + self.cst
        };

        match self.mode {
            StretchMode::Bottom => (branch + self.yly) * 2.0,
            StretchMode::BothSides => branch + self.yly,
            _ => branch - self.yinf,
        }
    }
}

/// Cotangent mapping used when α vanishes.
///
/// Returns `(yeta, yp)` with `yeta[j] = j / ny` and the first point set to
/// [`DEGENERATE_SENTINEL`].
fn degenerate_profile(beta: f64, ny: usize) -> (Vec<f64>, Vec<f64>) {
    let mut yeta = vec![0.0; ny];
    let mut yp = vec![0.0; ny];
    yp[0] = DEGENERATE_SENTINEL;
    for j in 1..ny {
        yeta[j] = j as f64 / ny as f64;
        yp[j] = -beta * (PI * yeta[j]).cos() / (PI * yeta[j]).sin();
    }
    (yeta, yp)
}

/// Metric terms `(ppy, pp2y, pp4y)` at the normalised positions `yeta`.
fn metric_terms(
    mode: StretchMode,
    alpha: f64,
    beta: f64,
    yly: f64,
    yeta: &[f64],
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let correction = if mode == StretchMode::Bottom { 0.5 } else { 1.0 };

    let n = yeta.len();
    let mut ppy = Vec::with_capacity(n);
    let mut pp2y = Vec::with_capacity(n);
    let mut pp4y = Vec::with_capacity(n);

    for &eta in yeta {
        let (s, c) = (PI * eta).sin_cos();
        let p = yly * (alpha / PI + (1.0 / PI / beta) * s * s);
        ppy.push(p);
        pp2y.push(p * p);
        pp4y.push(-2.0 / beta * c * s * correction);
    }

    (ppy, pp2y, pp4y)
}
