// Closed-form PID tuning rules for FOLPD process models
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Every function in this module has the same shape: it takes a validated [`ProcessModel`] and a
//! [`ControllerType`] and returns [`ControllerGains`] in parallel form. Constants are the published
//! ones as collected in O'Dwyer, A. *Handbook of PI and PID Controller Tuning Rules*, Imperial
//! College Press, 2009.
//!
//! Throughout, `K` is the process gain, `τ` the time constant, `θ` the dead time, `r = θ/τ`,
//! and `Ti`, `Td` the integral and derivative times (`Ki = Kp / Ti`, `Kd = Kp Td`).

use num_traits::Float;

use crate::controller::ControllerType;
use crate::error::{ModelParameter, TuningError};
use crate::gains::ControllerGains;
use crate::model::ProcessModel;

pub(crate) const ZIEGLER_NICHOLS: &str = "ziegler_nichols";
pub(crate) const CALLENDER: &str = "callender";
pub(crate) const CALLENDER_2: &str = "callender_2";
pub(crate) const HAZEBROEK_VAN_DER_WAERDEN: &str = "hazebroek_van_der_waerden";
pub(crate) const OPPELT: &str = "oppelt";
pub(crate) const COHEN_COON: &str = "cohen_coon";
pub(crate) const FERTIK_SHARPE: &str = "fertik_sharpe";
pub(crate) const PARR: &str = "parr";
pub(crate) const SAKAI: &str = "sakai";
pub(crate) const BORRESEN_GRINDAL: &str = "borresen_grindal";
pub(crate) const KLEIN: &str = "klein";
pub(crate) const MCMILLAN: &str = "mcmillan";
pub(crate) const ST_CLAIR: &str = "st_clair";
pub(crate) const MOROS_OPPELT: &str = "moros_oppelt";
pub(crate) const MOROS_ROSENBERG: &str = "moros_rosenberg";
pub(crate) const SHINSKEY: &str = "shinskey";
pub(crate) const LIPTAK: &str = "liptak";
pub(crate) const CHIDAMBARAM: &str = "chidambaram";
pub(crate) const FAANES_SKOGESTAD: &str = "faanes_skogestad";
pub(crate) const PMA: &str = "pma";

/// Converts an empirical constant to the working float type.
///
/// Every `Float` can represent the small constants used here; should a conversion ever fail, the
/// NaN is caught by the finiteness check on the resulting gains.
#[inline]
fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// One row of the most common correlation form:
/// `Kp = a / (K r)`, `Ti = b θ`, `Td = c θ`.
struct RatioRow {
    controller: ControllerType,
    a: f64,
    b: f64,
    c: f64,
}

const fn row(controller: ControllerType, a: f64, b: f64, c: f64) -> RatioRow {
    RatioRow { controller, a, b, c }
}

fn ratio_rule<F: Float>(
    rule: &'static str,
    table: &[RatioRow],
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    let row = table
        .iter()
        .find(|it| it.controller == controller)
        .ok_or_else(|| TuningError::unsupported(rule, controller))?;
    let theta = model.require_dead_time()?;

    let kp = constant::<F>(row.a) / (model.gain() * model.dead_time_ratio());
    ControllerGains::from_standard_form(
        controller,
        kp,
        constant::<F>(row.b) * theta,
        constant::<F>(row.c) * theta,
    )
}

fn only(
    rule: &'static str,
    supported: &[ControllerType],
    controller: ControllerType,
) -> Result<(), TuningError> {
    if supported.contains(&controller) {
        Ok(())
    } else {
        Err(TuningError::unsupported(rule, controller))
    }
}

/// Ziegler and Nichols (1942), process reaction curve method.
///
/// | Type | Kp           | Ti     | Td     |
/// |------|--------------|--------|--------|
/// | P    | `1.0 / (K r)` |        |        |
/// | PI   | `0.9 / (K r)` | `3.3 θ` |        |
/// | PID  | `1.2 / (K r)` | `2 θ`   | `0.5 θ` |
///
/// Intended for `r <= 1`. Requires `θ > 0`.
///
/// ```rust
/// use approx::assert_relative_eq;
/// use pid_tuning::{rules, ControllerType, ProcessModel};
///
/// let model = ProcessModel::new(1.25, 4.0, 0.9).unwrap();
/// let gains = rules::ziegler_nichols(&model, ControllerType::PID).unwrap();
///
/// assert_relative_eq!(gains.kp(), 4.266666666666667, epsilon = 1e-12);
/// assert_relative_eq!(gains.kp() / gains.ki(), 1.8, epsilon = 1e-12);
/// assert_relative_eq!(gains.kd() / gains.kp(), 0.45, epsilon = 1e-12);
/// ```
pub fn ziegler_nichols<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 3] = [
        row(ControllerType::P, 1.0, 0.0, 0.0),
        row(ControllerType::PI, 0.9, 3.3, 0.0),
        row(ControllerType::PID, 1.2, 2.0, 0.5),
    ];
    ratio_rule(ZIEGLER_NICHOLS, &TABLE, model, controller)
}

/// The two published settings of Callender, Hartree and Porter (1935/6).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CallenderCriterion {
    /// Decay ratio 0.015, period of the decaying oscillation `5.10 θ`. PI only.
    #[default]
    DecayRatio015,
    /// Decay ratio 0.043, period of the decaying oscillation `6.28 θ`. PI and PID.
    DecayRatio043,
}

impl CallenderCriterion {
    pub(crate) fn key(&self) -> &'static str {
        match self {
            CallenderCriterion::DecayRatio015 => CALLENDER,
            CallenderCriterion::DecayRatio043 => CALLENDER_2,
        }
    }
}

/// Callender et al. (1935/6). Note the gain is written in terms of `θ` alone, not `r`.
///
/// | Criterion | Type | Kp              | Ti        | Td       |
/// |-----------|------|-----------------|-----------|----------|
/// | 0.015     | PI   | `0.568 / (K θ)` | `3.64 θ`  |          |
/// | 0.043     | PI   | `0.690 / (K θ)` | `2.45 θ`  |          |
/// | 0.043     | PID  | `1.066 / (K θ)` | `1.418 θ` | `0.47 θ` |
///
/// Derived for `r = 0.3`. Requires `θ > 0`.
pub fn callender<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
    criterion: CallenderCriterion,
) -> Result<ControllerGains<F>, TuningError> {
    let (a, b, c) = match (criterion, controller) {
        (CallenderCriterion::DecayRatio015, ControllerType::PI) => (0.568, 3.64, 0.0),
        (CallenderCriterion::DecayRatio043, ControllerType::PI) => (0.690, 2.45, 0.0),
        (CallenderCriterion::DecayRatio043, ControllerType::PID) => (1.066, 1.418, 0.47),
        _ => return Err(TuningError::unsupported(criterion.key(), controller)),
    };
    let theta = model.require_dead_time()?;

    let kp = constant::<F>(a) / (model.gain() * theta);
    ControllerGains::from_standard_form(
        controller,
        kp,
        constant::<F>(b) * theta,
        constant::<F>(c) * theta,
    )
}

const HAZEBROEK_RATIOS: [f64; 26] = [
    0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0,
    2.2, 2.4, 2.6, 2.8, 3.0, 3.2, 3.4,
];
const HAZEBROEK_X1: [f64; 26] = [
    0.68, 0.70, 0.72, 0.74, 0.76, 0.79, 0.81, 0.84, 0.87, 0.90, 0.93, 0.96, 0.99, 1.02, 1.06, 1.09,
    1.13, 1.17, 1.20, 1.28, 1.36, 1.45, 1.53, 1.62, 1.71, 1.81,
];
const HAZEBROEK_X2: [f64; 26] = [
    7.14, 4.76, 3.70, 3.03, 2.50, 2.17, 1.92, 1.75, 1.61, 1.49, 1.41, 1.32, 1.25, 1.19, 1.14, 1.10,
    1.06, 1.03, 1.00, 0.95, 0.91, 0.88, 0.85, 0.83, 0.81, 0.80,
];

/// Piecewise-linear interpolation over an ascending table; `x` is expected inside its range.
fn interpolate<F: Float>(x: F, xs: &[f64], ys: &[f64]) -> F {
    let upper = xs
        .iter()
        .position(|&it| x <= constant(it))
        .unwrap_or(xs.len() - 1)
        .max(1);
    let lower = upper - 1;

    let (x0, x1) = (constant::<F>(xs[lower]), constant::<F>(xs[upper]));
    let (y0, y1) = (constant::<F>(ys[lower]), constant::<F>(ys[upper]));
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Hazebroek and Van der Waerden (1950), PI only.
///
/// For `0.2 <= r <= 3.4` the factors `x1` and `x2` are interpolated from the published table and
/// `Kp = x1 / (K r)`, `Ti = x2 θ`. Beyond `r = 3.4`, `Kp = (0.5 r + 1) / (K r)` and
/// `Ti = θ / (1.6 θ - 1.2 τ)`. The correlation is undefined for `r < 0.2`, which is rejected.
pub fn hazebroek_van_der_waerden<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(HAZEBROEK_VAN_DER_WAERDEN, &[ControllerType::PI], controller)?;
    let theta = model.require_dead_time()?;
    let r = model.dead_time_ratio();
    let k = model.gain();

    if r < constant(HAZEBROEK_RATIOS[0]) {
        return Err(TuningError::invalid(
            ModelParameter::DeadTimeRatio,
            "must be at least 0.2 for this rule",
        ));
    }

    let (kp, ti) = if r <= constant(HAZEBROEK_RATIOS[HAZEBROEK_RATIOS.len() - 1]) {
        let x1 = interpolate(r, &HAZEBROEK_RATIOS, &HAZEBROEK_X1);
        let x2 = interpolate(r, &HAZEBROEK_RATIOS, &HAZEBROEK_X2);
        (x1 / (k * r), x2 * theta)
    } else {
        let kp = (constant::<F>(0.5) * r + F::one()) / (k * r);
        let ti = theta / (constant::<F>(1.6) * theta - constant::<F>(1.2) * model.time_constant());
        (kp, ti)
    };
    ControllerGains::from_standard_form(controller, kp, ti, F::zero())
}

/// Oppelt (1951), PI only: `Kp = (0.77 / r - 1) / K`, with `Ti = 3.32 θ` below `r = 1` and
/// `Ti = 1.66 θ` above it. The correlation leaves `r = 1` itself undefined.
///
/// The proportional gain vanishes at `r = 0.77`, which is rejected, and takes the opposite sign of
/// `1 / K` for `r > 0.77`; e.g. `r = 1.5` with `K = 1` gives `Kp ≈ -0.487`.
pub fn oppelt<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(OPPELT, &[ControllerType::PI], controller)?;
    let theta = model.require_dead_time()?;
    let r = model.dead_time_ratio();

    let ti_factor = if r < F::one() {
        constant::<F>(3.32)
    } else if r > F::one() {
        constant::<F>(1.66)
    } else {
        return Err(TuningError::invalid(
            ModelParameter::DeadTimeRatio,
            "must not equal 1 for this rule",
        ));
    };

    let kp = (constant::<F>(0.77) / r - F::one()) / model.gain();
    ControllerGains::from_standard_form(controller, kp, ti_factor * theta, F::zero())
}

/// Cohen and Coon (1953).
///
/// | Type | Kp                         | Ti                           | Td                  |
/// |------|----------------------------|------------------------------|---------------------|
/// | P    | `(1 / r + 1 / 3) / K`      |                              |                     |
/// | PI   | `(0.9 / r + 1 / 12) / K`   | `θ (30 + 3 r) / (9 + 20 r)`  |                     |
/// | PID  | `(4 / (3 r) + 1 / 4) / K`  | `θ (32 + 6 r) / (13 + 8 r)`  | `4 θ / (11 + 2 r)`  |
///
/// Requires `θ > 0`.
pub fn cohen_coon<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(
        COHEN_COON,
        &[ControllerType::P, ControllerType::PI, ControllerType::PID],
        controller,
    )?;
    let theta = model.require_dead_time()?;
    let r = model.dead_time_ratio();
    let k = model.gain();
    let c = constant::<F>;

    let (kp, ti, td) = match controller {
        ControllerType::P => ((F::one() / r + F::one() / c(3.0)) / k, F::zero(), F::zero()),
        ControllerType::PI => (
            (c(0.9) / r + F::one() / c(12.0)) / k,
            theta * (c(30.0) + c(3.0) * r) / (c(9.0) + c(20.0) * r),
            F::zero(),
        ),
        _ => (
            (c(4.0) / (c(3.0) * r) + c(0.25)) / k,
            theta * (c(32.0) + c(6.0) * r) / (c(13.0) + c(8.0) * r),
            c(4.0) * theta / (c(11.0) + c(2.0) * r),
        ),
    };
    ControllerGains::from_standard_form(controller, kp, ti, td)
}

/// Fertik and Sharpe (1979), PI only: `Kp = 0.56 / K`, `Ti = 0.65 τ`. Accepts `θ = 0`.
pub fn fertik_sharpe<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(FERTIK_SHARPE, &[ControllerType::PI], controller)?;
    let kp = constant::<F>(0.56) / model.gain();
    ControllerGains::from_standard_form(
        controller,
        kp,
        constant::<F>(0.65) * model.time_constant(),
        F::zero(),
    )
}

/// Parr (1989).
///
/// | Type | Kp             | Ti      | Td       |
/// |------|----------------|---------|----------|
/// | PI   | `0.91 / (K r)` | `3.3 θ` |          |
/// | PID  | `1.25 / (K r)` | `2.5 θ` | `0.4 θ`  |
///
/// Requires `θ > 0`.
pub fn parr<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 2] = [
        row(ControllerType::PI, 0.91, 3.3, 0.0),
        row(ControllerType::PID, 1.25, 2.5, 0.4),
    ];
    ratio_rule(PARR, &TABLE, model, controller)
}

/// Sakai et al. (1989), PI only: `Kp = 1.2408 / (K r)`, `Ti = 0.5 θ`.
pub fn sakai<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 1] = [row(ControllerType::PI, 1.2408, 0.5, 0.0)];
    ratio_rule(SAKAI, &TABLE, model, controller)
}

/// Borresen and Grindal (1990). PI and PID share `Kp = 1 / (K r)` and `Ti = 3 θ`; PID adds
/// `Td = 0.5 θ`.
pub fn borresen_grindal<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 2] = [
        row(ControllerType::PI, 1.0, 3.0, 0.0),
        row(ControllerType::PID, 1.0, 3.0, 0.5),
    ];
    ratio_rule(BORRESEN_GRINDAL, &TABLE, model, controller)
}

/// Klein et al. (1992), PI only: `Kp = 0.28 / (K (r + 0.1))`, `Ti = 0.53 τ`. Accepts `θ = 0`.
pub fn klein<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(KLEIN, &[ControllerType::PI], controller)?;
    let kp = constant::<F>(0.28) / (model.gain() * (model.dead_time_ratio() + constant(0.1)));
    ControllerGains::from_standard_form(
        controller,
        kp,
        constant::<F>(0.53) * model.time_constant(),
        F::zero(),
    )
}

/// McMillan (1994), PI only: `Kp = 1 / (3 K)`, `Ti = θ`.
pub fn mcmillan<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(MCMILLAN, &[ControllerType::PI], controller)?;
    let theta = model.require_dead_time()?;
    let kp = F::one() / (constant::<F>(3.0) * model.gain());
    ControllerGains::from_standard_form(controller, kp, theta, F::zero())
}

/// St. Clair (1997), PI only: `Kp = 0.333 / (K r)`, `Ti = τ`. Intended for `r >= 0.33`.
pub fn st_clair<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    only(ST_CLAIR, &[ControllerType::PI], controller)?;
    model.require_dead_time()?;
    let kp = constant::<F>(0.333) / (model.gain() * model.dead_time_ratio());
    ControllerGains::from_standard_form(controller, kp, model.time_constant(), F::zero())
}

/// Moros (1999), the Oppelt variant.
///
/// | Type | Kp             | Ti      | Td       |
/// |------|----------------|---------|----------|
/// | PI   | `0.8 / (K r)` | `3 θ`   |          |
/// | PID  | `1.2 / (K r)` | `2 θ`   | `0.42 θ` |
///
/// Requires `θ > 0`.
pub fn moros_oppelt<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 2] = [
        row(ControllerType::PI, 0.8, 3.0, 0.0),
        row(ControllerType::PID, 1.2, 2.0, 0.42),
    ];
    ratio_rule(MOROS_OPPELT, &TABLE, model, controller)
}

/// Moros (1999), the Rosenberg variant.
///
/// | Type | Kp             | Ti      | Td       |
/// |------|----------------|---------|----------|
/// | PI   | `0.91 / (K r)` | `3.3 θ` |          |
/// | PID  | `1.2 / (K r)` | `2 θ`   | `0.44 θ` |
///
/// Requires `θ > 0`.
pub fn moros_rosenberg<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 2] = [
        row(ControllerType::PI, 0.91, 3.3, 0.0),
        row(ControllerType::PID, 1.2, 2.0, 0.44),
    ];
    ratio_rule(MOROS_ROSENBERG, &TABLE, model, controller)
}

/// Shinskey (2000), PI only: `Kp = 0.667 / (K r)`, `Ti = 3.78 θ`.
pub fn shinskey<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 1] = [row(ControllerType::PI, 0.667, 3.78, 0.0)];
    ratio_rule(SHINSKEY, &TABLE, model, controller)
}

/// Liptak (2001).
///
/// | Type | Kp             | Ti      | Td       |
/// |------|----------------|---------|----------|
/// | PI   | `0.95 / (K r)` | `4 θ`   |          |
/// | PID  | `0.85 / (K r)` | `1.6 θ` | `0.6 θ` |
///
/// Requires `θ > 0`.
pub fn liptak<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 2] = [
        row(ControllerType::PI, 0.95, 4.0, 0.0),
        row(ControllerType::PID, 0.85, 1.6, 0.6),
    ];
    ratio_rule(LIPTAK, &TABLE, model, controller)
}

/// Chidambaram (2002).
///
/// | Type | Kp                      | Ti      | Td       |
/// |------|-------------------------|---------|----------|
/// | PI   | `(0.4 + 0.665 / r) / K` | `3.4 θ` |          |
/// | PID  | `(0.45 + 1.8 / r) / K`  | `2.4 θ` | `0.38 θ` |
pub fn chidambaram<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    let (offset, slope, b, c) = match controller {
        ControllerType::PI => (0.4, 0.665, 3.4, 0.0),
        ControllerType::PID => (0.45, 1.8, 2.4, 0.38),
        _ => return Err(TuningError::unsupported(CHIDAMBARAM, controller)),
    };
    let theta = model.require_dead_time()?;

    let kp =
        (constant::<F>(offset) + constant::<F>(slope) / model.dead_time_ratio()) / model.gain();
    ControllerGains::from_standard_form(
        controller,
        kp,
        constant::<F>(b) * theta,
        constant::<F>(c) * theta,
    )
}

/// Faanes and Skogestad (2004), PI only: `Kp = 0.71 / (K r)`, `Ti = 3.3 θ`.
pub fn faanes_skogestad<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 1] = [row(ControllerType::PI, 0.71, 3.3, 0.0)];
    ratio_rule(FAANES_SKOGESTAD, &TABLE, model, controller)
}

/// PMA (2006), PI only: `Kp = 0.39 / (K r)`, `Ti = 6 θ`.
pub fn pma<F: Float>(
    model: &ProcessModel<F>,
    controller: ControllerType,
) -> Result<ControllerGains<F>, TuningError> {
    const TABLE: [RatioRow; 1] = [row(ControllerType::PI, 0.39, 6.0, 0.0)];
    ratio_rule(PMA, &TABLE, model, controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_hits_table_points() {
        for (x, y) in HAZEBROEK_RATIOS.iter().zip(HAZEBROEK_X1.iter()) {
            assert_relative_eq!(
                interpolate(*x, &HAZEBROEK_RATIOS, &HAZEBROEK_X1),
                *y,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_interpolate_between_points() {
        // Midway between 2.0 and 2.2
        assert_relative_eq!(
            interpolate(2.1, &HAZEBROEK_RATIOS, &HAZEBROEK_X2),
            0.975,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_precision() {
        let model = ProcessModel::new(1.25f32, 4.0, 0.9).unwrap();
        let gains = ziegler_nichols(&model, ControllerType::PID).unwrap();
        assert_relative_eq!(gains.kp(), 4.266_666_7f32, epsilon = 1e-5);
    }
}
