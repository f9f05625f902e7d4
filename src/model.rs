// Validated first-order-lag-plus-delay process model
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

use num_traits::Float;

use crate::error::{ModelParameter, TuningError};

/// Parameters of a first-order-lag-plus-delay (FOLPD) approximation of a plant,
///
/// ```text
///            K e^(-θs)
///   G(s) = ───────────
///            τ s + 1
/// ```
///
/// A `ProcessModel` can only be obtained through [`ProcessModel::new`] or
/// [`ProcessModelBuilder`], so every instance satisfies:
/// - the static gain `K` is finite and non-zero; its sign is the process' own;
/// - the time constant `τ` is finite and strictly positive;
/// - the dead time `θ` is finite and non-negative.
///
/// Rules that divide by the dead time additionally reject `θ = 0` when evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProcessModel<F: Float> {
    gain: F,
    time_constant: F,
    dead_time: F,
}

fn check_gain<F: Float>(gain: F) -> Result<F, TuningError> {
    if !gain.is_finite() {
        return Err(TuningError::invalid(ModelParameter::Gain, "must be finite"));
    }
    if gain.is_zero() {
        return Err(TuningError::invalid(ModelParameter::Gain, "must be non-zero"));
    }
    Ok(gain)
}

fn check_time_constant<F: Float>(time_constant: F) -> Result<F, TuningError> {
    if !time_constant.is_finite() || time_constant <= F::zero() {
        return Err(TuningError::invalid(
            ModelParameter::TimeConstant,
            "must be finite and greater than zero",
        ));
    }
    Ok(time_constant)
}

fn check_dead_time<F: Float>(dead_time: F) -> Result<F, TuningError> {
    if !dead_time.is_finite() || dead_time < F::zero() {
        return Err(TuningError::invalid(
            ModelParameter::DeadTime,
            "must be finite and non-negative",
        ));
    }
    Ok(dead_time)
}

impl<F: Float> ProcessModel<F> {
    /// Creates a validated process model.
    ///
    /// # Arguments
    /// - `gain`: Static gain `K` of the process reaction curve.
    /// - `time_constant`: Time constant (lag) `τ`, in the caller's time unit.
    /// - `dead_time`: Dead time `θ`, in the same time unit as `time_constant`.
    ///
    /// # Returns
    /// - `Ok(ProcessModel)` if all parameters are valid.
    /// - `Err(TuningError::InvalidParameter)` naming the first invalid parameter.
    pub fn new(gain: F, time_constant: F, dead_time: F) -> Result<Self, TuningError> {
        Ok(Self {
            gain: check_gain(gain)?,
            time_constant: check_time_constant(time_constant)?,
            dead_time: check_dead_time(dead_time)?,
        })
    }

    /// Returns the static gain `K`.
    pub fn gain(&self) -> F {
        self.gain
    }

    /// Returns the time constant `τ`.
    pub fn time_constant(&self) -> F {
        self.time_constant
    }

    /// Returns the dead time `θ`.
    pub fn dead_time(&self) -> F {
        self.dead_time
    }

    /// Returns the dead time ratio `θ / τ`, the quantity most FOLPD correlations are written in.
    pub fn dead_time_ratio(&self) -> F {
        self.dead_time / self.time_constant
    }

    /// Returns the dead time, or an error if it is zero.
    ///
    /// Used by rules whose formulas divide by `θ`.
    pub(crate) fn require_dead_time(&self) -> Result<F, TuningError> {
        if self.dead_time.is_zero() {
            return Err(TuningError::invalid(
                ModelParameter::DeadTime,
                "must be greater than zero for this rule",
            ));
        }
        Ok(self.dead_time)
    }

    /// Sets the static gain. On failure the model is left unchanged.
    pub fn set_gain(&mut self, gain: F) -> Result<(), TuningError> {
        self.gain = check_gain(gain)?;
        Ok(())
    }

    /// Sets the time constant. On failure the model is left unchanged.
    pub fn set_time_constant(&mut self, time_constant: F) -> Result<(), TuningError> {
        self.time_constant = check_time_constant(time_constant)?;
        Ok(())
    }

    /// Sets the dead time. On failure the model is left unchanged.
    pub fn set_dead_time(&mut self, dead_time: F) -> Result<(), TuningError> {
        self.dead_time = check_dead_time(dead_time)?;
        Ok(())
    }
}

/// Builder for [`ProcessModel`].
///
/// Unset parameters default to a unit gain, a unit time constant and no dead time. Validation is
/// deferred to [`ProcessModelBuilder::build`].
///
/// ```rust
/// use pid_tuning::model::ProcessModelBuilder;
///
/// let model = ProcessModelBuilder::default()
///     .gain(1.25)
///     .time_constant(4.0)
///     .dead_time(0.9)
///     .build()
///     .expect("Invalid process model");
/// assert_eq!(model.dead_time(), 0.9);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ProcessModelBuilder<F: Float> {
    gain: F,
    time_constant: F,
    dead_time: F,
}

impl<F: Float> Default for ProcessModelBuilder<F> {
    fn default() -> Self {
        Self {
            gain: F::one(),
            time_constant: F::one(),
            dead_time: F::zero(),
        }
    }
}

impl<F: Float> ProcessModelBuilder<F> {
    /// Sets the static gain `K`.
    pub fn gain(mut self, gain: F) -> Self {
        self.gain = gain;
        self
    }

    /// Sets the time constant `τ`.
    pub fn time_constant(mut self, time_constant: F) -> Self {
        self.time_constant = time_constant;
        self
    }

    /// Sets the dead time `θ`.
    pub fn dead_time(mut self, dead_time: F) -> Self {
        self.dead_time = dead_time;
        self
    }

    /// Validates the parameters and builds the model.
    pub fn build(self) -> Result<ProcessModel<F>, TuningError> {
        ProcessModel::new(self.gain, self.time_constant, self.dead_time)
    }
}
