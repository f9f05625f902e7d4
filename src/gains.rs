// Controller gains produced by the tuning rules
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

use crate::controller::ControllerType;
use crate::error::{ModelParameter, TuningError};

/// Recommended controller gains in the parallel (independent) form
///
/// ```text
///   u(t) = Kp e(t) + Ki ∫ e(τ) dτ + Kd de(t)/dt
/// ```
///
/// Units: `Kp` is the inverse of the process gain's unit, `Ki` is `Kp` per time unit and `Kd` is
/// `Kp` times time unit. Tables that publish integral and derivative *times* instead are available
/// through [`ControllerGains::integral_time`] and [`ControllerGains::derivative_time`].
///
/// The integral gain is exactly zero unless the controller type has an I term; the derivative gain
/// is exactly zero unless it has a D term.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControllerGains<F: Float> {
    kp: F,
    ki: F,
    kd: F,
    controller: ControllerType,
}

impl<F: Float> ControllerGains<F> {
    /// Builds gains from a proportional gain and the standard-form integral and derivative times.
    ///
    /// Terms that `controller` does not have are forced to zero regardless of the times given.
    /// Fails if the resulting gains are not finite, or if `kp` is zero.
    pub(crate) fn from_standard_form(
        controller: ControllerType,
        kp: F,
        integral_time: F,
        derivative_time: F,
    ) -> Result<Self, TuningError> {
        let ki = if controller.has_integral() {
            kp / integral_time
        } else {
            F::zero()
        };
        let kd = if controller.has_derivative() {
            kp * derivative_time
        } else {
            F::zero()
        };

        if !(kp.is_finite() && ki.is_finite() && kd.is_finite()) {
            return Err(TuningError::invalid(
                ModelParameter::ComputedGain,
                "rule produced a non-finite gain",
            ));
        }
        if kp.is_zero() {
            return Err(TuningError::invalid(
                ModelParameter::ComputedGain,
                "rule produced a zero proportional gain",
            ));
        }

        Ok(Self {
            kp,
            ki,
            kd,
            controller,
        })
    }

    /// Returns the proportional gain.
    pub fn kp(&self) -> F {
        self.kp
    }

    /// Returns the integral gain, zero if the controller has no I term.
    pub fn ki(&self) -> F {
        self.ki
    }

    /// Returns the derivative gain, zero if the controller has no D term.
    pub fn kd(&self) -> F {
        self.kd
    }

    /// Convenience method that returns the proportional, integral, and derivative gains together as
    /// a tuple.
    pub fn gains(&self) -> (F, F, F) {
        (self.kp, self.ki, self.kd)
    }

    /// Returns the controller type these gains were computed for.
    pub fn controller_type(&self) -> ControllerType {
        self.controller
    }

    /// Returns the integral time `Ti = Kp / Ki`, or `None` without an I term.
    pub fn integral_time(&self) -> Option<F> {
        self.controller.has_integral().then(|| self.kp / self.ki)
    }

    /// Returns the derivative time `Td = Kd / Kp`, or `None` without a D term.
    pub fn derivative_time(&self) -> Option<F> {
        self.controller.has_derivative().then(|| self.kd / self.kp)
    }
}
