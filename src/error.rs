// Error types reported by process model validation and the tuning rules
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

use core::fmt;

use crate::controller::ControllerType;

/// Names the process model parameter (or derived quantity) that failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelParameter {
    /// Static gain `K` of the process.
    Gain,
    /// Time constant (lag) `tau` of the process.
    TimeConstant,
    /// Dead time `theta` of the process.
    DeadTime,
    /// The ratio `theta / tau`, restricted by some correlations.
    DeadTimeRatio,
    /// A gain produced by the rule itself, e.g. when the formula degenerates to zero.
    ComputedGain,
}

impl ModelParameter {
    /// Short human-readable name of the parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelParameter::Gain => "gain",
            ModelParameter::TimeConstant => "time constant",
            ModelParameter::DeadTime => "dead time",
            ModelParameter::DeadTimeRatio => "dead time ratio",
            ModelParameter::ComputedGain => "computed gain",
        }
    }
}

impl fmt::Display for ModelParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building a process model or evaluating a tuning rule.
///
/// Every failure happens before any gain is returned; there is no partial result.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[non_exhaustive]
pub enum TuningError {
    /// A numeric input lies outside the algebraic domain of the model or rule.
    #[cfg_attr(feature = "std", error("invalid {parameter}: {reason}"))]
    InvalidParameter {
        /// The offending parameter.
        parameter: ModelParameter,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// The rule defines no constants for the requested controller type.
    #[cfg_attr(
        feature = "std",
        error("tuning rule `{rule}` does not support {controller} controllers")
    )]
    UnsupportedControllerType {
        /// Registry key of the rule.
        rule: &'static str,
        /// The rejected controller type.
        controller: ControllerType,
    },
}

impl TuningError {
    pub(crate) fn invalid(parameter: ModelParameter, reason: &'static str) -> Self {
        TuningError::InvalidParameter { parameter, reason }
    }

    pub(crate) fn unsupported(rule: &'static str, controller: ControllerType) -> Self {
        TuningError::UnsupportedControllerType { rule, controller }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::InvalidParameter { parameter, reason } => {
                write!(f, "invalid {}: {}", parameter, reason)
            }
            TuningError::UnsupportedControllerType { rule, controller } => write!(
                f,
                "tuning rule `{}` does not support {} controllers",
                rule, controller
            ),
        }
    }
}

/// Returned when a string is not one of `"P"`, `"PI"`, `"PD"` or `"PID"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "std", error("unknown controller type, expected one of P, PI, PD, PID"))]
pub struct ParseControllerTypeError;

#[cfg(not(feature = "std"))]
impl fmt::Display for ParseControllerTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown controller type, expected one of P, PI, PD, PID")
    }
}

/// Returned when a string does not name a registered tuning rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "std", error("unknown tuning rule"))]
pub struct ParseRuleError;

#[cfg(not(feature = "std"))]
impl fmt::Display for ParseRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown tuning rule")
    }
}
