// Defines the controller type selector shared by all tuning rules
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
use core::str::FromStr;

use crate::error::ParseControllerTypeError;

/// The structure of the controller being tuned.
///
/// Tuning rules publish a separate set of constants per controller type; the selector picks
/// which set applies and which terms of the result are meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControllerType {
    /// Proportional-only.
    P,
    /// Proportional-Integral.
    PI,
    /// Proportional-Derivative. Accepted as a selector, though none of the FOLPD rules in this
    /// crate define constants for it.
    PD,
    /// Proportional-Integral-Derivative.
    PID,
}

impl ControllerType {
    /// Every controller type, from the simplest structure to the richest.
    pub const ALL: [ControllerType; 4] = [
        ControllerType::P,
        ControllerType::PI,
        ControllerType::PD,
        ControllerType::PID,
    ];

    /// Whether the controller has an integral term.
    pub fn has_integral(&self) -> bool {
        matches!(self, ControllerType::PI | ControllerType::PID)
    }

    /// Whether the controller has a derivative term.
    pub fn has_derivative(&self) -> bool {
        matches!(self, ControllerType::PD | ControllerType::PID)
    }

    /// The conventional abbreviation, e.g. `"PID"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerType::P => "P",
            ControllerType::PI => "PI",
            ControllerType::PD => "PD",
            ControllerType::PID => "PID",
        }
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerType {
    type Err = ParseControllerTypeError;

    /// Parses the exact abbreviations `"P"`, `"PI"`, `"PD"` and `"PID"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControllerType::ALL
            .iter()
            .copied()
            .find(|it| it.as_str() == s)
            .ok_or(ParseControllerTypeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_follow_structure() {
        assert!(!ControllerType::P.has_integral());
        assert!(!ControllerType::P.has_derivative());
        assert!(ControllerType::PI.has_integral());
        assert!(!ControllerType::PI.has_derivative());
        assert!(!ControllerType::PD.has_integral());
        assert!(ControllerType::PD.has_derivative());
        assert!(ControllerType::PID.has_integral());
        assert!(ControllerType::PID.has_derivative());
    }

    #[test]
    fn test_parse_is_exact() {
        for it in ControllerType::ALL {
            assert_eq!(it.as_str().parse::<ControllerType>(), Ok(it));
        }
        for it in ["", "pid", "PIDF", " PI", "I"] {
            assert_eq!(it.parse::<ControllerType>(), Err(ParseControllerTypeError));
        }
    }
}
