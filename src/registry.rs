// Name-addressable registry of all tuning rules
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

use num_traits::Float;

use crate::controller::ControllerType;
use crate::error::{ParseRuleError, TuningError};
use crate::gains::ControllerGains;
use crate::model::ProcessModel;
use crate::rules::{self, CallenderCriterion};

/// Every tuning rule in the crate, addressable by name.
///
/// The set is fixed at compile time. Each variant dispatches to the function of the same name in
/// [`crate::rules`]; rule-specific options, such as Callender's tuning criterion, travel with the
/// variant so that every rule shares the `evaluate(model, controller)` calling convention.
///
/// ```rust
/// use pid_tuning::{ControllerType, ProcessModel, TuningRule};
///
/// let model = ProcessModel::new(1.0, 10.0, 3.0).unwrap();
/// let rule: TuningRule = "cohen_coon".parse().unwrap();
/// let gains = rule.evaluate(&model, ControllerType::PI).unwrap();
/// assert!(gains.kp() > 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TuningRule {
    /// See [`rules::callender`].
    Callender(CallenderCriterion),
    /// See [`rules::ziegler_nichols`].
    ZieglerNichols,
    /// See [`rules::hazebroek_van_der_waerden`].
    HazebroekVanDerWaerden,
    /// See [`rules::oppelt`].
    Oppelt,
    /// See [`rules::cohen_coon`].
    CohenCoon,
    /// See [`rules::fertik_sharpe`].
    FertikSharpe,
    /// See [`rules::parr`].
    Parr,
    /// See [`rules::sakai`].
    Sakai,
    /// See [`rules::borresen_grindal`].
    BorresenGrindal,
    /// See [`rules::klein`].
    Klein,
    /// See [`rules::mcmillan`].
    McMillan,
    /// See [`rules::st_clair`].
    StClair,
    /// See [`rules::moros_oppelt`].
    MorosOppelt,
    /// See [`rules::moros_rosenberg`].
    MorosRosenberg,
    /// See [`rules::shinskey`].
    Shinskey,
    /// See [`rules::liptak`].
    Liptak,
    /// See [`rules::chidambaram`].
    Chidambaram,
    /// See [`rules::faanes_skogestad`].
    FaanesSkogestad,
    /// See [`rules::pma`].
    Pma,
}

const PI_ONLY: &[ControllerType] = &[ControllerType::PI];
const PI_PID: &[ControllerType] = &[ControllerType::PI, ControllerType::PID];
const P_PI_PID: &[ControllerType] = &[ControllerType::P, ControllerType::PI, ControllerType::PID];

impl TuningRule {
    /// All registered rules, in order of publication.
    pub const ALL: [TuningRule; 20] = [
        TuningRule::Callender(CallenderCriterion::DecayRatio015),
        TuningRule::Callender(CallenderCriterion::DecayRatio043),
        TuningRule::ZieglerNichols,
        TuningRule::HazebroekVanDerWaerden,
        TuningRule::Oppelt,
        TuningRule::CohenCoon,
        TuningRule::FertikSharpe,
        TuningRule::Parr,
        TuningRule::Sakai,
        TuningRule::BorresenGrindal,
        TuningRule::Klein,
        TuningRule::McMillan,
        TuningRule::StClair,
        TuningRule::MorosOppelt,
        TuningRule::MorosRosenberg,
        TuningRule::Shinskey,
        TuningRule::Liptak,
        TuningRule::Chidambaram,
        TuningRule::FaanesSkogestad,
        TuningRule::Pma,
    ];

    /// The registry key of the rule, e.g. `"ziegler_nichols"`.
    pub fn name(&self) -> &'static str {
        match self {
            TuningRule::Callender(criterion) => criterion.key(),
            TuningRule::ZieglerNichols => rules::ZIEGLER_NICHOLS,
            TuningRule::HazebroekVanDerWaerden => rules::HAZEBROEK_VAN_DER_WAERDEN,
            TuningRule::Oppelt => rules::OPPELT,
            TuningRule::CohenCoon => rules::COHEN_COON,
            TuningRule::FertikSharpe => rules::FERTIK_SHARPE,
            TuningRule::Parr => rules::PARR,
            TuningRule::Sakai => rules::SAKAI,
            TuningRule::BorresenGrindal => rules::BORRESEN_GRINDAL,
            TuningRule::Klein => rules::KLEIN,
            TuningRule::McMillan => rules::MCMILLAN,
            TuningRule::StClair => rules::ST_CLAIR,
            TuningRule::MorosOppelt => rules::MOROS_OPPELT,
            TuningRule::MorosRosenberg => rules::MOROS_ROSENBERG,
            TuningRule::Shinskey => rules::SHINSKEY,
            TuningRule::Liptak => rules::LIPTAK,
            TuningRule::Chidambaram => rules::CHIDAMBARAM,
            TuningRule::FaanesSkogestad => rules::FAANES_SKOGESTAD,
            TuningRule::Pma => rules::PMA,
        }
    }

    /// Authors and year of publication.
    pub fn citation(&self) -> &'static str {
        match self {
            TuningRule::Callender(_) => "Callender, Hartree and Porter (1935/6)",
            TuningRule::ZieglerNichols => "Ziegler and Nichols (1942)",
            TuningRule::HazebroekVanDerWaerden => "Hazebroek and Van der Waerden (1950)",
            TuningRule::Oppelt => "Oppelt (1951)",
            TuningRule::CohenCoon => "Cohen and Coon (1953)",
            TuningRule::FertikSharpe => "Fertik and Sharpe (1979)",
            TuningRule::Parr => "Parr (1989)",
            TuningRule::Sakai => "Sakai et al. (1989)",
            TuningRule::BorresenGrindal => "Borresen and Grindal (1990)",
            TuningRule::Klein => "Klein et al. (1992)",
            TuningRule::McMillan => "McMillan (1994)",
            TuningRule::StClair => "St. Clair (1997)",
            TuningRule::MorosOppelt => "Moros (1999), Oppelt variant",
            TuningRule::MorosRosenberg => "Moros (1999), Rosenberg variant",
            TuningRule::Shinskey => "Shinskey (2000)",
            TuningRule::Liptak => "Liptak (2001)",
            TuningRule::Chidambaram => "Chidambaram (2002)",
            TuningRule::FaanesSkogestad => "Faanes and Skogestad (2004)",
            TuningRule::Pma => "PMA (2006)",
        }
    }

    /// The controller types the rule publishes constants for.
    pub fn supported_controllers(&self) -> &'static [ControllerType] {
        match self {
            TuningRule::Callender(CallenderCriterion::DecayRatio015) => PI_ONLY,
            TuningRule::Callender(CallenderCriterion::DecayRatio043) => PI_PID,
            TuningRule::ZieglerNichols | TuningRule::CohenCoon => P_PI_PID,
            TuningRule::Parr
            | TuningRule::BorresenGrindal
            | TuningRule::MorosOppelt
            | TuningRule::MorosRosenberg
            | TuningRule::Liptak
            | TuningRule::Chidambaram => PI_PID,
            TuningRule::HazebroekVanDerWaerden
            | TuningRule::Oppelt
            | TuningRule::FertikSharpe
            | TuningRule::Sakai
            | TuningRule::Klein
            | TuningRule::McMillan
            | TuningRule::StClair
            | TuningRule::Shinskey
            | TuningRule::FaanesSkogestad
            | TuningRule::Pma => PI_ONLY,
        }
    }

    /// Whether the rule publishes constants for `controller`.
    pub fn supports(&self, controller: ControllerType) -> bool {
        self.supported_controllers().contains(&controller)
    }

    /// Whether the rule can be evaluated with zero dead time.
    pub fn accepts_zero_dead_time(&self) -> bool {
        matches!(self, TuningRule::FertikSharpe | TuningRule::Klein)
    }

    /// Evaluates the rule for the given process model and controller type.
    pub fn evaluate<F: Float>(
        &self,
        model: &ProcessModel<F>,
        controller: ControllerType,
    ) -> Result<ControllerGains<F>, TuningError> {
        let result = match *self {
            TuningRule::Callender(criterion) => rules::callender(model, controller, criterion),
            TuningRule::ZieglerNichols => rules::ziegler_nichols(model, controller),
            TuningRule::HazebroekVanDerWaerden => {
                rules::hazebroek_van_der_waerden(model, controller)
            }
            TuningRule::Oppelt => rules::oppelt(model, controller),
            TuningRule::CohenCoon => rules::cohen_coon(model, controller),
            TuningRule::FertikSharpe => rules::fertik_sharpe(model, controller),
            TuningRule::Parr => rules::parr(model, controller),
            TuningRule::Sakai => rules::sakai(model, controller),
            TuningRule::BorresenGrindal => rules::borresen_grindal(model, controller),
            TuningRule::Klein => rules::klein(model, controller),
            TuningRule::McMillan => rules::mcmillan(model, controller),
            TuningRule::StClair => rules::st_clair(model, controller),
            TuningRule::MorosOppelt => rules::moros_oppelt(model, controller),
            TuningRule::MorosRosenberg => rules::moros_rosenberg(model, controller),
            TuningRule::Shinskey => rules::shinskey(model, controller),
            TuningRule::Liptak => rules::liptak(model, controller),
            TuningRule::Chidambaram => rules::chidambaram(model, controller),
            TuningRule::FaanesSkogestad => rules::faanes_skogestad(model, controller),
            TuningRule::Pma => rules::pma(model, controller),
        };

        #[cfg(feature = "tracing")]
        match &result {
            Ok(gains) => tracing::trace!(
                rule = self.name(),
                controller = controller.as_str(),
                kp = gains.kp().to_f64(),
                ki = gains.ki().to_f64(),
                kd = gains.kd().to_f64(),
                "tuning rule evaluated"
            ),
            Err(e) => tracing::debug!(
                rule = self.name(),
                controller = controller.as_str(),
                error = %e,
                "tuning rule rejected its inputs"
            ),
        }

        result
    }
}

impl fmt::Display for TuningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TuningRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TuningRule::ALL
            .iter()
            .copied()
            .find(|it| it.name() == s)
            .ok_or(ParseRuleError)
    }
}
