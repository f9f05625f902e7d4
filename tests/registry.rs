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

mod fixtures;
use fixtures::test_tuning;

use pid_tuning::error::{ModelParameter, TuningError};
use pid_tuning::model::ProcessModel;
use pid_tuning::registry::TuningRule;
use pid_tuning::rules::{self, CallenderCriterion};
use pid_tuning::ControllerType;

mod test_registry_contract {
    use super::test_tuning::{make_reference_plant, make_undelayed_plant};
    use super::*;

    #[test]
    fn test_every_supported_type_yields_gains() {
        let model = make_reference_plant();
        for rule in TuningRule::ALL {
            for controller in rule.supported_controllers() {
                let gains = rule.evaluate(&model, *controller).unwrap();

                assert_ne!(gains.kp(), 0.0, "{} {}", rule, controller);
                assert_eq!(gains.controller_type(), *controller);
                if !controller.has_integral() {
                    assert_eq!(gains.ki(), 0.0, "{} {}", rule, controller);
                }
                if !controller.has_derivative() {
                    assert_eq!(gains.kd(), 0.0, "{} {}", rule, controller);
                }
            }
        }
    }

    #[test]
    fn test_every_unsupported_type_is_rejected() {
        let model = make_reference_plant();
        for rule in TuningRule::ALL {
            for controller in ControllerType::ALL {
                if rule.supports(controller) {
                    continue;
                }
                assert_eq!(
                    rule.evaluate(&model, controller),
                    Err(TuningError::UnsupportedControllerType {
                        rule: rule.name(),
                        controller
                    })
                );
            }
        }
    }

    #[test]
    fn test_zero_dead_time_is_rejected_where_divided_by() {
        let model = make_undelayed_plant();
        for rule in TuningRule::ALL {
            for controller in rule.supported_controllers() {
                let result = rule.evaluate(&model, *controller);
                if rule.accepts_zero_dead_time() {
                    assert!(result.is_ok(), "{}", rule);
                } else {
                    assert!(
                        matches!(
                            result,
                            Err(TuningError::InvalidParameter {
                                parameter: ModelParameter::DeadTime,
                                ..
                            })
                        ),
                        "{}",
                        rule
                    );
                }
            }
        }
    }

    #[test]
    fn test_dispatch_matches_rule_functions() {
        let model = make_reference_plant();
        assert_eq!(
            TuningRule::ZieglerNichols.evaluate(&model, ControllerType::PID),
            rules::ziegler_nichols(&model, ControllerType::PID)
        );
        assert_eq!(
            TuningRule::Callender(CallenderCriterion::DecayRatio043)
                .evaluate(&model, ControllerType::PID),
            rules::callender(&model, ControllerType::PID, CallenderCriterion::DecayRatio043)
        );
        assert_eq!(
            "hazebroek_van_der_waerden"
                .parse::<TuningRule>()
                .unwrap()
                .evaluate(&model, ControllerType::PI),
            rules::hazebroek_van_der_waerden(&model, ControllerType::PI)
        );
    }

    #[test]
    fn test_registry_is_chronological_and_cited() {
        assert_eq!(TuningRule::ALL[0].name(), "callender");
        assert_eq!(TuningRule::ALL[TuningRule::ALL.len() - 1], TuningRule::Pma);
        assert!(TuningRule::ALL.iter().all(|it| !it.citation().is_empty()));
    }

    #[test]
    fn test_error_messages() {
        let model = make_undelayed_plant();
        let err = TuningRule::Sakai
            .evaluate(&model, ControllerType::P)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "tuning rule `sakai` does not support P controllers"
        );

        let err = TuningRule::Sakai
            .evaluate(&model, ControllerType::PI)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dead time: must be greater than zero for this rule"
        );
    }
}

mod test_registry_properties {
    use super::*;
    use proptest::prelude::*;

    fn plant() -> impl Strategy<Value = ProcessModel<f64>> {
        (0.1f64..10.0, any::<bool>(), 0.5f64..50.0, 0.1f64..20.0).prop_map(
            |(gain, negative, time_constant, dead_time)| {
                let gain = if negative { -gain } else { gain };
                ProcessModel::new(gain, time_constant, dead_time).unwrap()
            },
        )
    }

    /// Rules whose correlation only covers part of the dead time ratio range
    fn has_ratio_domain(rule: TuningRule) -> bool {
        matches!(rule, TuningRule::HazebroekVanDerWaerden | TuningRule::Oppelt)
    }

    proptest! {
        #[test]
        fn unused_terms_are_exactly_zero(model in plant()) {
            for rule in TuningRule::ALL {
                for controller in rule.supported_controllers() {
                    match rule.evaluate(&model, *controller) {
                        Ok(gains) => {
                            prop_assert!(gains.kp() != 0.0 && gains.kp().is_finite());
                            prop_assert!(gains.ki().is_finite() && gains.kd().is_finite());
                            if !controller.has_integral() {
                                prop_assert_eq!(gains.ki(), 0.0);
                            }
                            if !controller.has_derivative() {
                                prop_assert_eq!(gains.kd(), 0.0);
                            }
                        }
                        Err(TuningError::InvalidParameter { parameter, .. }) => {
                            prop_assert!(has_ratio_domain(rule));
                            prop_assert!(matches!(
                                parameter,
                                ModelParameter::DeadTimeRatio | ModelParameter::ComputedGain
                            ));
                        }
                        Err(e) => prop_assert!(false, "{} {}: {}", rule, controller, e),
                    }
                }
            }
        }

        #[test]
        fn evaluation_is_deterministic(model in plant()) {
            for rule in TuningRule::ALL {
                for controller in ControllerType::ALL {
                    let first = rule.evaluate(&model, controller);
                    let second = rule.evaluate(&model, controller);
                    match (first, second) {
                        (Ok(a), Ok(b)) => {
                            prop_assert_eq!(a.kp().to_bits(), b.kp().to_bits());
                            prop_assert_eq!(a.ki().to_bits(), b.ki().to_bits());
                            prop_assert_eq!(a.kd().to_bits(), b.kd().to_bits());
                        }
                        (a, b) => prop_assert_eq!(a, b),
                    }
                }
            }
        }

        #[test]
        fn proportional_gain_follows_process_gain_sign(model in plant()) {
            // Rules that only scale 1 / K, and stay positive in τ and θ
            for rule in [TuningRule::ZieglerNichols, TuningRule::CohenCoon, TuningRule::Klein] {
                let gains = rule.evaluate(&model, ControllerType::PI).unwrap();
                prop_assert_eq!(gains.kp().signum(), model.gain().signum());
                prop_assert!(gains.integral_time().unwrap() > 0.0);
            }
        }
    }
}
