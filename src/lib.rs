#![warn(missing_docs)]

//! # PID Tuning Rules Library
//!
//! This library provides closed-form PID (Proportional-Integral-Derivative) tuning rules for
//! processes approximated by a first-order lag plus delay (FOLPD) model.
//!
//! Every rule is a pure function: a validated [`ProcessModel`] and a [`ControllerType`] in,
//! [`ControllerGains`] out. There is no state, so rules may be called from any number of threads
//! at once.
//!
//! ## Features
//!
//! - Nineteen published rules from Callender (1935) to PMA (2006), each with the constants of
//!   every controller structure it defines. See [`rules`].
//! - Fully validated inputs:
//!   - Process models are checked on construction: finite non-zero gain, positive time constant,
//!     non-negative dead time.
//!   - Rules reject inputs outside their own algebraic domain (e.g. zero dead time where they
//!     divide by it) instead of returning infinities or NaNs.
//!   - Rules reject controller types they publish no constants for; nothing silently defaults.
//! - A name-addressable registry, [`TuningRule`], sharing one calling convention across rules.
//! - Generic over the float type via [`num_traits::Float`].
//!
//! ## Conventions
//!
//! Gains are returned in parallel form, `u = Kp e + Ki ∫e + Kd de/dt`. The integral and
//! derivative times used by most tuning tables are `Ti = Kp / Ki` and `Td = Kd / Kp`, available
//! through [`ControllerGains::integral_time`] and [`ControllerGains::derivative_time`]. Unused
//! terms are exactly zero.
//!
//! ## Usage
//!
//! ### Calling a rule directly
//!
//! ```rust
//! use pid_tuning::{rules, ControllerType, ProcessModel};
//!
//! let model = ProcessModel::new(1.25, 4.0, 0.9).expect("Invalid process model");
//! let gains = rules::ziegler_nichols(&model, ControllerType::P).unwrap();
//!
//! assert_eq!(gains.ki(), 0.0);
//! assert_eq!(gains.kd(), 0.0);
//! ```
//!
//! ### Comparing rules through the registry
//!
//! ```rust
//! use pid_tuning::{ControllerType, ProcessModelBuilder, TuningRule};
//!
//! let model = ProcessModelBuilder::default()
//!     .gain(1.0)
//!     .time_constant(10.0)
//!     .dead_time(3.0)
//!     .build()
//!     .expect("Invalid process model");
//!
//! for rule in TuningRule::ALL.iter().filter(|it| it.supports(ControllerType::PID)) {
//!     let gains = rule.evaluate(&model, ControllerType::PID).unwrap();
//!     println!("{:>28}: {:?}", rule.citation(), gains.gains());
//! }
//! ```
//!
//! ### Handling rejected inputs
//!
//! ```rust
//! use pid_tuning::{ControllerType, ProcessModel, TuningError, TuningRule};
//!
//! let model = ProcessModel::new(2.0, 5.0, 0.0).unwrap();
//! assert!(matches!(
//!     TuningRule::ZieglerNichols.evaluate(&model, ControllerType::PI),
//!     Err(TuningError::InvalidParameter { .. })
//! ));
//! assert!(matches!(
//!     TuningRule::Sakai.evaluate(&model, ControllerType::PID),
//!     Err(TuningError::UnsupportedControllerType { .. })
//! ));
//! ```
//!
//! ## Cargo features
//!
//! - `std` (default): implements `std::error::Error` for the error types.
//! - `tracing`: emits `tracing` events from [`TuningRule::evaluate`].
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// The controller type selector.
pub mod controller;

/// Error types for model validation and rule evaluation.
pub mod error;

/// The result record returned by every rule.
pub mod gains;

/// The validated process model and its builder.
pub mod model;

/// Name-addressable registry of all rules.
pub mod registry;

/// The tuning rules.
pub mod rules;

pub use controller::ControllerType;
pub use error::{ModelParameter, ParseControllerTypeError, ParseRuleError, TuningError};
pub use gains::ControllerGains;
pub use model::{ProcessModel, ProcessModelBuilder};
pub use registry::TuningRule;
pub use rules::CallenderCriterion;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
