#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Sentinel Traffic Simulator
//!
//! Synthetic network-traffic environment for the Sentinel intrusion
//! detection loop.
//!
//! The crate owns the shared data model and the environment that scores
//! decisions against it:
//!
//! -   **Data model:** [`State`] carries the four traffic features,
//!     [`Action`] the four mitigations in increasing severity, and
//!     [`CloudProvider`] the provider a sample is attributed to.
//! -   **Environment:** [`IdsEnv`] implements the [`Env`] trait. Each
//!     [`Env::step`] rewards the action against the current state and
//!     samples a fresh state and provider for the next call. The simulation
//!     never terminates on its own.
//! -   **Errors:** [`SimError`] covers every way a caller can hand in a bad
//!     parameter.
//!
//! ```rust
//! use sim::{Action, Env, IdsEnv};
//!
//! let mut env = IdsEnv::new(42);
//! let state = env.reset();
//! let outcome = env.step(Action::Allow);
//! assert!(!outcome.terminal);
//! # let _ = state;
//! ```

pub mod env;
pub mod error;
pub mod ids_env;
pub mod types;

pub use env::Env;
pub use error::SimError;
pub use ids_env::{is_attack, reward_for, IdsEnv, ATTACK_THRESHOLD};
pub use types::{Action, CloudProvider, Severity, State, StepInfo, StepOutcome};
