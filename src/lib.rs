//! Cache-replacement policy engines and the driver that scores them against a trace.
//!
//! This crate implements the policy half of a trace-driven cache simulator: five
//! replacement/admission families — [`LruPolicy`], [`BeladyPolicy`] (offline optimal),
//! [`ArcPolicy`] (adaptive replacement), [`LarcPolicy`] (admission filter), and N-Hit in
//! its two eviction flavors ([`NHitLruPolicy`], [`NHitLowestPolicy`]) — behind a single
//! [`Policy`] sum type, plus a [`Driver`] that feeds a policy from an ordered request
//! sequence and accumulates [`Stats`].
//!
//! ## Modules
//!
//! - [`request`]: the `Request`/`Op` wire-level types the driver consumes.
//! - [`stats`]: the nine-counter `Stats` record and its derived ratios.
//! - [`policy`]: the policy contract, the six concrete engines, and the `Policy` enum.
//! - [`driver`]: the sequential loop that drives a policy and produces `Stats`.
//! - [`error`]: policy-construction error types.
//!
//! ## Example
//!
//! ```
//! use cachesim_core::policy::{Policy, LruPolicy};
//! use cachesim_core::driver::Driver;
//! use cachesim_core::request::{Request, Op};
//!
//! let policy = Policy::Lru(LruPolicy::new(2).unwrap());
//! let trace = vec![
//!     Request::new(0.0, 1, Op::Read),
//!     Request::new(1.0, 2, Op::Read),
//!     Request::new(2.0, 1, Op::Read),
//! ];
//! let stats = Driver::new(policy).run(trace.iter());
//! assert_eq!(stats.total_hit, 1);
//! ```

/// The `Request`/`Op` types the driver consumes, one per trace row.
pub mod request;

/// Policy-construction error types.
pub mod error;

/// The nine-counter `Stats` record and its derived ratios.
pub mod stats;

/// The common policy contract, the six concrete engines, and the `Policy` sum type.
pub mod policy;

/// The sequential loop that drives a policy across a trace and produces `Stats`.
pub mod driver;

pub use driver::Driver;
pub use error::PolicyError;
pub use policy::{
    ArcPolicy, BeladyPolicy, LarcPolicy, LruPolicy, NHitLowestPolicy, NHitLruPolicy, Outcome,
    Policy,
};
pub use request::{Op, Request};
pub use stats::Stats;
