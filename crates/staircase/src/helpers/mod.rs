//! Utilities for exercising sessions without a human listener.
//!
//! [`SimulatedListener`] answers trials according to a logistic
//! psychometric function, which makes it possible to check that a staircase
//! converges where it should and to demo a full session.

mod simulated;

pub use simulated::SimulatedListener;
