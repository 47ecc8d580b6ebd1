//! Supporting utilities used by models.
//!
//! These modules are public because they are useful to callers building model
//! inputs, but their APIs are not stable.

pub mod constraint;
