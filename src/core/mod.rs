//! Core layer: account runtime, resource operators, services and the
//! guarded-mutation policy.

pub mod guard;
pub mod operators;
pub mod runtime;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
