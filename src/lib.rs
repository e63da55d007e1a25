//! Client core of the complexapp social-posting application.
//!
//! Everything interactive runs through the same pattern: a view owns a
//! [`runtime::Store`] that feeds discrete actions into a pure reducer, and
//! the reducer answers with [`runtime::Effect`]s: cancellable requests,
//! debounced triggers, follow-up actions. The rendering shell, routing and
//! HTTP transport are external collaborators reached via
//! [`environment::Environment`].

pub mod components;
pub mod environment;
pub mod runtime;

pub use environment::{Environment, Model, Repository};
pub use runtime::{Effect, Store};
