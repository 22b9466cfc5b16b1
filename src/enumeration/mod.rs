//! Enumeration core: element store, right Cayley graph and the closure
//! engine that grows them.

pub mod cayley;
pub mod config;
pub mod engine;
pub mod store;

pub use cayley::CayleyGraph;
pub use config::{Budget, EnumerationConfig};
pub use engine::{EnumerationState, Enumerator, Progress, StepReport};
pub use store::ElementStore;

#[cfg(test)]
mod tests;
