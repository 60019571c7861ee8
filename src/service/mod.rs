//! Business logic layer

pub mod notifier;

pub use notifier::Notifier;
