//! Domain types

pub mod email;

pub use email::{EmailAddress, Envelope, SendReceipt};
