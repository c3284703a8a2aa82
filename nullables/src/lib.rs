//! Deterministic test doubles for the bridge's external collaborators.
//!
//! The gateway and the clock are the two things the protocol cannot control
//! in production. Behind their seams, these implementations return
//! programmable values, record every call, and never touch a network or a
//! system clock — swap them in wherever a test needs determinism.

pub mod clock;
pub mod gateway;

pub use clock::NullClock;
pub use gateway::{NullGateway, RecordedRequest};
