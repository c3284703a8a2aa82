//! Token-side bridging protocol.
//!
//! WEFT moves between chains without a custodial wrapper: a holder burns
//! tokens on the source chain and the bridge gateway delivers a message that
//! mints the same amount on the destination chain. Conservation of value
//! holds only in aggregate across all chains — never per chain.
//!
//! The two halves of a bridge operation:
//! - **Request** (source side): enablement check, lazy gateway-address
//!   refresh, burn, outbound message. Burn and message submission are atomic
//!   as a unit; nothing else ever is across chains.
//! - **Process** (destination side): caller-identity gate, mint, optional
//!   relay-fee settlement. The identity gate is the only barrier between an
//!   arbitrary caller and unconstrained minting.
//!
//! The engine never reads a clock and never retries: callers pass `now`,
//! all failures surface synchronously, and recovery from a lost downstream
//! delivery is a gateway-level concern.

pub mod cell;
pub mod custody;
pub mod delivery;
pub mod engine;
pub mod error;
pub mod events;
pub mod fees;
pub mod request;
pub mod state;

pub use cell::GatewayCell;
pub use delivery::BridgeDelivery;
pub use engine::{BridgeEngine, FeeQuote};
pub use error::BridgeError;
pub use events::BridgeEvent;
pub use fees::FeeError;
pub use request::BridgeRequest;
pub use state::BridgeState;
