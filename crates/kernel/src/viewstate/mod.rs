//! View-state persistence protocol.
//!
//! Stateful UI trees survive a stateless round-trip in three phases:
//! - `begin_tracking` once the declarative setup is done, so later changes
//!   are recorded
//! - `capture_state` before the response is written
//! - `restore_state` after the next request is read, before setup runs
//!
//! Snapshots are opaque to the hosting framework; [`Codec`] turns them into
//! a transport-safe token.

mod bag;
pub mod codec;
mod error;
mod snapshot;

pub use bag::StateBag;
pub use codec::Codec;
pub use error::{StateError, StateResult};
pub use snapshot::Snapshot;

/// A node that takes part in the view-state protocol.
///
/// Nodes are lightweight handles into an arena `A`, so every phase receives
/// the arena explicitly.
pub trait ViewState<A: ?Sized> {
    /// Start recording modifications on this node and everything below it.
    fn begin_tracking(self, arena: &mut A);

    /// Whether `begin_tracking` has been called on this node.
    fn is_tracking(self, arena: &A) -> bool;

    /// Capture the recorded modifications, or `None` when there is nothing
    /// worth persisting.
    fn capture_state(self, arena: &A) -> Option<Snapshot>;

    /// Replay a snapshot produced by `capture_state` on a structurally
    /// identical node. `None` leaves the node untouched.
    fn restore_state(self, arena: &mut A, snapshot: Option<&Snapshot>) -> StateResult<()>;
}
