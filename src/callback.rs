
use std::{fmt::Debug, sync::Arc};

/// A stored, deferred unit of work, invoked through one uniform operation
/// regardless of the call shape it was bound from.
///
/// Constructed only through [`bind`][crate::bind],
/// [`bind_method`][crate::bind_method], or
/// [`try_bind_method`][crate::try_bind_method]; the concrete wrapper behind
/// the handle is never exposed. `Debug` output names the wrapper, which is
/// how a holder can tell a free-call handle from a bound-call one.
pub trait Callback: Debug + Send + Sync + 'static {
    /// Run the wrapped call with the argument values bound at construction.
    ///
    /// Takes no further input and returns nothing; whatever the underlying
    /// call produces is discarded. Runs synchronously on the calling thread.
    /// A panic raised by the wrapped call propagates to the caller
    /// unmodified.
    fn invoke(&self);
}

/// Shared handle through which callbacks are held and invoked.
///
/// Cloning the handle shares the same bound state; the callback (and any
/// receiver it keeps alive) is dropped when the last handle goes.
pub type CallbackHandle = Arc<dyn Callback>;
