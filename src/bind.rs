
use crate::{
    args::{ApplyArgs, ApplyMethod},
    callback::CallbackHandle,
    free::FnCallback,
    member::MemberCallback,
};
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Error from the checked construction entry point.
#[derive(Debug, Error)]
pub enum BindError {
    /// The `Weak` receiver no longer pointed at a live object at bind time.
    #[error("receiver was already dropped at bind time")]
    ReceiverDropped,
}

/// Bind a free function or closure together with its argument values.
///
/// `args` is a tuple of up to eight values, cloned back out on every
/// invocation; pass `()` to bind a callable that takes no arguments. The
/// callable's return value is discarded when the callback runs.
///
/// Operations that used to be written as methods but never touch a live
/// receiver belong here too, expressed as ordinary functions.
///
/// ```
/// use callback_bind::{bind, Callback};
///
/// fn add(a: u32, b: u32) -> u32 { a + b }
///
/// let cb = bind(add, (2, 3));
/// cb.invoke();
/// ```
pub fn bind<F, A>(f: F, args: A) -> CallbackHandle
where
    F: ApplyArgs<A> + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    Arc::new(FnCallback::new(f, args))
}

/// Bind a method to a shared receiver together with its argument values.
///
/// `method` is any callable of shape `Fn(&C, ...)`, which is what
/// `C::method` coerces to for a `&self` method. The callback retains the
/// receiver, so the call stays valid even after every other reference to
/// the receiver is released. As with [`bind`], `args` is a tuple (possibly
/// `()`) replayed on every invocation and any result is discarded.
///
/// ```
/// use callback_bind::{bind_method, Callback};
/// use std::sync::Arc;
///
/// struct Greeter(&'static str);
///
/// impl Greeter {
///     fn greet(&self, name: String) {
///         println!("{} {}", self.0, name);
///     }
/// }
///
/// let greeter = Arc::new(Greeter("hello"));
/// let cb = bind_method(greeter, Greeter::greet, ("world".to_string(),));
/// cb.invoke();
/// ```
pub fn bind_method<C, M, A>(recv: Arc<C>, method: M, args: A) -> CallbackHandle
where
    C: Send + Sync + 'static,
    M: ApplyMethod<C, A> + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    Arc::new(MemberCallback::new(recv, method, args))
}

/// Like [`bind_method`], but from a `Weak` receiver that may already be
/// gone.
///
/// Fails at bind time with [`BindError::ReceiverDropped`] if the receiver
/// is no longer alive, rather than deferring the failure to some later
/// invocation. On success the returned callback holds a strong reference,
/// so the receiver cannot disappear between binding and invoking.
pub fn try_bind_method<C, M, A>(
    recv: Weak<C>,
    method: M,
    args: A,
) -> Result<CallbackHandle, BindError>
where
    C: Send + Sync + 'static,
    M: ApplyMethod<C, A> + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    let recv = recv.upgrade().ok_or(BindError::ReceiverDropped)?;
    Ok(bind_method(recv, method, args))
}
