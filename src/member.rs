
use crate::{args::ApplyMethod, callback::Callback};
use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

// a bound call: a shared-owned receiver, the method selector, and the
// argument tuple frozen at bind time. holding the `Arc` here is what keeps
// the receiver alive for as long as the callback itself, even after the
// creator's own reference is gone.

pub(crate) struct MemberCallback<C, M, A> {
    recv: Arc<C>,
    method: M,
    args: A,
}

impl<C, M, A> MemberCallback<C, M, A> {
    pub(crate) fn new(recv: Arc<C>, method: M, args: A) -> Self {
        MemberCallback { recv, method, args }
    }
}

impl<C, M, A> Callback for MemberCallback<C, M, A>
where
    C: Send + Sync + 'static,
    M: ApplyMethod<C, A> + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    fn invoke(&self) {
        self.method.apply(&self.recv, self.args.clone());
    }
}

impl<C, M, A> Debug for MemberCallback<C, M, A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("MemberCallback")
    }
}
