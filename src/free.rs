
use crate::{args::ApplyArgs, callback::Callback};
use std::fmt::{self, Debug, Formatter};

// a free call: the callable plus the argument tuple frozen at bind time.
// invoking clones the tuple and applies the callable to the copies, so
// every invocation replays identical values. the zero-argument shape is
// the same struct with `A = ()`.

pub(crate) struct FnCallback<F, A> {
    f: F,
    args: A,
}

impl<F, A> FnCallback<F, A> {
    pub(crate) fn new(f: F, args: A) -> Self {
        FnCallback { f, args }
    }
}

impl<F, A> Callback for FnCallback<F, A>
where
    F: ApplyArgs<A> + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    fn invoke(&self) {
        self.f.apply(self.args.clone());
    }
}

impl<F, A> Debug for FnCallback<F, A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("FnCallback")
    }
}
