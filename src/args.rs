
// arity surface
// -------------
//
// there are no variadic generics, so "zero or more bound arguments" is a
// tuple, and application is a trait keyed by the tuple type. each callable
// implements exactly one `Fn` arity, so the tuple type (and with it the
// variant to build) resolves statically at the bind site. the callable's
// return value is dropped at the call site.

/// A callable that can be applied to a bound argument tuple.
///
/// Implemented for `Fn` values of arity 0 through 8; the tuple type selects
/// the arity. The call's result is discarded.
pub trait ApplyArgs<A> {
    fn apply(&self, args: A);
}

/// A method selector that can be applied to a receiver plus a bound
/// argument tuple.
///
/// Implemented for `Fn(&C, ...)` values of argument arity 0 through 8,
/// which is the shape `C::method` coerces to for a `&self` method. The
/// call's result is discarded.
pub trait ApplyMethod<C, A> {
    fn apply(&self, recv: &C, args: A);
}

macro_rules! impl_apply {
    ($($a:ident),*) => {
        #[allow(non_snake_case)]
        impl<Func, Ret, $($a,)*> ApplyArgs<($($a,)*)> for Func
        where
            Func: Fn($($a),*) -> Ret,
        {
            fn apply(&self, ($($a,)*): ($($a,)*)) {
                self($($a),*);
            }
        }

        #[allow(non_snake_case)]
        impl<Recv, Func, Ret, $($a,)*> ApplyMethod<Recv, ($($a,)*)> for Func
        where
            Func: Fn(&Recv, $($a),*) -> Ret,
        {
            fn apply(&self, recv: &Recv, ($($a,)*): ($($a,)*)) {
                self(recv, $($a),*);
            }
        }
    };
}

impl_apply!();
impl_apply!(A1);
impl_apply!(A1, A2);
impl_apply!(A1, A2, A3);
impl_apply!(A1, A2, A3, A4);
impl_apply!(A1, A2, A3, A4, A5);
impl_apply!(A1, A2, A3, A4, A5, A6);
impl_apply!(A1, A2, A3, A4, A5, A6, A7);
impl_apply!(A1, A2, A3, A4, A5, A6, A7, A8);
