#![doc = include_str!("../README.md")]

#[cfg(test)]
mod test;

mod args;
mod bind;
mod callback;
mod free;
mod member;

pub use self::{
    args::{ApplyArgs, ApplyMethod},
    bind::{bind, bind_method, try_bind_method, BindError},
    callback::{Callback, CallbackHandle},
};
