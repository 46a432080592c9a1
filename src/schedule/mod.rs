//! Timers and frame callbacks.
//!
//! Every suspension point in the effects goes through [`Scheduler`]: fixed-delay
//! timers and "next rendered frame". The browser implementation lives in
//! `crate::web`; [`VirtualClock`](virtual_clock::VirtualClock) is a deterministic stand-in that advances time
//! only when every pending future is waiting on it.

use std::future::Future;

use crate::foundation::core::Millis;

pub(crate) mod frame;
pub(crate) mod virtual_clock;

pub trait Scheduler {
    /// Completes once `delay` has elapsed.
    fn sleep(&self, delay: Millis) -> impl Future<Output = ()>;

    /// Completes at the next paint opportunity.
    fn next_frame(&self) -> impl Future<Output = ()>;
}

impl<S: Scheduler> Scheduler for std::rc::Rc<S> {
    fn sleep(&self, delay: Millis) -> impl Future<Output = ()> {
        (**self).sleep(delay)
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        (**self).next_frame()
    }
}
