use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, Waker},
};

use crate::{foundation::core::Millis, schedule::Scheduler};

#[derive(Debug)]
struct ClockState {
    now: Millis,
    frame_interval: Millis,
    timers: Vec<(Millis, Waker)>,
}

/// Discrete-event clock for driving effect futures without a browser.
///
/// Time only moves inside [`VirtualClock::run`]: when the driven future is
/// pending, the clock jumps to the earliest registered deadline and wakes every
/// timer that became due. A future that waits on something other than this
/// clock (for example `futures::future::pending`) simply never completes.
#[derive(Clone, Debug)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualClock {
    /// Roughly one 60 Hz frame.
    pub const DEFAULT_FRAME_INTERVAL: Millis = Millis(16);

    pub fn new() -> Self {
        Self::with_frame_interval(Self::DEFAULT_FRAME_INTERVAL)
    }

    pub fn with_frame_interval(frame_interval: Millis) -> Self {
        Self {
            state: Rc::new(RefCell::new(ClockState {
                now: Millis::ZERO,
                frame_interval,
                timers: Vec::new(),
            })),
        }
    }

    pub fn now(&self) -> Millis {
        self.state.borrow().now
    }

    pub fn sleep_until(&self, deadline: Millis) -> VirtualSleep {
        VirtualSleep {
            clock: self.clone(),
            deadline,
        }
    }

    /// Drives `fut` to completion, advancing virtual time as needed.
    ///
    /// Returns `None` if the future stalls with no timer left to fire.
    pub fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let mut fut = std::pin::pin!(fut);
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return Some(out);
            }
            if !self.advance() {
                tracing::trace!(now = %self.now(), "virtual clock stalled");
                return None;
            }
        }
    }

    fn advance(&self) -> bool {
        let due = {
            let mut st = self.state.borrow_mut();
            let now = st.now;
            let Some(next) = st
                .timers
                .iter()
                .map(|(deadline, _)| *deadline)
                .filter(|deadline| *deadline > now)
                .min()
            else {
                st.timers.clear();
                return false;
            };
            st.now = next;
            let (due, waiting): (Vec<_>, Vec<_>) =
                st.timers.drain(..).partition(|(deadline, _)| *deadline <= next);
            st.timers = waiting;
            due
        };
        for (_, waker) in due {
            waker.wake();
        }
        true
    }
}

impl Scheduler for VirtualClock {
    fn sleep(&self, delay: Millis) -> impl Future<Output = ()> {
        self.sleep_until(self.now().saturating_add(delay))
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        let interval = self.state.borrow().frame_interval;
        self.sleep_until(self.now().saturating_add(interval))
    }
}

/// Timer future returned by [`VirtualClock`].
#[derive(Debug)]
pub struct VirtualSleep {
    clock: VirtualClock,
    deadline: Millis,
}

impl Future for VirtualSleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut st = self.clock.state.borrow_mut();
        if st.now >= self.deadline {
            return Poll::Ready(());
        }
        st.timers.push((self.deadline, cx.waker().clone()));
        Poll::Pending
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/virtual_clock.rs"]
mod tests;
