use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use futures::{
    channel::oneshot,
    future::{FutureExt, LocalBoxFuture},
};
use gloo::{
    events::EventListener,
    render::{AnimationFrame, request_animation_frame},
    timers::future::TimeoutFuture,
};
use web_sys::HtmlImageElement;

use crate::{effects::loader::ImageOutcome, foundation::core::Millis, schedule::Scheduler};

/// Browser timers and `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WebScheduler;

impl Scheduler for WebScheduler {
    fn sleep(&self, delay: Millis) -> impl Future<Output = ()> {
        TimeoutFuture::new(delay.0)
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        NextFrame::new()
    }
}

/// Resolves on the next animation frame. Dropping it cancels the request.
pub(crate) struct NextFrame {
    rx: oneshot::Receiver<f64>,
    _handle: AnimationFrame,
}

impl NextFrame {
    fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        let handle = request_animation_frame(move |timestamp| {
            let _ = tx.send(timestamp);
        });
        Self {
            rx,
            _handle: handle,
        }
    }
}

impl Future for NextFrame {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.rx.poll_unpin(cx).map(|_| ())
    }
}

type SharedSender = Rc<RefCell<Option<oneshot::Sender<ImageOutcome>>>>;

fn settle(tx: &SharedSender, outcome: ImageOutcome) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

/// Completion signal for one tracked image: immediate when already decoded,
/// otherwise the first of `load` or `error`.
pub(crate) fn image_signal(img: &HtmlImageElement) -> LocalBoxFuture<'static, ImageOutcome> {
    if img.complete() {
        return futures::future::ready(ImageOutcome::AlreadyComplete).boxed_local();
    }

    let (tx, rx) = oneshot::channel();
    let tx: SharedSender = Rc::new(RefCell::new(Some(tx)));
    let on_load = {
        let tx = tx.clone();
        EventListener::once(img, "load", move |_| settle(&tx, ImageOutcome::Loaded))
    };
    let on_error = EventListener::once(img, "error", move |_| settle(&tx, ImageOutcome::Failed));

    async move {
        let _listeners = (on_load, on_error);
        rx.await.unwrap_or(ImageOutcome::Failed)
    }
    .boxed_local()
}
