use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use web_sys::{Element, Window};
use yew::Callback;

use super::frames::{FrameCoalescer, FrameScheduler};
use super::metrics::ViewportMetrics;
use crate::config;

/// Source of fresh viewport measurements.
pub trait ViewportProbe {
    fn read(&self) -> Option<ViewportMetrics>;
}

/// Measures one element against the browser window.
pub struct ElementProbe {
    window: Window,
    element: Element,
}

impl ElementProbe {
    pub fn new(window: Window, element: Element) -> Self {
        Self { window, element }
    }
}

impl ViewportProbe for ElementProbe {
    fn read(&self) -> Option<ViewportMetrics> {
        let rect = self.element.get_bounding_client_rect();
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|h| *h > 0.0)
            .unwrap_or(config::FALLBACK_VIEWPORT_HEIGHT);
        let viewport_width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|w| *w > 0.0)
            .unwrap_or(config::FALLBACK_VIEWPORT_WIDTH);

        Some(ViewportMetrics {
            viewport_height,
            viewport_width,
            element_top: rect.top(),
            element_height: rect.height(),
        })
    }
}

/// Turns scroll/resize notifications into at most one measurement per frame.
///
/// Once torn down (or dropped) the driver ignores further notifications and any
/// frame that was still pending is cancelled.
pub struct ParallaxDriver<S: FrameScheduler, P> {
    probe: Rc<P>,
    frames: FrameCoalescer<S>,
    on_metrics: Callback<ViewportMetrics>,
    active: Rc<Cell<bool>>,
}

impl<S, P> ParallaxDriver<S, P>
where
    S: FrameScheduler,
    P: ViewportProbe + 'static,
{
    pub fn new(scheduler: S, probe: P, on_metrics: Callback<ViewportMetrics>) -> Self {
        Self {
            probe: Rc::new(probe),
            frames: FrameCoalescer::new(scheduler),
            on_metrics,
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Schedules a recomputation for the next frame, superseding any pending one.
    pub fn request(&self) {
        if !self.is_active() {
            return;
        }
        let probe = Rc::clone(&self.probe);
        let active = Rc::clone(&self.active);
        let on_metrics = self.on_metrics.clone();
        self.frames.request(move || {
            if !active.get() {
                return;
            }
            if let Some(metrics) = probe.read() {
                on_metrics.emit(metrics);
            }
        });
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn teardown(&self) {
        if self.frames.is_pending() {
            debug!("Cancelling pending parallax frame");
        }
        self.active.set(false);
        self.frames.cancel();
    }
}

impl<S: FrameScheduler, P> Drop for ParallaxDriver<S, P> {
    fn drop(&mut self) {
        self.active.set(false);
        self.frames.cancel();
    }
}
