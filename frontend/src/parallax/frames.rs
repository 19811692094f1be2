//! Frame-aligned coalescing of recomputation work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::AnimationFrame;

/// Schedules a one-shot task for the next rendering frame.
///
/// Dropping the returned handle before the frame fires must cancel the task.
pub trait FrameScheduler {
    type Handle;

    fn schedule(&self, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `requestAnimationFrame` on the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn schedule(&self, task: Box<dyn FnOnce()>) -> AnimationFrame {
        gloo_render::request_animation_frame(move |_timestamp| task())
    }
}

/// Keeps at most one task in flight. A new request supersedes the pending one.
pub struct FrameCoalescer<S: FrameScheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<S: FrameScheduler> FrameCoalescer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn request<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the old handle cancels it before the replacement is queued.
        self.pending.borrow_mut().take();

        let armed = Rc::clone(&self.armed);
        armed.set(true);
        let handle = self.scheduler.schedule(Box::new(move || {
            armed.set(false);
            task();
        }));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        self.armed.set(false);
        self.pending.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualFrames;
    use super::*;

    #[test]
    fn burst_within_one_frame_runs_once() {
        let frames = ManualFrames::default();
        let coalescer = FrameCoalescer::new(frames.clone());
        let runs = Rc::new(Cell::new(0));

        for _ in 0..100 {
            let runs = Rc::clone(&runs);
            coalescer.request(move || runs.set(runs.get() + 1));
        }
        assert!(coalescer.is_pending());
        assert_eq!(frames.live(), 1);

        assert_eq!(frames.run_frame(), 1);
        assert_eq!(runs.get(), 1);
        assert!(!coalescer.is_pending());
    }

    #[test]
    fn latest_request_wins() {
        let frames = ManualFrames::default();
        let coalescer = FrameCoalescer::new(frames.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        for value in 1..=3 {
            let seen = Rc::clone(&seen);
            coalescer.request(move || seen.borrow_mut().push(value));
        }
        frames.run_frame();
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn each_frame_gets_its_own_run() {
        let frames = ManualFrames::default();
        let coalescer = FrameCoalescer::new(frames.clone());
        let runs = Rc::new(Cell::new(0));

        for _ in 0..3 {
            for _ in 0..10 {
                let runs = Rc::clone(&runs);
                coalescer.request(move || runs.set(runs.get() + 1));
            }
            frames.run_frame();
        }
        assert_eq!(runs.get(), 3);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let frames = ManualFrames::default();
        let coalescer = FrameCoalescer::new(frames.clone());
        let runs = Rc::new(Cell::new(0));

        {
            let runs = Rc::clone(&runs);
            coalescer.request(move || runs.set(runs.get() + 1));
        }
        coalescer.cancel();
        assert!(!coalescer.is_pending());
        assert_eq!(frames.run_frame(), 0);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn dropping_coalescer_cancels() {
        let frames = ManualFrames::default();
        let runs = Rc::new(Cell::new(0));
        {
            let coalescer = FrameCoalescer::new(frames.clone());
            let runs = Rc::clone(&runs);
            coalescer.request(move || runs.set(runs.get() + 1));
        }
        assert_eq!(frames.run_frame(), 0);
        assert_eq!(runs.get(), 0);
    }
}
