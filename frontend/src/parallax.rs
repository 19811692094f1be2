//! Scroll-linked parallax for the hero visual.

pub mod driver;
pub mod frames;
pub mod listeners;
pub mod metrics;

use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_mount;

use driver::{ElementProbe, ParallaxDriver};
use frames::AnimationFrames;
use listeners::ListenerScope;
use metrics::{MountPhase, ParallaxState, ViewportMetrics};

const TRIGGER_EVENTS: [&str; 2] = ["scroll", "resize"];

type HeroDriver = ParallaxDriver<AnimationFrames, ElementProbe>;

/// Everything acquired for one mounted element. Dropping it releases all of it.
struct ParallaxBinding {
    listeners: Option<ListenerScope>,
    driver: Rc<HeroDriver>,
}

impl ParallaxBinding {
    fn attach(target: &NodeRef, on_metrics: Callback<ViewportMetrics>) -> Option<Self> {
        let Some(element) = target.cast::<Element>() else {
            debug!("Parallax target not rendered, skipping listeners");
            return None;
        };
        let window = web_sys::window()?;

        let driver = Rc::new(ParallaxDriver::new(
            AnimationFrames,
            ElementProbe::new(window.clone(), element),
            on_metrics,
        ));
        driver.request();

        let listeners = {
            let driver = Rc::clone(&driver);
            ListenerScope::attach(&window, &TRIGGER_EVENTS, move || driver.request())
        };
        debug!("Parallax listening for {:?}", listeners.events());

        Some(Self {
            listeners: Some(listeners),
            driver,
        })
    }
}

impl Drop for ParallaxBinding {
    fn drop(&mut self) {
        self.listeners.take();
        self.driver.teardown();
        debug!("Parallax listeners released");
    }
}

/// Tracks `target` while the calling component is mounted and returns its
/// current parallax state.
#[hook]
pub fn use_parallax(target: NodeRef) -> ParallaxState {
    let metrics = use_state(|| None::<ViewportMetrics>);
    let phase = use_state(MountPhase::default);

    {
        let phase = phase.clone();
        use_mount(move || {
            let mut next = *phase;
            if next.mount() {
                phase.set(next);
            }
        });
    }

    {
        let setter = metrics.setter();
        use_effect_with_deps(
            move |target: &NodeRef| {
                let on_metrics = Callback::from(move |m: ViewportMetrics| setter.set(Some(m)));
                let binding = ParallaxBinding::attach(target, on_metrics);
                move || drop(binding)
            },
            target,
        );
    }

    match *metrics {
        Some(m) => m.state(phase.is_mounted()),
        None => ParallaxState::resting(phase.is_mounted()),
    }
}
