//! Pure parallax math. Everything here is independent of the DOM so it can be
//! exercised natively.

use crate::config;

/// Snapshot of the viewport and the tracked element, read at event time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    pub viewport_height: f64,
    pub viewport_width: f64,
    /// Distance from the top of the viewport to the element's top edge.
    pub element_top: f64,
    pub element_height: f64,
}

impl ViewportMetrics {
    /// How far the element has travelled through the viewport, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let span = self.viewport_height + self.element_height;
        if span <= 0.0 {
            return 0.0;
        }
        let raw = (self.viewport_height - self.element_top) / span;
        if !raw.is_finite() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    pub fn intensity(&self) -> f64 {
        intensity_for_width(self.viewport_width)
    }

    /// Signed displacement in pixels, symmetric around zero.
    pub fn offset(&self) -> f64 {
        (self.progress() - 0.5) * self.intensity()
    }

    pub fn state(&self, is_mounted: bool) -> ParallaxState {
        ParallaxState {
            progress: self.progress(),
            offset_pixels: self.offset(),
            is_mounted,
        }
    }
}

pub fn intensity_for_width(viewport_width: f64) -> f64 {
    if viewport_width <= config::COMPACT_BREAKPOINT {
        config::COMPACT_INTENSITY
    } else {
        config::WIDE_INTENSITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxState {
    pub progress: f64,
    pub offset_pixels: f64,
    pub is_mounted: bool,
}

impl ParallaxState {
    /// State before the first measurement lands: centred, no displacement.
    pub fn resting(is_mounted: bool) -> Self {
        ParallaxState {
            progress: 0.5,
            offset_pixels: 0.0,
            is_mounted,
        }
    }

    pub fn applied(&self) -> AppliedStyle {
        AppliedStyle::for_offset(self.offset_pixels, MountPhase::from_mounted(self.is_mounted))
    }
}

/// Entrance state of the hero visual. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountPhase {
    #[default]
    Entering,
    Mounted,
}

impl MountPhase {
    fn from_mounted(is_mounted: bool) -> Self {
        if is_mounted {
            MountPhase::Mounted
        } else {
            MountPhase::Entering
        }
    }

    pub fn is_mounted(self) -> bool {
        self == MountPhase::Mounted
    }

    /// Returns true only for the call that performs the transition.
    pub fn mount(&mut self) -> bool {
        match self {
            MountPhase::Entering => {
                *self = MountPhase::Mounted;
                true
            }
            MountPhase::Mounted => false,
        }
    }
}

/// Visual properties written to the hero element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

impl AppliedStyle {
    pub fn for_offset(offset: f64, phase: MountPhase) -> Self {
        match phase {
            MountPhase::Entering => AppliedStyle {
                translate_y: offset + config::ENTRANCE_OFFSET,
                opacity: 0.0,
            },
            MountPhase::Mounted => AppliedStyle {
                translate_y: offset,
                opacity: 1.0,
            },
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: translate3d(0, {}px, 0); opacity: {}; transition: opacity 800ms ease, transform 900ms ease;",
            self.translate_y, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(top: f64) -> ViewportMetrics {
        ViewportMetrics {
            viewport_height: 800.0,
            viewport_width: 1440.0,
            element_top: top,
            element_height: 500.0,
        }
    }

    #[test]
    fn element_above_viewport_is_fully_progressed() {
        for top in [-500.0, -501.0, -5_000.0] {
            let m = metrics(top);
            assert_eq!(m.progress(), 1.0);
            assert_eq!(m.offset(), 9.0);
        }
    }

    #[test]
    fn element_below_viewport_has_no_progress() {
        for top in [800.0, 801.0, 10_000.0] {
            let m = metrics(top);
            assert_eq!(m.progress(), 0.0);
            assert_eq!(m.offset(), -9.0);
        }
    }

    #[test]
    fn progress_never_drops_while_scrolling_up() {
        let mut last = 0.0;
        let mut top = 1_200.0;
        while top > -1_200.0 {
            let p = metrics(top).progress();
            assert!(p >= last, "progress fell from {last} to {p} at top={top}");
            last = p;
            top -= 7.5;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn midpoint_has_zero_offset() {
        // (800 - 150) / 1300 = 0.5
        let m = metrics(150.0);
        assert!((m.progress() - 0.5).abs() < 1e-12);
        assert!(m.offset().abs() < 1e-12);
    }

    #[test]
    fn breakpoint_width_uses_compact_intensity() {
        assert_eq!(intensity_for_width(320.0), 10.0);
        assert_eq!(intensity_for_width(768.0), 10.0);
        assert_eq!(intensity_for_width(768.5), 18.0);
        assert_eq!(intensity_for_width(1920.0), 18.0);

        let compact = ViewportMetrics { viewport_width: 768.0, ..metrics(-1_000.0) };
        assert_eq!(compact.offset(), 5.0);
    }

    #[test]
    fn degenerate_span_yields_zero_progress() {
        let m = ViewportMetrics {
            viewport_height: 0.0,
            viewport_width: 1024.0,
            element_top: 0.0,
            element_height: 0.0,
        };
        assert_eq!(m.progress(), 0.0);

        let nan = ViewportMetrics { element_top: f64::NAN, ..metrics(0.0) };
        assert_eq!(nan.progress(), 0.0);
    }

    #[test]
    fn entering_style_is_displaced_and_hidden() {
        let state = metrics(-1_000.0).state(false);
        assert_eq!(state.applied(), AppliedStyle { translate_y: 19.0, opacity: 0.0 });

        let state = metrics(-1_000.0).state(true);
        assert_eq!(state.applied(), AppliedStyle { translate_y: 9.0, opacity: 1.0 });
    }

    #[test]
    fn resting_state_only_carries_entrance_displacement() {
        let entering = ParallaxState::resting(false).applied();
        assert_eq!(entering, AppliedStyle { translate_y: 10.0, opacity: 0.0 });
        let mounted = ParallaxState::resting(true).applied();
        assert_eq!(mounted, AppliedStyle { translate_y: 0.0, opacity: 1.0 });
    }

    #[test]
    fn mount_transition_fires_once() {
        let mut phase = MountPhase::default();
        assert!(!phase.is_mounted());
        assert!(phase.mount());
        assert!(phase.is_mounted());
        for _ in 0..5 {
            assert!(!phase.mount());
            assert!(phase.is_mounted());
        }
    }

    #[test]
    fn css_carries_transform_and_opacity() {
        let css = AppliedStyle::for_offset(-4.5, MountPhase::Mounted).to_css();
        assert!(css.contains("translate3d(0, -4.5px, 0)"));
        assert!(css.contains("opacity: 1;"));
    }
}
