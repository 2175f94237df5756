// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scroll synchronization engine.
//!
//! Mirrors scroll position between two independently scrollable regions by
//! proportion of their scrollable ranges, never by absolute offset. A shared
//! reentrancy flag drops any scroll event that arrives while a programmatic
//! mirror write is still pending; the flag is cleared at the next draw
//! boundary, the event loop's only deferred primitive.

/// A scroll snapshot in the `scrollTop`/`scrollHeight`/`clientHeight` shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// The scrollable range; zero for a region whose content fits.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Fractional position in [0, 1], or `None` when the region has no
    /// scroll range and synchronization must be skipped.
    pub fn fraction(&self) -> Option<f64> {
        let range = self.scroll_height - self.client_height;
        if range <= 0.0 {
            return None;
        }
        Some((self.scroll_top / range).clamp(0.0, 1.0))
    }
}

/// A scrollable surface the engine can read and drive.
///
/// Some surfaces wrap their true scrolling viewport in a non-scrolling outer
/// container; `inner`/`inner_mut` expose that designated nested container so
/// resolution can operate on it instead.
pub trait ScrollRegion {
    fn metrics(&self) -> ScrollMetrics;
    fn set_scroll_top(&mut self, scroll_top: f64);

    fn inner(&self) -> Option<&dyn ScrollRegion> {
        None
    }

    fn inner_mut(&mut self) -> Option<&mut dyn ScrollRegion> {
        None
    }
}

/// Metrics of the actual scrollable element: the region itself when it has a
/// scroll range, otherwise its designated inner container (recursively).
pub fn resolved_metrics(region: &dyn ScrollRegion) -> ScrollMetrics {
    let metrics = region.metrics();
    if metrics.max_scroll() > 0.0 {
        return metrics;
    }
    match region.inner() {
        Some(inner) => resolved_metrics(inner),
        None => metrics,
    }
}

fn apply_fraction(region: &mut dyn ScrollRegion, fraction: f64) {
    let metrics = region.metrics();
    if metrics.max_scroll() > 0.0 {
        region.set_scroll_top(fraction * metrics.max_scroll());
        return;
    }
    if let Some(inner) = region.inner_mut() {
        apply_fraction(inner, fraction);
    }
}

/// The pairing state: an enablement switch plus the shared reentrancy flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollSync {
    enabled: bool,
    suppressed: bool,
}

impl ScrollSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            suppressed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Attaches or detaches the pairing. Idempotent; detaching also drops a
    /// pending suppression so a later re-attach starts clean.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.suppressed = false;
        }
    }

    /// Handles a scroll event on `source` by mirroring the fractional
    /// position onto `target`.
    ///
    /// Returns `true` when a mirror write happened. Events are dropped (not
    /// queued) while the pairing is disabled or the reentrancy flag is set,
    /// and skipped when the source has no scroll range.
    pub fn on_scroll(&mut self, source: &dyn ScrollRegion, target: &mut dyn ScrollRegion) -> bool {
        if !self.enabled || self.suppressed {
            return false;
        }
        let Some(fraction) = resolved_metrics(source).fraction() else {
            return false;
        };
        self.suppressed = true;
        apply_fraction(target, fraction);
        true
    }

    /// Clears the reentrancy flag; called once per draw, after rendering.
    pub fn end_frame(&mut self) {
        self.suppressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{resolved_metrics, ScrollMetrics, ScrollRegion, ScrollSync};

    struct FakeRegion {
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
        inner: Option<Box<FakeRegion>>,
    }

    impl FakeRegion {
        fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
            Self {
                scroll_top,
                scroll_height,
                client_height,
                inner: None,
            }
        }

        fn wrapping(inner: FakeRegion, client_height: f64) -> Self {
            Self {
                scroll_top: 0.0,
                scroll_height: client_height,
                client_height,
                inner: Some(Box::new(inner)),
            }
        }
    }

    impl ScrollRegion for FakeRegion {
        fn metrics(&self) -> ScrollMetrics {
            ScrollMetrics::new(self.scroll_top, self.scroll_height, self.client_height)
        }

        fn set_scroll_top(&mut self, scroll_top: f64) {
            self.scroll_top = scroll_top;
        }

        fn inner(&self) -> Option<&dyn ScrollRegion> {
            self.inner.as_deref().map(|inner| inner as &dyn ScrollRegion)
        }

        fn inner_mut(&mut self) -> Option<&mut dyn ScrollRegion> {
            self.inner
                .as_deref_mut()
                .map(|inner| inner as &mut dyn ScrollRegion)
        }
    }

    #[test]
    fn mirrors_by_proportion_not_absolute_offset() {
        // A: range 100, at 50%. B: range 300 → must land at 150, not 50.
        let a = FakeRegion::new(50.0, 140.0, 40.0);
        let mut b = FakeRegion::new(0.0, 340.0, 40.0);
        let mut sync = ScrollSync::new(true);

        assert!(sync.on_scroll(&a, &mut b));
        assert_eq!(b.scroll_top, 150.0);
    }

    #[test]
    fn equal_ranges_mirror_to_the_same_offset() {
        let a = FakeRegion::new(30.0, 140.0, 40.0);
        let mut b = FakeRegion::new(0.0, 140.0, 40.0);
        let mut sync = ScrollSync::new(true);

        sync.on_scroll(&a, &mut b);
        assert_eq!(b.scroll_top, 30.0);
    }

    #[test]
    fn mirror_write_suppresses_the_echo_until_the_next_frame() {
        let mut a = FakeRegion::new(50.0, 140.0, 40.0);
        let mut b = FakeRegion::new(0.0, 340.0, 40.0);
        let mut sync = ScrollSync::new(true);

        assert!(sync.on_scroll(&a, &mut b));
        // the echo event from the programmatic write must be dropped
        assert!(!sync.on_scroll(&b, &mut a));
        assert_eq!(a.scroll_top, 50.0);

        sync.end_frame();
        assert!(sync.on_scroll(&b, &mut a));
    }

    #[test]
    fn unscrollable_source_skips_synchronization() {
        let a = FakeRegion::new(0.0, 40.0, 40.0);
        let mut b = FakeRegion::new(77.0, 340.0, 40.0);
        let mut sync = ScrollSync::new(true);

        assert!(!sync.on_scroll(&a, &mut b));
        assert_eq!(b.scroll_top, 77.0);
    }

    #[test]
    fn unscrollable_target_is_left_alone() {
        let a = FakeRegion::new(50.0, 140.0, 40.0);
        let mut b = FakeRegion::new(0.0, 40.0, 40.0);
        let mut sync = ScrollSync::new(true);

        assert!(sync.on_scroll(&a, &mut b));
        assert_eq!(b.scroll_top, 0.0);
    }

    #[test]
    fn disabled_pairing_drops_events() {
        let a = FakeRegion::new(50.0, 140.0, 40.0);
        let mut b = FakeRegion::new(0.0, 340.0, 40.0);
        let mut sync = ScrollSync::new(false);

        assert!(!sync.on_scroll(&a, &mut b));
        assert_eq!(b.scroll_top, 0.0);
    }

    #[test]
    fn set_enabled_is_idempotent_and_clears_suppression_on_detach() {
        let a = FakeRegion::new(50.0, 140.0, 40.0);
        let mut b = FakeRegion::new(0.0, 340.0, 40.0);
        let mut sync = ScrollSync::new(true);

        sync.on_scroll(&a, &mut b);
        sync.set_enabled(false);
        sync.set_enabled(false);
        sync.set_enabled(true);
        // fresh attach starts without a stale reentrancy flag
        assert!(sync.on_scroll(&a, &mut b));
    }

    #[test]
    fn resolution_reaches_the_nested_scroll_container() {
        // outer container does not scroll; the true viewport is nested
        let a = FakeRegion::wrapping(FakeRegion::new(25.0, 140.0, 40.0), 40.0);
        let mut b = FakeRegion::wrapping(FakeRegion::new(0.0, 340.0, 40.0), 40.0);
        let mut sync = ScrollSync::new(true);

        assert!(sync.on_scroll(&a, &mut b));
        let inner = b.inner.as_ref().expect("nested region");
        assert_eq!(inner.scroll_top, 75.0);
    }

    #[test]
    fn resolved_metrics_prefers_a_scrollable_outer_region() {
        let region = FakeRegion::new(10.0, 140.0, 40.0);
        assert_eq!(resolved_metrics(&region).scroll_top, 10.0);
    }

    #[test]
    fn fraction_clamps_overshoot() {
        let metrics = ScrollMetrics::new(500.0, 140.0, 40.0);
        assert_eq!(metrics.fraction(), Some(1.0));
    }

    #[test]
    fn fraction_is_none_without_a_range() {
        assert_eq!(ScrollMetrics::new(0.0, 40.0, 40.0).fraction(), None);
        assert_eq!(ScrollMetrics::new(0.0, 20.0, 40.0).fraction(), None);
    }
}
