// Committed vs pending slide index. The carousel animates towards `pending`;
// `committed` only catches up once that animation has finished.

use crate::config::ViewerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Prev,
    Next,
}

impl Navigation {
    fn delta(self) -> i64 {
        match self {
            Navigation::Prev => -1,
            Navigation::Next => 1,
        }
    }
}

/// Decide where a released swipe goes. Dragging right reveals the previous slide.
pub fn classify_swipe(dx: f64, dt: f64, threshold: f64, cfg: &ViewerConfig) -> Option<Navigation> {
    let is_flick = dt < cfg.flick_max_ms && dx.abs() > cfg.flick_min_px;
    if dx >= threshold || (is_flick && dx > 0.0) {
        Some(Navigation::Prev)
    } else if dx <= -threshold || (is_flick && dx < 0.0) {
        Some(Navigation::Next)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexLedger {
    committed: i64,
    pending: i64,
}

impl IndexLedger {
    pub fn committed(&self) -> i64 {
        self.committed
    }

    pub fn pending(&self) -> i64 {
        self.pending
    }

    /// `pending - committed`; in `-1..=1`.
    pub fn diff(&self) -> i64 {
        self.pending - self.committed
    }

    pub fn is_settled(&self) -> bool {
        self.committed == self.pending
    }

    /// Point `pending` at the slide the carousel should come to rest on.
    /// `None` snaps back to the committed slide.
    pub fn stage(&mut self, target: Option<Navigation>) {
        self.pending = self.committed + target.map(Navigation::delta).unwrap_or(0);
    }

    /// Fold `pending` into `committed`. Returns the navigation to report, if any;
    /// a second call without a new `stage` always returns `None`.
    pub fn reconcile(&mut self) -> Option<Navigation> {
        let nav = if self.committed > self.pending {
            Some(Navigation::Prev)
        } else if self.committed < self.pending {
            Some(Navigation::Next)
        } else {
            None
        };
        self.committed = self.pending;
        nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flick_right_goes_prev_regardless_of_width() {
        let cfg = ViewerConfig::default();
        assert_eq!(classify_swipe(30.0, 100.0, 200.0, &cfg), Some(Navigation::Prev));
        assert_eq!(classify_swipe(30.0, 100.0, 5000.0, &cfg), Some(Navigation::Prev));
        assert_eq!(classify_swipe(-30.0, 100.0, 5000.0, &cfg), Some(Navigation::Next));
    }

    #[test]
    fn slow_short_drag_snaps_back() {
        let cfg = ViewerConfig::default();
        assert_eq!(classify_swipe(150.0, 600.0, 200.0, &cfg), None);
        assert_eq!(classify_swipe(-150.0, 600.0, 200.0, &cfg), None);
        // fast but under the flick distance
        assert_eq!(classify_swipe(20.0, 100.0, 200.0, &cfg), None);
    }

    #[test]
    fn long_drag_navigates_at_half_width() {
        let cfg = ViewerConfig::default();
        assert_eq!(classify_swipe(250.0, 600.0, 200.0, &cfg), Some(Navigation::Prev));
        assert_eq!(classify_swipe(200.0, 600.0, 200.0, &cfg), Some(Navigation::Prev));
        assert_eq!(classify_swipe(-200.0, 600.0, 200.0, &cfg), Some(Navigation::Next));
    }

    #[test]
    fn reconcile_reports_once() {
        let mut ledger = IndexLedger::default();
        ledger.stage(Some(Navigation::Next));
        assert_eq!(ledger.diff(), 1);
        assert!(!ledger.is_settled());
        assert_eq!(ledger.reconcile(), Some(Navigation::Next));
        assert_eq!(ledger.committed(), 1);
        assert!(ledger.is_settled());
        assert_eq!(ledger.reconcile(), None);

        ledger.stage(Some(Navigation::Prev));
        assert_eq!(ledger.pending(), 0);
        assert_eq!(ledger.reconcile(), Some(Navigation::Prev));
        assert_eq!(ledger.committed(), 0);
    }

    #[test]
    fn snap_back_reports_nothing() {
        let mut ledger = IndexLedger::default();
        ledger.stage(None);
        assert!(ledger.is_settled());
        assert_eq!(ledger.reconcile(), None);
        assert_eq!(ledger.committed(), 0);
    }
}
