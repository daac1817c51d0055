use serde::Deserialize;

/// Observer configuration for a visibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VisibilityOptions {
    /// Fraction of the region that has to be on screen, 0.0 to 1.0.
    #[serde(default)]
    pub threshold: f64,
    /// `false` latches the first `true` forever.
    #[serde(default = "default_repeat")]
    pub repeat: bool,
}

fn default_repeat() -> bool {
    true
}

impl VisibilityOptions {
    pub fn new(threshold: f64, repeat: bool) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
            repeat,
        }
    }

    pub fn repeating(threshold: f64) -> Self {
        Self::new(threshold, true)
    }

    pub fn once(threshold: f64) -> Self {
        Self::new(threshold, false)
    }

    pub fn normalized(self) -> Self {
        Self::new(self.threshold, self.repeat)
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self::repeating(0.0)
    }
}

pub fn normalize_threshold(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Whether an observer entry counts as "in view" for the given threshold.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Turns raw observer reports into the gate's boolean, honoring one-shot
/// semantics and swallowing reports that do not change anything.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    repeat: bool,
    value: bool,
    latched: bool,
}

impl VisibilityLatch {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            repeat: options.repeat,
            value: false,
            latched: false,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    /// A one-shot latch that has fired ignores every later report.
    pub fn is_settled(&self) -> bool {
        self.latched
    }

    /// Returns the new value only when it differs from the previous one.
    pub fn report(&mut self, in_view: bool) -> Option<bool> {
        if self.latched || in_view == self.value {
            return None;
        }
        self.value = in_view;
        if in_view && !self.repeat {
            self.latched = true;
        }
        Some(in_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityOptions::repeating(1.7).threshold, 1.0);
        assert_eq!(VisibilityOptions::repeating(-0.3).threshold, 0.0);
        assert_eq!(VisibilityOptions::once(f64::NAN).threshold, 0.0);
        assert_eq!(VisibilityOptions::once(0.2).threshold, 0.2);
    }

    #[test]
    fn entry_must_reach_threshold() {
        assert!(crosses_threshold(true, 0.15, 0.1));
        assert!(!crosses_threshold(true, 0.05, 0.1));
        assert!(!crosses_threshold(false, 0.5, 0.1));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }

    #[test]
    fn repeating_latch_follows_every_change() {
        let mut latch = VisibilityLatch::new(VisibilityOptions::repeating(0.1));
        assert_eq!(latch.report(false), None);
        assert_eq!(latch.report(true), Some(true));
        assert_eq!(latch.report(true), None);
        assert_eq!(latch.report(false), Some(false));
        assert_eq!(latch.report(true), Some(true));
        assert!(latch.value());
    }

    #[test]
    fn one_shot_latch_never_reverts() {
        let mut latch = VisibilityLatch::new(VisibilityOptions::once(0.2));
        assert_eq!(latch.report(true), Some(true));
        assert_eq!(latch.report(false), None);
        assert_eq!(latch.report(true), None);
        assert!(latch.value());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: VisibilityOptions = serde_json::from_str(r#"{ "threshold": 0.1 }"#).unwrap();
        assert_eq!(options, VisibilityOptions::repeating(0.1));
    }

    #[test]
    fn only_one_shot_latches_settle() {
        let mut once = VisibilityLatch::new(VisibilityOptions::once(0.2));
        assert_eq!(once.report(false), None);
        assert!(!once.is_settled());
        once.report(true);
        assert!(once.is_settled());

        let mut repeating = VisibilityLatch::new(VisibilityOptions::repeating(0.1));
        repeating.report(true);
        repeating.report(false);
        assert!(!repeating.is_settled());
    }
}
