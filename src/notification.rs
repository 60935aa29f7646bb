//! Ephemeral notification banner state
//!
//! Only one notification exists at a time. Showing a new one replaces the
//! current one and restarts the dismissal deadline, so an older deadline can
//! never cut a newer message short.

use crate::types::NotificationKind;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

pub struct Notifier {
    current: Option<Notification>,
    duration: Duration,
    fade: Duration,
}

impl Notifier {
    pub fn new(duration: Duration, fade: Duration) -> Self {
        Self {
            current: None,
            duration,
            fade: fade.min(duration),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NotificationKind::Error, now);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Time left before the current notification expires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let current = self.current.as_ref()?;
        let elapsed = now.saturating_duration_since(current.shown_at);
        self.duration.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Drops an expired notification. Returns the time left on a live one so
    /// the caller can schedule a repaint.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let remaining = self.remaining(now);
        if remaining.is_none() {
            self.current = None;
        }
        remaining
    }

    /// The notification visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        self.remaining(now).and(self.current.as_ref())
    }

    /// 1.0 while fully visible, easing to 0.0 over the fade window
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.remaining(now) {
            Some(left) if left >= self.fade => 1.0,
            Some(left) => left.as_secs_f32() / self.fade.as_secs_f32(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier {
        Notifier::new(Duration::from_secs(3), Duration::from_millis(500))
    }

    #[test]
    fn visible_until_deadline() {
        let mut n = notifier();
        let t0 = Instant::now();
        n.success("Saved", t0);

        assert_eq!(n.current(t0).unwrap().message, "Saved");
        assert!(n.current(t0 + Duration::from_millis(2999)).is_some());
        assert!(n.current(t0 + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn newer_notification_restarts_deadline() {
        let mut n = notifier();
        let t0 = Instant::now();
        n.success("First", t0);
        n.error("Second", t0 + Duration::from_secs(2));

        let shown = n.current(t0 + Duration::from_secs(4)).unwrap();
        assert_eq!(shown.message, "Second");
        assert_eq!(shown.kind, NotificationKind::Error);
        assert!(n.current(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn dismiss_cancels_immediately() {
        let mut n = notifier();
        let t0 = Instant::now();
        n.success("Saved", t0);
        n.dismiss();
        assert!(n.current(t0).is_none());
        assert_eq!(n.tick(t0), None);
    }

    #[test]
    fn tick_clears_expired_and_reports_time_left() {
        let mut n = notifier();
        let t0 = Instant::now();
        n.success("Saved", t0);

        assert_eq!(n.tick(t0 + Duration::from_secs(1)), Some(Duration::from_secs(2)));
        assert_eq!(n.tick(t0 + Duration::from_secs(3)), None);
        assert!(n.current(t0).is_none());
    }

    #[test]
    fn fades_out_at_the_end() {
        let mut n = notifier();
        let t0 = Instant::now();
        n.success("Saved", t0);

        assert_eq!(n.opacity(t0 + Duration::from_secs(1)), 1.0);
        let half = n.opacity(t0 + Duration::from_millis(2750));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(n.opacity(t0 + Duration::from_secs(4)), 0.0);
    }
}
