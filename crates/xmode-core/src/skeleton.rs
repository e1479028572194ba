use std::time::Duration;

/// How long the skeleton loader is shown before the first page renders.
pub const LOADING_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    /// Mounted, timer not yet fired
    Pending,
    /// Timer fired, content visible
    Ready,
    /// Torn down before the timer fired
    Cancelled,
}

/// One-shot gate that keeps the loading flag up until its delay elapses.
///
/// The owner arms a timer for [`SkeletonGate::delay`] and calls
/// [`SkeletonGate::complete`] when it fires. If the owner is torn down
/// first it calls [`SkeletonGate::cancel`]; a late `complete` is then
/// ignored, so no stale update can reach a removed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonGate {
    state: GateState,
    delay: Duration,
}

impl Default for SkeletonGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SkeletonGate {
    pub fn new() -> Self {
        Self::with_delay(LOADING_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: GateState::Pending,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_loading(&self) -> bool {
        self.state != GateState::Ready
    }

    /// Lower the loading flag. Returns true only for the single call that
    /// actually performs the transition.
    pub fn complete(&mut self) -> bool {
        match self.state {
            GateState::Pending => {
                self.state = GateState::Ready;
                log::debug!("skeleton gate opened after {:?}", self.delay);
                true
            }
            GateState::Ready | GateState::Cancelled => false,
        }
    }

    /// Disarm a pending gate. Has no effect once the gate has opened.
    pub fn cancel(&mut self) {
        if self.state == GateState::Pending {
            self.state = GateState::Cancelled;
        }
    }

    /// Advance by `elapsed` since mount; convenience for polled clocks
    pub fn poll(&mut self, elapsed: Duration) -> bool {
        elapsed >= self.delay && self.complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_until_delay_elapses() {
        let mut gate = SkeletonGate::new();
        assert!(gate.is_loading());
        assert!(!gate.poll(Duration::from_millis(0)));
        assert!(!gate.poll(Duration::from_millis(1499)));
        assert!(gate.is_loading());
        assert!(gate.poll(Duration::from_millis(1500)));
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_exactly_one_transition() {
        let mut gate = SkeletonGate::new();
        let transitions = [1000, 1500, 1600, 3000]
            .into_iter()
            .filter(|ms| gate.poll(Duration::from_millis(*ms)))
            .count();
        assert_eq!(transitions, 1);
        assert!(!gate.complete());
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_cancel_suppresses_late_completion() {
        let mut gate = SkeletonGate::new();
        gate.cancel();
        assert!(!gate.complete());
        assert!(gate.is_loading());
    }

    #[test]
    fn test_cancel_after_ready_keeps_content() {
        let mut gate = SkeletonGate::new();
        assert!(gate.complete());
        gate.cancel();
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SkeletonGate::new().delay(), Duration::from_millis(1500));
    }
}
