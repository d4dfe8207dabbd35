use std::time::{Duration, Instant};

/// 초기화 완료 표시가 유지되는 시간.
pub const RESET_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// 초기화 버튼의 일시 표시 상태.
///
/// 표시 중에 다시 초기화하면 타이머를 새로 시작한다. 대기 중인 전환은 항상 하나다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetFeedback {
    #[default]
    Idle,
    JustReset { since: Instant },
}

impl ResetFeedback {
    pub fn trigger(&mut self, now: Instant) {
        *self = ResetFeedback::JustReset { since: now };
    }

    /// 시간이 다 됐으면 Idle로 돌아간다. 상태가 바뀌었으면 true.
    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            ResetFeedback::JustReset { since }
                if now.saturating_duration_since(since) >= RESET_FEEDBACK_DURATION =>
            {
                *self = ResetFeedback::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ResetFeedback::JustReset { .. })
    }

    /// Idle로 돌아가기까지 남은 시간. 다시 그릴 시점을 잡는 데 쓴다.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match *self {
            ResetFeedback::Idle => None,
            ResetFeedback::JustReset { since } => {
                Some(RESET_FEEDBACK_DURATION.saturating_sub(now.saturating_duration_since(since)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_to_idle_after_duration() {
        let start = Instant::now();
        let mut fb = ResetFeedback::default();
        fb.trigger(start);
        assert!(fb.is_active());
        assert!(!fb.tick(start + Duration::from_millis(1999)));
        assert!(fb.is_active());
        assert!(fb.tick(start + RESET_FEEDBACK_DURATION));
        assert_eq!(fb, ResetFeedback::Idle);
        assert!(!fb.tick(start + Duration::from_secs(5)));
    }

    #[test]
    fn retrigger_restarts_timer() {
        let start = Instant::now();
        let mut fb = ResetFeedback::default();
        fb.trigger(start);
        let second = start + Duration::from_millis(1500);
        fb.trigger(second);
        assert!(!fb.tick(start + Duration::from_millis(2500)));
        assert_eq!(
            fb.remaining(start + Duration::from_millis(2500)),
            Some(Duration::from_millis(1000))
        );
        assert!(fb.tick(second + RESET_FEEDBACK_DURATION));
    }

    #[test]
    fn idle_has_no_remaining_time() {
        assert_eq!(ResetFeedback::Idle.remaining(Instant::now()), None);
    }
}
