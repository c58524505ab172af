use crate::events::AppEvent;
use async_channel::Sender;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One day, the production rotation period.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Owns the daily verse-rotation timers: a one-shot delay to the next
/// occurrence of the rotation hour, then a strictly periodic repeat. The
/// periodic timer is not armed until the one-shot fires, and `stop` cancels
/// both at once, so a detached consumer can never leak a ticking interval.
#[derive(Debug)]
pub struct VerseRotation {
    handle: Option<JoinHandle<()>>,
}

impl VerseRotation {
    /// Arms the rotation. Must be called inside a tokio runtime.
    pub fn start(tx: Sender<AppEvent>, delay: Duration, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(AppEvent::RotateVerses).await.is_err() {
                return;
            }
            let mut ticker = tokio::time::interval(period);
            // An interval's first tick completes immediately; the one-shot
            // above already covered that firing.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::RotateVerses).await.is_err() {
                    return;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Cancels the pending one-shot and the periodic repeat together.
    /// Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for VerseRotation {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_delay_then_once_per_period() {
        let (tx, rx) = async_channel::bounded(8);
        let t0 = Instant::now();
        let _rotation =
            VerseRotation::start(tx, Duration::from_secs(3600), Duration::from_secs(86_400));

        assert_eq!(rx.recv().await.unwrap(), AppEvent::RotateVerses);
        assert_eq!(t0.elapsed(), Duration::from_secs(3600));

        assert_eq!(rx.recv().await.unwrap(), AppEvent::RotateVerses);
        assert_eq!(t0.elapsed(), Duration::from_secs(3600 + 86_400));

        assert_eq!(rx.recv().await.unwrap(), AppEvent::RotateVerses);
        assert_eq!(t0.elapsed(), Duration::from_secs(3600 + 2 * 86_400));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_the_pending_one_shot() {
        let (tx, rx) = async_channel::bounded(8);
        let mut rotation =
            VerseRotation::start(tx, Duration::from_secs(3600), Duration::from_secs(86_400));

        tokio::time::advance(Duration::from_secs(1800)).await;
        assert!(rx.try_recv().is_err());

        rotation.stop();
        rotation.stop();

        // The aborted task drops the only sender, so the channel closes
        // without ever delivering a rotation.
        assert!(rx.recv().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_the_periodic_repeat_too() {
        let (tx, rx) = async_channel::bounded(8);
        let mut rotation =
            VerseRotation::start(tx, Duration::from_secs(10), Duration::from_secs(86_400));

        assert_eq!(rx.recv().await.unwrap(), AppEvent::RotateVerses);
        rotation.stop();

        assert!(rx.recv().await.is_err());
    }
}
