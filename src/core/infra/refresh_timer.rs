use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Periodic live-guide refresh.
///
/// At most one ticker task is alive. Each start bumps the generation and
/// cancels the previous task; ticks are delivered as the generation number so
/// a tick already queued by a cancelled task can be told apart and ignored.
#[derive(Debug)]
pub struct GuideRefreshTimer {
    period: Duration,
    generation: u64,
    active: Option<CancellationToken>,
    tx_tick: mpsc::Sender<u64>,
}

impl GuideRefreshTimer {
    pub fn new(period: Duration, tx_tick: mpsc::Sender<u64>) -> Self {
        Self {
            period,
            generation: 0,
            active: None,
            tx_tick,
        }
    }

    /// (Re)starts the ticker. The first tick fires one full period from now.
    pub fn start(&mut self) {
        self.stop();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let period = self.period;
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx_tick.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(generation).await.is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::trace!(generation, "guide refresh ticker stopped");
        });

        tracing::debug!(generation, period_secs = period.as_secs(), "guide refresh started");
        self.active = Some(token);
    }

    pub fn stop(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
            tracing::debug!(generation = self.generation, "guide refresh stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// True for a tick from the live ticker.
    pub fn accept(&self, generation: u64) -> bool {
        self.is_running() && generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for GuideRefreshTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timer = GuideRefreshTimer::new(Duration::from_secs(30), tx);
        timer.start();

        let started = Instant::now();
        let generation = rx.recv().await.expect("tick");
        assert_eq!(started.elapsed(), Duration::from_secs(30));
        assert!(timer.accept(generation));

        let generation = rx.recv().await.expect("tick");
        assert_eq!(started.elapsed(), Duration::from_secs(60));
        assert!(timer.accept(generation));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_silences_ticker() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timer = GuideRefreshTimer::new(Duration::from_secs(30), tx);
        timer.start();
        timer.stop();
        assert!(!timer.is_running());

        let res = tokio::time::timeout(Duration::from_secs(120), rx.recv()).await;
        assert!(res.is_err(), "no tick expected after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn restart_invalidates_old_generation() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timer = GuideRefreshTimer::new(Duration::from_secs(30), tx);
        timer.start();
        let first = timer.generation();
        tokio::time::sleep(Duration::from_secs(10)).await;
        timer.start();
        assert!(!timer.accept(first));

        // Only the new ticker fires, 30s after the restart.
        let started = Instant::now();
        let generation = rx.recv().await.expect("tick");
        assert_eq!(generation, timer.generation());
        assert_eq!(started.elapsed(), Duration::from_secs(30));
    }
}
