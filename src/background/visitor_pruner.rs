use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::view::ViewStore;

/// Periodically drop view state of visitors idle longer than `max_idle`.
pub fn spawn(views: ViewStore, max_idle: Duration) -> JoinHandle<()> {
    let period = (max_idle / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let pruned = views.prune_idle(max_idle);
            if pruned > 0 {
                info!(pruned, remaining = views.len(), "Visitor sweep");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::SessionUser;

    #[tokio::test]
    async fn sweeps_idle_visitors() {
        let views = ViewStore::new();
        views.sign_in(
            uuid::Uuid::now_v7(),
            SessionUser {
                id: "u9".into(),
                name: "Ann".into(),
                avatar: None,
            },
        );

        tokio::time::sleep(Duration::from_millis(5)).await;
        let handle = spawn(views.clone(), Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(views.is_empty());
        handle.abort();
    }
}
