use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A live read subscription: holds the most recent projection of a
/// query and refreshes it whenever the store signals a committed write.
///
/// Dropping the handle tears the subscription down; nothing is
/// delivered afterwards. Deliveries coalesce, so a subscriber that
/// falls behind only ever observes the newest value.
pub struct Live<T> {
    rx: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> std::fmt::Debug for Live<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Live").finish_non_exhaustive()
    }
}

impl<T> Live<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Runs `query` once to seed the subscription, then keeps it fresh
    /// in a background task driven by the store's change signal.
    ///
    /// `changes` must be subscribed before the seed query runs so a
    /// write racing the seed still triggers a refresh.
    pub(super) async fn spawn<F, Fut>(
        mut changes: watch::Receiver<u64>,
        query: F,
    ) -> anyhow::Result<Self>
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let initial = query().await?;
        let (tx, rx) = watch::channel(initial);
        let task = tokio::spawn(async move {
            loop {
                if changes.changed().await.is_err() {
                    break;
                }
                match query().await {
                    Ok(value) => {
                        if tx.send(value).is_err() {
                            break;
                        }
                    }
                    // Keep the last good value; the next write retries.
                    Err(e) => tracing::warn!("live query refresh failed: {e:#}"),
                }
            }
        });
        Ok(Self { rx, task })
    }

    /// The most recently published value.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Waits for the next refresh. `None` once the store side is gone.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl<T> Drop for Live<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
