use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tokio::sync::watch;

use std::path::{Path, PathBuf};

pub(super) struct PlanState {
    plan_file: PathBuf,
    pool: SqlitePool,
    // Generation counter bumped after every committed write. Live
    // queries subscribe to it and re-run on each tick.
    changes: watch::Sender<u64>,
}

impl std::fmt::Debug for PlanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanState")
            .field("plan_file", &self.plan_file)
            .finish()
    }
}

impl PlanState {
    pub(super) async fn new<P: AsRef<Path>>(plan_file: P) -> anyhow::Result<Self> {
        let plan_file = plan_file.as_ref().to_path_buf();

        if let Some(parent) = plan_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("Plan file parent does not exist: {:?}", parent);
            }
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&plan_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        let (changes, _) = watch::channel(0);
        Ok(Self {
            plan_file,
            pool,
            changes,
        })
    }

    pub(super) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub(super) fn plan_file(&self) -> &Path {
        &self.plan_file
    }

    pub(super) fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub(super) fn notify_changed(&self) {
        self.changes.send_modify(|generation| {
            *generation = generation.wrapping_add(1);
        });
    }
}
