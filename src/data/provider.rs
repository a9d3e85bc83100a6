use std::{
    path::PathBuf,
    sync::{Arc, Mutex, OnceLock, mpsc},
    time::Duration,
};

use anyhow::Context;

use crate::data::profile::{ProfileStats, UserRecord};

/// Source of profile data for a scene.
///
/// Implementations may block (disk, network); evaluators never call them directly. Use
/// [`ProfileSlot`] to fetch in the background while frames keep rendering from the fallback.
pub trait ProfileProvider: Send + Sync {
    /// Load stats for `identifier` (usually a login).
    fn fetch(&self, identifier: &str) -> anyhow::Result<ProfileStats>;
}

/// Provider that always returns the same record.
#[derive(Clone, Debug)]
pub struct StaticProvider {
    stats: ProfileStats,
}

impl StaticProvider {
    /// Serve `stats` for every identifier.
    pub fn new(stats: ProfileStats) -> Self {
        Self { stats }
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new(ProfileStats::fallback())
    }
}

impl ProfileProvider for StaticProvider {
    fn fetch(&self, _identifier: &str) -> anyhow::Result<ProfileStats> {
        Ok(self.stats.clone())
    }
}

/// Provider reading `<root>/<identifier>.json` documents shaped like a GitHub user object.
#[derive(Clone, Debug)]
pub struct JsonDirProvider {
    root: PathBuf,
}

impl JsonDirProvider {
    /// Read documents from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ProfileProvider for JsonDirProvider {
    fn fetch(&self, identifier: &str) -> anyhow::Result<ProfileStats> {
        if identifier.is_empty()
            || identifier.contains(['/', '\\'])
            || identifier.starts_with('.')
        {
            anyhow::bail!("invalid profile identifier \"{identifier}\"");
        }
        let path = self.root.join(format!("{identifier}.json"));
        let f = std::fs::File::open(&path)
            .with_context(|| format!("open profile \"{}\"", path.display()))?;
        let rec: UserRecord = serde_json::from_reader(std::io::BufReader::new(f))
            .with_context(|| format!("parse profile \"{}\"", path.display()))?;
        Ok(rec.into_stats())
    }
}

/// Fetch `identifier`, resolving any failure to [`ProfileStats::fallback`].
pub fn fetch_or_fallback(provider: &dyn ProfileProvider, identifier: &str) -> ProfileStats {
    match provider.fetch(identifier) {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(
                identifier,
                error = %format!("{err:#}"),
                "profile fetch failed, using fallback"
            );
            ProfileStats::fallback()
        }
    }
}

/// Profile data that resolves in the background.
///
/// Until the fetch completes (or if it fails), readers get the fallback record, so rendering
/// never waits on I/O.
pub struct ProfileSlot {
    rx: Mutex<Option<mpsc::Receiver<ProfileStats>>>,
    resolved: OnceLock<ProfileStats>,
    fallback: ProfileStats,
}

impl ProfileSlot {
    /// Start fetching `identifier` on a background thread.
    pub fn spawn(provider: Arc<dyn ProfileProvider>, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let (tx, rx) = mpsc::sync_channel(1);
        std::thread::spawn(move || {
            let stats = fetch_or_fallback(provider.as_ref(), &identifier);
            // Receiver may already be gone if the slot was dropped.
            let _ = tx.send(stats);
        });
        Self {
            rx: Mutex::new(Some(rx)),
            resolved: OnceLock::new(),
            fallback: ProfileStats::fallback(),
        }
    }

    /// Slot that is already resolved to `stats`.
    pub fn ready(stats: ProfileStats) -> Self {
        let resolved = OnceLock::new();
        let _ = resolved.set(stats);
        Self {
            rx: Mutex::new(None),
            resolved,
            fallback: ProfileStats::fallback(),
        }
    }

    /// `true` once the background fetch has delivered a record.
    pub fn is_resolved(&self) -> bool {
        self.poll(None);
        self.resolved.get().is_some()
    }

    /// Current record without blocking: the fetched one if available, else the fallback.
    pub fn get_or_fallback(&self) -> &ProfileStats {
        self.poll(None);
        self.resolved.get().unwrap_or(&self.fallback)
    }

    /// Wait up to `timeout` for the fetch to resolve. Returns whether it did.
    pub fn wait(&self, timeout: Duration) -> bool {
        self.poll(Some(timeout));
        self.resolved.get().is_some()
    }

    fn poll(&self, timeout: Option<Duration>) {
        if self.resolved.get().is_some() {
            return;
        }
        // Another reader holding the lock is already polling; don't block on it.
        let mut guard = match timeout {
            Some(_) => match self.rx.lock() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            },
            None => match self.rx.try_lock() {
                Ok(g) => g,
                Err(std::sync::TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(std::sync::TryLockError::WouldBlock) => return,
            },
        };
        let Some(rx) = guard.as_ref() else {
            return;
        };
        let got = match timeout {
            Some(t) => rx.recv_timeout(t).map_err(|e| match e {
                mpsc::RecvTimeoutError::Timeout => false,
                mpsc::RecvTimeoutError::Disconnected => true,
            }),
            None => rx.try_recv().map_err(|e| match e {
                mpsc::TryRecvError::Empty => false,
                mpsc::TryRecvError::Disconnected => true,
            }),
        };
        match got {
            Ok(stats) => {
                let _ = self.resolved.set(stats);
                *guard = None;
            }
            Err(true) => {
                tracing::warn!("profile fetch thread exited without a result, using fallback");
                let _ = self.resolved.set(self.fallback.clone());
                *guard = None;
            }
            Err(false) => {}
        }
    }
}

impl std::fmt::Debug for ProfileSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileSlot")
            .field("resolved", &self.resolved.get().is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/provider.rs"]
mod tests;
