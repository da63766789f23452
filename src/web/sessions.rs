// Chat sessions: one ChatController per chat page load, held in a moka cache
// with idle expiry. Dropping a session from the cache is the "unmount": a
// reply that arrives afterwards finds nothing to append to.

use moka::future::Cache;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, LockResult, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::advisor::SharedRng;
use crate::chat::ChatController;

pub struct ChatSession {
    /// Never locked across an await
    controller: Mutex<ChatController>,
    /// Notified each time a turn settles
    settled: Arc<Notify>,
}

impl ChatSession {
    fn new(controller: ChatController) -> Self {
        Self {
            controller: Mutex::new(controller),
            settled: Arc::new(Notify::new()),
        }
    }

    pub fn lock(&self) -> LockResult<MutexGuard<'_, ChatController>> {
        self.controller.lock()
    }

    /// Outlives the session, so waiters can park without keeping it alive
    pub fn settled(&self) -> Arc<Notify> {
        self.settled.clone()
    }
}

pub type SharedSession = Arc<ChatSession>;

#[derive(Clone)]
pub struct ChatSessions {
    cache: Cache<Uuid, SharedSession>,
    rng: SharedRng,
}

impl ChatSessions {
    pub fn new(idle: Duration, rng: SharedRng) -> Self {
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_idle(idle)
            .build();
        Self { cache, rng }
    }

    /// Start a transcript; its fallback picks are seeded from the shared rng
    pub async fn create(&self) -> (Uuid, SharedSession) {
        let rng = match self.rng.lock() {
            Ok(mut shared) => StdRng::seed_from_u64(shared.gen()),
            Err(_) => {
                tracing::warn!("Shared rng poisoned, seeding chat session from entropy");
                StdRng::from_entropy()
            }
        };

        let id = Uuid::new_v4();
        let session = Arc::new(ChatSession::new(ChatController::new(rng)));
        self.cache.insert(id, session.clone()).await;
        tracing::debug!("Created chat session {}", id);
        (id, session)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.cache.get(id).await
    }

    /// End a session now; the cache releases its handle before returning
    pub async fn remove(&self, id: &Uuid) {
        self.cache.invalidate(id).await;
        self.cache.run_pending_tasks().await;
        tracing::debug!("Removed chat session {}", id);
    }

    pub async fn count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::shared_rng;
    use crate::chat::GREETING;

    fn sessions() -> ChatSessions {
        ChatSessions::new(Duration::from_secs(60), shared_rng(StdRng::seed_from_u64(5)))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let sessions = sessions();
        let (id, controller) = sessions.create().await;

        let found = sessions.get(&id).await.unwrap();
        assert!(Arc::ptr_eq(&found, &controller));
        assert_eq!(found.lock().unwrap().messages()[0].text, GREETING);
        assert_eq!(sessions.count().await, 1);
    }

    #[tokio::test]
    async fn test_removed_session_drops_controller() {
        let sessions = sessions();
        let (id, controller) = sessions.create().await;
        let weak = Arc::downgrade(&controller);
        drop(controller);

        sessions.remove(&id).await;
        assert!(sessions.get(&id).await.is_none());
        assert!(weak.upgrade().is_none());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        assert!(sessions().get(&Uuid::new_v4()).await.is_none());
    }
}
