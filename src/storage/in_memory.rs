use crate::types::{PlaybackSession, SessionId};
use async_lock::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

// Sessions untouched for longer than `idle_ttl` are dropped.
pub(crate) struct InMemorySessionStorage {
    sessions: Mutex<HashMap<SessionId, PlaybackSession>>,
    idle_ttl: Duration,
}

impl InMemorySessionStorage {
    pub(crate) fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub(crate) async fn save(&self, session_id: &SessionId, mut session: PlaybackSession) {
        let mut guard = self.sessions.lock().await;

        let now = Instant::now();
        guard.retain(|_, session| !Self::is_idle(session, now, self.idle_ttl));

        session.last_touched = now;
        guard.insert(*session_id, session);
    }

    pub(crate) async fn get(&self, session_id: &SessionId) -> Option<PlaybackSession> {
        self.update(session_id, |session| session.clone()).await
    }

    pub(crate) async fn update<R>(
        &self,
        session_id: &SessionId,
        f: impl FnOnce(&mut PlaybackSession) -> R,
    ) -> Option<R> {
        let mut guard = self.sessions.lock().await;

        let now = Instant::now();
        if guard
            .get(session_id)
            .map_or(false, |session| Self::is_idle(session, now, self.idle_ttl))
        {
            guard.remove(session_id);
            debug!(%session_id, "Idle playback session dropped");
            return None;
        }

        guard.get_mut(session_id).map(|session| {
            session.last_touched = now;
            f(session)
        })
    }

    pub(crate) async fn delete(&self, session_id: &SessionId) -> bool {
        let mut guard = self.sessions.lock().await;

        guard.remove(session_id).is_some()
    }

    pub(crate) async fn evict_idle(&self) -> usize {
        let mut guard = self.sessions.lock().await;

        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, session| !Self::is_idle(session, now, self.idle_ttl));

        before - guard.len()
    }

    pub(crate) async fn len(&self) -> usize {
        let guard = self.sessions.lock().await;

        let now = Instant::now();
        guard
            .values()
            .filter(|session| !Self::is_idle(session, now, self.idle_ttl))
            .count()
    }

    fn is_idle(session: &PlaybackSession, now: Instant, idle_ttl: Duration) -> bool {
        now.saturating_duration_since(session.last_touched) >= idle_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::InMemorySessionStorage;
    use crate::types::{PlaybackSession, SessionId};
    use playback_core::{ContentIdentity, TmdbId};
    use std::time::Duration;

    fn make_session() -> PlaybackSession {
        PlaybackSession::new(ContentIdentity::movie(TmdbId::new(603).unwrap()))
    }

    #[actix_rt::test]
    async fn should_keep_sessions_within_ttl() {
        let storage = InMemorySessionStorage::new(Duration::from_secs(3600));
        let session_id = SessionId::generate();
        storage.save(&session_id, make_session()).await;

        assert_eq!(0, storage.evict_idle().await);
        assert_eq!(1, storage.len().await);
        assert!(storage.get(&session_id).await.is_some());
    }

    #[actix_rt::test]
    async fn should_evict_idle_sessions() {
        let storage = InMemorySessionStorage::new(Duration::ZERO);
        storage.save(&SessionId::generate(), make_session()).await;
        storage.save(&SessionId::generate(), make_session()).await;

        assert_eq!(0, storage.len().await);
        assert_eq!(1, storage.evict_idle().await);
        assert_eq!(0, storage.evict_idle().await);
    }

    #[actix_rt::test]
    async fn should_not_return_idle_session() {
        let storage = InMemorySessionStorage::new(Duration::ZERO);
        let session_id = SessionId::generate();
        storage.save(&session_id, make_session()).await;

        assert!(storage.get(&session_id).await.is_none());
        assert!(storage.update(&session_id, |_| ()).await.is_none());
        assert!(!storage.delete(&session_id).await);
    }
}
