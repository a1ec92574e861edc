use crate::storage::InMemorySessionStorage;
use crate::types::{PlaybackSession, SessionId};
use playback_core::{
    resolve_sources, ContentIdentity, FallbackError, PlaybackController, PlaybackStatus,
    PlaybackTransition, ResolvedSource, SourceRegistry,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

const NO_PLAYABLE_SOURCE_MESSAGE: &str = "No playable source found";

#[derive(Debug, thiserror::Error)]
pub(crate) enum PlaybackServiceError {
    #[error("Playback session {0} not found")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    FallbackError(#[from] FallbackError),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaybackSnapshot {
    pub(crate) session_id: SessionId,
    pub(crate) content: ContentIdentity,
    pub(crate) status: PlaybackStatus,
    pub(crate) current_index: usize,
    pub(crate) current_source: Option<ResolvedSource>,
    pub(crate) candidates: Vec<ResolvedSource>,
    pub(crate) failed_indexes: Vec<usize>,
    pub(crate) attempt: u64,
    pub(crate) message: Option<&'static str>,
}

impl PlaybackSnapshot {
    fn new(session_id: SessionId, session: &PlaybackSession) -> Self {
        let controller = &session.controller;
        let message = match controller.status() {
            PlaybackStatus::Exhausted => Some(NO_PLAYABLE_SOURCE_MESSAGE),
            _ => None,
        };

        Self {
            session_id,
            content: session.content.clone(),
            status: controller.status(),
            current_index: controller.current_index(),
            current_source: controller.current_source().cloned(),
            candidates: controller.candidates().to_vec(),
            failed_indexes: controller.failed_indexes().to_vec(),
            attempt: controller.attempt(),
            message,
        }
    }
}

pub(crate) struct PlaybackService {
    registry: Arc<SourceRegistry>,
    storage: Arc<InMemorySessionStorage>,
}

impl PlaybackService {
    pub(crate) fn new(registry: Arc<SourceRegistry>, storage: Arc<InMemorySessionStorage>) -> Self {
        Self { registry, storage }
    }

    pub(crate) fn resolve(&self, content: &ContentIdentity) -> Vec<ResolvedSource> {
        resolve_sources(content, &self.registry)
    }

    pub(crate) async fn select(
        &self,
        session_id: Option<SessionId>,
        content: ContentIdentity,
    ) -> Result<PlaybackSnapshot, PlaybackServiceError> {
        let candidates = self.resolve(&content);

        info!(%content, candidates = candidates.len(), "Content selected");

        match session_id {
            Some(session_id) => self
                .storage
                .update(&session_id, move |session| {
                    session.content = content;
                    session.controller.select(candidates);
                    PlaybackSnapshot::new(session_id, session)
                })
                .await
                .ok_or(PlaybackServiceError::SessionNotFound(session_id)),
            None => {
                let session_id = SessionId::generate();
                let mut session = PlaybackSession::new(content);
                session.controller.select(candidates);
                let snapshot = PlaybackSnapshot::new(session_id, &session);

                self.storage.save(&session_id, session).await;

                debug!(%session_id, "Playback session created");

                Ok(snapshot)
            }
        }
    }

    pub(crate) async fn report_loaded(
        &self,
        session_id: &SessionId,
    ) -> Result<PlaybackSnapshot, PlaybackServiceError> {
        self.apply(session_id, |controller| Ok(controller.on_load_success()))
            .await
    }

    pub(crate) async fn report_failed(
        &self,
        session_id: &SessionId,
    ) -> Result<PlaybackSnapshot, PlaybackServiceError> {
        self.apply(session_id, |controller| Ok(controller.on_load_error()))
            .await
    }

    pub(crate) async fn switch_source(
        &self,
        session_id: &SessionId,
        index: usize,
    ) -> Result<PlaybackSnapshot, PlaybackServiceError> {
        self.apply(session_id, |controller| controller.switch_to(index))
            .await
    }

    pub(crate) async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<PlaybackSnapshot, PlaybackServiceError> {
        self.storage
            .get(session_id)
            .await
            .map(|session| PlaybackSnapshot::new(*session_id, &session))
            .ok_or(PlaybackServiceError::SessionNotFound(*session_id))
    }

    pub(crate) async fn close(&self, session_id: &SessionId) -> Result<(), PlaybackServiceError> {
        if !self.storage.delete(session_id).await {
            return Err(PlaybackServiceError::SessionNotFound(*session_id));
        }

        debug!(%session_id, "Playback session closed");

        Ok(())
    }

    pub(crate) async fn active_sessions(&self) -> usize {
        self.storage.len().await
    }

    pub(crate) async fn evict_idle_sessions(&self) {
        let evicted = self.storage.evict_idle().await;

        if evicted > 0 {
            info!(evicted, "Idle playback sessions evicted");
        }
    }

    async fn apply(
        &self,
        session_id: &SessionId,
        signal: impl FnOnce(&mut PlaybackController) -> Result<PlaybackTransition, FallbackError>,
    ) -> Result<PlaybackSnapshot, PlaybackServiceError> {
        let result = self
            .storage
            .update(session_id, |session| {
                let transition = signal(&mut session.controller)?;
                Ok::<_, FallbackError>((transition, PlaybackSnapshot::new(*session_id, session)))
            })
            .await
            .ok_or(PlaybackServiceError::SessionNotFound(*session_id))?;

        let (transition, snapshot) = result?;

        debug!(%session_id, ?transition, "Player signal applied");

        Ok(snapshot)
    }
}
