use playback_core::{ContentIdentity, PlaybackController};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::time::Instant;
use uuid::Uuid;

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct SessionId(pub(crate) Uuid);

impl SessionId {
    pub(crate) fn generate() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Deref for SessionId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        SessionId(value)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PlaybackSession {
    pub(crate) content: ContentIdentity,
    pub(crate) controller: PlaybackController,
    pub(crate) last_touched: Instant,
}

impl PlaybackSession {
    pub(crate) fn new(content: ContentIdentity) -> Self {
        Self {
            content,
            controller: PlaybackController::new(),
            last_touched: Instant::now(),
        }
    }
}
