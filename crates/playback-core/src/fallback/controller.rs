use crate::ResolvedSource;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Loading,
    Playing,
    Failed,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackTransition {
    Loading { index: usize },
    Playing { index: usize },
    Exhausted,
    Ignored { status: PlaybackStatus },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FallbackError {
    #[error("No content has been selected")]
    NothingSelected,
    #[error("Source index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// `current_index` is a valid index into `candidates` while Loading or Playing.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackController {
    candidates: Vec<ResolvedSource>,
    current_index: usize,
    status: PlaybackStatus,
    failed_indexes: Vec<usize>,
    attempt: u64,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, candidates: Vec<ResolvedSource>) -> PlaybackTransition {
        self.candidates = candidates;
        self.failed_indexes.clear();
        self.current_index = 0;

        if self.candidates.is_empty() {
            warn!("No candidates to play");
            self.status = PlaybackStatus::Exhausted;
            return PlaybackTransition::Exhausted;
        }

        self.enter_loading(0)
    }

    pub fn on_load_success(&mut self) -> PlaybackTransition {
        if self.status != PlaybackStatus::Loading {
            return self.ignore("load success");
        }

        self.status = PlaybackStatus::Playing;

        info!(
            index = self.current_index,
            provider = %self.candidates[self.current_index].provider_name,
            "Source is playing"
        );

        PlaybackTransition::Playing {
            index: self.current_index,
        }
    }

    pub fn on_load_error(&mut self) -> PlaybackTransition {
        if self.status != PlaybackStatus::Loading {
            return self.ignore("load error");
        }

        self.status = PlaybackStatus::Failed;
        if !self.failed_indexes.contains(&self.current_index) {
            self.failed_indexes.push(self.current_index);
        }

        debug!(
            index = self.current_index,
            provider = %self.candidates[self.current_index].provider_name,
            "Source failed to load"
        );

        self.advance()
    }

    pub fn switch_to(&mut self, index: usize) -> Result<PlaybackTransition, FallbackError> {
        if self.status == PlaybackStatus::Idle {
            return Err(FallbackError::NothingSelected);
        }

        if index >= self.candidates.len() {
            return Err(FallbackError::IndexOutOfRange {
                index,
                len: self.candidates.len(),
            });
        }

        Ok(self.enter_loading(index))
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_source(&self) -> Option<&ResolvedSource> {
        match self.status {
            PlaybackStatus::Loading | PlaybackStatus::Playing => {
                self.candidates.get(self.current_index)
            }
            _ => None,
        }
    }

    pub fn candidates(&self) -> &[ResolvedSource] {
        &self.candidates
    }

    pub fn failed_indexes(&self) -> &[usize] {
        &self.failed_indexes
    }

    // Bumped on every entry into Loading.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    fn advance(&mut self) -> PlaybackTransition {
        let next_index = (self.current_index + 1..self.candidates.len())
            .find(|index| !self.failed_indexes.contains(index));

        if let Some(next_index) = next_index {
            return self.enter_loading(next_index);
        }

        info!(
            tried = self.failed_indexes.len(),
            "All playback sources failed"
        );

        self.status = PlaybackStatus::Exhausted;

        PlaybackTransition::Exhausted
    }

    fn enter_loading(&mut self, index: usize) -> PlaybackTransition {
        self.current_index = index;
        self.status = PlaybackStatus::Loading;
        self.attempt += 1;

        debug!(
            index,
            attempt = self.attempt,
            url = %self.candidates[index].url,
            "Handing source to player"
        );

        PlaybackTransition::Loading { index }
    }

    fn ignore(&self, signal: &str) -> PlaybackTransition {
        debug!(signal, status = ?self.status, "Ignoring player signal");

        PlaybackTransition::Ignored {
            status: self.status,
        }
    }
}
