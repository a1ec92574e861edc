use crate::{ContentIdentity, ResolvedSource, SourceRegistry};

pub const TMDB_ID_TOKEN: &str = "{tmdbId}";
pub const SEASON_TOKEN: &str = "{season}";
pub const EPISODE_TOKEN: &str = "{episode}";

fn substitute_tokens(pattern: &str, identity: &ContentIdentity) -> String {
    pattern
        .replace(TMDB_ID_TOKEN, &identity.tmdb_id().to_string())
        .replace(SEASON_TOKEN, &identity.season().to_string())
        .replace(EPISODE_TOKEN, &identity.episode().to_string())
}

pub fn resolve_sources(
    identity: &ContentIdentity,
    registry: &SourceRegistry,
) -> Vec<ResolvedSource> {
    registry
        .templates()
        .iter()
        .filter_map(|template| {
            let pattern = template.pattern_for(identity.media_kind())?;

            Some(ResolvedSource {
                provider_name: template.provider_name.clone(),
                url: substitute_tokens(pattern, identity),
            })
        })
        .collect()
}
