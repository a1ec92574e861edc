mod openai_service;
pub(crate) use openai_service::*;

mod playback_service;
pub(crate) use playback_service::*;

mod ytdlp_service;
pub(crate) use ytdlp_service::*;
