// SPDX-License-Identifier: MPL-2.0
use crate::domain::video::VideoId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Playback Error: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Unknown video id: {0}")]
    UnknownVideo(VideoId),
}

/// Reasons a catalog can be rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog has no records, so "next" would be undefined.
    #[error("catalog contains no videos")]
    Empty,

    /// Two records share the same id.
    #[error("duplicate video id {0}")]
    DuplicateId(VideoId),

    /// Ids must be positive integers.
    #[error("video id must be positive, got {0}")]
    InvalidId(i64),
}

/// Playback failures reported by a playback surface.
///
/// None of these are fatal: the controller absorbs them into a paused state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The platform refused a programmatic playback start (autoplay policy).
    #[error("Autoplay rejected: {0}")]
    AutoplayRejected(String),

    /// The media reference could not be opened.
    #[error("Media source unavailable: {0}")]
    SourceUnavailable(String),

    /// Generic error with raw message
    #[error("{0}")]
    Other(String),
}

impl PlaybackError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::AutoplayRejected(_) => "error-playback-autoplay-rejected",
            PlaybackError::SourceUnavailable(_) => "error-playback-source-unavailable",
            PlaybackError::Other(_) => "error-playback-general",
        }
    }

    /// Returns true for the policy refusal that leaves the player paused
    /// without any user-visible error.
    pub fn is_autoplay_rejection(&self) -> bool {
        matches!(self, PlaybackError::AutoplayRejected(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_converts_into_error() {
        let err: Error = CatalogError::DuplicateId(VideoId::new(2)).into();
        assert_eq!(format!("{}", err), "Catalog Error: duplicate video id 2");
    }

    #[test]
    fn unknown_video_names_the_id() {
        let err = Error::UnknownVideo(VideoId::new(42));
        assert!(format!("{}", err).contains("42"));
    }

    #[test]
    fn playback_error_i18n_keys() {
        assert_eq!(
            PlaybackError::AutoplayRejected("policy".into()).i18n_key(),
            "error-playback-autoplay-rejected"
        );
        assert_eq!(
            PlaybackError::SourceUnavailable("gone".into()).i18n_key(),
            "error-playback-source-unavailable"
        );
        assert_eq!(
            PlaybackError::Other("x".into()).i18n_key(),
            "error-playback-general"
        );
    }

    #[test]
    fn only_autoplay_rejection_is_policy_refusal() {
        assert!(PlaybackError::AutoplayRejected("NotAllowedError".into()).is_autoplay_rejection());
        assert!(!PlaybackError::Other("decode".into()).is_autoplay_rejection());
    }
}
