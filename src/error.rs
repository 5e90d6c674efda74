// SPDX: CC0-1.0

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The display surface could not be created. Nothing usable was left behind.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create event loop")]
    EventLoop(#[source] BoxError),

    #[error("failed to create window")]
    Window(#[source] BoxError),

    #[error("failed to create pixel buffer of {width}x{height}")]
    Buffer {
        width: u32,
        height: u32,
        #[source]
        source: BoxError,
    },
}

/// A finished frame could not be shown.
#[derive(Debug, Error)]
#[error("failed to present frame")]
pub struct PresentError(#[source] pub BoxError);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn init_errors_keep_their_source() {
        let err = InitError::Buffer {
            width: 0,
            height: 512,
            source: "surface has no area".into(),
        };
        assert_eq!(err.to_string(), "failed to create pixel buffer of 0x512");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("surface has no area")
        );
    }
}
