//! Audio cue played when a phrase is tapped
//!
//! - Decoder: Symphonia, whole clip decoded up front
//! - Output: cpal stream on the default device
//!
//! Audio is optional. A missing asset, an undecodable asset and a missing
//! output device all leave the app running without sound.

pub mod decoder;
pub mod output;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use decoder::{decode, decode_file, Clip};
pub use output::TickPlayer;

/// File name of the bundled cue
pub const CUE_NAME: &str = "tick";
/// Extension of the bundled cue
pub const CUE_EXTENSION: &str = "wav";

/// Errors from loading or playing the cue
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio asset '{0}' not found")]
    NotFound(String),
    #[error("Failed to open audio file: {0}")]
    Open(#[from] std::io::Error),
    #[error("Unsupported audio format: {0}")]
    Probe(String),
    #[error("No audio track found")]
    NoTrack,
    #[error("Failed to decode audio: {0}")]
    Decode(String),
    #[error("No output device available")]
    NoDevice,
    #[error("Audio output error: {0}")]
    Output(String),
}

/// Something that can sound the tap cue.
///
/// `play` is fire-and-forget. Playing while the cue is still sounding
/// restarts it.
pub trait Cue {
    fn play(&mut self);
}

/// File name of the cue, e.g. `tick.wav`
pub fn cue_file_name() -> String {
    format!("{}.{}", CUE_NAME, CUE_EXTENSION)
}

/// Directories searched for the cue, most specific first
pub fn search_dirs(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = configured {
        dirs.push(dir.to_path_buf());
    }
    dirs.push(PathBuf::from("assets"));
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join("assets"));
    }
    dirs.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
    dirs
}

/// Find the cue file in the first directory that has it
pub fn resolve_asset(dirs: &[PathBuf]) -> Result<PathBuf, AudioError> {
    let name = cue_file_name();
    dirs.iter()
        .map(|dir| dir.join(&name))
        .find(|path| path.is_file())
        .ok_or(AudioError::NotFound(name))
}

/// Resolve, decode and open the cue.
pub fn open_cue(dirs: &[PathBuf]) -> Result<TickPlayer, AudioError> {
    let path = resolve_asset(dirs)?;
    let clip = decode_file(&path)?;
    tracing::debug!(path = %path.display(), ms = clip.duration_ms(), "cue decoded");
    TickPlayer::open(clip)
}

/// Load the cue, degrading to `None` on any failure
pub fn load_cue(dirs: &[PathBuf]) -> Option<Box<dyn Cue>> {
    match open_cue(dirs) {
        Ok(player) => Some(Box::new(player)),
        Err(e) => {
            tracing::warn!("sound disabled: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_file_name() {
        assert_eq!(cue_file_name(), "tick.wav");
    }

    #[test]
    fn test_search_dirs_configured_first() {
        let dirs = search_dirs(Some(Path::new("/opt/taptext")));
        assert_eq!(dirs[0], PathBuf::from("/opt/taptext"));
        assert!(dirs.len() >= 3);
    }

    #[test]
    fn test_resolve_asset_missing() {
        let dirs = vec![PathBuf::from("/nonexistent/taptext/assets")];
        let result = resolve_asset(&dirs);
        assert!(matches!(result, Err(AudioError::NotFound(name)) if name == "tick.wav"));
    }

    #[test]
    fn test_load_cue_missing_is_soft() {
        let dirs = vec![PathBuf::from("/nonexistent/taptext/assets")];
        assert!(load_cue(&dirs).is_none());
    }

    #[test]
    fn test_bundled_asset_resolves() {
        let dirs = vec![Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")];
        let path = resolve_asset(&dirs).unwrap();
        assert!(path.ends_with("tick.wav"));
    }
}
