//! High-score persistence
//!
//! The only thing this game persists: a single non-negative integer in a
//! plain-text file. A missing or unparseable file silently reads as 0; the
//! file is only rewritten at game-over when the session beat it.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the high-score store.
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Resolve the high-score file next to the executable, so the score stays
/// with the installation no matter where the game is launched from. Falls
/// back to the working directory when the executable path is unavailable
/// (wasm, unusual launchers).
pub fn high_score_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(HIGH_SCORE_FILE)))
        .unwrap_or_else(|| PathBuf::from(HIGH_SCORE_FILE))
}

/// Read the stored high score. Missing or corrupt storage reads as 0.
pub fn load_high_score(path: impl AsRef<Path>) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0)
}

/// Overwrite the stored high score.
pub fn save_high_score(path: impl AsRef<Path>, score: u32) -> io::Result<()> {
    fs::write(path, score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_sits_next_to_executable() {
        let path = high_score_path();
        assert!(path.ends_with(HIGH_SCORE_FILE));
        if let Ok(exe) = std::env::current_exe() {
            assert_eq!(path.parent(), exe.parent());
        }
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_high_score(dir.path().join("nope.txt")), 0);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(load_high_score(&path), 0);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        save_high_score(&path, 500).unwrap();
        assert_eq!(load_high_score(&path), 500);
    }

    #[test]
    fn test_trailing_whitespace_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "300\n").unwrap();
        assert_eq!(load_high_score(&path), 300);
    }

    #[test]
    fn test_write_only_when_beaten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        save_high_score(&path, 300).unwrap();

        // The game-over flow only writes when the session score is higher
        for (session_score, expected) in [(500u32, 500u32), (100, 500)] {
            let stored = load_high_score(&path);
            if session_score > stored {
                save_high_score(&path, session_score).unwrap();
            }
            assert_eq!(load_high_score(&path), expected);
        }
    }
}
