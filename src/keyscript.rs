//! Scripted keyboard input for headless runs.
//!
//! A key script is a plain text file where every line is one frame:
//!
//! ```text
//! # pick up the selected piece and push it left
//! enter
//! left
//! wait 20      # twenty frames with no key
//! .            # one idle frame
//! down space   # two keys on the same frame
//! ```
//!
//! A key listed on a line is down for that frame. It counts as pressed only
//! on the first of consecutive lines listing it, and as released on the
//! first line after that does not list it. Pressing the same key twice in a
//! row takes an idle line in between.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::PuzzleError;
use crate::resources::input::Key;
use crate::systems::input::KeySource;

#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    frames: Vec<FxHashSet<Key>>,
    cursor: usize,
}

impl KeyScript {
    pub fn parse(source: &str) -> Result<Self, PuzzleError> {
        let mut frames = Vec::new();
        for (index, raw) in source.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("wait") => {
                    let token = tokens.next().unwrap_or("");
                    let count: usize = token.parse().map_err(|_| PuzzleError::InvalidWait {
                        line: line_number,
                        token: token.to_string(),
                    })?;
                    frames.extend(std::iter::repeat_with(FxHashSet::default).take(count));
                }
                Some("." | "idle") => frames.push(FxHashSet::default()),
                _ => {
                    let mut keys = FxHashSet::default();
                    for token in line.split_whitespace() {
                        let key = Key::from_name(&token.to_lowercase()).ok_or_else(|| {
                            PuzzleError::UnknownKey {
                                line: line_number,
                                token: token.to_string(),
                            }
                        })?;
                        keys.insert(key);
                    }
                    frames.push(keys);
                }
            }
        }
        Ok(Self { frames, cursor: 0 })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Move to the next frame.
    pub fn advance(&mut self) {
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    /// Number of frames in the script.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    fn frame(&self, index: usize) -> Option<&FxHashSet<Key>> {
        self.frames.get(index)
    }

    fn was_key_down(&self, key: Key) -> bool {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.frame(i))
            .is_some_and(|keys| keys.contains(&key))
    }
}

impl KeySource for KeyScript {
    fn is_key_down(&self, key: Key) -> bool {
        self.frame(self.cursor).is_some_and(|keys| keys.contains(&key))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.is_key_down(key) && !self.was_key_down(key)
    }

    fn is_key_released(&self, key: Key) -> bool {
        self.was_key_down(key) && !self.is_key_down(key)
    }
}
