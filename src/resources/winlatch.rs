use bevy_ecs::prelude::Resource;

pub const DEFAULT_WIN_MESSAGE: &str = "  !! Congratulation !!";

/// One-way flag set when the player piece reaches the target.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct WinLatch {
    solved: bool,
    /// Text written into every instruction once solved.
    pub message: String,
}

impl WinLatch {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            solved: false,
            message: message.into(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Close the latch. Returns `false` if it was already closed.
    pub fn latch(&mut self) -> bool {
        !std::mem::replace(&mut self.solved, true)
    }
}

impl Default for WinLatch {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_MESSAGE)
    }
}
