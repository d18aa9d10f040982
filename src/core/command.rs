use super::player::PlayerCommand;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Everything the UI can ask of the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Player(PlayerCommand),
    /// Double (`true`) or halve the number of bars.
    ResizeBins { up: bool },
    ToggleHint,
}

/// Commands queued by event handlers and drained once per frame.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue(Rc<RefCell<VecDeque<AppCommand>>>);

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, cmd: AppCommand) {
        self.0.borrow_mut().push_back(cmd);
    }

    /// Take every pending command in arrival order.
    pub fn drain(&self) -> Vec<AppCommand> {
        self.0.borrow_mut().drain(..).collect()
    }
}

#[inline]
pub fn command_for_key(key: &str) -> Option<AppCommand> {
    match key {
        " " => Some(AppCommand::Player(PlayerCommand::TogglePlay)),
        "ArrowRight" => Some(AppCommand::Player(PlayerCommand::Next)),
        "ArrowLeft" => Some(AppCommand::Player(PlayerCommand::Previous)),
        "]" => Some(AppCommand::ResizeBins { up: true }),
        "[" => Some(AppCommand::ResizeBins { up: false }),
        "h" | "H" => Some(AppCommand::ToggleHint),
        _ => None,
    }
}
