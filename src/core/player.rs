use smallvec::{smallvec, SmallVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePlay,
    Next,
    Previous,
    Select(usize),
    /// The current track finished on its own.
    Ended,
    /// The audio element refused to start (e.g. autoplay blocked).
    PlaybackFailed,
}

/// What the audio element should do in response to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEffect {
    Play,
    Pause,
    Load(usize),
}

pub type Effects = SmallVec<[PlayerEffect; 2]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    track_count: usize,
    current: usize,
    playing: bool,
}

impl PlayerState {
    pub fn new(track_count: usize) -> Self {
        Self {
            track_count,
            current: 0,
            playing: false,
        }
    }

    pub fn current_track(&self) -> Option<usize> {
        (self.track_count > 0).then_some(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Text for the play/pause button.
    pub fn play_button_label(&self) -> &'static str {
        if self.playing {
            "pause"
        } else {
            "play"
        }
    }

    pub fn dispatch(&mut self, cmd: PlayerCommand) -> Effects {
        if self.track_count == 0 {
            return Effects::new();
        }
        match cmd {
            PlayerCommand::TogglePlay => {
                self.playing = !self.playing;
                if self.playing {
                    smallvec![PlayerEffect::Play]
                } else {
                    smallvec![PlayerEffect::Pause]
                }
            }
            PlayerCommand::Next => self.switch_to((self.current + 1) % self.track_count),
            PlayerCommand::Previous => {
                let prev = if self.current == 0 {
                    self.track_count - 1
                } else {
                    self.current - 1
                };
                self.switch_to(prev)
            }
            PlayerCommand::Select(i) if i < self.track_count => self.switch_to(i),
            PlayerCommand::Select(_) => Effects::new(),
            PlayerCommand::PlaybackFailed => {
                self.playing = false;
                Effects::new()
            }
            PlayerCommand::Ended => {
                self.playing = true;
                self.switch_to((self.current + 1) % self.track_count)
            }
        }
    }

    fn switch_to(&mut self, index: usize) -> Effects {
        self.current = index;
        if self.playing {
            smallvec![PlayerEffect::Load(index), PlayerEffect::Play]
        } else {
            smallvec![PlayerEffect::Load(index)]
        }
    }
}

/// Display name for a track URL: its last path segment without query or fragment.
pub fn track_display_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(path)
}
