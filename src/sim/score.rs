//! Scoreboard: catch/miss counters and the terminal flag.
//!
//! Pure state holder. Presentation is someone else's job: readers poll the
//! `revision` counter and republish when it moved, so the simulation never
//! touches the DOM.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    caught: u32,
    missed: u32,
    game_over: bool,
    revision: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_catch(&mut self) {
        self.caught += 1;
        self.revision += 1;
    }

    pub fn record_miss(&mut self) {
        self.missed += 1;
        self.revision += 1;
    }

    /// Terminal: set once, never cleared. Repeat calls do not move the
    /// revision.
    pub fn set_over(&mut self) {
        if !self.game_over {
            self.game_over = true;
            self.revision += 1;
        }
    }

    pub fn caught(&self) -> u32 {
        self.caught
    }

    pub fn missed(&self) -> u32 {
        self.missed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Change counter; equal revisions mean no observable change happened.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
