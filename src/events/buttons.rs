use crate::audio::AudioGraph;
use crate::constants::{NEXT_BUTTON_ID, PLAY_BUTTON_ID, PREV_BUTTON_ID};
use crate::core::{AppCommand, CommandQueue, PlayerCommand};
use crate::dom;
use web_sys as web;

pub fn wire_buttons(document: &web::Document, queue: &CommandQueue) {
    let bindings = [
        (PLAY_BUTTON_ID, PlayerCommand::TogglePlay),
        (NEXT_BUTTON_ID, PlayerCommand::Next),
        (PREV_BUTTON_ID, PlayerCommand::Previous),
    ];
    for (id, cmd) in bindings {
        let q = queue.clone();
        dom::add_click_listener(document, id, move || q.push(AppCommand::Player(cmd)));
    }
}

/// Advance the playlist when the current track finishes.
pub fn wire_track_ended(audio: &AudioGraph, queue: &CommandQueue) {
    let q = queue.clone();
    dom::add_event_listener(audio.event_target(), "ended", move || {
        q.push(AppCommand::Player(PlayerCommand::Ended))
    });
}
