use crate::constants::{HINT_OVERLAY_ID, PLAY_BUTTON_ID, TRACK_LABEL_ID};
use crate::core::{track_display_name, PlayerState};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Sync the play button label and track name with the player state
pub fn update_controls(document: &web::Document, player: &PlayerState, tracks: &[String]) {
    dom::set_text(document, PLAY_BUTTON_ID, player.play_button_label());
    let name = match player.current_track().and_then(|i| tracks.get(i).map(|url| (i, url))) {
        Some((i, url)) => format!("{}/{}  {}", i + 1, tracks.len(), track_display_name(url)),
        None => "no tracks".to_string(),
    };
    dom::set_text(document, TRACK_LABEL_ID, &name);
}
