use quiz_core::model::{Popup, PopupId};

/// Glyph and caption pairs; picked by id so a card keeps its look across renders.
const DECORATIONS: [(&str, &str); 5] = [
    ("⚠️", "Warning!"),
    ("🚫", "Access denied"),
    ("🔔", "New notification"),
    ("🐞", "Bug detected"),
    ("💣", "System overload"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct PopupVm {
    pub id: PopupId,
    pub class: &'static str,
    pub style: String,
    pub icon: &'static str,
    pub caption: &'static str,
}

impl PopupVm {
    #[must_use]
    pub fn new(popup: &Popup, size: f64) -> Self {
        let (icon, caption) = decoration(popup.id());
        Self {
            id: popup.id(),
            class: if popup.is_floating() {
                "popup-card floating"
            } else {
                "popup-card"
            },
            style: format!(
                "left: {:.0}px; top: {:.0}px; width: {size:.0}px; height: {size:.0}px;",
                popup.x(),
                popup.y()
            ),
            icon,
            caption,
        }
    }
}

#[must_use]
pub fn map_popups(popups: &[Popup], size: f64) -> Vec<PopupVm> {
    popups.iter().map(|popup| PopupVm::new(popup, size)).collect()
}

fn decoration(id: PopupId) -> (&'static str, &'static str) {
    // Length is a small constant, so the cast cannot truncate.
    let slot = (id.value() % DECORATIONS.len() as u64) as usize;
    DECORATIONS[slot]
}
