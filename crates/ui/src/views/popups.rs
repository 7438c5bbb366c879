use dioxus::prelude::*;
use quiz_core::model::PopupId;

use crate::vm::PopupVm;

/// Overlay holding every live popup, oldest first.
#[component]
pub fn PopupLayer(popups: Vec<PopupVm>, on_dismiss: EventHandler<PopupId>) -> Element {
    rsx! {
        div { class: "popup-layer",
            for popup in popups {
                PopupCard { key: "{popup.id}", popup: popup.clone(), on_dismiss }
            }
        }
    }
}

#[component]
pub fn PopupCard(popup: PopupVm, on_dismiss: EventHandler<PopupId>) -> Element {
    let id = popup.id;
    rsx! {
        div { class: "{popup.class}", style: "{popup.style}", role: "alert",
            button {
                class: "popup-card__close",
                r#type: "button",
                aria_label: "Close",
                onclick: move |_| on_dismiss.call(id),
                "✕"
            }
            div { class: "popup-card__icon", "{popup.icon}" }
            p { class: "popup-card__caption", "{popup.caption}" }
        }
    }
}
