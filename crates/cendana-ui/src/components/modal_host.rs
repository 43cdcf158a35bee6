//! Document-level wiring between the DOM and the modal stack tracker.

use crate::core::dom::{self, DocumentSurface, MODAL_HIDE_EVENT, MODAL_SHOW_EVENT};
use crate::core::modal_stack::{CloseOutcome, ModalStackTracker};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Invisible controller owning the page's [`ModalStackTracker`].
///
/// Mounted once by the app shell; subscribes the document-level show, hide,
/// and keydown streams and lives for the whole page.
#[function_component(ModalEscapeController)]
pub(crate) fn modal_escape_controller() -> Html {
    let tracker = use_mut_ref(ModalStackTracker::new);

    use_effect_with_deps(
        move |_| {
            let document = gloo::utils::document();

            let show = EventListener::new(&document, MODAL_SHOW_EVENT, {
                let tracker = tracker.clone();
                move |event| {
                    if let Some(handle) = dom::handle_from_target(event) {
                        tracker.borrow_mut().on_shown(&handle);
                    }
                }
            });

            let hide = EventListener::new_with_options(
                &document,
                MODAL_HIDE_EVENT,
                EventListenerOptions::enable_prevent_default(),
                {
                    let tracker = tracker.clone();
                    move |event| {
                        if let Some(handle) = dom::handle_from_target(event) {
                            if tracker.borrow_mut().on_hiding(&handle) == CloseOutcome::Vetoed {
                                event.prevent_default();
                            }
                        }
                    }
                },
            );

            let keys = EventListener::new(&document, "keydown", {
                let tracker = tracker.clone();
                move |event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if key_event.key() != "Escape" {
                        return;
                    }
                    // Collect commands first: applying them re-enters the
                    // hide listener, which needs the tracker borrow.
                    let commands = tracker.borrow_mut().on_escape(&DocumentSurface);
                    dom::apply_close_commands(&commands);
                }
            });

            move || {
                drop(show);
                drop(hide);
                drop(keys);
            }
        },
        (),
    );

    Html::default()
}
