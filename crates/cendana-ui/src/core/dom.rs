//! DOM bindings for the modal tracker and small page-glue helpers.
//!
//! Modal show/close traffic rides on two custom events so the tracker works
//! with any markup that plays along: opening dispatches a bubbling
//! [`MODAL_SHOW_EVENT`] at the element, closing dispatches a cancelable
//! [`MODAL_HIDE_EVENT`] first and only hides when nobody vetoed it.

use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Element};

use crate::core::modal_stack::{
    CONFIRM_DIALOG_CLASS, CloseCommand, ModalHandle, ModalSurface,
};
use crate::core::roles;

/// Bubbling event announcing a modal became visible.
pub const MODAL_SHOW_EVENT: &str = "cendana-modal-show";

/// Bubbling, cancelable event announcing a modal is about to close.
pub const MODAL_HIDE_EVENT: &str = "cendana-modal-hide";

/// Attribute naming the roles allowed to keep an element.
pub const ROLES_ATTR: &str = "data-acc-roles";

const OPEN_MODAL_SELECTOR: &str = ".modal.show";

fn document() -> Document {
    gloo::utils::document()
}

/// Handle for the element an event was dispatched at.
#[must_use]
pub fn handle_from_target(event: &web_sys::Event) -> Option<ModalHandle> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    Some(handle_for(&element))
}

fn handle_for(element: &Element) -> ModalHandle {
    let class_list = element.class_list();
    let classes: Vec<String> = (0..class_list.length())
        .filter_map(|index| class_list.item(index))
        .collect();
    ModalHandle::new(element.id(), classes)
}

/// Live DOM queries backing the tracker's discovery and confirmation guard.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ModalSurface for DocumentSurface {
    fn confirmation_open(&self) -> bool {
        document()
            .query_selector(&format!(".{CONFIRM_DIALOG_CLASS}"))
            .ok()
            .flatten()
            .is_some()
    }

    fn open_modals(&self) -> Vec<ModalHandle> {
        let mut handles = Vec::new();
        if let Ok(nodes) = document().query_selector_all(OPEN_MODAL_SELECTOR) {
            for index in 0..nodes.length() {
                let Some(node) = nodes.item(index) else {
                    continue;
                };
                if let Ok(element) = node.dyn_into::<Element>() {
                    handles.push(handle_for(&element));
                }
            }
        }
        handles
    }
}

/// Show the modal with this id and announce it to the tracker.
pub fn open_modal(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        return;
    };
    let _ = element.class_list().add_1("show");
    let _ = dispatch(&element, MODAL_SHOW_EVENT, false);
}

/// Ask the modal with this id to close.
///
/// Returns `false` when the close was vetoed (or the element is gone); the
/// modal stays visible in that case.
#[must_use]
pub fn request_close(id: &str) -> bool {
    let Some(element) = document().get_element_by_id(id) else {
        return false;
    };
    if !dispatch(&element, MODAL_HIDE_EVENT, true) {
        return false;
    }
    let _ = element.class_list().remove_1("show");
    true
}

/// Apply a batch of close commands from the tracker, in order.
pub fn apply_close_commands(commands: &[CloseCommand]) {
    for command in commands {
        let _ = request_close(&command.id);
    }
}

/// Remove every role-gated element the user may not see.
pub fn prune_unauthorized(held: &[String]) {
    let selector = format!("[{ROLES_ATTR}]");
    if let Ok(nodes) = document().query_selector_all(&selector) {
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            let required = element.get_attribute(ROLES_ATTR).unwrap_or_default();
            if !roles::allowed(&required, held) {
                element.remove();
            }
        }
    }
}

/// Whether the text in an input exceeds its visible box.
#[must_use]
pub fn input_overflows(id: &str) -> bool {
    document()
        .get_element_by_id(id)
        .is_some_and(|element| element.scroll_width() > element.client_width())
}

/// Smooth-scroll a container to its end, e.g. after appending a table row.
pub fn scroll_to_end(container_id: &str) {
    let Some(element) = document().get_element_by_id(container_id) else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(10_000.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_by_with_scroll_to_options(&options);
}

/// Dispatch one of the modal events; returns `false` when it was canceled.
fn dispatch(element: &Element, name: &str, cancelable: bool) -> bool {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(cancelable);
    CustomEvent::new_with_event_init_dict(name, &init)
        .map(|event| element.dispatch_event(&event).unwrap_or(true))
        .unwrap_or(true)
}
