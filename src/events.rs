use crate::constants::ACTIVATION_EVENT;
use crate::dom::{self, DomElement};
use menu_core::MenuToggleController;
use std::rc::Rc;

// One listener per trigger; the controller lives as long as the page.
pub fn wire_menu_toggle(controller: Rc<MenuToggleController<DomElement>>) -> anyhow::Result<()> {
    let trigger = controller.trigger().0.clone();
    dom::add_listener(&trigger, ACTIVATION_EVENT, move || {
        controller.on_activate();
    })
}
