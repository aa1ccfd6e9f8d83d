#![cfg(target_arch = "wasm32")]
use menu_core::{BindingConfig, MenuToggleController};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("menu-toggle-web starting");

    // A page without the menu keeps its static markup; report once and carry on.
    if let Err(e) = init(&BindingConfig::default()) {
        log::error!("init error: {:#}", e);
    }
    Ok(())
}

fn init(config: &BindingConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let controller = MenuToggleController::bind(&dom::DocumentLocator(document), config)?;
    events::wire_menu_toggle(Rc::new(controller))
}
