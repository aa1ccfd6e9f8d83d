use menu_core::{AttributeHost, ElementLocator};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `web_sys::Element` seen through the core attribute seam.
#[derive(Clone, Debug)]
pub struct DomElement(pub web::Element);

impl AttributeHost for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            log::warn!("[dom] set_attribute {}={} failed: {:?}", name, value, e);
        }
    }
}

/// Resolves selectors against one document.
pub struct DocumentLocator(pub web::Document);

impl ElementLocator for DocumentLocator {
    type Element = DomElement;

    fn locate(&self, selector: &str) -> Option<DomElement> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(DomElement),
            Err(e) => {
                log::warn!("[dom] invalid selector {}: {:?}", selector, e);
                None
            }
        }
    }
}

#[inline]
pub fn add_listener(
    element: &web::Element,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    element
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}
