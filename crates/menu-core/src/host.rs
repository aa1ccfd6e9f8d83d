//! Seams between the controller and whatever owns the elements.
//!
//! The browser front-end implements these over `web_sys`; tests use plain
//! in-memory maps. Element handles are shared references into a tree the
//! host mutates, so writes take `&self`.

/// An element whose string attributes can be read and written.
pub trait AttributeHost {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
}

/// Finds elements by selector.
pub trait ElementLocator {
    type Element: AttributeHost;

    /// First element matching `selector`, if any.
    fn locate(&self, selector: &str) -> Option<Self::Element>;
}

impl<T: AttributeHost + ?Sized> AttributeHost for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

impl<T: AttributeHost + ?Sized> AttributeHost for std::rc::Rc<T> {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}
