use crate::constants::{
    DEFAULT_CONTAINER_SELECTOR, DEFAULT_TRIGGER_SELECTOR, EXPANDED_ATTRIBUTE, VISIBLE_ATTRIBUTE,
};

/// Where to find the two elements and which attributes carry the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingConfig {
    pub container_selector: String,
    pub trigger_selector: String,
    pub visible_attribute: String,
    pub expanded_attribute: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            trigger_selector: DEFAULT_TRIGGER_SELECTOR.to_string(),
            visible_attribute: VISIBLE_ATTRIBUTE.to_string(),
            expanded_attribute: EXPANDED_ATTRIBUTE.to_string(),
        }
    }
}

impl BindingConfig {
    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    pub fn with_trigger_selector(mut self, selector: impl Into<String>) -> Self {
        self.trigger_selector = selector.into();
        self
    }

    pub fn with_visible_attribute(mut self, name: impl Into<String>) -> Self {
        self.visible_attribute = name.into();
        self
    }

    pub fn with_expanded_attribute(mut self, name: impl Into<String>) -> Self {
        self.expanded_attribute = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup_contract() {
        let c = BindingConfig::default();
        assert_eq!(c.container_selector, ".primary-navigation");
        assert_eq!(c.trigger_selector, ".mobile-nav-toggle");
        assert_eq!(c.visible_attribute, "data-visible");
        assert_eq!(c.expanded_attribute, "aria-expanded");
    }

    #[test]
    fn setters_override_single_fields() {
        let c = BindingConfig::default()
            .with_trigger_selector("#menu-button")
            .with_expanded_attribute("data-expanded");
        assert_eq!(c.trigger_selector, "#menu-button");
        assert_eq!(c.expanded_attribute, "data-expanded");
        assert_eq!(c.container_selector, DEFAULT_CONTAINER_SELECTOR);
        assert_eq!(c.visible_attribute, VISIBLE_ATTRIBUTE);
    }
}
