//! Keeps the menu's `data-visible` and the button's `aria-expanded` in step.
//!
//! The controller holds no copy of the state: every call reads the
//! container's attribute and writes both attributes back.

use crate::config::BindingConfig;
use crate::constants::{EXPANDED_ATTRIBUTE, VISIBLE_ATTRIBUTE};
use crate::error::BindingError;
use crate::host::{AttributeHost, ElementLocator};
use crate::state::MenuState;
use crate::toggle;

pub struct MenuToggleController<E: AttributeHost> {
    container: E,
    trigger: E,
    visible_attribute: String,
    expanded_attribute: String,
}

impl<E: AttributeHost> MenuToggleController<E> {
    pub fn new(container: E, trigger: E) -> Self {
        Self {
            container,
            trigger,
            visible_attribute: VISIBLE_ATTRIBUTE.to_string(),
            expanded_attribute: EXPANDED_ATTRIBUTE.to_string(),
        }
    }

    pub fn with_config(container: E, trigger: E, config: &BindingConfig) -> Self {
        Self {
            container,
            trigger,
            visible_attribute: config.visible_attribute.clone(),
            expanded_attribute: config.expanded_attribute.clone(),
        }
    }

    /// Look up both elements and bind to them. Nothing is written here;
    /// the first missing element (trigger, then container) is reported.
    pub fn bind<L>(locator: &L, config: &BindingConfig) -> Result<Self, BindingError>
    where
        L: ElementLocator<Element = E>,
    {
        let trigger = locator.locate(&config.trigger_selector).ok_or_else(|| {
            BindingError::MissingTrigger {
                selector: config.trigger_selector.clone(),
            }
        })?;
        let container = locator.locate(&config.container_selector).ok_or_else(|| {
            BindingError::MissingContainer {
                selector: config.container_selector.clone(),
            }
        })?;
        let controller = Self::with_config(container, trigger, config);
        log::info!(
            "[menu] bound trigger={} container={} state={}",
            config.trigger_selector,
            config.container_selector,
            controller.state()
        );
        Ok(controller)
    }

    /// Handle one activation of the trigger and return the new state.
    pub fn on_activate(&self) -> MenuState {
        let current = self.container.attribute(&self.visible_attribute);
        let out = toggle::next(current.as_deref());
        self.container.set_attribute(&self.visible_attribute, out.visible);
        self.trigger.set_attribute(&self.expanded_attribute, out.expanded);
        out.state()
    }

    /// Current state as read from the container.
    pub fn state(&self) -> MenuState {
        MenuState::from_attribute(self.container.attribute(&self.visible_attribute).as_deref())
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn trigger(&self) -> &E {
        &self.trigger
    }
}
