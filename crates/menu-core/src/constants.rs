// Attribute contract shared with the stylesheet and assistive tech.

// Tokens written to both attributes; lowercase, nothing else is ever written
pub const TRUE_TOKEN: &str = "true";
pub const FALSE_TOKEN: &str = "false";

// Attribute names
pub const VISIBLE_ATTRIBUTE: &str = "data-visible"; // on the navigation container
pub const EXPANDED_ATTRIBUTE: &str = "aria-expanded"; // on the toggle button

// Default element lookups
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".primary-navigation";
pub const DEFAULT_TRIGGER_SELECTOR: &str = ".mobile-nav-toggle";
