use crate::state::MenuState;

/// Tokens to write after one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub visible: &'static str,
    pub expanded: &'static str,
}

impl ToggleOutcome {
    pub fn state(&self) -> MenuState {
        MenuState::from_attribute(Some(self.visible))
    }
}

impl From<MenuState> for ToggleOutcome {
    fn from(state: MenuState) -> Self {
        let token = state.as_token();
        Self {
            visible: token,
            expanded: token,
        }
    }
}

/// Compute the next attribute pair from the container's current
/// `data-visible` value. Opens only when the value is exactly `"false"`.
#[inline]
pub fn next(current_visible: Option<&str>) -> ToggleOutcome {
    MenuState::from_attribute(current_visible).toggled().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_opens() {
        let out = next(Some("false"));
        assert_eq!(out.visible, "true");
        assert_eq!(out.expanded, "true");
        assert_eq!(out.state(), MenuState::Open);
    }

    #[test]
    fn true_closes() {
        let out = next(Some("true"));
        assert_eq!(out.visible, "false");
        assert_eq!(out.expanded, "false");
    }

    #[test]
    fn anything_else_closes() {
        for v in [None, Some("TRUE"), Some("False"), Some("1"), Some("")] {
            let out = next(v);
            assert_eq!(out, ToggleOutcome::from(MenuState::Closed), "input {:?}", v);
        }
    }

    #[test]
    fn outcome_is_always_in_lockstep() {
        for v in [None, Some("true"), Some("false"), Some("yes")] {
            let out = next(v);
            assert_eq!(out.visible, out.expanded);
        }
    }
}
