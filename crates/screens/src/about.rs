use crate::view::{AboutView, ControlState};

/// One about-screen row: a display title plus the contact target its
/// tap opens. Both are build-time configuration.
#[derive(Debug, Clone, Default)]
pub struct AboutEntry {
    pub title: String,
    pub contact: String,
}

impl AboutEntry {
    pub fn new(title: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contact: contact.into(),
        }
    }
}

/// Build-time configuration of the about screen.
#[derive(Debug, Clone, Default)]
pub struct AboutConfig {
    pub maintainer: AboutEntry,
    pub kernel: AboutEntry,
}

/// Project the about screen: an entry without a title is hidden
/// entirely, one without a contact is shown but not tappable.
pub fn about_view(config: &AboutConfig) -> AboutView {
    AboutView {
        maintainer: entry_state(&config.maintainer),
        kernel: entry_state(&config.kernel),
    }
}

fn entry_state(entry: &AboutEntry) -> ControlState {
    if entry.title.is_empty() {
        ControlState::hidden()
    } else if entry.contact.is_empty() {
        ControlState::disabled()
    } else {
        ControlState::enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_hides_the_entry_regardless_of_contact() {
        let config = AboutConfig {
            maintainer: AboutEntry::new("", "maintainer@example.org"),
            kernel: AboutEntry::default(),
        };
        let view = about_view(&config);
        assert!(!view.maintainer.visible);
        assert!(!view.kernel.visible);
    }

    #[test]
    fn missing_contact_shows_a_disabled_entry() {
        let config = AboutConfig {
            maintainer: AboutEntry::new("Jane", ""),
            ..AboutConfig::default()
        };
        let view = about_view(&config);
        assert!(view.maintainer.visible);
        assert!(!view.maintainer.enabled);
    }

    #[test]
    fn full_entry_is_enabled() {
        let config = AboutConfig {
            kernel: AboutEntry::new("perf-kernel", "kernel@example.org"),
            ..AboutConfig::default()
        };
        let view = about_view(&config);
        assert!(view.kernel.visible);
        assert!(view.kernel.enabled);
    }
}
