/// Static pairing of a screen with its declarative layout, consumed by
/// the external settings-search subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub screen: &'static str,
    pub layout: &'static str,
    pub keywords: &'static [&'static str],
}

const SEARCH_INDEX: &[ScreenDescriptor] = &[
    ScreenDescriptor {
        screen: "about",
        layout: "settings_about",
        keywords: &["maintainer", "kernel"],
    },
    ScreenDescriptor {
        screen: "navigation_bar",
        layout: "settings_navigation",
        keywords: &["navbar", "navigation", "layout", "pulse"],
    },
    ScreenDescriptor {
        screen: "pulse",
        layout: "pulse_settings",
        keywords: &["pulse", "visualizer", "lavalamp", "color"],
    },
];

/// All indexable screens of this surface.
pub fn search_index() -> &'static [ScreenDescriptor] {
    SEARCH_INDEX
}
