//! Preference screens of the slate settings surface.
//!
//! The host UI toolkit owns rendering and click dispatch; this crate
//! owns the state: pure view projection from a settings [`Snapshot`],
//! change handling that yields the store write plus the recomputed
//! view, and the re-entrancy guard around navbar visibility switches.

mod about;
mod change;
mod cooldown;
mod gate;
mod navigation;
mod search;
mod view;

pub use about::{about_view, AboutConfig, AboutEntry};
pub use change::{commit, ChangeOutcome, SettingsGate, StoreWrite, ViewUpdate};
pub use cooldown::{NavSwitchGuard, NAV_SWITCH_COOLDOWN};
pub use gate::project;
pub use navigation::{project_navigation, NavigationConfig};
pub use search::{search_index, ScreenDescriptor};
pub use view::{AboutView, ControlState, NavigationView, PulseView};
