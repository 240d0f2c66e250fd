use dioxus::prelude::*;

use crate::app::components::icons::{Icon, IconKind};
use crate::app::pages::portal_routes::Route;
use crate::domain::models::NavDestination;
use crate::shared::logging::log_navigation;
use crate::shared::state::NavTheme;

/// Desktop link. Colors follow the bar theme; hover lift and tap press are CSS.
#[component]
pub fn NavItem(to: NavDestination, theme: NavTheme) -> Element {
    let label = to.label();

    rsx! {
        Link {
            to: Route::from(to),
            class: theme.item_class(),
            onclick: move |_| log_navigation(to, false),
            Icon { kind: IconKind::from(to), size: 18 }
            span { class: "c-nav-item__label", "{label}" }
        }
    }
}

/// Mobile menu link. `on_navigate` lets the owner close the menu.
#[component]
pub fn MobileNavItem(to: NavDestination, on_navigate: EventHandler<NavDestination>) -> Element {
    let label = to.label();

    rsx! {
        Link {
            to: Route::from(to),
            class: "c-mobile-nav-item",
            onclick: move |_| on_navigate.call(to),
            span { class: "c-mobile-nav-item__icon",
                Icon { kind: IconKind::from(to), size: 20 }
            }
            span { class: "c-mobile-nav-item__label", "{label}" }
        }
    }
}
