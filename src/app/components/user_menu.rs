use dioxus::prelude::*;

use crate::app::components::icons::{Icon, IconKind};
use crate::app::pages::portal_routes::Route;
use crate::domain::models::{NavDestination, UserIdentity};
use crate::shared::logging::log_navigation;
use crate::shared::state::NavTheme;

/// Avatar trigger with the profile dropdown (identity, profile, settings, logout).
#[component]
pub fn UserMenu(
    user: UserIdentity,
    theme: NavTheme,
    open: bool,
    on_toggle: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let trigger_class = format!("{} c-navbar__control--user", theme.control_class());
    // Rotation is derived from `open`, there is no separate state
    let chevron_class = if open {
        "c-user-menu__chevron c-user-menu__chevron--open"
    } else {
        "c-user-menu__chevron"
    };

    rsx! {
        div { class: "c-dropdown",
            button {
                class: "{trigger_class}",
                aria_label: "Account menu",
                aria_expanded: "{open}",
                onclick: move |_| on_toggle.call(()),
                span { class: "c-avatar",
                    Icon { kind: IconKind::User, size: 16 }
                }
                span { class: "c-user-menu__name", "{user.display_name}" }
                Icon { kind: IconKind::ChevronDown, size: 16, class: chevron_class.to_string() }
            }

            if open {
                div { class: "c-dropdown__panel c-dropdown__panel--user",
                    div { class: "c-user-menu",
                        div { class: "c-user-menu__identity",
                            p { class: "c-user-menu__identity-name", "{user.display_name}" }
                            p { class: "c-user-menu__identity-department", "{user.department}" }
                        }
                        for destination in NavDestination::ACCOUNT {
                            AccountLink { destination }
                        }
                        button {
                            class: "c-user-menu__logout",
                            onclick: move |_| on_logout.call(()),
                            Icon { kind: IconKind::LogOut, size: 16 }
                            span { "Logout" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountLink(destination: NavDestination) -> Element {
    let label = destination.label();

    rsx! {
        Link {
            to: Route::from(destination),
            class: "c-user-menu__link",
            onclick: move |_| log_navigation(destination, false),
            Icon { kind: IconKind::from(destination), size: 16 }
            span { "{label}" }
        }
    }
}
