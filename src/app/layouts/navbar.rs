use dioxus::prelude::*;

use crate::app::components::{Icon, IconKind, MobileMenu, NavItem, NotificationPanel, UserMenu};
use crate::app::pages::portal_routes::Route;
use crate::config::PortalConfig;
use crate::domain::models::{BrandInfo, NavDestination};
use crate::shared::hooks::{use_scroll_state, use_toaster};
use crate::shared::state::{NavTheme, NavbarState, Panel};

/// Fixed top bar of the portal.
///
/// Owns every piece of transient UI state: the scroll-derived theme and the
/// three overlay flags. Children only receive props and callbacks.
#[component]
pub fn Navbar(config: PortalConfig) -> Element {
    let scroll_state = use_scroll_state();
    let mut state = use_signal(NavbarState::default);
    let toaster = use_toaster();

    let theme = NavTheme::from(scroll_state());
    let snapshot = *state.read();
    let mobile_open = snapshot.is_open(Panel::MobileMenu);
    let hamburger_class = format!("{} c-navbar__control--hamburger", theme.control_class());

    rsx! {
        nav { class: theme.bar_class(),
            div { class: "c-navbar__container",
                div { class: "c-navbar__row",
                    NavLogo { brand: config.brand.clone(), theme }

                    // Desktop navigation (md and up)
                    div { class: "c-navbar__desktop",
                        for destination in NavDestination::PRIMARY {
                            NavItem { to: destination, theme }
                        }

                        NotificationPanel {
                            notifications: config.notifications.clone(),
                            theme,
                            open: snapshot.is_open(Panel::Notifications),
                            on_toggle: move |_| {
                                state.write().toggle(Panel::Notifications);
                            },
                            on_select: move |id: u32| {
                                let notice = state.read().acknowledge_notification(id);
                                toaster.notify(notice);
                            },
                        }

                        UserMenu {
                            user: config.user.clone(),
                            theme,
                            open: snapshot.is_open(Panel::UserDropdown),
                            on_toggle: move |_| {
                                state.write().toggle(Panel::UserDropdown);
                            },
                            on_logout: move |_| {
                                let notice = state.write().logout(Panel::UserDropdown);
                                toaster.notify(notice);
                            },
                        }
                    }

                    button {
                        class: "{hamburger_class}",
                        aria_label: "Toggle navigation",
                        aria_expanded: "{mobile_open}",
                        onclick: move |_| {
                            state.write().toggle(Panel::MobileMenu);
                        },
                        if mobile_open {
                            Icon { kind: IconKind::Close, size: 24 }
                        } else {
                            Icon { kind: IconKind::Menu, size: 24 }
                        }
                    }
                }
            }

            if mobile_open {
                MobileMenu {
                    user: config.user.clone(),
                    notification_count: config.notification_count(),
                    on_navigate: move |destination: NavDestination| {
                        state.write().activate_mobile_link(destination);
                    },
                    on_logout: move |_| {
                        let notice = state.write().logout(Panel::MobileMenu);
                        toaster.notify(notice);
                    },
                }
            }
        }

        // Keeps page content clear of the fixed bar
        div { class: "c-navbar__spacer" }
    }
}

#[component]
fn NavLogo(brand: BrandInfo, theme: NavTheme) -> Element {
    rsx! {
        div { class: "c-logo",
            div { class: theme.logo_badge_class(),
                span { class: "c-logo__initials", "{brand.initials}" }
            }
            Link {
                to: Route::Home {},
                class: "c-logo__link",
                span { class: theme.logo_title_class(), "{brand.title}" }
                span { class: theme.logo_subtitle_class(), "{brand.subtitle}" }
            }
        }
    }
}
