use dioxus::prelude::*;

use crate::app::components::icons::{Icon, IconKind};
use crate::app::components::nav_item::MobileNavItem;
use crate::domain::models::{NavDestination, UserIdentity};

/// Collapsed navigation for narrow viewports. Replaces both desktop dropdowns.
#[component]
pub fn MobileMenu(
    user: UserIdentity,
    notification_count: usize,
    on_navigate: EventHandler<NavDestination>,
    on_logout: EventHandler<()>,
) -> Element {
    let student_id_label = user.student_id_label();

    rsx! {
        div { class: "c-mobile-menu",
            div { class: "c-mobile-menu__container",
                div { class: "c-mobile-menu__links",
                    for destination in NavDestination::PRIMARY {
                        MobileNavItem { to: destination, on_navigate }
                    }
                }

                div { class: "c-mobile-menu__account",
                    div { class: "c-mobile-menu__identity",
                        span { class: "c-avatar c-avatar--large",
                            Icon { kind: IconKind::User, size: 20 }
                        }
                        div {
                            p { class: "c-mobile-menu__name", "{user.display_name}" }
                            p { class: "c-mobile-menu__student-id", "{student_id_label}" }
                        }
                    }

                    div { class: "c-mobile-menu__actions",
                        // Count only, no sub-panel on mobile
                        button { class: "c-mobile-menu__action",
                            Icon { kind: IconKind::Bell, size: 18 }
                            span { "Notifications ({notification_count})" }
                        }
                        button {
                            class: "c-mobile-menu__action c-mobile-menu__action--danger",
                            onclick: move |_| on_logout.call(()),
                            Icon { kind: IconKind::LogOut, size: 18 }
                            span { "Logout" }
                        }
                    }
                }
            }
        }
    }
}
