use dioxus::prelude::*;

use crate::app::components::icons::{Icon, IconKind};
use crate::domain::models::Notification;
use crate::shared::state::NavTheme;

/// Bell trigger plus the dropdown feed.
///
/// Stateless: the navbar owns the open flag. Entries are never removed, so the
/// unread dot stays as long as the feed is non-empty.
#[component]
pub fn NotificationPanel(
    notifications: Vec<Notification>,
    theme: NavTheme,
    open: bool,
    on_toggle: EventHandler<()>,
    on_select: EventHandler<u32>,
) -> Element {
    let has_unread = !notifications.is_empty();
    let bell_class = format!("{} c-navbar__control--bell", theme.control_class());

    rsx! {
        div { class: "c-dropdown",
            button {
                class: "{bell_class}",
                aria_label: "Notifications",
                aria_expanded: "{open}",
                onclick: move |_| on_toggle.call(()),
                Icon { kind: IconKind::Bell, size: 20 }
                if has_unread {
                    span { class: "c-notification-dot" }
                }
            }

            if open {
                div { class: "c-dropdown__panel c-dropdown__panel--notifications",
                    div { class: "c-notifications",
                        div { class: "c-notifications__header",
                            h3 { class: "c-notifications__title", "Notifications" }
                            // No handler yet: there is no read state to clear
                            span { class: "c-notifications__mark-all", "Mark all as read" }
                        }
                        div { class: "c-notifications__list",
                            for notification in notifications.iter() {
                                NotificationEntry {
                                    key: "{notification.id}",
                                    notification: notification.clone(),
                                    on_select,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationEntry(notification: Notification, on_select: EventHandler<u32>) -> Element {
    let id = notification.id;

    rsx! {
        div {
            class: "c-notifications__item",
            onclick: move |_| on_select.call(id),
            p { class: "c-notifications__text", "{notification.text}" }
            p { class: "c-notifications__time", "{notification.time}" }
        }
    }
}
