use dioxus::prelude::*;

use crate::domain::models::NavDestination;

/// Stroke icons used by the navbar (lucide outlines)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Info,
    Mail,
    User,
    Settings,
    Menu,
    Close,
    Bell,
    ChevronDown,
    LogOut,
}

impl IconKind {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Home => &[
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            IconKind::Info => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 16v-4",
                "M12 8h.01",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            ],
            IconKind::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            IconKind::Menu => &["M4 6h16M4 12h16M4 18h16"],
            IconKind::Close => &["M18 6 6 18M6 6l12 12"],
            IconKind::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::LogOut => &[
                "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
                "m16 17 5-5-5-5",
                "M21 12H9",
            ],
        }
    }
}

impl From<NavDestination> for IconKind {
    fn from(destination: NavDestination) -> Self {
        match destination {
            NavDestination::Home => IconKind::Home,
            NavDestination::About => IconKind::Info,
            NavDestination::Contact => IconKind::Mail,
            NavDestination::Profile => IconKind::User,
            NavDestination::Settings => IconKind::Settings,
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 20)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "c-icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}
