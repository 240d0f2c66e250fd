use dioxus::prelude::*;

use crate::domain::models::NavDestination;

// Navigation targets of the navbar. The real pages live with their own
// features; these keep every link resolvable.

#[component]
pub fn Home() -> Element {
    rsx! {
        PlaceholderPage {
            destination: NavDestination::Home,
            blurb: "Your courses, grades and campus services in one place.",
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        PlaceholderPage {
            destination: NavDestination::About,
            blurb: "CampusTools brings the university's student services together.",
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        PlaceholderPage {
            destination: NavDestination::Contact,
            blurb: "Reach the student help desk or your department office.",
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        PlaceholderPage {
            destination: NavDestination::Profile,
            blurb: "Your student record and contact details.",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PlaceholderPage {
            destination: NavDestination::Settings,
            blurb: "Notification and account preferences.",
        }
    }
}

#[component]
fn PlaceholderPage(destination: NavDestination, blurb: String) -> Element {
    let title = destination.label();

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__blurb", "{blurb}" }
        }
    }
}
