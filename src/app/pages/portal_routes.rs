use dioxus::prelude::*;

use crate::app::components::ToastHost;
use crate::app::layouts::Navbar;
use crate::app::pages::placeholder::{About, Contact, Home, Profile, Settings};
use crate::config::PortalConfig;
use crate::domain::models::NavDestination;
use crate::server_fns::get_portal_config;
use crate::shared::hooks::use_toaster_provider;
use crate::shared::logging::log_config_fallback;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
}

impl From<NavDestination> for Route {
    fn from(destination: NavDestination) -> Self {
        match destination {
            NavDestination::Home => Route::Home {},
            NavDestination::About => Route::About {},
            NavDestination::Contact => Route::Contact {},
            NavDestination::Profile => Route::Profile {},
            NavDestination::Settings => Route::Settings {},
        }
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("CampusTools portal initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_toaster_provider();

    let config_resource = use_server_future(move || async move { get_portal_config().await })?;

    let config = match &*config_resource.read() {
        Some(Ok(config)) => config.clone(),
        Some(Err(e)) => {
            log_config_fallback(&e.to_string());
            PortalConfig::default()
        }
        None => PortalConfig::default(),
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar { config }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_destination_paths() {
        let destinations = [
            NavDestination::Home,
            NavDestination::About,
            NavDestination::Contact,
            NavDestination::Profile,
            NavDestination::Settings,
        ];

        for destination in destinations {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        assert!("/grades".parse::<Route>().is_err());
        assert_eq!("/about".parse::<Route>().ok(), Some(Route::About {}));
    }
}
