//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::notification_provider::NotificationProvider;
use crate::components::protected_route::ProtectedRoute;
use crate::config::GatehouseConfig;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, not_found::NotFoundPage};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Role required for the administration page.
pub const ADMIN_ROLE: &str = "admin";
/// Router segment and in-app link for the administration page.
pub const ADMIN_SEGMENT: &str = "admin";
pub const ADMIN_PATH: &str = "/admin";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the auth session, and notifications, then routes. The
/// login route stays public; everything else sits behind `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GatehouseConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>
        <Title text="Gatehouse"/>

        <AuthProvider>
            <NotificationProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment(ADMIN_SEGMENT)
                            view=|| view! {
                                <ProtectedRoute required_role=ADMIN_ROLE>
                                    <AdminPage/>
                                </ProtectedRoute>
                            }
                        />
                    </Routes>
                </Router>
            </NotificationProvider>
        </AuthProvider>
    }
}
