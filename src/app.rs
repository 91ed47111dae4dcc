mod homepage;
mod motion;
mod navbar;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, static_routes::StaticRoute, SsrMode};
use leptos_use::use_window_scroll;
use navbar::Navbar;

use crate::content::{person_json_ld, SITE};
use crate::motion::ScrollHub;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // single window scroll listener for the whole page, released with the App
    let hub = ScrollHub::new();
    provide_context(hub.clone());
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| hub.publish(scroll_y.get()));

    view! {
        <Title text=SITE.title />
        <Meta name="description" content=SITE.description />
        <Meta name="keywords" content=SITE.keywords.join(", ") />
        <Meta name="author" content=SITE.author />
        <Meta name="creator" content=SITE.creator />
        <Meta property="og:title" content=SITE.title />
        <Meta property="og:description" content=SITE.description />
        <Meta property="og:type" content=SITE.og_type />

        <Router>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 via-white to-slate-100">
                <Navbar />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=path!("/")
                        view=HomePage
                        ssr=SsrMode::Static(StaticRoute::new())
                    />
                </Routes>
            </div>
        </Router>
    }
}
