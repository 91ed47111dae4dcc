use leptos::prelude::*;

use super::motion::Appear;
use crate::content::{Anchor, PROFILE};
use crate::motion::{Entrance, NavbarState, ScrollHub};

#[component]
pub fn Navbar() -> impl IntoView {
    let hub = expect_context::<ScrollHub>();
    let navbar = NavbarState::default();
    let (scrolled, set_scrolled) = signal(navbar.is_scrolled());

    let subscription = navbar.attach(&hub, move |now| {
        log::debug!("navbar scrolled: {now}");
        set_scrolled.set(now);
    });
    on_cleanup(move || {
        subscription.cancel();
        log::debug!("navbar detached from scroll");
    });

    view! {
        <div class="fixed top-4 inset-x-0 z-50 flex justify-center pointer-events-none">
            <Appear entrance=Entrance::slide(-100) class="pointer-events-auto">
                <header
                    class=move || {
                        format!(
                            "transition-all duration-300 rounded-3xl border border-white/20 {}",
                            NavbarState::classes_for(scrolled.get()),
                        )
                    }
                >
                    <nav class="px-6 py-3">
                        <div class="flex items-center space-x-8">
                            <a
                                href=Anchor::Home.href()
                                class="font-bold text-lg bg-gradient-to-r from-purple-600 to-blue-600 bg-clip-text text-transparent transition-transform hover:scale-105"
                            >
                                {PROFILE.initials}
                            </a>
                            <div class="hidden md:flex space-x-6">
                                {Anchor::ALL
                                    .into_iter()
                                    .map(|anchor| {
                                        view! {
                                            <a
                                                href=anchor.href()
                                                class="text-gray-700 hover:text-purple-600 transition-all font-medium hover:scale-105"
                                            >
                                                {anchor.label()}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </nav>
                </header>
            </Appear>
        </div>
    }
}
