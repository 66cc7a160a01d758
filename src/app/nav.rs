use leptos::{either::Either, prelude::*};

use super::theme::use_theme;
use crate::{content::Profile, motion::Theme};

const SECTIONS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#certifications", "Certifications"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavBar(profile: &'static Profile) -> impl IntoView {
    view! {
        <nav class="fixed top-0 z-50 w-full border-b border-white/20 bg-white/80 backdrop-blur-xl dark:border-slate-800/20 dark:bg-slate-950/80">
            <div class="container mx-auto flex h-16 items-center px-4">
                <div class="mr-4 hidden md:flex">
                    <a class="mr-8 flex items-center space-x-2" href="/">
                        <div class="flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-r from-blue-600 to-purple-600">
                            <span class="text-sm font-bold text-white">
                                {profile.initials.as_str()}
                            </span>
                        </div>
                        <span class="hidden font-bold sm:inline-block">
                            {profile.name.to_uppercase()}
                        </span>
                    </a>
                    <div class="flex items-center space-x-8 text-sm font-medium">
                        {SECTIONS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a href=href class="transition-colors hover:text-blue-600">
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex flex-1 items-center justify-between space-x-4 md:justify-end">
                    <ThemeToggle />
                    <a href=profile.resume_url.as_str() target="_blank" rel="noopener noreferrer">
                        <span class="ml-auto inline-flex items-center rounded-md border border-slate-200 bg-white/50 px-3 py-1.5 text-sm backdrop-blur-sm hover:bg-white/80 dark:border-slate-700 dark:bg-slate-800/50 dark:hover:bg-slate-800/80">
                            "⬇ Resume"
                        </span>
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Show when=move || theme.is_mounted()>
            <button
                type="button"
                on:click=move |_| theme.toggle()
                class="flex h-10 w-10 items-center justify-center rounded-full bg-white/50 backdrop-blur-sm hover:bg-white/80 dark:bg-slate-800/50 dark:hover:bg-slate-800/80"
                aria-label="Toggle theme"
            >
                {move || {
                    if theme.theme() == Theme::Dark {
                        Either::Left(view! { <span class="text-xl text-yellow-500">"☀"</span> })
                    } else {
                        Either::Right(view! { <span class="text-xl text-slate-700">"☾"</span> })
                    }
                }}
            </button>
        </Show>
    }
}
