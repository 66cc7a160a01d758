use leptos::prelude::*;

use super::reveal::ScrollReveal;
use crate::content::{build_year, Profile};

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="contact" class="py-24">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-3xl text-center">
                    <ScrollReveal id="contact-heading" class="mb-16">
                        <h2 class="text-4xl font-bold tracking-tight mb-4">
                            "Let's Create Something Amazing"
                        </h2>
                        <div class="h-1 w-20 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto rounded-full mb-6"></div>
                        <p class="text-xl text-slate-600 dark:text-slate-300 leading-relaxed">
                            "Ready to bring your ideas to life? I'm always excited to work on new projects and collaborate with amazing people."
                        </p>
                    </ScrollReveal>

                    <ScrollReveal id="contact-links" class="flex flex-col sm:flex-row gap-6 justify-center mb-12">
                        <a
                            href=profile.mailto()
                            rel="noopener noreferrer"
                            class="group inline-flex items-center justify-center rounded-md bg-gradient-to-r from-blue-600 to-purple-600 px-8 py-3 text-white shadow-lg transition-all duration-300 hover:from-blue-700 hover:to-purple-700 hover:shadow-xl"
                        >
                            {format!("✉ {}", profile.email)}
                            <span class="ml-2 transition-transform group-hover:translate-x-1">
                                "→"
                            </span>
                        </a>
                        <a
                            href=profile.linkedin.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center justify-center rounded-md border border-slate-300 bg-white/50 px-8 py-3 backdrop-blur-sm transition-all duration-300 hover:bg-white/80 dark:border-slate-700 dark:bg-slate-800/50 dark:hover:bg-slate-800/80"
                        >
                            <i class="devicon-linkedin-plain mr-2"></i>
                            "Connect on LinkedIn"
                        </a>
                    </ScrollReveal>

                    <ScrollReveal
                        id="contact-status"
                        class="inline-flex items-center rounded-full border border-slate-200 bg-white/50 px-6 py-3 text-sm backdrop-blur-sm dark:border-slate-700 dark:bg-slate-800/50"
                    >
                        <div class="mr-3 h-2 w-2 rounded-full bg-green-500 animate-pulse"></div>
                        {profile.freelance.as_str()}
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 bg-white/50 backdrop-blur-sm py-8 dark:border-slate-800 dark:bg-slate-900/50">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-between gap-4 md:flex-row">
                    <div class="flex items-center space-x-2">
                        <div class="flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-r from-blue-600 to-purple-600">
                            <span class="text-sm font-bold text-white">
                                {profile.initials.as_str()}
                            </span>
                        </div>
                        <span class="font-semibold">{profile.name.as_str()}</span>
                    </div>
                    <p class="text-center text-sm text-slate-600 dark:text-slate-400 md:text-left">
                        {format!("© {} {}. Crafted with ❤️ and lots of ☕", build_year(), profile.name)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
