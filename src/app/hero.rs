use leptos::prelude::*;

use crate::content::Profile;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section class="relative overflow-hidden px-4 py-32 md:py-40">
            <div class="absolute inset-0 -z-10">
                <div class="absolute top-20 left-20 h-72 w-72 rounded-full bg-blue-400/20 dark:bg-blue-600/10 blur-3xl"></div>
                <div class="absolute bottom-20 right-20 h-72 w-72 rounded-full bg-purple-400/20 dark:bg-purple-600/10 blur-3xl"></div>
            </div>

            <div class="container mx-auto">
                <div class="flex flex-col items-center text-center space-y-8">
                    <div class="enter-down inline-flex items-center rounded-full border border-slate-200 bg-white/50 px-4 py-2 text-sm backdrop-blur-sm dark:border-slate-700 dark:bg-slate-800/50">
                        <span class="mr-2 text-blue-600">"✦"</span>
                        {profile.availability.as_str()}
                    </div>

                    <div class="space-y-6">
                        <h1 class="enter-up delay-200 text-5xl font-bold tracking-tight sm:text-6xl md:text-7xl lg:text-8xl">
                            <span class="block">"Hi, I'm"</span>
                            <span class="block bg-gradient-to-r from-blue-600 via-purple-600 to-blue-800 bg-clip-text text-transparent">
                                {profile.name.as_str()}
                            </span>
                        </h1>
                        <p class="enter-up delay-400 mx-auto max-w-2xl text-xl text-slate-600 dark:text-slate-300 md:text-2xl leading-relaxed">
                            "I craft beautiful digital experiences that blend "
                            <span class="font-semibold text-blue-600">"creativity"</span>
                            " with "
                            <span class="font-semibold text-purple-600">"functionality"</span>
                        </p>
                    </div>

                    <div class="enter-up delay-600 flex flex-col sm:flex-row gap-4">
                        <a
                            href=profile.mailto()
                            rel="noopener noreferrer"
                            class="group inline-flex items-center rounded-md bg-gradient-to-r from-blue-600 to-purple-600 px-8 py-3 text-white shadow-lg transition-all duration-300 hover:from-blue-700 hover:to-purple-700 hover:shadow-xl"
                        >
                            "✉ Let's Connect"
                            <span class="ml-2 transition-transform group-hover:translate-x-1">
                                "→"
                            </span>
                        </a>
                        <a
                            href="#projects"
                            class="inline-flex items-center rounded-md border border-slate-300 bg-white/50 px-8 py-3 backdrop-blur-sm transition-all duration-300 hover:bg-white/80 dark:border-slate-700 dark:bg-slate-800/50 dark:hover:bg-slate-800/80"
                        >
                            "View My Work"
                        </a>
                    </div>

                    <div class="enter-up delay-800 flex space-x-6 pt-4">
                        <SocialLink href=profile.github.as_str() icon="devicon-github-plain" label="GitHub Profile" />
                        <SocialLink href=profile.linkedin.as_str() icon="devicon-linkedin-plain" label="LinkedIn Profile" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="group"
            aria-label=label
        >
            <div class="flex h-12 w-12 items-center justify-center rounded-full border border-slate-200 bg-white/50 backdrop-blur-sm transition-all duration-300 group-hover:scale-110 group-hover:bg-white group-hover:shadow-lg dark:border-slate-700 dark:bg-slate-800/50 dark:group-hover:bg-slate-800">
                <i class=format!("{icon} text-xl text-slate-600 dark:text-slate-400")></i>
            </div>
        </a>
    }
}
