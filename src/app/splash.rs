use leptos::prelude::*;

use crate::{content::Profile, motion::LoadingProgress};

#[component]
pub fn Splash(profile: &'static Profile, progress: ReadSignal<LoadingProgress>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-gradient-to-br from-slate-50 via-white to-slate-100 dark:from-slate-950 dark:via-slate-900 dark:to-slate-800">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/4 left-1/4 h-96 w-96 rounded-full bg-blue-400/10 blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 h-96 w-96 rounded-full bg-purple-400/10 blur-3xl animate-pulse delay-1000"></div>
            </div>

            <div class="relative flex flex-col items-center space-y-8">
                <div class="relative">
                    <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-blue-600 to-purple-600 blur-xl opacity-50 animate-pulse"></div>
                    <div class="relative flex h-24 w-24 items-center justify-center rounded-2xl bg-gradient-to-r from-blue-600 to-purple-600 shadow-2xl">
                        <span class="text-3xl font-bold text-white animate-bounce">
                            {profile.initials.as_str()}
                        </span>
                    </div>
                </div>

                <div class="text-center space-y-4">
                    <h1 class="text-4xl font-bold tracking-tight bg-gradient-to-r from-blue-600 via-purple-600 to-blue-800 bg-clip-text text-transparent animate-pulse">
                        {profile.name.as_str()}
                    </h1>
                    <p class="text-lg text-slate-600 dark:text-slate-300 animate-pulse">
                        {profile.splash_caption.as_str()}
                    </p>
                </div>

                <div class="w-80 space-y-3">
                    <div class="flex justify-between text-sm text-slate-500">
                        <span>"Loading"</span>
                        <span>{move || progress.with(|p| format!("{}%", p.label()))}</span>
                    </div>
                    <div
                        class="h-2 w-full rounded-full bg-slate-200 dark:bg-slate-700 overflow-hidden"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow=move || progress.with(|p| p.label().to_string())
                    >
                        <div
                            class="relative h-full rounded-full bg-gradient-to-r from-blue-600 to-purple-600 transition-all duration-300 ease-out"
                            style:width=move || progress.with(|p| format!("{}%", p.percent()))
                        >
                            <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/30 to-transparent animate-shimmer"></div>
                        </div>
                    </div>
                </div>

                <div class="flex space-x-2">
                    <div class="h-3 w-3 rounded-full bg-blue-600 animate-bounce"></div>
                    <div class="h-3 w-3 rounded-full bg-purple-600 animate-bounce delay-100"></div>
                    <div class="h-3 w-3 rounded-full bg-blue-800 animate-bounce delay-200"></div>
                </div>
            </div>
        </div>
    }
}
