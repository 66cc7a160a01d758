use leptos::prelude::*;

use super::reveal::ScrollReveal;
use crate::content::{Profile, Stat};

#[component]
pub fn SectionHeading(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <ScrollReveal id=format!("{id}-heading") class="text-center mb-16">
            <h2 class="text-4xl font-bold tracking-tight mb-4">{title}</h2>
            <div class="h-1 w-20 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto rounded-full"></div>
            {subtitle
                .map(|s| {
                    view! { <p class="mt-6 text-lg text-slate-600 dark:text-slate-300">{s}</p> }
                })}
        </ScrollReveal>
    }
}

#[component]
pub fn About(profile: &'static Profile, stats: &'static [Stat]) -> impl IntoView {
    view! {
        <section id="about" class="relative py-24">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-4xl">
                    <SectionHeading id="about" title="About Me" />

                    <div class="grid gap-12 lg:grid-cols-2 items-center">
                        <ScrollReveal id="about-bio" class="slide-from-left space-y-6">
                            <div class="space-y-4 text-lg text-slate-600 dark:text-slate-300 leading-relaxed">
                                {profile
                                    .bio
                                    .iter()
                                    .map(|p| view! { <p>{p.as_str()}</p> })
                                    .collect_view()}
                            </div>
                            <div class="grid grid-cols-2 gap-4 pt-4">
                                {stats
                                    .iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="lift text-center p-4 rounded-xl bg-white/50 backdrop-blur-sm border border-slate-200 dark:bg-slate-800/50 dark:border-slate-700">
                                                <div class=format!(
                                                    "text-2xl font-bold {}",
                                                    stat.accent.heading(),
                                                )>{stat.value.as_str()}</div>
                                                <div class="text-sm text-slate-600 dark:text-slate-400">
                                                    {stat.label.as_str()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </ScrollReveal>

                        <ScrollReveal id="about-avatar" class="slide-from-right flex justify-center lg:justify-end">
                            <div class="relative">
                                <div class="absolute inset-0 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl blur-2xl opacity-20"></div>
                                <img
                                    src=profile.avatar.as_str()
                                    alt="Profile"
                                    width="400"
                                    height="400"
                                    class="tilt relative rounded-2xl border-4 border-white shadow-2xl dark:border-slate-800"
                                />
                            </div>
                        </ScrollReveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
