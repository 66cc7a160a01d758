use leptos::prelude::*;

use super::{about::SectionHeading, reveal::ScrollReveal};
use crate::content::{Portfolio, SkillGroup};

#[component]
pub fn Skills(portfolio: &'static Portfolio, typed: ReadSignal<String>) -> impl IntoView {
    view! {
        <section
            id="skills"
            class="py-24 bg-gradient-to-b from-slate-50/50 to-white dark:from-slate-900/50 dark:to-slate-950"
        >
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-6xl">
                    <SectionHeading id="skills" title="Skills & Technologies" />
                    <CodeCard name=portfolio.profile.name.as_str() typed />
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                        {portfolio
                            .skill_groups
                            .iter()
                            .enumerate()
                            .map(|(i, group)| view! { <SkillColumn group index=i /> })
                            .collect_view()}
                    </div>
                    <FloatingSkills skills=&portfolio.typewriter_skills />
                </div>
            </div>
        </section>
    }
}

/// Editor-style card whose `currentSkill` field is the typewriter output.
#[component]
fn CodeCard(name: &'static str, typed: ReadSignal<String>) -> impl IntoView {
    view! {
        <ScrollReveal id="skills-code" class="mb-16 mx-auto max-w-4xl">
            <div class="relative rounded-2xl bg-slate-900 dark:bg-slate-800 p-8 shadow-2xl overflow-hidden">
                <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-blue-500 to-purple-500"></div>
                <div class="flex items-center space-x-2 mb-6">
                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                    <span class="ml-4 text-slate-400 text-sm">"skills.rs"</span>
                </div>
                <div class="font-mono text-sm space-y-2">
                    <div class="text-slate-400">
                        <span class="text-purple-400">"struct"</span>
                        " "
                        <span class="text-blue-400">"Developer"</span>
                        " {"
                    </div>
                    <div class="text-slate-400 ml-4">
                        <span class="text-green-400">"name"</span>
                        ": "
                        <span class="text-yellow-300">{format!("\"{name}\"")}</span>
                        ","
                    </div>
                    <div class="text-slate-400 ml-4">
                        <span class="text-green-400">"current_skill"</span>
                        ": "
                        <span class="text-yellow-300">{move || format!("\"{}\"", typed.get())}</span>
                        <span class="animate-pulse">"|"</span>
                        ","
                    </div>
                    <div class="text-slate-400 ml-4">
                        <span class="text-green-400">"expertise"</span>
                        ": "
                        <span class="text-blue-400">"Vec<String>"</span>
                        ","
                    </div>
                    <div class="text-slate-400">"}"</div>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[component]
fn SkillColumn(group: &'static SkillGroup, index: usize) -> impl IntoView {
    let accent = group.accent;
    view! {
        <ScrollReveal
            id=format!("skills-group-{index}")
            class=format!("space-y-4 stagger-{}", index.min(5))
        >
            <h3 class=format!("text-lg font-semibold {}", accent.heading())>
                {group.category.as_str()}
            </h3>
            <div class="space-y-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="group nudge">
                                <div class=format!(
                                    "px-4 py-2 rounded-lg bg-white/50 dark:bg-slate-800/50 backdrop-blur-sm border transition-all duration-300 group-hover:shadow-lg {}",
                                    accent.chip(),
                                )>
                                    <span class="text-slate-700 dark:text-slate-300 font-medium">
                                        {skill.as_str()}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </ScrollReveal>
    }
}

#[component]
fn FloatingSkills(skills: &'static [String]) -> impl IntoView {
    // every tag waits for the whole row before repeating
    let cycle = 4.0 + skills.len() as f64 * 0.3;
    view! {
        <div class="mt-20 relative h-40 overflow-hidden">
            <div class="absolute inset-0 flex items-center justify-center">
                <div class="text-center">
                    <p class="text-slate-500 dark:text-slate-400 text-sm mb-2">"Always learning"</p>
                    <div class="flex flex-wrap justify-center gap-2 max-w-2xl">
                        {skills
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                let style = format!(
                                    "animation-delay: {:.1}s; animation-duration: {:.1}s;",
                                    i as f64 * 0.3,
                                    cycle,
                                );
                                view! {
                                    <span
                                        class="float-tag px-3 py-1 rounded-full bg-gradient-to-r from-blue-500/20 to-purple-500/20 text-sm text-slate-600 dark:text-slate-300 backdrop-blur-sm border border-white/20"
                                        style=style
                                    >
                                        {skill.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
