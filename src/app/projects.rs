use leptos::{either::Either, prelude::*};

use super::{about::SectionHeading, reveal::ScrollReveal};
use crate::content::{Project, Tag};

#[component]
pub fn Projects(projects: &'static [Project], featured: &'static Project) -> impl IntoView {
    view! {
        <section
            id="projects"
            class="py-24 bg-gradient-to-b from-slate-50/50 to-white dark:from-slate-900/50 dark:to-slate-950"
        >
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-6xl">
                    <SectionHeading
                        id="projects"
                        title="Featured Projects"
                        subtitle="Here are some of my recent works that showcase my skills and passion"
                    />
                    <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                        {projects
                            .iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectCard project index=i /> })
                            .collect_view()}
                    </div>
                    <FeaturedProject project=featured />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Tags(tags: &'static [Tag]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-6">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class=format!(
                            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {}",
                            tag.accent.badge(),
                        )>{tag.label.as_str()}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// A link when the project has a URL for it, otherwise an inert button.
#[component]
fn ProjectLink(
    url: Option<&'static str>,
    label: &'static str,
    #[prop(optional)] primary: bool,
) -> impl IntoView {
    let class = if primary {
        "flex-1 inline-flex items-center justify-center rounded-md bg-gradient-to-r from-blue-600 to-purple-600 px-3 py-1.5 text-sm text-white hover:from-blue-700 hover:to-purple-700"
    } else {
        "flex-1 inline-flex items-center justify-center rounded-md border border-slate-300 px-3 py-1.5 text-sm hover:bg-slate-50 dark:border-slate-700 dark:hover:bg-slate-800/50"
    };
    match url {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {label}
            </a>
        }),
        None => Either::Right(view! {
            <button type="button" class=class disabled=true>
                {label}
            </button>
        }),
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <ScrollReveal
            id=format!("project-{index}")
            class=format!("group relative lift stagger-{}", index.min(5))
        >
            <div class="absolute -inset-0.5 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl blur opacity-0 group-hover:opacity-70 transition duration-500"></div>
            <div class="relative overflow-hidden rounded-xl bg-white/70 backdrop-blur-sm shadow-lg hover:shadow-2xl transition-all duration-500 dark:bg-slate-900/70">
                <div class="relative overflow-hidden">
                    <img
                        src=project.image.as_str()
                        alt=project.overlay_title.as_str()
                        width="400"
                        height="240"
                        class="w-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 flex items-end bg-gradient-to-t from-black/70 to-transparent p-6 opacity-0 transition-opacity duration-300 group-hover:opacity-100">
                        <div class="text-white">
                            <h3 class="text-lg font-bold">{project.overlay_title.as_str()}</h3>
                            <p class="text-sm text-white/80">{project.overlay_caption.as_str()}</p>
                        </div>
                    </div>
                </div>
                <div class="p-6">
                    <h3 class="mb-3 text-xl font-semibold">{project.title.as_str()}</h3>
                    <p class="mb-4 text-sm text-slate-600 dark:text-slate-400 leading-relaxed">
                        {project.summary.as_str()}
                    </p>
                    <Tags tags=&project.tags />
                    <div class="flex space-x-3">
                        <ProjectLink url=project.code_url.as_deref() label="Code" />
                        <ProjectLink url=project.demo_url.as_deref() label="Live Demo" primary=true />
                    </div>
                </div>
            </div>
        </ScrollReveal>
    }
}

#[component]
fn FeaturedProject(project: &'static Project) -> impl IntoView {
    view! {
        <ScrollReveal id="project-featured" class="mt-16">
            <div class="relative rounded-2xl overflow-hidden">
                <div class="absolute -inset-1 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl blur opacity-30"></div>
                <div class="relative bg-white/80 dark:bg-slate-900/80 backdrop-blur-sm rounded-2xl overflow-hidden">
                    <div class="grid md:grid-cols-2 gap-0">
                        <div class="relative overflow-hidden">
                            <img
                                src=project.image.as_str()
                                alt=project.overlay_title.as_str()
                                width="600"
                                height="400"
                                class="w-full h-full object-cover"
                            />
                            <div class="absolute inset-0 bg-gradient-to-r from-blue-600/20 to-purple-600/20 mix-blend-overlay"></div>
                        </div>
                        <div class="p-8 flex flex-col justify-center">
                            <div class="mb-4">
                                <span class="inline-flex rounded-full bg-blue-600 px-2.5 py-0.5 text-xs font-semibold text-white">
                                    {project.overlay_title.as_str()}
                                </span>
                            </div>
                            <h3 class="text-2xl font-bold mb-4">{project.title.as_str()}</h3>
                            <p class="text-slate-600 dark:text-slate-300 mb-6">
                                {project.summary.as_str()}
                            </p>
                            <Tags tags=&project.tags />
                            <div class="flex space-x-4">
                                <ProjectLink
                                    url=project.demo_url.as_deref()
                                    label="View Case Study"
                                    primary=true
                                />
                                <ProjectLink url=project.code_url.as_deref() label="Repository" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </ScrollReveal>
    }
}
