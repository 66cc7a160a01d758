use leptos::prelude::*;

use super::{about::SectionHeading, reveal::ScrollReveal};
use crate::content::Certification;

#[component]
pub fn Certifications(certifications: &'static [Certification]) -> impl IntoView {
    view! {
        <section id="certifications" class="py-24">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-6xl">
                    <SectionHeading
                        id="certifications"
                        title="Certifications & Achievements"
                        subtitle="Professional certifications and continuous learning achievements"
                    />
                    <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                        {certifications
                            .iter()
                            .enumerate()
                            .map(|(i, cert)| view! { <CertificationCard cert index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification, index: usize) -> impl IntoView {
    view! {
        <ScrollReveal
            id=format!("cert-{index}")
            class=format!("group lift stagger-{}", index.min(5))
        >
            <div class="h-full rounded-xl bg-white/70 dark:bg-slate-900/70 backdrop-blur-sm shadow-lg hover:shadow-2xl transition-all duration-500">
                <div class="p-6 pb-4 space-y-2">
                    <div class="flex items-start justify-between">
                        <div class=format!(
                            "flex h-12 w-12 items-center justify-center rounded-xl text-2xl shadow-lg {}",
                            cert.accent.gradient(),
                        )>
                            <span>{cert.icon.as_str()}</span>
                        </div>
                        <div class="flex items-center space-x-1 text-slate-500 dark:text-slate-400">
                            <span class="text-sm">{cert.year}</span>
                        </div>
                    </div>
                    <h3 class="text-xl font-semibold leading-tight">
                        <a
                            href=cert.link.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:underline"
                        >
                            {cert.title.as_str()}
                        </a>
                    </h3>
                    <div class="flex items-center space-x-2">
                        <span class="text-blue-600 dark:text-blue-400">"🏅"</span>
                        <span class="text-sm font-medium text-blue-600 dark:text-blue-400">
                            {cert.issuer.as_str()}
                        </span>
                    </div>
                </div>
                <div class="px-6 pb-6">
                    <p class="text-sm text-slate-600 dark:text-slate-400 leading-relaxed">
                        {cert.description.as_str()}
                    </p>
                </div>
            </div>
        </ScrollReveal>
    }
}
