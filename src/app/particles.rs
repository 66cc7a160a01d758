use leptos::prelude::*;

use crate::motion::{particle_field, MotionConfig};

#[component]
pub fn ParticleBackground(config: MotionConfig) -> impl IntoView {
    let particles = particle_field(config.particle_count, config.particle_seed);
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| {
                    view! {
                        <div
                            class="particle absolute rounded-full bg-gradient-to-r from-blue-400/10 to-purple-400/10 blur-xl"
                            style=p.style()
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
