use std::sync::{Arc, Mutex};

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use rand::{rngs::StdRng, SeedableRng};

use super::{
    about::About,
    certifications::Certifications,
    contact::{Contact, Footer},
    hero::Hero,
    nav::NavBar,
    particles::ParticleBackground,
    projects::Projects,
    reveal::provide_reveal,
    skills::Skills,
    splash::Splash,
    theme::provide_theme,
};
use crate::{
    content::{Portfolio, PORTFOLIO},
    motion::{LoadingProgress, MotionConfig, Stage, StageEvent},
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let theme = provide_theme();
    let page = match &*PORTFOLIO {
        Ok(portfolio) => Either::Left(view! { <AnimatedPage portfolio /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <main class="flex min-h-screen items-center justify-center">
                    <p class="text-red-600">"This page couldn't be loaded."</p>
                </main>
            })
        }
    };
    view! {
        <div class=move || format!("{} min-h-screen text-slate-900 dark:text-slate-100", theme.class())>
            {page}
        </div>
    }
}

/// Owns the page's [`Stage`] for as long as the page is mounted and mirrors
/// its state into signals.
#[component]
fn AnimatedPage(portfolio: &'static Portfolio) -> impl IntoView {
    let config = MotionConfig::default();
    let beat = config.heartbeat;
    provide_reveal(config.reveal_threshold);

    let stage = StoredValue::new(Arc::new(Mutex::new(Stage::mount(
        config.clone(),
        portfolio.typewriter_skills.clone(),
        StdRng::from_entropy(),
    ))));
    let (loading, set_loading) = signal(true);
    let (progress, set_progress) = signal(LoadingProgress::new());
    let (typed, set_typed) = signal(String::new());

    let on_heartbeat = move || {
        let (events, text, snapshot) = stage.with_value(|s| {
            let mut s = s.lock().expect("should be able to lock stage");
            let events = s.advance(beat);
            (events, s.typed().to_string(), s.progress().clone())
        });
        let mut text = Some(text);
        let mut snapshot = Some(snapshot);
        for event in events {
            match event {
                StageEvent::Progress(_) => {
                    if let Some(snapshot) = snapshot.take() {
                        set_progress(snapshot);
                    }
                }
                StageEvent::Loaded => set_loading(false),
                StageEvent::Typed(_) | StageEvent::WordChanged(_) => {
                    if let Some(text) = text.take() {
                        set_typed(text);
                    }
                }
            }
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let heartbeat = set_interval_with_handle(on_heartbeat, beat)
            .map_err(|e| log::error!("couldn't start heartbeat: {e:?}"))
            .ok();
        on_cleanup(move || {
            if let Some(handle) = heartbeat {
                handle.clear();
            }
            stage.with_value(|s| s.lock().expect("should be able to lock stage").unmount());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_heartbeat;

    let profile = &portfolio.profile;
    view! {
        <Title text=profile.name.as_str() />
        <Show
            when=move || !loading.get()
            fallback=move || view! { <Splash profile progress /> }
        >
            <div class="animate-fadeIn min-h-screen bg-gradient-to-br from-slate-50 via-white to-slate-100 dark:from-slate-950 dark:via-slate-900 dark:to-slate-800">
                <ParticleBackground config=config.clone() />
                <NavBar profile />
                <main>
                    <Hero profile />
                    <About profile stats=&portfolio.stats />
                    <Skills portfolio typed />
                    <Certifications certifications=&portfolio.certifications />
                    <Projects projects=&portfolio.projects featured=&portfolio.featured_project />
                    <Contact profile />
                </main>
                <Footer profile />
            </div>
        </Show>
    }
}
