use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

#[cfg(feature = "hydrate")]
use crate::motion::THEME_STORAGE_KEY;
use crate::motion::Theme;

/// Current theme plus a setter, persisted in local storage on the client.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
    prefers_dark: Signal<bool>,
    mounted: ReadSignal<bool>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        log::debug!("theme set to {theme}");
        self.set_theme.set(theme);
    }

    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn class(&self) -> &'static str {
        self.theme
            .get()
            .root_class(self.prefers_dark.get(), self.mounted.get())
    }
}

pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, JsonSerdeWasmCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext {
        theme,
        set_theme,
        prefers_dark: use_preferred_dark(),
        mounted: use_mounted(),
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// False until the first client render, so controls that depend on the stored
/// theme are not part of the server-rendered markup.
fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted(true));
    mounted
}
