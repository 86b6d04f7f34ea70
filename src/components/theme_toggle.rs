use yew::prelude::*;

use crate::host::listener::EventSubscription;
use crate::host::storage::{apply_theme, dark_scheme_query, system_prefers_dark, theme_store};
use crate::theme::ThemePreference;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let store = use_mut_ref(theme_store);
    let preference = {
        let store = store.clone();
        use_state(move || store.borrow().load())
    };

    let system_dark = use_state(system_prefers_dark);

    // Follow the OS colour scheme while the preference is `System`
    {
        let system_dark = system_dark.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = dark_scheme_query()
                    .and_then(|query| {
                        EventSubscription::new(&query, "change", move |_| {
                            let dark = system_prefers_dark();
                            log::debug!("System colour scheme changed, dark: {}", dark);
                            system_dark.set(dark);
                        })
                    })
                    .map_err(|e| log::warn!("Theme will not follow the system colour scheme: {}", e))
                    .ok();

                move || drop(subscription)
            },
            (),
        );
    }

    let resolved = preference.resolve(*system_dark);

    {
        use_effect_with_deps(
            move |resolved| {
                if let Err(e) = apply_theme(*resolved) {
                    log::warn!("Failed to apply theme: {}", e);
                }
                || ()
            },
            resolved,
        );
    }

    let onclick = {
        let preference = preference.clone();
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = ThemePreference::from_switch(!resolved.is_dark());
            log::info!("Theme set to {}", next);
            store.borrow_mut().save(next);
            preference.set(next);
        })
    };

    let is_dark = resolved.is_dark();

    html! {
        <div class="theme-toggle">
            <style>
                {r#"
                    .theme-toggle {
                        position: fixed;
                        top: 1rem;
                        left: 1rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: var(--text-muted);
                    }
                    .theme-toggle .icon {
                        font-size: 1rem;
                        transition: color 0.3s ease;
                    }
                    .theme-toggle .icon.on {
                        color: var(--accent);
                    }
                    .theme-switch {
                        position: relative;
                        width: 2.75rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        border: none;
                        cursor: pointer;
                        background: var(--switch-off);
                        transition: background 0.2s ease;
                    }
                    .theme-switch.checked {
                        background: var(--accent);
                    }
                    .theme-switch .thumb {
                        position: absolute;
                        top: 0.125rem;
                        left: 0.125rem;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        background: #fff;
                        transition: transform 0.2s ease;
                    }
                    .theme-switch.checked .thumb {
                        transform: translateX(1.25rem);
                    }
                "#}
            </style>
            <span class={classes!("icon", (!is_dark).then(|| "on"))} aria-hidden="true">{"☀"}</span>
            <button
                class={classes!("theme-switch", is_dark.then(|| "checked"))}
                role="switch"
                aria-checked={if is_dark { "true" } else { "false" }}
                aria-label="Toggle dark mode"
                {onclick}
            >
                <span class="thumb"></span>
            </button>
            <span class={classes!("icon", is_dark.then(|| "on"))} aria-hidden="true">{"☾"}</span>
        </div>
    }
}
