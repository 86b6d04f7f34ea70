use yew::prelude::*;

use crate::scroll::sections::Section;

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub sections: Vec<Section>,
    pub active: String,
    pub on_select: Callback<String>,
}

/// Sticky section navigation. Collapses behind a menu button on narrow
/// screens.
#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "section-nav-list mobile-menu-open"
    } else {
        "section-nav-list"
    };

    html! {
        <div class="section-nav">
            <style>
                {r#"
                    .section-nav {
                        position: fixed;
                        top: 0;
                        right: 0;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        z-index: 50;
                        padding: 0 1rem;
                    }
                    .section-nav nav {
                        padding: 1rem 0.5rem;
                        background: var(--nav-bg);
                        backdrop-filter: blur(16px);
                        border-radius: 8px;
                    }
                    .section-nav-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .section-nav-link {
                        position: relative;
                        background: none;
                        border: none;
                        cursor: pointer;
                        font: inherit;
                        font-size: 0.875rem;
                        color: var(--text-muted);
                        transition: color 0.3s ease;
                        padding: 0 0 0 0.5rem;
                    }
                    .section-nav-link:hover {
                        color: var(--text);
                    }
                    .section-nav-link.active {
                        color: var(--text);
                        font-weight: 500;
                    }
                    .section-nav-link.active::before {
                        content: '';
                        position: absolute;
                        left: -0.5rem;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        border-radius: 9999px;
                        background: var(--accent);
                    }
                    .section-nav .burger-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .section-nav {
                            top: 1rem;
                            height: auto;
                            align-items: flex-start;
                        }
                        .section-nav .burger-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 4px;
                            background: none;
                            border: none;
                            cursor: pointer;
                            padding: 0.5rem;
                        }
                        .section-nav .burger-menu span {
                            width: 20px;
                            height: 2px;
                            background: var(--text);
                        }
                        .section-nav-list {
                            display: none;
                            margin-top: 1rem;
                        }
                        .section-nav-list.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <nav aria-label="Sections">
                <button class="burger-menu" aria-label="Toggle section menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    { for props.sections.iter().map(|section| {
                        let is_active = section.id == props.active;
                        let onclick = {
                            let id = section.id.clone();
                            let on_select = props.on_select.clone();
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                on_select.emit(id.clone());
                            })
                        };
                        html! {
                            <li key={section.id.clone()}>
                                <button
                                    class={classes!("section-nav-link", is_active.then(|| "active"))}
                                    aria-current={if is_active { "true" } else { "false" }}
                                    {onclick}
                                >
                                    { section.label.clone() }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </div>
    }
}
