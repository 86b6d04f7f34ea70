use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollIndicatorProps {
    pub visible: bool,
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator(props: &ScrollIndicatorProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="scroll-indicator" aria-hidden="true">
            <style>
                {r#"
                    .scroll-indicator {
                        position: fixed;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                        color: var(--text-muted);
                        pointer-events: none;
                        animation: indicatorBounce 1s infinite;
                    }
                    @keyframes indicatorBounce {
                        0%, 100% { transform: translate(-50%, -25%); }
                        50% { transform: translate(-50%, 0); }
                    }
                "#}
            </style>
            <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="m6 9 6 6 6-6" />
            </svg>
        </div>
    }
}
