use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::host::error::window;
use crate::host::listener::EventSubscription;

fn closes_dialog(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

#[derive(Properties, PartialEq)]
pub struct PrivacyDialogProps {
    pub company: String,
    pub email: String,
}

/// Footer link that opens the privacy policy in a modal. The modal closes on
/// the close button, a backdrop click, or Escape.
#[function_component(PrivacyDialog)]
pub fn privacy_dialog(props: &PrivacyDialogProps) -> Html {
    let open = use_state(|| false);

    // Escape closes the dialog; the listener only lives while it is open
    {
        let is_open = *open;
        let open = open.clone();
        use_effect_with_deps(
            move |is_open| {
                let subscription = if *is_open {
                    let close = open.clone();
                    window()
                        .and_then(|window| {
                            EventSubscription::new(&window, "keydown", move |event| {
                                let closes = event
                                    .dyn_ref::<KeyboardEvent>()
                                    .map(|key| closes_dialog(&key.key()))
                                    .unwrap_or(false);
                                if closes {
                                    close.set(false);
                                }
                            })
                        })
                        .map_err(|e| log::warn!("Escape key will not close the dialog: {}", e))
                        .ok()
                } else {
                    None
                };
                move || drop(subscription)
            },
            is_open,
        );
    }

    let show = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(true);
        })
    };

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let mailto = format!("mailto:{}", props.email);

    html! {
        <>
            <style>
                {r#"
                    .privacy-trigger {
                        color: var(--text-faint);
                        font-size: 0.75rem;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .privacy-trigger:hover {
                        color: var(--text);
                    }
                    .dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .dialog {
                        position: relative;
                        max-width: 32rem;
                        max-height: 85vh;
                        overflow-y: auto;
                        background: var(--surface);
                        color: var(--text);
                        border: 1px solid var(--border);
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    }
                    .dialog h2 {
                        font-size: 1.125rem;
                        margin: 0 0 1rem 0;
                    }
                    .dialog-body {
                        font-size: 0.75rem;
                        color: var(--text-muted);
                        line-height: 1.6;
                    }
                    .dialog-body .heading {
                        font-weight: 600;
                        color: var(--text);
                    }
                    .dialog-body ul {
                        padding-left: 1.25rem;
                    }
                    .dialog-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: var(--text-muted);
                        font-size: 1.25rem;
                    }
                "#}
            </style>
            <a href="#" class="privacy-trigger" onclick={show}>{"Privacy Policy"}</a>
            {
                if *open {
                    html! {
                        <div class="dialog-backdrop" onclick={close.clone()}>
                            <div
                                class="dialog"
                                role="dialog"
                                aria-modal="true"
                                aria-labelledby="privacy-title"
                                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                            >
                                <button class="dialog-close" aria-label="Close" onclick={close}>{"×"}</button>
                                <h2 id="privacy-title">{"Privacy Policy"}</h2>
                                <div class="dialog-body">
                                    <p>
                                        <strong>{format!("{} Ltd.", props.company)}</strong>
                                        {" is committed to protecting your privacy. This Privacy Policy outlines how we collect, use, and safeguard your information when you visit our website."}
                                    </p>
                                    <p class="heading">{"Information We Collect"}</p>
                                    <ul>
                                        <li>{"We do not collect personal information unless you voluntarily provide it (e.g., by contacting us via email)."}</li>
                                        <li>{"We may collect non-personal information such as browser type, device, and usage statistics for analytics purposes."}</li>
                                    </ul>
                                    <p class="heading">{"How We Use Information"}</p>
                                    <ul>
                                        <li>{"To respond to your inquiries or requests."}</li>
                                        <li>{"To improve our website and services."}</li>
                                        <li>{"We do not sell or share your information with third parties except as required by law."}</li>
                                    </ul>
                                    <p class="heading">{"Contact"}</p>
                                    <p>
                                        {"If you have any questions about this Privacy Policy, please contact us at "}
                                        <a href={mailto}>{props.email.clone()}</a>
                                        {"."}
                                    </p>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_dialog() {
        assert!(closes_dialog("Escape"));
        assert!(closes_dialog("Esc"));
    }

    #[test]
    fn other_keys_leave_dialog_open() {
        assert!(!closes_dialog("Enter"));
        assert!(!closes_dialog("e"));
    }
}
