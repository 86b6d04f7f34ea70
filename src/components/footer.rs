use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::clock::LiveClock;
use crate::components::privacy_dialog::PrivacyDialog;
use crate::config::Contact;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub company: String,
    pub contact: Contact,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let contact = &props.contact;
    let mailto = format!("mailto:{}", contact.email);
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 1.5rem;
                        background: var(--footer-bg);
                        backdrop-filter: blur(12px);
                        border-top: 1px solid var(--border);
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .site-footer h3 {
                        color: var(--text);
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin: 0 0 1rem 0;
                    }
                    .site-footer p,
                    .site-footer a {
                        color: var(--text-muted);
                        font-size: 0.75rem;
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: var(--text);
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                    }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 3rem auto 0 auto;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }
                    .footer-bottom p {
                        color: var(--text-faint);
                    }
                    .live-clock {
                        font-variant-numeric: tabular-nums;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-bottom {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{props.company.clone()}</h3>
                    <p>{"Precision‑Built Systematic Alpha in digital‑asset markets."}</p>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <p><a href={mailto}>{contact.email.clone()}</a></p>
                    <p>{contact.location.clone()}</p>
                    <p><LiveClock timezone={contact.timezone} /></p>
                </div>
                <div>
                    <h3>{"Follow Us"}</h3>
                    <div class="social-links">
                        <a href={contact.x.clone()} target="_blank" rel="noopener noreferrer">
                            {"X"}
                            <span class="sr-only">{"X (Twitter)"}</span>
                        </a>
                        <a href={contact.github.clone()} target="_blank" rel="noopener noreferrer">
                            {"GitHub"}
                        </a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {} Ltd. All rights reserved.", year, props.company)}</p>
                <PrivacyDialog company={props.company.clone()} email={contact.email.clone()} />
            </div>
        </footer>
    }
}
