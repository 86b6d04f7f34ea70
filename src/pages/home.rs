use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::SectionNav;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::host::error::{window, HostError};
use crate::host::frame::{self, FrameLoop};
use crate::host::listener::EventSubscription;
use crate::host::observer::VisibilitySubscription;
use crate::host::viewport::{self, BrowserHistory, SectionRefs};
use crate::scroll::controller::{ScrollController, Step};
use crate::scroll::indicator::indicator_visible;
use crate::scroll::sections::Section;
use crate::scroll::tracker::SectionTracker;

const VALUES: [(&str, &str, &str); 6] = [
    ("⛨", "Risk First", "Every decision begins with rigorous identification, measurement and management of risk."),
    ("◎", "Future Driven", "We build sustainable strategies and infrastructure that align with our long‑term outlook."),
    ("★", "Meritocracy", "Ideas and outcomes outweigh hierarchy; performance and innovation shape our culture."),
    ("⌖", "Precision", "We pursue depth over breadth, valuing accuracy, specialisation and technical excellence."),
    ("✦", "First Principles", "We deconstruct complexity to fundamental truths before designing solutions."),
    ("✓", "Integrity", "We uphold unwavering ethical standards of transparency, accountability and fairness."),
];

type FrameSlot = Rc<RefCell<Option<FrameLoop>>>;

/// Starts an animated scroll to `id`, replacing any scroll already running.
fn scroll_to_section(
    id: &str,
    refs: &SectionRefs,
    controller: &Rc<RefCell<ScrollController>>,
    frame_slot: &FrameSlot,
) -> Result<(), HostError> {
    // dropping the old loop cancels its pending frame
    frame_slot.borrow_mut().take();

    let current = viewport::scroll_offset()?;
    let now = frame::now()?;
    let Some(ticket) = controller.borrow_mut().start(id, refs, current, now) else {
        return Ok(());
    };
    log::info!("Scrolling to section `{}`", id);

    let controller = controller.clone();
    let frame_loop = FrameLoop::start(move |timestamp| {
        let step = controller.borrow_mut().step(ticket, timestamp);
        let (offset, keep_going) = match step {
            Step::Continue(offset) => (offset, true),
            Step::Finished(offset) => (offset, false),
            Step::Superseded => return false,
        };
        if let Err(e) = viewport::scroll_to(offset) {
            log::warn!("Failed to set scroll offset: {}", e);
            return false;
        }
        keep_going
    })?;

    *frame_slot.borrow_mut() = Some(frame_loop);
    Ok(())
}

fn section_body(section: &Section, config: &SiteConfig) -> Html {
    match section.id.as_str() {
        "home" => html! {
            <div class="hero-content">
                <h1>{"unsigned"}</h1>
                <p class="hero-subtitle">{config.tagline.clone()}</p>
                <p class="hero-description">
                    {"Institutional‑grade risk management and proprietary technology capturing edge in digital‑asset markets."}
                </p>
            </div>
        },
        "about" => html! {
            <div class="section-content">
                <h2>{format!("About {}", config.company)}</h2>
                <p>
                    {format!("{} Ltd is a UK proprietary trading company specialising in systematic crypto‑derivative strategies. ", config.company)}
                    {"Our team of quantitative researchers, engineers, and risk specialists design, test, and deploy code‑driven strategies on a vertically integrated stack that spans data ingestion, research, order execution, and real‑time risk. Capital is 100% owned by the firm; no external assets are managed."}
                </p>
                <p>
                    {"We treat markets as data streams. Robust research pipelines translate signal discovery into production code, and automated controls enforce position limits, scenario stress tests, and kill‑switches. Continuous monitoring and post‑trade analytics close the feedback loop for iterative improvement."}
                </p>
            </div>
        },
        "mission" => html! {
            <div class="section-content">
                <h2>{"Commitment"}</h2>
                <p>
                    {"We advance market efficiency and safeguard capital by applying disciplined risk management, transparent reporting, and incentive‑aligned trading. Each strategy is built to preserve capital first and deliver repeatable, risk‑adjusted returns without hidden costs or unintended exposures."}
                </p>
            </div>
        },
        "ethos" => html! {
            <div class="section-content">
                <h2>{"Values"}</h2>
                <ul class="values-list">
                    { for VALUES.iter().map(|(icon, title, description)| html! {
                        <li key={*title}>
                            <span class="value-icon" aria-hidden="true">{*icon}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        </li>
                    }) }
                </ul>
            </div>
        },
        "promise" => html! {
            <div class="section-content">
                <h2>{"Promise"}</h2>
                <p>
                    {format!("{} delivers world‑class systematic strategies that never impose hidden costs or unnecessary risks on partners. ", config.company)}
                    {"Incentives are fully aligned, embedding accountability and responsible risk‑taking into every trade."}
                </p>
            </div>
        },
        "connect" => html! {
            <div class="section-content">
                <h2>{"Connect"}</h2>
                <p>{"For technical due diligence, strategy discussion, or career interest."}</p>
                <a class="contact-button" href={format!("mailto:{}", config.contact.email)}>
                    {config.contact.email.clone()}
                </a>
            </div>
        },
        _ => html! {
            <div class="section-content">
                <h2>{section.label.clone()}</h2>
            </div>
        },
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();

    let active = {
        let first = config.first_section().id.clone();
        use_state(move || first)
    };
    let show_indicator = use_state(|| true);

    let section_refs = {
        let config = config.clone();
        use_state(move || SectionRefs::new(config.sections.iter().map(|s| s.id.as_str())))
    };
    let tracker = {
        let config = config.clone();
        use_mut_ref(move || {
            SectionTracker::new(config.sections.clone(), config.scroll.visibility_threshold)
        })
    };
    let controller = {
        let settings = config.scroll;
        use_mut_ref(move || ScrollController::new(&settings))
    };
    let frame_slot: FrameSlot = use_mut_ref(|| None);

    // One visibility observer per section, registered once
    {
        let active = active.clone();
        let section_refs = section_refs.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let threshold = tracker.borrow().threshold();
                let ids: Vec<String> = tracker.borrow().sections().iter().map(|s| s.id.clone()).collect();

                let mut subscriptions = Vec::with_capacity(ids.len());
                for id in ids {
                    let Some(element) = section_refs.element(&id) else {
                        log::warn!("Section `{}` is not mounted; it will not be tracked", id);
                        continue;
                    };
                    let tracker = tracker.clone();
                    let active = active.clone();
                    let observed = id.clone();
                    let subscription = VisibilitySubscription::observe(&element, threshold, move |ratio| {
                        let mut tracker = tracker.borrow_mut();
                        if let Some(section) = tracker.observe_and_sync(&observed, ratio, &mut BrowserHistory) {
                            active.set(section.id.clone());
                        }
                    });
                    match subscription {
                        Ok(subscription) => subscriptions.push(subscription),
                        Err(e) => log::warn!("Failed to observe section `{}`: {}", id, e),
                    }
                }

                move || drop(subscriptions)
            },
            (),
        );
    }

    // Scroll indicator follows every scroll event, plus one check at mount
    {
        let show_indicator = show_indicator.clone();
        let margin = config.scroll.indicator_margin;
        use_effect_with_deps(
            move |_| {
                let update = move || match viewport::metrics() {
                    Ok(metrics) => show_indicator.set(indicator_visible(metrics, margin)),
                    Err(e) => log::warn!("Failed to read scroll metrics: {}", e),
                };
                update();

                let subscription = window()
                    .and_then(|window| EventSubscription::new(&window, "scroll", move |_| update()))
                    .map_err(|e| log::warn!("Scroll indicator will not update: {}", e))
                    .ok();

                move || drop(subscription)
            },
            (),
        );
    }

    // Stop any running scroll when the page goes away
    {
        let controller = controller.clone();
        let frame_slot = frame_slot.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if controller.borrow().is_animating() {
                        log::debug!("Cancelling scroll animation on unmount");
                    }
                    frame_slot.borrow_mut().take();
                    controller.borrow_mut().cancel();
                }
            },
            (),
        );
    }

    let on_select = {
        let section_refs = section_refs.clone();
        let controller = controller.clone();
        let frame_slot = frame_slot.clone();
        Callback::from(move |id: String| {
            if let Err(e) = scroll_to_section(&id, &section_refs, &controller, &frame_slot) {
                log::warn!("Failed to scroll to section `{}`: {}", id, e);
            }
        })
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        position: relative;
                    }
                    .beams-background {
                        position: fixed;
                        inset: 0;
                        background:
                            radial-gradient(ellipse at 20% 10%, var(--beam-a), transparent 60%),
                            radial-gradient(ellipse at 80% 60%, var(--beam-b), transparent 55%),
                            var(--bg);
                        animation: beamsDrift 18s ease-in-out infinite alternate;
                    }
                    @keyframes beamsDrift {
                        from { background-position: 0% 0%, 0% 0%, 0 0; }
                        to { background-position: 10% 20%, -10% -15%, 0 0; }
                    }
                    .page-content {
                        position: relative;
                        z-index: 10;
                    }
                    .page-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 6rem 1.5rem;
                        box-sizing: border-box;
                    }
                    .page-section.hero {
                        justify-content: center;
                        text-align: center;
                    }
                    .hero-content h1 {
                        font-size: 3.75rem;
                        font-weight: 600;
                        letter-spacing: -0.05em;
                        margin: 0;
                        color: var(--text);
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: var(--text);
                        margin: 0.5rem 0 0 0;
                    }
                    .hero-description {
                        max-width: 32rem;
                        margin: 1rem auto 0 auto;
                        font-size: 0.875rem;
                        color: var(--text-muted);
                    }
                    .section-content {
                        max-width: 56rem;
                    }
                    .section-content h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        letter-spacing: -0.05em;
                        margin: 0 0 1.5rem 0;
                        color: var(--text);
                    }
                    .section-content p {
                        font-size: 0.875rem;
                        color: var(--text-muted);
                        line-height: 1.6;
                    }
                    .values-list {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .values-list li {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    .value-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 50%;
                        background: var(--chip-bg);
                        color: var(--text);
                    }
                    .values-list h3 {
                        font-size: 1.125rem;
                        font-weight: 500;
                        margin: 0;
                        color: var(--text);
                    }
                    .values-list p {
                        margin: 0.25rem 0 0 0;
                    }
                    .contact-button {
                        display: inline-block;
                        padding: 0.5rem 1.25rem;
                        border-radius: 6px;
                        background: var(--chip-bg);
                        color: var(--text);
                        text-decoration: none;
                        font-size: 0.75rem;
                        transition: background 0.3s ease;
                    }
                    .contact-button:hover {
                        background: var(--chip-hover);
                    }
                    @media (max-width: 768px) {
                        .hero-content h1 {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
            <div class="beams-background"></div>
            <ThemeToggle />
            <div class="page-content">
                { for config.sections.iter().map(|section| html! {
                    <section
                        key={section.id.clone()}
                        id={section.id.clone()}
                        ref={section_refs.node_ref(&section.id)}
                        class={classes!("page-section", (section.order_index == 0).then(|| "hero"))}
                    >
                        { section_body(section, &config) }
                    </section>
                }) }
                <Footer company={config.company.clone()} contact={config.contact.clone()} />
            </div>
            <ScrollIndicator visible={*show_indicator} />
            <SectionNav
                sections={config.sections.clone()}
                active={(*active).clone()}
                {on_select}
            />
        </div>
    }
}
