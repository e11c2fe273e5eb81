use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions, Storage,
};
use yew::prelude::*;

use crate::{
    config::{SiteConfig, CONFIG_ELEMENT_ID},
    contact::{ContactForm, SubmitFeedback},
    navigation::{fragment_target, scroll_destination, MobileMenu, NAV_LINKS, SCROLL_INDICATOR_TARGET},
    reveal::{
        RevealTracker, REVEALED_CLASS, REVEAL_INDEX_ATTRIBUTE, REVEAL_ROOT_MARGIN,
        REVEAL_SELECTORS, REVEAL_THRESHOLD,
    },
    scroll::{CardBox, ScrollController, ScrollFrame, ScrollSnapshot, SectionEntry},
    snippets::{Token, PLAYLIST},
    stagger::{animation_delay, play_state, SKILL_ITEM_STEP_SECONDS, TECH_ICON_STEP_SECONDS},
    theme::{
        PreferenceStore, StorageError, Theme, ThemePreference, ThemeSwitch, THEME_ATTRIBUTE,
    },
    throttle::Throttle,
    timers::TimerSlot,
    typing::{Animator, Cadence, CodeWindowProfile, RunToken, SnippetPlayer, Step, Typewriter},
};

const SENT_BUTTON_STYLE: &str = "background: linear-gradient(135deg, #27c93f 0%, #20b83a 100%);";
const PROJECT_CARD_SELECTOR: &str = ".project-card";

#[derive(Debug, Error)]
enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches `{0}`")]
    Missing(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn document() -> Result<Document, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, DomError> {
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`, treated as absent when the browser refuses access.
struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().ok().and_then(|document| document.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Ok(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

fn scroll_to_fragment(href: &str) -> Result<(), DomError> {
    let Some(id) = fragment_target(href) else {
        return Ok(());
    };

    let win = window().ok_or(DomError::NoWindow)?;
    let target = document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::Missing(href.to_string()))?;

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn navigate(uri: &str) -> Result<(), DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .location()
        .set_href(uri)?;
    Ok(())
}

/// Layout read for one scroll tick, plus the card elements it measured.
struct LiveLayout {
    snapshot: ScrollSnapshot,
    cards: Vec<HtmlElement>,
}

fn read_layout() -> Result<LiveLayout, DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    let document = document()?;
    let offset = win.scroll_y()?;
    let viewport_height = win.inner_height()?.as_f64().unwrap_or(0.0);

    let sections = query_all::<HtmlElement>(&document, "section[id]")?
        .into_iter()
        .map(|section| SectionEntry {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect();

    let cards = query_all::<HtmlElement>(&document, PROJECT_CARD_SELECTOR)?;
    let card_boxes = cards
        .iter()
        .map(|card| {
            let rect = card.get_bounding_client_rect();
            CardBox {
                top: rect.top() + offset,
                height: rect.height(),
            }
        })
        .collect();

    Ok(LiveLayout {
        snapshot: ScrollSnapshot {
            offset,
            viewport_height,
            sections,
            cards: card_boxes,
        },
        cards,
    })
}

fn apply_parallax(cards: &[HtmlElement], frame: &ScrollFrame) {
    for (card, update) in cards.iter().zip(&frame.parallax) {
        let Some(update) = update else {
            continue;
        };

        let style = card.style();
        let result = match update.transform() {
            Some(transform) => style.set_property("transform", &transform),
            None => style.remove_property("transform").map(|_| ()),
        };
        if let Err(err) = result {
            log::debug!("parallax update skipped: {}", DomError::from(err));
        }
    }
}

/// A window event listener that unregisters itself on drop.
struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn attach(event: &'static str, handler: impl FnMut() + 'static) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        window()
            .ok_or(DomError::NoWindow)?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

fn attach_scroll_controller(
    throttle_ms: u32,
    on_frame: impl Fn(ScrollFrame) + 'static,
) -> Result<WindowListener, DomError> {
    let throttle = Rc::new(RefCell::new(Throttle::new(throttle_ms)));
    let controller = Rc::new(RefCell::new(ScrollController::new()));
    let on_frame = Rc::new(on_frame);
    let pending = TimerSlot::<Timeout>::new();

    WindowListener::attach("scroll", move || {
        let ticket = throttle.borrow_mut().call();
        let throttle = throttle.clone();
        let controller = controller.clone();
        let on_frame = on_frame.clone();
        let window_ms = throttle.borrow().window_ms();

        let timeout = Timeout::new(window_ms, move || {
            if !throttle.borrow_mut().fire(ticket) {
                return;
            }

            match read_layout() {
                Ok(layout) => {
                    let frame = controller.borrow_mut().tick(&layout.snapshot);
                    apply_parallax(&layout.cards, &frame);
                    (*on_frame)(frame);
                }
                Err(err) => log::debug!("scroll tick skipped: {err}"),
            }
        });
        pending.replace(timeout);
    })
}

/// Fades elements in the first time they scroll into view.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn install() -> Result<Self, DomError> {
        let targets = query_all::<Element>(&document()?, REVEAL_SELECTORS)?;
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));

        let callback = {
            let tracker = tracker.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let Some(index) = target
                            .get_attribute(REVEAL_INDEX_ATTRIBUTE)
                            .and_then(|value| value.parse::<usize>().ok())
                        else {
                            continue;
                        };

                        if tracker.borrow_mut().on_entry(index, entry.is_intersecting()) {
                            let _ = target.class_list().add_1(REVEALED_CLASS);
                            observer.unobserve(&target);
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for target in &targets {
            let index = tracker.borrow_mut().register();
            target.set_attribute(REVEAL_INDEX_ATTRIBUTE, &index.to_string())?;
            observer.observe(target);
            tracker.borrow_mut().observe(index);
        }
        log::debug!("observing {} reveal targets", targets.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Keeps ticking `animator` until its run finishes or is superseded.
fn schedule_typing<A: Animator + 'static>(
    animator: Rc<RefCell<A>>,
    token: RunToken,
    step: Step,
    redraw: UseForceUpdateHandle,
    slot: TimerSlot<Timeout>,
) {
    let Step::Wait(delay) = step else {
        return;
    };

    let next = {
        let slot = slot.clone();
        Timeout::new(delay, move || {
            let step = animator.borrow_mut().tick(token);
            if step == Step::Stale {
                return;
            }
            redraw.force_update();
            schedule_typing(animator, token, step, redraw, slot);
        })
    };
    slot.replace(next);
}

#[derive(Properties, PartialEq)]
struct HeroTitleProps {
    text: AttrValue,
    start_delay_ms: u32,
    cadence: Cadence,
}

#[function_component(HeroTitle)]
fn hero_title(props: &HeroTitleProps) -> Html {
    let typewriter = use_mut_ref(|| Typewriter::new(props.cadence));
    let redraw = use_force_update();

    {
        let typewriter = typewriter.clone();
        let start_delay_ms = props.start_delay_ms;
        use_effect_with(props.text.clone(), move |text| {
            let text = text.to_string();
            let slot = TimerSlot::<Timeout>::new();
            let start = {
                let typewriter = typewriter.clone();
                let slot = slot.clone();
                Timeout::new(start_delay_ms, move || {
                    let (token, step) = typewriter.borrow_mut().start_eager(&text);
                    redraw.force_update();
                    schedule_typing(typewriter, token, step, redraw, slot);
                })
            };
            slot.replace(start);

            move || {
                slot.clear();
                typewriter.borrow_mut().cancel();
            }
        });
    }

    let rendered = typewriter.borrow().rendered().to_string();

    html! {
        <h1 class="hero-title">
            <span class="title-text">{rendered}</span>
            <span class="typing-cursor" aria-hidden="true">{"|"}</span>
        </h1>
    }
}

fn code_token(token: &Token) -> Html {
    match token.kind.css_class() {
        Some(class) => html! { <span class={class}>{token.text}</span> },
        None => html! { {token.text} },
    }
}

#[derive(Properties, PartialEq)]
struct CodeWindowProps {
    profile: CodeWindowProfile,
    hold_ms: u32,
}

#[function_component(CodeWindow)]
fn code_window(props: &CodeWindowProps) -> Html {
    let player = {
        let profile = props.profile;
        let hold_ms = props.hold_ms;
        use_mut_ref(move || SnippetPlayer::new(profile.playlist(PLAYLIST), profile.settings(hold_ms)))
    };
    let redraw = use_force_update();

    {
        let player = player.clone();
        use_effect_with((), move |_| {
            let slot = TimerSlot::<Timeout>::new();
            let (token, step) = player.borrow_mut().start();
            redraw.force_update();
            schedule_typing(player.clone(), token, step, redraw, slot.clone());

            move || {
                slot.clear();
                player.borrow_mut().cancel();
            }
        });
    }

    let player = player.borrow();
    let code: Html = player.visible().iter().map(code_token).collect();

    html! {
        <div class="code-window">
            <div class="code-header">
                <span class="code-dot red"></span>
                <span class="code-dot yellow"></span>
                <span class="code-dot green"></span>
                <span class="code-title" id="code-title">{player.title()}</span>
            </div>
            <pre class="code-body"><code id="code-content">{code}</code></pre>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TechIconProps {
    index: usize,
    icon: AttrValue,
}

#[function_component(TechIcon)]
fn tech_icon(props: &TechIconProps) -> Html {
    let paused = use_state(|| false);

    let onmouseenter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let onmouseleave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let style = format!(
        "{} {}",
        animation_delay(props.index, TECH_ICON_STEP_SECONDS),
        play_state(*paused)
    );

    html! {
        <div class="tech-icon" style={style} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <i class={props.icon.clone()}></i>
        </div>
    }
}

fn field_value(event: &InputEvent) -> String {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
        })
        .unwrap_or_default()
}

fn field_setter(
    form: &UseStateHandle<ContactForm>,
    assign: fn(&mut ContactForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let mut next = (*form).clone();
        assign(&mut next, field_value(&event));
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    address: AttrValue,
    feedback_ms: u32,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_state(ContactForm::default);
    let feedback = use_mut_ref(SubmitFeedback::default);
    let revert_timer = use_mut_ref(TimerSlot::<Timeout>::new);
    let redraw = use_force_update();

    let oninput_name = field_setter(&form, |form, value| form.name = value);
    let oninput_email = field_setter(&form, |form, value| form.email = value);
    let oninput_message = field_setter(&form, |form, value| form.message = value);

    let onsubmit = {
        let form = form.clone();
        let feedback = feedback.clone();
        let revert_timer = revert_timer.clone();
        let address = props.address.clone();
        let feedback_ms = props.feedback_ms;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let mut submitted = (*form).clone();
            let uri = submitted.submit(&address);
            if let Err(err) = navigate(&uri) {
                log::warn!("mail client hand-off failed: {err}");
            }
            form.set(submitted);

            let token = feedback.borrow_mut().show();
            redraw.force_update();

            let feedback = feedback.clone();
            let redraw = redraw.clone();
            let revert = Timeout::new(feedback_ms, move || {
                if feedback.borrow_mut().revert(token) {
                    redraw.force_update();
                }
            });
            revert_timer.borrow().replace(revert);
        })
    };

    let feedback = feedback.borrow();
    let sent = feedback.is_sent();

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        <p>{"Have a project in mind or just want to say hi? My inbox is open."}</p>
                        <a class="contact-email" href={format!("mailto:{}", props.address)}>
                            <i class="fas fa-envelope"></i>
                            {" "}{props.address.clone()}
                        </a>
                    </div>
                    <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            value={form.name.clone()}
                            oninput={oninput_name}
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            value={form.email.clone()}
                            oninput={oninput_email}
                        />
                        <textarea
                            name="message"
                            rows="5"
                            placeholder="Your Message"
                            value={form.message.clone()}
                            oninput={oninput_message}
                        />
                        <button
                            type="submit"
                            class={classes!("btn", "btn-primary", sent.then_some("is-sent"))}
                            style={sent.then_some(SENT_BUTTON_STYLE)}
                        >
                            <span>{feedback.label()}</span>
                            {" "}
                            <i class={if sent { "fas fa-check" } else { "fas fa-paper-plane" }}></i>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Heat-Wave Forecaster",
        description: "Sequence model predicting regional heat waves from weather station history.",
        tags: &["Python", "PyTorch", "LSTM"],
    },
    Project {
        title: "Trip Planner",
        description: "Assistant that searches and ranks flights from a plain-language request.",
        tags: &["TypeScript", "React", "LLM"],
    },
    Project {
        title: "Delivery Console",
        description: "Internal tool tracking equipment orders from request to hand-off.",
        tags: &["Rust", "PostgreSQL", "WebAssembly"],
    },
];

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("Languages", &["Rust", "Python", "TypeScript", "Java", "C++", "SQL"]),
    ("Frameworks", &["Yew", "React", "Axum", "PyTorch"]),
    ("Tools", &["Git", "Docker", "Linux", "PostgreSQL"]),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("fas fa-code", "Clean, tested code"),
    ("fas fa-bolt", "Fast, small web apps"),
    ("fas fa-brain", "Practical machine learning"),
];

const TECH_ICONS: &[&str] = &[
    "fab fa-rust",
    "fab fa-python",
    "fab fa-js",
    "fab fa-java",
    "fab fa-docker",
];

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let switch = use_mut_ref(|| ThemeSwitch::new(ThemePreference::new(BrowserStorage)));
    let theme = {
        let switch = switch.clone();
        use_state(move || switch.borrow().current())
    };
    let menu = use_state(MobileMenu::default);
    let navbar_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<String>);

    {
        let navbar_scrolled = navbar_scrolled.clone();
        let active_section = active_section.clone();
        let throttle_ms = config.scroll_throttle_ms;
        use_effect_with((), move |_| {
            let listener = attach_scroll_controller(throttle_ms, move |frame| {
                if let Some(scrolled) = frame.navbar_scrolled {
                    navbar_scrolled.set(scrolled);
                }
                if let Some(active) = frame.active_section {
                    active_section.set(active);
                }
            })
            .map_err(|err| log::debug!("scroll effects disabled: {err}"))
            .ok();

            move || drop(listener)
        });
    }

    use_effect_with((), |_| {
        let observer = RevealObserver::install()
            .map_err(|err| log::debug!("reveal animations disabled: {err}"))
            .ok();

        move || drop(observer)
    });

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            let next = switch.borrow_mut().toggle();
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_menu_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let nav_links = NAV_LINKS.iter().map(|link| {
        let menu = menu.clone();
        let href = link.href;
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu.set((*menu).closed());
            if let Err(err) = scroll_to_fragment(href) {
                log::debug!("anchor navigation skipped: {err}");
            }
        });
        let active = link.section_id().is_some() && active_section.as_deref() == link.section_id();

        html! {
            <li>
                <a
                    class={classes!("nav-link", active.then_some("active"))}
                    href={href}
                    onclick={onclick}
                >
                    {link.label}
                </a>
            </li>
        }
    });

    let on_scroll_indicator = Callback::from(|_: MouseEvent| {
        if let Err(err) = scroll_to_fragment(SCROLL_INDICATOR_TARGET) {
            log::debug!("scroll indicator skipped: {err}");
        }
    });

    html! {
        <>
            <nav id="navbar" class={classes!("navbar", (*navbar_scrolled).then_some("scrolled"))}>
                <div class="nav-container">
                    <a class="nav-logo" href="#home">{"Portfolio"}</a>
                    <ul id="nav-menu" class={classes!("nav-menu", menu.class())}>
                        { for nav_links }
                    </ul>
                    <div class="nav-actions">
                        <button
                            id="theme-toggle"
                            class="theme-toggle"
                            type="button"
                            aria-label={(*theme).toggle_label()}
                            onclick={on_theme_toggle}
                        >
                            <i id="theme-icon" class={(*theme).icon_class()}></i>
                        </button>
                        <button
                            id="nav-toggle"
                            class={classes!("nav-toggle", menu.class())}
                            type="button"
                            aria-label="Toggle navigation"
                            onclick={on_menu_toggle}
                        >
                            <span class="bar"></span>
                            <span class="bar"></span>
                            <span class="bar"></span>
                        </button>
                    </div>
                </div>
            </nav>

            <section id="home" class="hero">
                <div class="container hero-container">
                    <div class="hero-content">
                        <p class="hero-greeting">{"Hi, I'm a"}</p>
                        <HeroTitle
                            text={AttrValue::from(config.hero_title.clone())}
                            start_delay_ms={config.hero_start_delay_ms}
                            cadence={config.hero_cadence}
                        />
                        <p class="hero-subtitle">{"I build dependable software and small, fast web experiences."}</p>
                        <div class="hero-buttons">
                            <a class="btn btn-primary" href="#projects">{"View My Work"}</a>
                            <a class="btn btn-secondary" href="#contact">{"Get In Touch"}</a>
                        </div>
                        <div class="tech-icons">
                            { for TECH_ICONS.iter().enumerate().map(|(index, icon)| html! {
                                <TechIcon index={index} icon={*icon} />
                            }) }
                        </div>
                    </div>
                    <CodeWindow profile={config.code_window} hold_ms={config.snippet_hold_ms} />
                </div>
                <div class="scroll-indicator" onclick={on_scroll_indicator}>
                    <i class="fas fa-chevron-down"></i>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title">{"About Me"}</h2>
                    <div class="about-content">
                        <p>{"I'm a software engineer who enjoys turning rough ideas into tools people rely on every day."}</p>
                        <div class="highlights">
                            { for HIGHLIGHTS.iter().map(|(icon, text)| html! {
                                <div class="highlight-item">
                                    <i class={*icon}></i>
                                    <span>{*text}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="skills" class="skills">
                <div class="container">
                    <h2 class="section-title">{"Skills"}</h2>
                    <div class="skills-grid">
                        { for SKILL_CATEGORIES.iter().scan(0usize, |offset, (category, items)| {
                            let first = *offset;
                            *offset += items.len();
                            Some(html! {
                                <div class="skill-category">
                                    <h3>{*category}</h3>
                                    <div class="skill-items">
                                        { for items.iter().enumerate().map(|(position, item)| html! {
                                            <span
                                                class="skill-item"
                                                style={animation_delay(first + position, SKILL_ITEM_STEP_SECONDS)}
                                            >
                                                {*item}
                                            </span>
                                        }) }
                                    </div>
                                </div>
                            })
                        }) }
                    </div>
                </div>
            </section>

            <section id="projects" class="projects">
                <div class="container">
                    <h2 class="section-title">{"Projects"}</h2>
                    <div class="projects-grid">
                        { for PROJECTS.iter().map(|project| html! {
                            <article class="project-card">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                </div>
                            </article>
                        }) }
                    </div>
                </div>
            </section>

            <ContactSection
                address={AttrValue::from(config.contact_address.clone())}
                feedback_ms={config.submit_feedback_ms}
            />

            <footer class="footer">
                <p>{"Built with Rust and WebAssembly."}</p>
            </footer>
        </>
    }
}

fn load_config() -> (SiteConfig, Option<String>) {
    let raw = document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw.as_deref().map(SiteConfig::from_json) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (SiteConfig::default(), Some(err.to_string())),
        None => (SiteConfig::default(), None),
    }
}

fn greet(address: &str) {
    log::info!("👋 Hello!");
    log::info!("Interested in working together?");
    log::info!("Get in touch: {address}");
}

pub fn run() {
    console_error_panic_hook::set_once();

    // Started before the config is read so its warnings reach the console.
    let _ = console_log::init_with_level(log::Level::Trace);
    let (config, config_error) = load_config();
    log::set_max_level(config.log_level.to_level_filter());
    if let Some(err) = config_error {
        log::warn!("{err}; using default settings");
    }

    // Before the first render, so the page never paints in the wrong theme.
    apply_theme(ThemePreference::new(BrowserStorage).load());
    greet(&config.contact_address);

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
