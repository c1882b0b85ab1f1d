use yew::prelude::*;

use crate::components::lead_form::LeadCapture;
use crate::config;
use crate::nav::{SideDots, TopNav, CONTACT_ANCHOR};
use crate::story::{StorySection, STORY_SECTIONS};
use crate::tracking::use_section_tracking;

#[derive(Properties, PartialEq)]
struct StoryArticleProps {
    index: usize,
    section: StorySection,
    active: bool,
    revealed: bool,
}

#[function_component(StoryArticle)]
fn story_article(props: &StoryArticleProps) -> Html {
    let StoryArticleProps { index, section, active, revealed } = *props;

    html! {
        <section id={StorySection::anchor_id(index)} class="story-section">
            <article class={classes!("story-article", revealed.then(|| "revealed"))}>
                <h2 class="story-title">{section.title}</h2>
                <p class={classes!("story-body", active.then(|| "active"))}>{section.body}</p>
                <div class={classes!("story-underline", active.then(|| "active"))} />
            </article>
        </section>
    }
}

#[function_component(StoryPage)]
pub fn story_page() -> Html {
    let main_ref = use_node_ref();
    // Every story section plus the contact section
    let tracked = STORY_SECTIONS.len() + 1;
    let tracking = use_section_tracking(main_ref.clone(), tracked);

    html! {
        <div class="story-page" style={format!("--accent: {};", config::ACCENT)}>
            <div class="story-backdrop">
                <img src={config::HEADER_IMAGE} alt="Header" />
            </div>

            <TopNav active={tracking.active} section_count={STORY_SECTIONS.len()} />

            <main ref={main_ref} class="story-scroll">
                {
                    STORY_SECTIONS.iter().enumerate().map(|(index, section)| html! {
                        <StoryArticle
                            key={section.title}
                            index={index}
                            section={*section}
                            active={tracking.is_active(index)}
                            revealed={tracking.is_revealed(index)}
                        />
                    }).collect::<Html>()
                }

                <section id={CONTACT_ANCHOR} class="contact-section">
                    <div class={classes!("contact-card", tracking.is_in_view(STORY_SECTIONS.len()).then(|| "in-view"))}>
                        <LeadCapture />
                    </div>
                </section>
            </main>

            <SideDots active={tracking.active} section_count={STORY_SECTIONS.len()} />

            <style>
                {r#"
.story-page {
    min-height: 100vh;
    background: #000;
    color: #fff;
    position: relative;
    -webkit-font-smoothing: antialiased;
}

.story-backdrop {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 60vh;
    overflow: hidden;
    z-index: 0;
}

.story-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    mask-image: linear-gradient(to bottom, black 70%, transparent);
    -webkit-mask-image: linear-gradient(to bottom, black 70%, transparent);
}

.top-nav {
    position: fixed;
    top: 1.5rem;
    left: 1.5rem;
    right: 1.5rem;
    z-index: 30;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-logo {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.1);
    object-fit: cover;
}

.nav-hello {
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: rgba(255, 255, 255, 0.6);
    margin: 0;
}

.nav-welcome {
    font-size: 0.875rem;
    font-weight: 600;
    margin: 0;
}

.nav-club {
    font-size: 0.75rem;
    font-weight: 500;
    color: var(--accent);
    margin: 0;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 1rem;
}

.nav-link {
    background: none;
    border: none;
    cursor: pointer;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
    transition: all 0.3s;
}

.nav-link:hover {
    color: #fff;
}

.nav-link.active {
    color: #fff;
    transform: scale(1.25);
}

.story-scroll {
    height: 100vh;
    overflow-y: scroll;
    scroll-snap-type: y mandatory;
    scroll-behavior: smooth;
    position: relative;
    z-index: 10;
}

.story-section {
    height: 100vh;
    scroll-snap-align: center;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0 1.5rem;
}

.story-article {
    max-width: 56rem;
    text-align: center;
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 1.2s ease-in-out, transform 1.2s ease-in-out;
}

.story-article.revealed,
.contact-card.in-view {
    opacity: 1;
    transform: none;
}

.story-title {
    font-size: 1.5rem;
    font-weight: 800;
    margin-bottom: 1.5rem;
    color: var(--accent);
}

.story-body {
    font-size: 1rem;
    line-height: 1.625;
    color: rgba(255, 255, 255, 0.7);
}

.story-body.active {
    color: #fff;
}

.story-underline {
    margin: 2rem auto 0;
    height: 2px;
    width: 7rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.06);
    transition: all 0.7s;
}

.story-underline.active {
    background: linear-gradient(90deg, var(--accent), rgba(255, 255, 255, 0.06));
}

.contact-section {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    padding: 0 1.5rem;
    scroll-snap-align: center;
}

.contact-card {
    width: 100%;
    max-width: 28rem;
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(12px);
    border-radius: 1rem;
    padding: 2rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 1s ease-in-out, transform 1s ease-in-out;
}

.lead-title {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
    text-align: center;
    color: var(--accent);
}

.lead-thanks {
    text-align: center;
    color: #4ade80;
}

.lead-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.lead-form input,
.lead-form select,
.lead-form textarea {
    padding: 0.75rem;
    border-radius: 0.5rem;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #fff;
    font: inherit;
}

.lead-form input::placeholder,
.lead-form textarea::placeholder {
    color: rgba(255, 255, 255, 0.4);
}

.lead-form input:focus,
.lead-form select:focus,
.lead-form textarea:focus {
    outline: none;
}

.lead-submit {
    margin-top: 1rem;
    padding: 0.75rem;
    border: none;
    border-radius: 0.5rem;
    font-weight: 600;
    color: #fff;
    background-color: var(--accent);
    cursor: pointer;
}

.side-dots {
    position: fixed;
    right: 1.5rem;
    top: 50%;
    transform: translateY(-50%);
    z-index: 40;
    display: none;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
}

.side-dot {
    width: 0.75rem;
    height: 0.75rem;
    padding: 0;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(4px);
    cursor: pointer;
    transition: transform 0.2s;
}

.side-dot:hover {
    transform: scale(1.1);
}

.side-dot.active {
    background-color: var(--accent);
    transform: scale(1.25);
}

@media (min-width: 768px) {
    .nav-welcome {
        font-size: 1rem;
    }
    .nav-club {
        font-size: 0.875rem;
    }
    .nav-links {
        display: flex;
    }
    .side-dots {
        display: flex;
    }
    .story-section,
    .contact-section {
        padding: 0 6rem;
    }
    .story-title {
        font-size: 2.25rem;
    }
    .story-body {
        font-size: 1.125rem;
    }
}
                "#}
            </style>
        </div>
    }
}
