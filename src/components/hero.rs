use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
    /// Fired by the down chevron.
    pub on_next: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let entered = use_state_eq(|| false);

    // Start the entrance transitions one tick after the first paint
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(50, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let Some(content) = content else {
        return html! {};
    };

    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };
    let next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let background = format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.3)), url('{}');",
        config::asset_url(&content.hero_image)
    );

    html! {
        <section id={Section::Home.id()} class={classes!("hero", (*entered).then(|| "entered"))}>
            <div class="hero__background">
                <div class="hero__image" style={background}></div>
                <div class="hero__shade"></div>
            </div>

            <div class="hero__content">
                <h1 class="hero__title">{&content.name}</h1>
                <p class="hero__tagline">{&content.tagline}</p>
                <div class="hero__actions">
                    <button class="btn btn--solid" onclick={go_to(Section::SignatureDrinks)}>
                        {"EXPLORE COCKTAILS"}
                    </button>
                    <button class="btn btn--outline" onclick={go_to(Section::FindUs)}>
                        {"VISIT US"}
                    </button>
                </div>
            </div>

            <button class="hero__next" aria-label="Next section" onclick={next}>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <polyline points="6 9 12 15 18 9" />
                </svg>
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    opacity: 0;
                    transition: opacity 1.2s ease-out;
                }

                .hero.entered {
                    opacity: 1;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    opacity: 0;
                    transform: scale(1.05);
                    transition: opacity 2s ease-out, transform 2s ease-out;
                }

                .hero.entered .hero__background {
                    opacity: 1;
                    transform: scale(1);
                }

                .hero__image {
                    width: 100%;
                    height: 100%;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                    animation: heroBreathe 8s ease-in-out infinite alternate;
                }

                @keyframes heroBreathe {
                    from { transform: scale(1.02); }
                    to { transform: scale(1); }
                }

                .hero__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent, rgba(0, 0, 0, 0.1));
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1rem;
                    max-width: 56rem;
                }

                .hero__title,
                .hero__tagline,
                .hero__actions {
                    opacity: 0;
                    transition-property: opacity, transform;
                    transition-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }

                .hero__title {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    margin: 0 0 1.5rem;
                    transform: translateY(80px) scale(0.9);
                    transition-duration: 1.4s;
                    transition-delay: 0.8s;
                }

                .hero__tagline {
                    font-size: 1.125rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin: 0 0 2rem;
                    transform: translateY(60px);
                    transition-duration: 1.2s;
                    transition-delay: 1.3s;
                }

                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                    transform: translateY(40px);
                    transition-duration: 1s;
                    transition-delay: 1.8s;
                }

                .hero.entered .hero__title,
                .hero.entered .hero__actions {
                    opacity: 1;
                    transform: none;
                }

                .hero.entered .hero__tagline {
                    opacity: 0.9;
                    transform: none;
                }

                .btn {
                    font-family: inherit;
                    font-size: 1rem;
                    letter-spacing: 0.025em;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.375rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .btn:hover {
                    transform: translateY(-2px) scale(1.05);
                }

                .btn:active {
                    transform: scale(0.98);
                }

                .btn--solid {
                    background: #fbbf24;
                    border: 1px solid #fbbf24;
                    color: #000;
                    font-weight: 500;
                }

                .btn--solid:hover {
                    background: #f59e0b;
                }

                .btn--outline {
                    background: transparent;
                    border: 1px solid #fbbf24;
                    color: #fbbf24;
                }

                .btn--outline:hover {
                    background: #fbbf24;
                    color: #000;
                }

                .hero__next {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 1.5rem;
                    height: 1.5rem;
                    padding: 0;
                    color: #fbbf24;
                    background: none;
                    border: none;
                    cursor: pointer;
                    animation: chevronBounce 2s ease-in-out infinite;
                }

                @keyframes chevronBounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }

                @media (min-width: 640px) {
                    .hero__title { font-size: 3.75rem; margin-bottom: 2rem; }
                    .hero__tagline { font-size: 1.25rem; margin-bottom: 3rem; }
                    .hero__actions { flex-direction: row; gap: 1.5rem; }
                    .btn { font-size: 1.125rem; padding: 1rem 2rem; }
                    .hero__next { bottom: 3rem; width: 2rem; height: 2rem; }
                }

                @media (min-width: 768px) {
                    .hero__title { font-size: 4.5rem; }
                    .hero__tagline { font-size: 1.5rem; }
                }

                @media (min-width: 1024px) {
                    .hero__title { font-size: 6rem; }
                }
                "#}
            </style>
        </section>
    }
}
