use log::info;
use yew::prelude::*;

use crate::components::{
    about::About, find_us::FindUs, footer::Footer, hero::Hero, laboratory::Laboratory,
    nav::Nav, reviews::Reviews, signature_drinks::SignatureDrinks,
};
use crate::hooks::{use_active_section, use_scroll_reveal};
use crate::menu::{MenuAction, MenuState};
use crate::navigator::{select_section, DocumentHost};
use crate::sections::{next_section, Section};

#[function_component(Home)]
pub fn home() -> Html {
    let active = use_active_section();
    let menu = use_reducer(MenuState::default);
    use_scroll_reveal();

    let navigate = {
        let menu = menu.dispatcher();
        use_callback(
            move |section: Section, _| {
                info!("navigating to {}", section.id());
                if let Some(action) = select_section(&DocumentHost, section) {
                    menu.dispatch(action);
                }
            },
            (),
        )
    };

    let toggle_menu = {
        let menu = menu.dispatcher();
        use_callback(move |_: (), _| menu.dispatch(MenuAction::Toggle), ())
    };

    let scroll_to_next = {
        let navigate = navigate.clone();
        use_callback(move |_: (), active| navigate.emit(next_section(*active)), active)
    };

    html! {
        <div class="seasons">
            <Nav {active} menu_open={menu.open} on_toggle={toggle_menu} on_navigate={navigate.clone()} />
            <Hero on_navigate={navigate} on_next={scroll_to_next} />
            <About />
            <Laboratory />
            <SignatureDrinks />
            <Reviews />
            <FindUs />
            <Footer />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    min-height: 100vh;
                    background: #000;
                    -webkit-font-smoothing: antialiased;
                    -moz-osx-font-smoothing: grayscale;
                }

                .seasons {
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
                    overflow-x: hidden;
                }

                .panel {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 4rem 1rem;
                    box-sizing: border-box;
                }

                .panel--tinted {
                    background: rgba(24, 24, 27, 0.5);
                }

                .panel--tinted-light {
                    background: rgba(24, 24, 27, 0.3);
                }

                .find-us.panel {
                    align-items: flex-start;
                }

                .panel__inner {
                    max-width: 72rem;
                    width: 100%;
                    margin: 0 auto;
                }

                .panel__inner--wide {
                    max-width: 80rem;
                }

                .panel__intro {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .panel__heading {
                    font-size: 1.875rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    margin: 0 0 1rem;
                }

                .about .panel__heading {
                    margin-bottom: 1.5rem;
                }

                .panel__lead {
                    font-size: 1.125rem;
                    font-weight: 300;
                    opacity: 0.9;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .card {
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(4px);
                    border: 1px solid #27272a;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(50px);
                    transition-property: opacity, transform;
                    transition-duration: 0.8s;
                    transition-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }

                .reveal--left { transform: translateX(-50px); }
                .reveal--right { transform: translateX(50px); }
                .reveal--fade { transform: none; }

                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }

                .stars {
                    display: flex;
                    gap: 0.25rem;
                    color: #fbbf24;
                    font-size: 1rem;
                    line-height: 1;
                }

                .stars--animated .star {
                    display: inline-block;
                    transform: scale(0) rotate(-180deg);
                    transition: transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
                    transition-delay: calc(2s + var(--stagger));
                }

                .revealed .stars--animated .star {
                    transform: scale(1) rotate(0);
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal,
                    .reveal--left,
                    .reveal--right {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }

                @media (min-width: 640px) {
                    .panel { padding: 5rem 1.5rem; }
                    .panel__intro { margin-bottom: 4rem; }
                    .panel__heading { font-size: 2.25rem; margin-bottom: 1.5rem; }
                    .about .panel__heading { margin-bottom: 2rem; }
                    .panel__lead { font-size: 1.25rem; }
                    .card-grid { gap: 2rem; }
                    .card { padding: 2rem; }
                }

                @media (min-width: 768px) {
                    .panel__heading { font-size: 3rem; }
                    .card-grid { grid-template-columns: repeat(3, 1fr); }
                }

                @media (min-width: 1024px) {
                    .panel { padding: 5rem 2rem; }
                }
                "#}
            </style>
        </div>
    }
}
