use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::sections::{Section, SECTIONS};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: usize,
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, menu_open, on_toggle, on_navigate } = props;
    let content = use_context::<Rc<SiteContent>>();
    let (logo, name) = content
        .as_ref()
        .map(|c| (config::asset_url(&c.logo), c.name.clone()))
        .unwrap_or_default();

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let nav_item = |section: Section, class: &'static str| {
        let index = section.index();
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        });
        html! {
            <button
                class={classes!(class, (index == *active).then(|| "active"))}
                style={format!("--stagger: {}ms", index * 100)}
                {onclick}
            >
                {section.nav_label()}
            </button>
        }
    };

    let home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Section::Home);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={home}>
                    <img src={logo} alt="Seasons" />
                    <span>{name}</span>
                </a>

                <div class="nav-links">
                    { for SECTIONS.iter().map(|s| nav_item(*s, "nav-link")) }
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for SECTIONS.iter().map(|s| nav_item(*s, "mobile-link")) }
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    animation: navDrop 0.6s ease-out both;
                }

                @keyframes navDrop {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }

                .nav-logo:hover {
                    transform: scale(1.05);
                }

                .nav-logo img {
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 50%;
                    object-fit: cover;
                    transition: transform 1.2s ease;
                }

                .nav-logo:hover img {
                    transform: rotate(360deg);
                }

                .nav-logo span {
                    font-size: 1.25rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                }

                .nav-links {
                    display: none;
                    gap: 1.5rem;
                }

                .nav-link,
                .mobile-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #fff;
                    font-family: inherit;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    transition: color 0.3s ease, transform 0.3s ease, background 0.3s ease;
                    animation: navItemIn 0.5s ease-out both;
                    animation-delay: calc(400ms + var(--stagger));
                }

                .nav-link {
                    font-size: 0.875rem;
                }

                .nav-link:hover {
                    color: #fbbf24;
                    transform: translateY(-3px) scale(1.05);
                }

                .nav-link.active,
                .mobile-link.active {
                    color: #fbbf24;
                }

                @keyframes navItemIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 5px;
                    width: 2.5rem;
                    height: 2.5rem;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.2s ease;
                }

                .burger-menu:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: scale(1.1);
                }

                .burger-menu span {
                    display: block;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1.5rem 1rem;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(16px);
                    border-top: 1px solid #27272a;
                    animation: menuOpen 0.3s ease both;
                }

                @keyframes menuOpen {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 30rem; }
                }

                .mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                    animation-name: mobileItemIn;
                    animation-delay: var(--stagger);
                }

                .mobile-link:hover {
                    color: #fbbf24;
                    background: rgba(255, 255, 255, 0.05);
                }

                .mobile-link.active {
                    background: rgba(251, 191, 36, 0.1);
                }

                @keyframes mobileItemIn {
                    from { transform: translateX(-20px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }

                @media (min-width: 768px) {
                    .nav-content {
                        height: 5rem;
                        padding: 0 2rem;
                    }

                    .nav-links {
                        display: flex;
                    }

                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }

                @media (min-width: 1024px) {
                    .nav-links {
                        gap: 3rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
