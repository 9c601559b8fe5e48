use std::rc::Rc;

use yew::prelude::*;

use crate::content::SiteContent;
use crate::sections::Section;

#[function_component(Laboratory)]
pub fn laboratory() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let lab = &content.laboratory;

    html! {
        <section id={Section::Laboratory.id()} class="panel panel--tinted laboratory">
            <div class="panel__inner">
                <div class="panel__intro reveal">
                    <h2 class="panel__heading">{&lab.heading}</h2>
                    <p class="panel__lead">{&lab.intro}</p>
                </div>

                <div class="card-grid">
                    { for lab.pillars.iter().enumerate().map(|(i, pillar)| html! {
                        <div
                            key={pillar.title.clone()}
                            class="card pillar reveal"
                            style={format!("transition-delay: {}ms", i * 200)}
                        >
                            <div class="pillar__icon">{&pillar.icon}</div>
                            <h3 class="pillar__title">{&pillar.title}</h3>
                            <p class="pillar__text">{&pillar.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .pillar {
                    text-align: center;
                }

                .pillar.revealed:hover {
                    transform: scale(1.05) translateY(-10px);
                    transition-delay: 0s !important;
                }

                .pillar__icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .pillar__title {
                    font-size: 1.25rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin: 0 0 0.75rem;
                }

                .pillar__text {
                    font-weight: 300;
                    font-size: 0.875rem;
                    opacity: 0.9;
                    margin: 0;
                }

                @media (min-width: 640px) {
                    .pillar__icon { font-size: 3rem; margin-bottom: 1.5rem; }
                    .pillar__title { font-size: 1.5rem; margin-bottom: 1rem; }
                    .pillar__text { font-size: 1rem; }
                }
                "#}
            </style>
        </section>
    }
}
