use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::sections::Section;

#[function_component(About)]
pub fn about() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let about = &content.about;

    html! {
        <section id={Section::About.id()} class="panel about">
            <div class="panel__inner about__grid">
                <div class="reveal reveal--left">
                    <h2 class="panel__heading">{&about.heading}</h2>
                    <div class="about__copy">
                        { for about.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                    </div>
                </div>

                <div class="about__media reveal reveal--right">
                    <img src={config::asset_url(&about.image)} alt={about.image_alt.clone()} />
                </div>
            </div>

            <style>
                {r#"
                .about__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    align-items: center;
                }

                .about__copy p {
                    font-size: 1rem;
                    font-weight: 300;
                    line-height: 1.625;
                    opacity: 0.9;
                    margin: 0 0 1rem;
                }

                .about__media {
                    aspect-ratio: 1 / 1;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom right, rgba(251, 191, 36, 0.2), transparent);
                }

                .about__media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }

                @media (min-width: 640px) {
                    .about__copy p {
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                    }
                }

                @media (min-width: 1024px) {
                    .about__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
