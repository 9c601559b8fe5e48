use std::rc::Rc;

use yew::prelude::*;

use crate::components::stars::Stars;
use crate::content::SiteContent;
use crate::sections::Section;

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let reviews = &content.reviews;

    html! {
        <section id={Section::Reviews.id()} class="panel panel--tinted-light reviews">
            <div class="panel__inner">
                <div class="panel__intro reveal">
                    <h2 class="panel__heading">{&reviews.heading}</h2>
                    <p class="panel__lead">{&reviews.intro}</p>
                </div>

                <div class="card-grid">
                    { for reviews.items.iter().enumerate().map(|(i, review)| html! {
                        <div
                            key={review.author.clone()}
                            class="card review reveal"
                            style={format!("transition-delay: {}ms", i * 200)}
                        >
                            <Stars count={review.rating} />
                            <p class="review__text">{format!("\"{}\"", review.text)}</p>
                            <p class="review__author">{format!("— {}", review.author)}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .review {
                    background: rgba(0, 0, 0, 0.4);
                }

                .review.revealed:hover {
                    transform: scale(1.02) translateY(-5px);
                    transition-delay: 0s !important;
                }

                .review .stars {
                    margin-bottom: 1rem;
                }

                .review__text {
                    font-weight: 300;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    opacity: 0.9;
                    margin: 0 0 1rem;
                }

                .review__author {
                    font-weight: 500;
                    font-size: 0.875rem;
                    color: #fbbf24;
                    margin: 0;
                }

                @media (min-width: 640px) {
                    .review .stars { font-size: 1.25rem; margin-bottom: 1.5rem; }
                    .review__text { font-size: 1rem; margin-bottom: 1.5rem; }
                    .review__author { font-size: 1rem; }
                }
                "#}
            </style>
        </section>
    }
}
