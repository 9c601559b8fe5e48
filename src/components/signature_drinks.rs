use std::rc::Rc;

use yew::prelude::*;

use crate::components::stars::Stars;
use crate::config;
use crate::content::{Drink, SiteContent};
use crate::sections::Section;

#[derive(Properties, PartialEq)]
struct DrinkPanelProps {
    drink: Drink,
    index: usize,
}

#[function_component(DrinkPanel)]
fn drink_panel(props: &DrinkPanelProps) -> Html {
    let DrinkPanelProps { drink, index } = props;
    // Even panels put the image on the left.
    let side = if index % 2 == 0 { "even" } else { "odd" };

    html! {
        <div class={classes!("drink", format!("drink--{}", side), "reveal", "reveal--fade")} data-reveal-margin="200">
            <div class="drink__glow"></div>

            <div class="drink__grid">
                <div class="drink__media reveal" data-reveal-margin="150">
                    <div class="drink__float" style={format!("animation-delay: {}ms", index * 500)}></div>
                    <div class="drink__frame">
                        <img src={config::asset_url(&drink.image)} alt={drink.name.clone()} />
                    </div>
                    <div class="drink__overlay"></div>
                </div>

                <div class="drink__body reveal" data-reveal-margin="100">
                    <div>
                        <h3 class="drink__name">{&drink.name}</h3>
                        <div class="drink__rule"></div>
                    </div>

                    <div class="drink__ingredients">
                        <h4>{"Ingredients"}</h4>
                        <div class="ingredient-grid">
                            { for drink.ingredients().into_iter().enumerate().map(|(i, ingredient)| html! {
                                <div
                                    key={ingredient.to_string()}
                                    class="ingredient"
                                    style={format!("--stagger: {}ms", i * 100)}
                                >
                                    <span>{ingredient}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="drink__story">
                        <p>{&drink.story}</p>
                        <div class="drink__badge">
                            <Stars count={5} animated={true} />
                            <span>{"Signature Creation"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="drink__accent"></div>
        </div>
    }
}

#[function_component(SignatureDrinks)]
pub fn signature_drinks() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let drinks = &content.drinks;

    html! {
        <section id={Section::SignatureDrinks.id()} class="drinks">
            <div class="panel__inner panel__intro drinks__intro reveal" data-reveal-margin="100">
                <h2 class="drinks__heading">{&drinks.heading}</h2>
                <p class="panel__lead">{&drinks.intro}</p>
            </div>

            <div class="drinks__list">
                { for drinks.items.iter().enumerate().map(|(index, drink)| html! {
                    <DrinkPanel key={drink.name.clone()} drink={drink.clone()} {index} />
                }) }
            </div>

            <style>
                {r#"
                .drinks {
                    padding: 4rem 0;
                }

                .drinks__intro {
                    margin-bottom: 4rem;
                    transform: translateY(80px);
                    transition-duration: 1s;
                }

                .drinks__heading {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    margin: 0 0 1.5rem;
                }

                .drinks__list {
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                }

                .drink {
                    position: relative;
                    transition-duration: 1.5s;
                }

                .drink__glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transform: scale(0.8);
                    transition: opacity 2s ease 0.3s, transform 2s ease 0.3s;
                }

                .drink--even .drink__glow {
                    background: linear-gradient(to right, rgba(251, 191, 36, 0.05), transparent, transparent);
                }

                .drink--odd .drink__glow {
                    background: linear-gradient(to left, rgba(251, 191, 36, 0.05), transparent, transparent);
                }

                .drink.revealed .drink__glow {
                    opacity: 1;
                    transform: scale(1);
                }

                .drink__grid {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .drink__media {
                    position: relative;
                    transition-duration: 1.2s;
                    transition-delay: 0.2s;
                }

                .drink--even .drink__media { transform: translateX(-100px) scale(0.8) rotateY(-15deg); }
                .drink--odd .drink__media { transform: translateX(100px) scale(0.8) rotateY(15deg); }

                .drink .drink__media.revealed {
                    transform: none;
                }

                .drink--even .drink__media.revealed:hover { transform: scale(1.05) rotateY(5deg); transition-delay: 0s; }
                .drink--odd .drink__media.revealed:hover { transform: scale(1.05) rotateY(-5deg); transition-delay: 0s; }

                .drink__float {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: rgba(251, 191, 36, 0.1);
                    filter: blur(24px);
                    animation: drinkFloat 4s ease-in-out infinite;
                }

                @keyframes drinkFloat {
                    0%, 100% { transform: scale(1); opacity: 0.3; }
                    50% { transform: scale(1.2); opacity: 0.6; }
                }

                .drink__frame {
                    aspect-ratio: 4 / 5;
                    border-radius: 1rem;
                    overflow: hidden;
                    padding: 0.25rem;
                    background: linear-gradient(to bottom right, rgba(251, 191, 36, 0.2), transparent);
                }

                .drink__frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 0.75rem;
                    transform: scale(1.2);
                    transition: transform 1.5s ease-out;
                }

                .drink__media.revealed .drink__frame img { transform: scale(1); }
                .drink__media.revealed:hover .drink__frame img { transform: scale(1.1); }

                .drink__overlay {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.4), transparent, transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .drink__media:hover .drink__overlay { opacity: 1; }

                .drink__body {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    transition-duration: 1s;
                    transition-delay: 0.4s;
                }

                .drink--even .drink__body { transform: translateX(100px); }
                .drink--odd .drink__body { transform: translateX(-100px); }
                .drink .drink__body.revealed { transform: none; }

                .drink__name {
                    font-size: 2.25rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                    color: #fbbf24;
                    margin: 0 0 0.5rem;
                    transition: transform 0.3s ease, text-shadow 0.3s ease;
                }

                .drink__name:hover {
                    transform: scale(1.05);
                    text-shadow: 0 0 20px rgba(251, 191, 36, 0.5);
                }

                .drink__rule {
                    width: 0;
                    height: 2px;
                    background: linear-gradient(to right, #fbbf24, transparent);
                    transition: width 1s ease 0.8s;
                }

                .drink__body.revealed .drink__rule { width: 80px; }

                .drink__ingredients h4 {
                    font-size: 1.125rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    text-transform: uppercase;
                    opacity: 0.7;
                    margin: 0 0 1rem;
                }

                .ingredient-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .ingredient {
                    cursor: pointer;
                    opacity: 0;
                    transform: scale(0.8) translateY(20px);
                    transition: opacity 0.5s, transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                    transition-delay: calc(1.2s + var(--stagger));
                }

                .drink__body.revealed .ingredient {
                    opacity: 1;
                    transform: none;
                }

                .drink__body.revealed .ingredient:hover {
                    transform: scale(1.05) translateY(-2px);
                    transition-delay: 0s;
                }

                .ingredient span {
                    display: block;
                    padding: 0.75rem;
                    border: 1px solid rgba(251, 191, 36, 0.2);
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    font-weight: 300;
                    text-transform: capitalize;
                    transition: all 0.3s ease;
                }

                .ingredient:hover span {
                    color: #fbbf24;
                    border-color: rgba(251, 191, 36, 0.4);
                    background: rgba(251, 191, 36, 0.05);
                }

                .drink__story p {
                    font-size: 1rem;
                    font-weight: 300;
                    line-height: 1.625;
                    opacity: 0.9;
                    margin: 0 0 1rem;
                }

                .drink__badge {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding-top: 1rem;
                }

                .drink__badge span {
                    font-size: 0.875rem;
                    font-weight: 300;
                    opacity: 0.7;
                }

                .drink__accent {
                    position: absolute;
                    top: 50%;
                    width: 0.25rem;
                    height: 8rem;
                    background: linear-gradient(to bottom, transparent, rgba(251, 191, 36, 0.3), transparent);
                    transform: scaleY(0);
                    transition: transform 1s ease 1s;
                }

                .drink--even .drink__accent { right: 0; }
                .drink--odd .drink__accent { left: 0; }
                .drink.revealed .drink__accent { transform: scaleY(1); }

                @media (min-width: 640px) {
                    .drinks { padding: 5rem 0; }
                    .drinks__intro { margin-bottom: 6rem; }
                    .drinks__heading { font-size: 3rem; margin-bottom: 2rem; }
                    .drinks__list { gap: 10rem; }
                    .drink__name { font-size: 3rem; }
                    .drink__ingredients h4 { font-size: 1.25rem; }
                    .ingredient-grid { gap: 1rem; }
                    .ingredient span { padding: 1rem; font-size: 1rem; }
                    .drink__story p { font-size: 1.125rem; }
                }

                @media (min-width: 768px) {
                    .drinks__heading { font-size: 3.75rem; }
                    .drink__name { font-size: 3.75rem; }
                }

                @media (min-width: 1024px) {
                    .drink__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        padding: 0 2rem;
                    }

                    .drink--odd .drink__media { order: 2; }
                    .drink--odd .drink__body { order: 1; }
                }
                "#}
            </style>
        </section>
    }
}
