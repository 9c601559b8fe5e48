use std::rc::Rc;

use yew::prelude::*;

use crate::content::SiteContent;
use crate::sections::Section;

#[function_component(FindUs)]
pub fn find_us() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let find_us = &content.find_us;
    let contact = &find_us.contact;

    html! {
        <section id={Section::FindUs.id()} class="panel find-us">
            <div class="panel__inner panel__inner--wide">
                <div class="panel__intro reveal">
                    <h2 class="panel__heading">{&find_us.heading}</h2>
                    <p class="panel__lead">{&find_us.intro}</p>
                </div>

                <div class="find-us__grid">
                    <div class="find-us__details">
                        <div>
                            <h3>{"CONTACT"}</h3>
                            <ul class="contact-list">
                                <li><span class="contact-icon">{"📍"}</span><span>{&contact.address}</span></li>
                                <li>
                                    <span class="contact-icon">{"📞"}</span>
                                    <a href={format!("tel:{}", contact.phone)}>{&contact.phone}</a>
                                </li>
                                <li>
                                    <span class="contact-icon">{"✉"}</span>
                                    <a href={format!("mailto:{}", contact.email)}>{&contact.email}</a>
                                </li>
                            </ul>
                        </div>

                        <div>
                            <h3>{"HOURS"}</h3>
                            <div class="hours">
                                { for find_us.hours.iter().map(|h| html! {
                                    <div key={h.days.clone()} class="hours__row">
                                        <span class="hours__days">{&h.days}</span>
                                        <span>{&h.hours}</span>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div>
                            <h3>{"FOLLOW"}</h3>
                            <div class="socials">
                                { for find_us.socials.iter().map(|s| html! {
                                    <a
                                        key={s.label.clone()}
                                        class="social-link"
                                        href={s.url.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label={s.label.clone()}
                                    >
                                        {s.label.chars().next().unwrap_or('•')}
                                    </a>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="map">
                        <iframe
                            src={find_us.map_embed_url.clone()}
                            width="100%"
                            height="100%"
                            style="border: 0;"
                            allow="fullscreen"
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title={find_us.map_title.clone()}
                        />
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .find-us__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .find-us__details {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .find-us__details h3 {
                    font-size: 1.25rem;
                    font-weight: 300;
                    letter-spacing: 0.025em;
                    margin: 0 0 1rem;
                }

                .contact-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-weight: 300;
                    font-size: 0.875rem;
                }

                .contact-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .contact-list a {
                    color: inherit;
                    text-decoration: none;
                }

                .contact-list a:hover {
                    color: #fbbf24;
                }

                .contact-icon {
                    color: #fbbf24;
                    flex-shrink: 0;
                }

                .hours {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-weight: 300;
                    font-size: 0.875rem;
                }

                .hours__row {
                    display: flex;
                    flex-direction: column;
                }

                .hours__days {
                    font-weight: 500;
                }

                .socials {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.25rem;
                    height: 2.25rem;
                    border: 1px solid #fbbf24;
                    border-radius: 0.375rem;
                    color: #fbbf24;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .social-link:hover {
                    background: #fbbf24;
                    color: #000;
                }

                .map {
                    background: #000;
                    border-radius: 0.125rem;
                    padding: 0.5rem;
                    height: 16rem;
                }

                .map iframe {
                    border-radius: 0.125rem;
                }

                @media (min-width: 640px) {
                    .find-us__details { gap: 2rem; }
                    .find-us__details h3 { margin-bottom: 1.5rem; }
                    .contact-list, .hours { font-size: 1rem; }
                    .contact-list { gap: 1rem; }
                    .hours__row { flex-direction: row; justify-content: space-between; }
                    .hours__days { font-weight: 300; }
                    .socials { gap: 1.5rem; }
                    .social-link { width: 2.5rem; height: 2.5rem; }
                    .map { padding: 1rem; height: 20rem; }
                }

                @media (min-width: 768px) {
                    .map { height: 24rem; }
                }

                @media (min-width: 1024px) {
                    .find-us__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
