use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;

pub fn copyright_line(year: i32, holder: &str) -> String {
    format!("© {} {}. All rights reserved.", year, holder)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <img src={config::asset_url(&content.logo)} alt="Seasons" />
                <span>{&content.name}</span>
            </div>
            <p class="site-footer__tagline">{&content.tagline}</p>
            <p class="site-footer__legal">{copyright_line(year, &content.copyright_holder)}</p>

            <style>
                {r#"
                .site-footer {
                    background: #000;
                    padding: 2rem 1rem;
                    border-top: 1px solid #27272a;
                    text-align: center;
                }

                .site-footer__brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .site-footer__brand img {
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 50%;
                    object-fit: cover;
                }

                .site-footer__brand span {
                    font-size: 1.125rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                }

                .site-footer__tagline {
                    font-size: 0.875rem;
                    font-weight: 300;
                    opacity: 0.7;
                    margin: 0 0 0.75rem;
                }

                .site-footer__legal {
                    font-size: 0.75rem;
                    font-weight: 300;
                    opacity: 0.5;
                    margin: 0;
                }

                @media (min-width: 640px) {
                    .site-footer { padding: 3rem 1.5rem; }
                    .site-footer__brand { margin-bottom: 1.5rem; }
                    .site-footer__brand span { font-size: 1.25rem; }
                    .site-footer__tagline { font-size: 1rem; margin-bottom: 1rem; }
                    .site-footer__legal { font-size: 0.875rem; }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_holder() {
        assert_eq!(
            copyright_line(2024, "Seasons Cocktail Bar"),
            "© 2024 Seasons Cocktail Bar. All rights reserved."
        );
    }
}
