use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarsProps {
    pub count: u8,
    /// Pop each star in one after another once the parent is revealed.
    #[prop_or_default]
    pub animated: bool,
}

#[function_component(Stars)]
pub fn stars(props: &StarsProps) -> Html {
    html! {
        <div class={classes!("stars", props.animated.then(|| "stars--animated"))}
             aria-label={format!("{} out of 5 stars", props.count)}>
            { for (0..props.count).map(|i| html! {
                <span class="star" style={format!("--stagger: {}ms", u32::from(i) * 100)}>{"★"}</span>
            }) }
        </div>
    }
}
