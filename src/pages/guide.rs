use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forward;

#[derive(Properties, PartialEq)]
pub struct GuideProps {
    /// Navigation back to wherever the reader came from.
    pub on_back: Callback<()>,
}

/// Static architecture notes. Nothing here is parameterized; the only way
/// out is the back control.
#[function_component(Guide)]
pub fn guide(props: &GuideProps) -> Html {
    let on_back: Callback<MouseEvent> = forward(&props.on_back);

    html! {
        <div class="guide-container">
            <h1 class="guide-title">{ "Architecture guide" }</h1>

            <section class="guide-section">
                <h2>{ "Console and backend" }</h2>
                <p>{ "The console is a static bundle served by the backend. Every release \
                      ships both halves together, and the console checks at startup that the \
                      backend reports the release it was built for." }</p>
            </section>

            <section class="guide-section">
                <h2>{ "Version mismatches" }</h2>
                <p>{ "After a deployment the backend restarts first. A tab still holding the \
                      old bundle will see a version mismatch notice; reloading fetches the \
                      matching bundle." }</p>
            </section>

            <section class="guide-section">
                <h2>{ "Deployments" }</h2>
                <p>{ "Where the bundle is served from is controlled by the backend's \
                      deployment-url setting. The console never reads that setting itself; it \
                      is named here only so operators know where to look." }</p>
            </section>

            <button onclick={on_back} class="back-button">{ "← Back" }</button>
        </div>
    }
}

/// Routed wrapper: wires the back control to a history pop. Outside a router
/// the back control is inert rather than a panic.
#[function_component(GuidePage)]
pub fn guide_page() -> Html {
    let on_back = match use_navigator() {
        Some(navigator) => Callback::from(move |()| navigator.back()),
        None => Callback::noop(),
    };

    html! { <Guide on_back={on_back} /> }
}
