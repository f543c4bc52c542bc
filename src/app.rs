use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::backend::{BackendProbe, EXPECTED_BACKEND_VERSION};
use crate::components::VersionGate;
use crate::pages::{GuidePage, Index};
use crate::router::Route;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

#[derive(Serialize, Deserialize)]
struct Empty {}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Index => html! { <Index /> },
        Route::Guide => html! { <GuidePage /> },
        Route::NotFound => html! { <h1>{ "404 page not found" }</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let probe = use_state(|| BackendProbe::Pending);
    let dismissed = use_state(|| false);

    // Ask the host for the backend version once, on mount.
    {
        let probe = probe.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let args = serde_wasm_bindgen::to_value(&Empty {}).unwrap();
                let reported = invoke("backend_version", args).await.as_string();
                probe.set(BackendProbe::from_invoke(reported));
            });
            || {}
        });
    }

    if probe.mismatched(EXPECTED_BACKEND_VERSION) && !*dismissed {
        let on_ignore = {
            let dismissed = dismissed.clone();
            Callback::from(move |()| dismissed.set(true))
        };

        return html! {
            <VersionGate
                expected_version={EXPECTED_BACKEND_VERSION.to_string()}
                backend_version={probe.reported()}
                on_ignore={on_ignore}
            />
        };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
