use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Index)]
pub fn home() -> Html {
    html! {
        <div class="dashboard-container">
            <div class="hero-section">
                <h1 class="hero-title">{ "OpsDeck" }</h1>
                <p class="hero-subtitle">{ "Operations console for the opsdeck backend" }</p>
            </div>

            <div class="actions-grid">
                <Link<Route> to={Route::Guide} classes="action-card">
                    <div class="action-content">
                        <span class="action-icon">{ "🧭" }</span>
                        <h3>{ "Architecture guide" }</h3>
                        <p>{ "How the console, the backend and deployments fit together" }</p>
                    </div>
                    <div class="action-arrow">{ "→" }</div>
                </Link<Route>>
            </div>

            <div class="footer-tip">
                { "💡 The console refuses to run against a backend from a different release." }
            </div>
        </div>
    }
}
