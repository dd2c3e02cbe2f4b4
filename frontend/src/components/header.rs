use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-seedling"></i> {" Smart Paddy Field"}</h1>
            <p class="subtitle">{"Upload a field photo to check crop health and get expert recommendations"}</p>
        </header>
    }
}
