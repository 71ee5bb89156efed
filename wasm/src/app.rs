use leptos::prelude::*;

use crate::container::Container;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <h1>"Passwords"</h1>
            <Container />
        </main>
    }
}
