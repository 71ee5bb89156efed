use dto::entry::PasswordEntryDto;
use dto::pagination::ListDto;
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::reactive::spawn_local;
use snafu::{OptionExt, ResultExt, ensure};
use vault::search::{Search, SearchDisplay};
use wasm_bindgen::prelude::*;
use web_sys::js_sys;
use web_sys::window;

use crate::Result;
use crate::error::{ParseResponseSnafu, RequestSnafu, ServiceSnafu, WhateverSnafu};

const ENTRIES_PATH: &str = "/api/password-entries";
const PAGE_SIZE: &str = "100";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
}

#[component]
pub fn Container() -> impl IntoView {
    match get_client_config() {
        Ok(config) => view! {
            <div>
                <SearchContainer config=config />
            </div>
        }
        .into_any(),
        Err(e) => view! {
            <div>
                <article class="message is-danger">
                    <div class="message-header">
                        <p>"Error"</p>
                    </div>
                    <div class="message-body">{e.to_string()}</div>
                </article>
            </div>
        }
        .into_any(),
    }
}

async fn list_entries(config: &ClientConfig) -> Result<Vec<PasswordEntryDto>> {
    let url = format!("{}{}", config.base_url.trim_end_matches('/'), ENTRIES_PATH);
    let mut req = Request::get(&url).query([
        ("populate", "*"),
        ("sort[0]", "appName:asc"),
        ("pagination[pageSize]", PAGE_SIZE),
    ]);
    if let Some(token) = &config.token {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }

    let res = req.send().await.context(RequestSnafu)?;
    ensure!(res.ok(), ServiceSnafu { status: res.status() });

    let listing: ListDto<PasswordEntryDto> = res.json().await.context(ParseResponseSnafu)?;
    Ok(listing.data)
}

#[component]
fn SearchContainer(config: ClientConfig) -> impl IntoView {
    let search = RwSignal::new(Search::<PasswordEntryDto>::new());
    let (err, set_err) = signal::<Option<String>>(None);

    spawn_local(async move {
        let items = match list_entries(&config).await {
            Ok(items) => items,
            Err(e) => {
                log!("Unable to load entries: {}", e);
                set_err.set(Some(e.to_string()));
                Vec::new()
            }
        };
        search.update(|s| s.set_items(items));
    });

    view! {
        <div class="search">
            <input
                type="search"
                placeholder="Search"
                prop:value=move || search.with(|s| s.query().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    search.update(|s| s.set_query(&value));
                }
            />
            {move || err.get().map(|msg| view! { <p class="error">{msg}</p> })}
            {move || search.with(|s| render_display(s.display()))}
        </div>
    }
}

fn render_display(display: SearchDisplay<'_, PasswordEntryDto>) -> AnyView {
    match display {
        SearchDisplay::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        SearchDisplay::Empty => {
            view! { <p class="empty">"No matching records found"</p> }.into_any()
        }
        SearchDisplay::Results(entries) => {
            let cards = entries
                .into_iter()
                .map(|entry| {
                    let app_name = entry.app_name.clone().unwrap_or_default();
                    let email = entry.email.clone().unwrap_or_default();
                    let text = entry.text.clone().unwrap_or_default();
                    view! {
                        <li class="entry">
                            <dl>
                                <dt>"AppName"</dt>
                                <dd>{app_name}</dd>
                                <dt>"Email"</dt>
                                <dd>{email}</dd>
                                <dt>"Password"</dt>
                                <dd>{text}</dd>
                            </dl>
                        </li>
                    }
                })
                .collect_view();

            view! { <ul class="entries">{cards}</ul> }.into_any()
        }
    }
}

fn get_client_config() -> Result<ClientConfig> {
    let window = window().context(WhateverSnafu {
        msg: "Unable to read global window var",
    })?;

    let base_url = js_sys::Reflect::get(&window, &JsValue::from_str("API_URL"))
        .ok()
        .context(WhateverSnafu {
            msg: "Unable to read API_URL var",
        })?
        .as_string()
        .context(WhateverSnafu {
            msg: "Unable to parse API_URL var",
        })?;

    let token = js_sys::Reflect::get(&window, &JsValue::from_str("API_TOKEN"))
        .ok()
        .and_then(|t| t.as_string())
        .filter(|t| !t.trim().is_empty());

    Ok(ClientConfig { base_url, token })
}
