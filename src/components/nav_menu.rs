//! Navigation menu rendered from the session's menu entries.

use leptos::prelude::*;

use crate::net::types::MenuItem;

#[component]
pub fn NavMenu(menus: Vec<MenuItem>) -> impl IntoView {
    view! {
        <nav class="nav-menu">
            {menus
                .into_iter()
                .map(|item| {
                    view! {
                        <a class="nav-menu__entry" href=item.path.clone()>
                            {item.icon.map(|icon| view! { <span class="nav-menu__icon">{icon}</span> })}
                            <span class="nav-menu__label">{item.label}</span>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
