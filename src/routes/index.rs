use crate::{
    data::view::{ALL_HOUSES, KNOWN_HOUSES, SortKey},
    maud_conveniences::{form_element, title},
    state::InquisitorState,
};
use axum::extract::State;
use maud::{Markup, html};

const SELECT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";

pub async fn get_index_route(State(state): State<InquisitorState>) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-6xl w-full flex flex-col space-y-4" {
            (title("Hogwarts Student List"))

            form id="view_controls" hx-get="/internal/get_students" hx-trigger="change" hx-target="#all_students" class="flex flex-row space-x-4" {
                (form_element("sort", "Sort by", html! {
                    select id="sort" name="sort" class=(SELECT_CLASSES) {
                        @for key in SortKey::ALL {
                            option value=(key.wire_name()) selected[key == SortKey::default()] {(key.label())}
                        }
                    }
                }))
                (form_element("house", "House", html! {
                    select id="house" name="house" class=(SELECT_CLASSES) {
                        option value=(ALL_HOUSES) selected {(ALL_HOUSES)}
                        @for house in KNOWN_HOUSES {
                            option value=(house) {(house)}
                        }
                    }
                }))
            }

            div sse-connect="/sse_feed" class="container flex flex-row justify-center space-x-4" {
                div id="all_students" hx-get="/internal/get_students" hx-include="#view_controls" hx-trigger="load" class="grow" {}
                div id="in_focus" class="w-96 shrink-0" {}
            }
        }
    })
}
