use crate::{
    data::{
        student::{Student, StudentFlags},
        view::{ViewQuery, render_view},
    },
    error::{InquisitorResult, MissingStudentSnafu, UnknownFlagSnafu},
    maud_conveniences::{
        TableRow, detail_line, flag_badge, house_accent, render_table, subtitle, title,
    },
    routes::sse::SseEvent,
    state::InquisitorState,
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;
use snafu::OptionExt;
use uuid::Uuid;

///the list listens for this on `body` too, so it re-renders even without a live sse feed
const HX_TRIGGER: &str = "HX-Trigger";

const FLAG_ACTIONS: [(StudentFlags, &str); 3] = [
    (StudentFlags::PREFECT, "Make Prefect"),
    (StudentFlags::INQ_SQUAD, "Add to Inquisitorial Squad"),
    (StudentFlags::EXPELLED, "Expel"),
];

fn portrait_src(student: &Student) -> String {
    format!("/portraits/{}.png", student.portrait_stem())
}

pub async fn internal_get_students(
    State(state): State<InquisitorState>,
    Query(query): Query<ViewQuery>,
) -> Markup {
    let sort_key = query.sort_key();
    let filter = query.house_filter();

    let roster = state.roster().await;
    let shown = render_view(&roster, sort_key, &filter, state.collation());
    debug!(shown = shown.len(), ?sort_key, ?filter, "Rendering student list");

    let heading = html! { "Students " span class="text-gray-400 text-base" {"(showing " (shown.len()) " of " (roster.len()) ")"} };

    let rows = shown
        .into_iter()
        .map(|student| TableRow {
            hx_get: Some(format!("/internal/get_student?id={}", student.id)),
            accent: house_accent(&student.house),
            cells: [
                html! { img src=(portrait_src(student)) alt=(student) class="w-10 h-10 rounded-full object-cover"; },
                html! { (student.given_names()) },
                html! { (student.last_name) },
                html! { (student.blood_status) },
                flag_badge(student.is_prefect(), "Prefect"),
                flag_badge(student.is_inq_squad_member(), "Inq. Squad"),
                flag_badge(student.is_expelled(), "Expelled"),
                html! { (student.house) },
            ],
        })
        .collect();

    html! {
        div hx-get="/internal/get_students" hx-trigger="sse:crud_student, crud_student from:body" hx-include="#view_controls" hx-swap="outerHTML" {
            (render_table(
                heading,
                ["", "First Names", "Last Name", "Blood Status", "Prefect", "Inq. Squad", "Expelled", "House"],
                rows,
            ))
        }
    }
}

#[derive(Deserialize)]
pub struct IdForm {
    pub id: Uuid,
}

pub async fn internal_get_student_in_detail(
    State(state): State<InquisitorState>,
    Query(IdForm { id }): Query<IdForm>,
) -> InquisitorResult<Markup> {
    let roster = state.roster().await;
    let student = roster.get(id).context(MissingStudentSnafu { id })?;

    Ok(render_student_in_detail(student))
}

#[derive(Deserialize)]
pub struct FlagForm {
    pub id: Uuid,
    pub flag: String,
}

pub async fn internal_post_student_flag(
    State(state): State<InquisitorState>,
    Form(FlagForm { id, flag }): Form<FlagForm>,
) -> InquisitorResult<([(&'static str, &'static str); 1], Markup)> {
    let flag = StudentFlags::from_wire(&flag).context(UnknownFlagSnafu { provided: flag })?;

    let detail = {
        let mut roster = state.roster_mut().await;
        let student = roster.set_flag(id, flag)?;
        info!(%id, name = %student.name(), ?flag, "Set student flag");
        render_student_in_detail(student)
    };
    state.send_sse_event(SseEvent::CrudStudent);

    Ok(([(HX_TRIGGER, SseEvent::CrudStudent.name())], detail))
}

pub async fn internal_get_close_student() -> Markup {
    html! {}
}

fn render_student_in_detail(student: &Student) -> Markup {
    let hx_vals = html! { "{\"id\": \"" (student.id) "\"}" };
    let background = if student.is_expelled() {
        "bg-blue-950"
    } else {
        "bg-gray-800"
    };

    html! {
        div hx-get="/internal/get_student" hx-trigger="sse:crud_student" hx-vals=(hx_vals) hx-swap="outerHTML" class="container mx-auto" {
            div class={"rounded-lg shadow-md overflow-hidden max-w-md mx-auto border-4 " (house_accent(&student.house)) " " (background)} {
                div class="p-4 flex flex-col space-y-2" {
                    div class="flex flex-row items-center justify-between" {
                        (title(student))
                        button class="bg-gray-600 hover:bg-gray-800 font-bold py-1 px-3 rounded" hx-get="/internal/close_student" hx-target="#in_focus" {
                            "Close"
                        }
                    }

                    img src=(portrait_src(student)) alt=(student) class="w-32 h-32 rounded object-cover mx-auto";

                    (detail_line("First Names", student.given_names()))
                    (detail_line("Last Name", &student.last_name))
                    (detail_line("Blood Status", student.blood_status))
                    (detail_line("House", &student.house))

                    @if student.is_expelled() {
                        (subtitle(html! { span class="text-red-400" {"Expelled"} }))
                    }

                    div class="flex flex-row space-x-2" {
                        (flag_badge(student.is_prefect(), "Prefect"))
                        (flag_badge(student.is_inq_squad_member(), "Inquisitorial Squad"))
                    }

                    div class="flex flex-row flex-wrap gap-2 pt-2" {
                        @for (flag, label) in FLAG_ACTIONS {
                            @if !student.flags.contains(flag) {
                                @if let Some(wire_name) = flag.wire_name() {
                                    button class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" hx-post="/internal/student/flag" hx-vals={"{\"id\": \"" (student.id) "\", \"flag\": \"" (wire_name) "\"}"} hx-target="#in_focus" {
                                        (label)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
