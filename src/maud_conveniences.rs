use maud::{Markup, Render, html};

/// One body row of [`render_table`], optionally loading something into `#in_focus` when clicked.
pub struct TableRow<const N: usize> {
    pub hx_get: Option<String>,
    pub accent: &'static str,
    pub cells: [Markup; N],
}

pub fn render_table<const N: usize>(
    overall_title: impl Render,
    titles: [&'static str; N],
    items: Vec<TableRow<N>>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (title(overall_title))
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody {
                        @for row in items {
                            tr class={"border-l-4 hover:bg-gray-700 cursor-pointer " (row.accent)} hx-get=[row.hx_get] hx-target="#in_focus" {
                                @for col in row.cells {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-2" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-gray-300 text-sm font-bold mb-2" {(label)}
            (element)
        }
    }
}

pub fn detail_line(label: &'static str, value: impl Render) -> Markup {
    html! {
        p class="text-gray-200 font-semibold" {
            (label) ": "
            span class="font-medium" {(value)}
        }
    }
}

///green when set, grey when not
pub fn flag_badge(is_set: bool, label: &'static str) -> Markup {
    html! {
        @if is_set {
            span class="bg-green-700 text-green-100 text-xs font-semibold px-2 py-1 rounded" {(label)}
        } @else {
            span class="bg-gray-600 text-gray-400 text-xs font-semibold px-2 py-1 rounded" {"-"}
        }
    }
}

pub fn house_accent(house: &str) -> &'static str {
    match house {
        "Gryffindor" => "border-red-700",
        "Hufflepuff" => "border-yellow-500",
        "Ravenclaw" => "border-blue-700",
        "Slytherin" => "border-green-700",
        _ => "border-gray-500",
    }
}
