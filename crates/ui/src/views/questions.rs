#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use services::{Progress, QuestionBoard};
use tracker_core::model::QuestionId;
use tracker_core::table::COMING_SOON;
use tracker_core::{FilterValues, QuestionRow, SolutionCell};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TableBuffer, difficulty_options, format_progress, map_tag_options};

/// The question table page.
///
/// Loads the dataset once, then re-renders the table body whenever either
/// filter control changes.
#[component]
pub fn QuestionsView(
    #[props(default)] initial_tag: String,
    #[props(default)] initial_difficulty: String,
) -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.loader();
    let completion = ctx.completion();
    let save_target = ctx.completion();

    let mut tag_filter = use_signal(move || initial_tag);
    let mut difficulty_filter = use_signal(move || initial_difficulty);
    let saves = use_signal(|| 0_u64);

    let board = use_resource(move || {
        let loader = loader.clone();
        let completion = completion.clone();
        async move { QuestionBoard::load(&loader, completion).await }
    });

    let rows = use_resource(move || {
        let filters = FilterValues::new(tag_filter(), difficulty_filter());
        let board = board.cloned();
        async move {
            let mut table = TableBuffer::new(filters);
            if let Some(board) = board {
                board.render(&mut table).await;
            }
            table.into_rows()
        }
    });

    let progress = use_resource(move || {
        let _ = saves();
        let board = board.cloned();
        async move {
            match board {
                Some(board) => board.progress().await.map_err(ViewError::from),
                None => Ok(Progress::default()),
            }
        }
    });

    let on_toggle = use_callback(move |(id, completed): (QuestionId, bool)| {
        let completion = save_target.clone();
        spawn(async move {
            let mut saves = saves;
            if let Err(err) = completion.save(&id, completed).await {
                tracing::error!(%id, %err, "failed to save completion state");
            }
            *saves.write() += 1;
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionsTestHandles>() {
                handles.register(on_toggle, tag_filter, difficulty_filter);
            }
        }
    }

    let loading = board.read().is_none();
    let tags = board.cloned().map(|board| board.tags()).unwrap_or_default();
    let tag_options = map_tag_options(&tags);
    let progress_label = match view_state_from_resource(progress) {
        ViewState::Ready(progress) => Some(format_progress(progress)),
        ViewState::Error(err) => Some(err.message().to_owned()),
        ViewState::Idle | ViewState::Loading => None,
    };
    let visible_rows = rows.cloned().unwrap_or_default();

    rsx! {
        div { class: "page",
            h2 { "Practice Questions" }

            div { class: "filters",
                label { r#for: "tagFilter", "Pattern" }
                select {
                    id: "tagFilter",
                    value: "{tag_filter}",
                    onchange: move |evt| tag_filter.set(evt.value()),
                    for opt in tag_options {
                        option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                    }
                }

                label { r#for: "difficultyFilter", "Difficulty" }
                select {
                    id: "difficultyFilter",
                    value: "{difficulty_filter}",
                    onchange: move |evt| difficulty_filter.set(evt.value()),
                    for opt in difficulty_options() {
                        option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                    }
                }

                {progress_label.map(|label| rsx! {
                    span { class: "progress", "{label}" }
                })}
            }

            if loading {
                p { class: "loading", "Loading questions..." }
            }

            table {
                thead {
                    tr {
                        th { "Completed" }
                        th { "Problem" }
                        th { "Solution" }
                        th { "Pattern" }
                        th { "Difficulty" }
                    }
                }
                tbody { id: "questionTableBody",
                    for row in visible_rows {
                        QuestionTableRow { key: "{row.id}", row, on_toggle }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionTableRow(row: QuestionRow, on_toggle: EventHandler<(QuestionId, bool)>) -> Element {
    let id = row.id.clone();

    rsx! {
        tr {
            "data-tag": "{row.data_tag}",
            "difficulty-tag": "{row.difficulty_tag}",
            td {
                span { "data-tip": "{row.tip}",
                    input {
                        r#type: "checkbox",
                        checked: row.completed,
                        onchange: move |evt: FormEvent| on_toggle.call((id.clone(), evt.checked())),
                    }
                }
            }
            td {
                a { href: "{row.problem_url}", target: "_blank", "{row.title}" }
            }
            td {
                match &row.solution {
                    SolutionCell::Link(url) => rsx! {
                        a { href: "{url}", target: "_blank", "Solution" }
                    },
                    SolutionCell::ComingSoon => rsx! { "{COMING_SOON}" },
                }
            }
            td {
                div { class: "tags", "{row.tags}" }
            }
            td {
                div { class: "difficulty", "{row.difficulty}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionsTestHandles {
    toggle: Rc<RefCell<Option<Callback<(QuestionId, bool)>>>>,
    tag_filter: Rc<RefCell<Option<Signal<String>>>>,
    difficulty_filter: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl QuestionsTestHandles {
    pub(crate) fn register(
        &self,
        toggle: Callback<(QuestionId, bool)>,
        tag_filter: Signal<String>,
        difficulty_filter: Signal<String>,
    ) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.tag_filter.borrow_mut() = Some(tag_filter);
        *self.difficulty_filter.borrow_mut() = Some(difficulty_filter);
    }

    pub(crate) fn toggle(&self) -> Callback<(QuestionId, bool)> {
        (*self.toggle.borrow()).expect("toggle registered")
    }

    pub(crate) fn tag_filter(&self) -> Signal<String> {
        (*self.tag_filter.borrow()).expect("tag filter registered")
    }

    pub(crate) fn difficulty_filter(&self) -> Signal<String> {
        (*self.difficulty_filter.borrow()).expect("difficulty filter registered")
    }
}
