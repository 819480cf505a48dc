use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{CompletionService, DatasetLoader, StaticSource};
use storage::repository::{KeyValueStore, Storage};
use tracker_core::model::QuestionId;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionsTestHandles, QuestionsView};

#[derive(Clone)]
struct TestApp {
    loader: Arc<DatasetLoader>,
    completion: Arc<CompletionService>,
}

impl UiApp for TestApp {
    fn dataset_loader(&self) -> Arc<DatasetLoader> {
        Arc::clone(&self.loader)
    }

    fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    tag: String,
    difficulty: String,
    handles: QuestionsTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuestionsHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! {
        QuestionsView {
            initial_tag: props.tag.clone(),
            initial_difficulty: props.difficulty.clone(),
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub completion: Arc<CompletionService>,
    handles: QuestionsTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build the tree, then let the dataset, rows and progress resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_pending().await;
    }

    /// Run queued resources and spawned tasks until the page is quiet.
    pub async fn drive_pending(&mut self) {
        for _ in 0..8 {
            self.drive_async().await;
        }
    }

    /// Fire the checkbox handler of row `id`, as a change event would.
    pub fn toggle(&mut self, id: QuestionId, completed: bool) {
        let toggle = self.handles.toggle();
        self.dom.in_runtime(|| toggle.call((id, completed)));
    }

    /// Set both filter controls, as their change events would.
    pub fn set_filters(&mut self, tag: &str, difficulty: &str) {
        let mut tag_filter = self.handles.tag_filter();
        let mut difficulty_filter = self.handles.difficulty_filter();
        self.dom.in_runtime(|| {
            tag_filter.set(tag.to_owned());
            difficulty_filter.set(difficulty.to_owned());
        });
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(payload: &str, tag: &str, difficulty: &str) -> ViewHarness {
    let storage = Storage::in_memory();
    setup_view_harness_with_store(payload, Arc::clone(&storage.kv), tag, difficulty)
}

pub fn setup_view_harness_with_store(
    payload: &str,
    kv: Arc<dyn KeyValueStore>,
    tag: &str,
    difficulty: &str,
) -> ViewHarness {
    let loader = Arc::new(DatasetLoader::new(Arc::new(StaticSource::new(payload))));
    let completion = Arc::new(CompletionService::new(kv));
    let app = Arc::new(TestApp {
        loader,
        completion: Arc::clone(&completion),
    });
    let handles = QuestionsTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuestionsHarness,
        ViewHarnessProps {
            app,
            tag: tag.to_owned(),
            difficulty: difficulty.to_owned(),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        completion,
        handles,
    }
}
