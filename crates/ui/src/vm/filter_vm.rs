use services::Progress;
use tracker_core::model::Difficulty;

/// One `<option>` of a filter control. An empty value means "All".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptionVm {
    pub value: String,
    pub label: String,
}

impl FilterOptionVm {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    fn all() -> Self {
        Self::new("", "All")
    }
}

/// Tag control options: "All" followed by the dataset's tags.
#[must_use]
pub fn map_tag_options(tags: &[String]) -> Vec<FilterOptionVm> {
    std::iter::once(FilterOptionVm::all())
        .chain(tags.iter().map(|tag| FilterOptionVm::new(tag.clone(), tag.clone())))
        .collect()
}

/// Difficulty control options: "All" followed by the three tiers.
#[must_use]
pub fn difficulty_options() -> Vec<FilterOptionVm> {
    std::iter::once(FilterOptionVm::all())
        .chain(
            Difficulty::TIERS
                .iter()
                .map(|tier| FilterOptionVm::new(tier.tag(), tier.as_str())),
        )
        .collect()
}

#[must_use]
pub fn format_progress(progress: Progress) -> String {
    format!("{} / {} completed", progress.completed, progress.total)
}
