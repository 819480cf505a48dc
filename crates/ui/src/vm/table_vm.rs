use tracker_core::{FilterValues, QuestionRow, TablePort};

/// Row buffer the question page renders from.
///
/// Holds the filter values captured when a render starts; the board clears
/// and refills it, and the view draws whatever it ends up holding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableBuffer {
    filters: FilterValues,
    rows: Vec<QuestionRow>,
}

impl TableBuffer {
    #[must_use]
    pub fn new(filters: FilterValues) -> Self {
        Self {
            filters,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[QuestionRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<QuestionRow> {
        self.rows
    }
}

impl TablePort for TableBuffer {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: QuestionRow) {
        self.rows.push(row);
    }

    fn read_filter_values(&self) -> FilterValues {
        self.filters.clone()
    }
}
