use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavigatorIntent {
    /// Replace the rows. The first row becomes current.
    Load { rows: Vec<String> },
    /// Make `row` current. Out-of-range rows are ignored.
    Select { row: usize },
    MoveUp,
    MoveDown,
}

impl Intent for NavigatorIntent {}
