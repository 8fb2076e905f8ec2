use crate::report::extrapolationrow::ExtrapolationRow;
use crate::report::resultsink::{
    ResultSink,
    SinkError
};

/// 將結果保存在記憶體中，供程式庫呼叫端直接取用。
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    rows: Vec<ExtrapolationRow>
}

impl CollectingSink {
    pub fn new() -> CollectingSink {
        CollectingSink { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[ExtrapolationRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ExtrapolationRow> {
        self.rows
    }
}

impl ResultSink for CollectingSink {
    fn write_row(&mut self, row: &ExtrapolationRow) -> Result<(), SinkError> {
        self.rows.push(*row);
        Ok(())
    }
}
