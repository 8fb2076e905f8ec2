use thiserror::Error;

use crate::report::extrapolationrow::ExtrapolationRow;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write result row: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode result row: {0}")]
    Encode(#[from] serde_json::Error)
}

/// 接收驅動迴圈逐步產生的結果。
///
/// 實作者自行持有跨呼叫的狀態（例如表頭是否已輸出），
/// 同一個 sink 在一次執行中只會被建立一次。
pub trait ResultSink {
    fn write_row(&mut self, row: &ExtrapolationRow) -> Result<(), SinkError>;

    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S> ResultSink for &mut S
where
    S: ResultSink + ?Sized,
{
    fn write_row(&mut self, row: &ExtrapolationRow) -> Result<(), SinkError> {
        (**self).write_row(row)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}
