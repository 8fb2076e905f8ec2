use std::io::Write;

use crate::report::extrapolationrow::ExtrapolationRow;
use crate::report::resultsink::{
    ResultSink,
    SinkError
};

/// 每列輸出一個 JSON 物件，無表頭。
pub struct JsonLinesSink<W: Write> {
    writer: W
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> JsonLinesSink<W> {
        JsonLinesSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn write_row(&mut self, row: &ExtrapolationRow) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, row)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_object_per_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.write_row(&ExtrapolationRow::new(2.0, 4.0, 4.0)).unwrap();
        sink.write_row(&ExtrapolationRow::new(3.0, 10.0, 9.0)).unwrap();
        sink.finish().unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let rows: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["position"], 3.0);
        assert_eq!(rows[1]["error"], -1.0);
    }
}
