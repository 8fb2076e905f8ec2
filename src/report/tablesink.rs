use std::io::Write;

use crate::report::extrapolationrow::ExtrapolationRow;
use crate::report::resultsink::{
    ResultSink,
    SinkError
};

pub const TABLE_HEADER: &str = "  x + h      approximation    f(x + h)     error";
pub const TABLE_RULE: &str = "------------------------------------------------";

/// 固定欄寬表格輸出。
///
/// 第一次寫入資料列之前輸出兩行表頭（欄名與分隔線），之後不再輸出。
/// 旗標屬於 sink 本身，生命週期等同整次執行。
pub struct TableSink<W: Write> {
    writer: W,
    header_written: bool
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W) -> TableSink<W> {
        TableSink {
            writer,
            header_written: false
        }
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", TABLE_HEADER)?;
        writeln!(self.writer, "{}", TABLE_RULE)?;
        self.header_written = true;
        Ok(())
    }
}

/// 單列格式：位置 7 寬、近似值 19 寬、精確值 12 寬、誤差 10 寬，皆取小數 3 位並靠右。
pub fn format_row(row: &ExtrapolationRow) -> String {
    format!(
        "{}{}{}{}",
        fixed_field(row.position(), 7),
        fixed_field(row.approximation(), 19),
        fixed_field(row.exact(), 12),
        fixed_field(row.error(), 10)
    )
}

// NaN 依 C printf 慣例寫成小寫 nan / -nan，inf 的寫法兩邊相同
fn fixed_field(value: f64, width: usize) -> String {
    if value.is_nan() {
        let text = if value.is_sign_negative() { "-nan" } else { "nan" };
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:>width$.3}", value, width = width)
    }
}

impl<W: Write> ResultSink for TableSink<W> {
    fn write_row(&mut self, row: &ExtrapolationRow) -> Result<(), SinkError> {
        if !self.header_written {
            self.write_header()?;
        }
        writeln!(self.writer, "{}", format_row(row))?;
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
    fn header_is_written_once_before_first_row() {
        let mut sink = TableSink::new(Vec::new());
        assert!(!sink.header_written());
        sink.write_row(&ExtrapolationRow::new(2.0, 4.0, 4.0)).unwrap();
        sink.write_row(&ExtrapolationRow::new(2.001, 4.004, 4.004001)).unwrap();
        assert!(sink.header_written());

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], TABLE_RULE);
        assert_eq!(text.matches(TABLE_RULE).count(), 1);
    }

    #[test]
    fn no_rows_means_no_header() {
        let mut sink = TableSink::new(Vec::new());
        sink.finish().unwrap();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn row_fields_are_right_aligned_fixed_point() {
        let row = ExtrapolationRow::new(2.0, 4.0, 4.0);
        assert_eq!(
            format_row(&row),
            "  2.000              4.000       4.000     0.000"
        );

        let row = ExtrapolationRow::new(-12.5, 1234.5678, -3.25);
        let line = format_row(&row);
        assert_eq!(line.len(), 7 + 19 + 12 + 10);
        assert_eq!(&line[0..7], "-12.500");
        assert_eq!(line[7..26].trim_start(), "1234.568");
        assert_eq!(line[26..38].trim_start(), "-3.250");
        assert_eq!(line[38..48].trim_start(), "-1237.818");
    }

    #[test]
    fn non_finite_values_are_spelled_like_printf() {
        let line = format_row(&ExtrapolationRow::new(1.0, f64::NAN, f64::INFINITY));
        assert_eq!(line.len(), 48);
        assert_eq!(&line[0..7], "  1.000");
        assert_eq!(line[7..26].trim_start(), "nan");
        assert_eq!(line[26..38].trim_start(), "inf");
        assert!(line[38..48].trim_start().ends_with("nan"));

        let line = format_row(&ExtrapolationRow::new(-f64::NAN, 0.0, f64::NEG_INFINITY));
        assert_eq!(&line[0..7], "   -nan");
        assert_eq!(line[26..38].trim_start(), "-inf");
    }

    #[test]
    fn wide_values_overflow_their_column() {
        let row = ExtrapolationRow::new(12345.0, 0.0, 0.0);
        assert!(format_row(&row).starts_with("12345.000"));
    }
}
