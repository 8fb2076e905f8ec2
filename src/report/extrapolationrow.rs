use serde::ser::SerializeStruct;
use serde::{
    Serialize,
    Serializer
};

/// 驅動迴圈每一步的結果：位置 x + h、切線近似值、精確值。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrapolationRow {
    position: f64,
    approximation: f64,
    exact: f64
}

impl ExtrapolationRow {
    pub fn new(position: f64, approximation: f64, exact: f64) -> ExtrapolationRow {
        ExtrapolationRow {
            position,
            approximation,
            exact
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn approximation(&self) -> f64 {
        self.approximation
    }

    pub fn exact(&self) -> f64 {
        self.exact
    }

    /// 帶號誤差：exact − approximation。
    pub fn error(&self) -> f64 {
        self.exact - self.approximation
    }
}

// error 為衍生欄位，序列化時一併輸出
impl Serialize for ExtrapolationRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ExtrapolationRow", 4)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("approximation", &self.approximation)?;
        state.serialize_field("exact", &self.exact)?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_exact_minus_approximation() {
        let row = ExtrapolationRow::new(2.5, 7.0, 6.25);
        assert_eq!(row.error(), -0.75);
    }

    #[test]
    fn serializes_with_derived_error() {
        let row = ExtrapolationRow::new(1.0, 2.0, 3.5);
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["position"], 1.0);
        assert_eq!(json["approximation"], 2.0);
        assert_eq!(json["exact"], 3.5);
        assert_eq!(json["error"], 1.5);
    }
}
