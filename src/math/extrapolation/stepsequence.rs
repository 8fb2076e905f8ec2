use serde::{
    Deserialize,
    Serialize
};

/// 產生偏移量 h 的方式。
///
/// - `Additive`：h 從 0 開始，每步加上 step_size（h ← h + step_size）。
///   捨入誤差會逐步累積，輸出與逐次相加的參考行為一致，為預設值。
/// - `Multiplicative`：h_k = k·step_size，每步只有一次捨入。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAccumulation {
    #[default]
    Additive,
    Multiplicative
}

/// 有限長度的偏移量序列 h_0, h_1, ..., h_{step_limit-1}，h_0 = 0。
#[derive(Clone, Debug)]
pub struct StepSequence {
    step_size: f64,
    step_limit: usize,
    accumulation: StepAccumulation,
    index: usize,
    h: f64
}

impl StepSequence {
    pub fn new(step_size: f64, step_limit: usize, accumulation: StepAccumulation) -> StepSequence {
        StepSequence {
            step_size,
            step_limit,
            accumulation,
            index: 0,
            h: 0.0
        }
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    pub fn accumulation(&self) -> StepAccumulation {
        self.accumulation
    }
}

impl Iterator for StepSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.step_limit {
            return None;
        }
        let current = match self.accumulation {
            StepAccumulation::Additive => self.h,
            StepAccumulation::Multiplicative => self.index as f64 * self.step_size,
        };
        self.h += self.step_size;
        self.index += 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step_limit - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StepSequence {}
