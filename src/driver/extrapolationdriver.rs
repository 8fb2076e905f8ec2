use log::{
    debug,
    trace
};

use crate::configuration::ExtrapolationConfig;
use crate::math::curve::curve::Curve;
use crate::math::extrapolation::tangentextrapolator::tangent_extrapolate;
use crate::report::extrapolationrow::ExtrapolationRow;
use crate::report::resultsink::{
    ResultSink,
    SinkError
};

/// 在固定偏移量序列上比較切線近似值與精確值。
///
/// 每一步：approximation = f(x) + h·f'(x + h)，exact = f(x + h)，
/// 再將 (x + h, approximation, exact) 交給 sink。
/// 步數固定為 `step_limit`，迴圈本身沒有失敗路徑，唯一的錯誤來自 sink。
pub struct ExtrapolationDriver {
    config: ExtrapolationConfig
}

impl ExtrapolationDriver {
    pub fn new(config: ExtrapolationConfig) -> ExtrapolationDriver {
        ExtrapolationDriver { config }
    }

    pub fn config(&self) -> &ExtrapolationConfig {
        &self.config
    }

    /// 回傳寫入 sink 的列數。
    pub fn run<C, S>(&self, curve: &C, x: f64, sink: &mut S) -> Result<usize, SinkError>
    where
        C: Curve + ?Sized,
        S: ResultSink + ?Sized,
    {
        let mut rows_written = 0;
        for h in self.config.steps() {
            let row = Self::step(curve, x, h);
            trace!("h = {}, row = {:?}", h, row);
            sink.write_row(&row)?;
            rows_written += 1;
        }
        sink.finish()?;
        debug!("extrapolation finished after {} steps", rows_written);
        Ok(rows_written)
    }

    pub fn step<C>(curve: &C, x: f64, h: f64) -> ExtrapolationRow
    where
        C: Curve + ?Sized,
    {
        let approximation = tangent_extrapolate(curve, x, h);
        let exact = curve.value(x + h);
        ExtrapolationRow::new(x + h, approximation, exact)
    }
}

impl Default for ExtrapolationDriver {
    fn default() -> ExtrapolationDriver {
        ExtrapolationDriver::new(ExtrapolationConfig::default())
    }
}
