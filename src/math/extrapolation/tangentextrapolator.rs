use crate::math::curve::curve::Curve;
use crate::math::curve::quadraticpolynomial::{
    evaluate_quadratic,
    evaluate_quadratic_derivative
};

/// 以切線外插近似 f(x + h)：
///
///   estimate = f(x) + h·f'(x + h)
///
/// 斜率取在平移後的 x + h，而非錨點 x。
/// 輸出表的每一個數值都依賴這個取法，不可改成 f'(x)。
pub fn tangent_extrapolate<C>(curve: &C, x: f64, h: f64) -> f64
where
    C: Curve + ?Sized,
{
    let slope = curve.derivative(x + h);
    let vchange = h * slope;
    curve.value(x) + vchange
}

/// `tangent_extrapolate` 的係數版本，作用於 a·x² + b·x + c。
pub fn extrapolate(a: f64, b: f64, c: f64, x: f64, h: f64) -> f64 {
    let slope = evaluate_quadratic_derivative(a, b, x + h);
    let vchange = h * slope;
    evaluate_quadratic(a, b, c, x) + vchange
}
