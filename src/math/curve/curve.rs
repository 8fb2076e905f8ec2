/// 可求值與求一階導數的一元實函數。
///
/// `tangent_extrapolate` 等演算法只依賴此 trait，不綁定特定多項式表示。
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}
