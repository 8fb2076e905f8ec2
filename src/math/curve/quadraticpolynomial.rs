use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────────────────────────────────────
// 自由函數：以係數直接求值
// ─────────────────────────────────────────────────────────────────────────────

/// 計算 f(t) = a·t² + b·t + c。
///
/// Horner 展開：((a)·t + b)·t + c，兩次乘法、兩次加法。
/// 刻意不用 `f64::mul_add`，融合乘加的捨入與逐步運算不同。
pub fn evaluate_quadratic(a: f64, b: f64, c: f64, t: f64) -> f64 {
    let mut fval = a;
    fval = fval * t + b;
    fval = fval * t + c;
    fval
}

/// 計算 f'(t) = 2a·t + b。
pub fn evaluate_quadratic_derivative(a: f64, b: f64, t: f64) -> f64 {
    let mut slope = 2.0 * a;
    slope = slope * t + b;
    slope
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadraticPolynomial
// ─────────────────────────────────────────────────────────────────────────────

/// 二次多項式 a·x² + b·x + c。
///
/// 此型別本身不檢查 `a != 0`，非零條件由命令列邊界負責。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadraticPolynomial {
    a: f64,
    b: f64,
    c: f64
}

impl QuadraticPolynomial {
    pub fn new(a: f64, b: f64, c: f64) -> QuadraticPolynomial {
        QuadraticPolynomial { a, b, c }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0
    }
}

impl Curve for QuadraticPolynomial {
    fn value(&self, x: f64) -> f64 {
        evaluate_quadratic(self.a, self.b, self.c, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        evaluate_quadratic_derivative(self.a, self.b, x)
    }
}
