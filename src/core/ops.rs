/// Adds two integers and returns their sum.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Multiplies two floating-point numbers and returns their product.
pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}
