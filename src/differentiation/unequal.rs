//! First derivatives from tabulated samples on an unequally spaced grid.

use crate::differentiation::DifferentiationError;

/// Checks that `xs` and `ys` pair up, every `y` is finite and `xs` is
/// strictly increasing.
pub fn validate(xs: &[f64], ys: &[f64], needed: usize) -> Result<(), DifferentiationError> {
    if xs.len() != ys.len() {
        return Err(DifferentiationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < needed {
        return Err(DifferentiationError::TooFewPoints {
            needed,
            got: xs.len(),
        });
    }
    if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
        return Err(DifferentiationError::NotIncreasing { index });
    }
    if let Some(index) = ys.iter().position(|y| !y.is_finite()) {
        return Err(DifferentiationError::NonFiniteOrdinate {
            index,
            x: xs[index],
            y: ys[index],
        });
    }
    if let Some(w) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(DifferentiationError::NotIncreasing { index: w + 1 });
    }
    Ok(())
}

/// Newton divided-difference table; `table[i][j] = f[x_i, ..., x_{i+j}]`.
///
/// Row `i` has `n - i` meaningful entries, the rest are zero.
pub fn divided_differences(xs: &[f64], ys: &[f64]) -> Result<Vec<Vec<f64>>, DifferentiationError> {
    validate(xs, ys, 1)?;
    let n = xs.len();
    let mut table = vec![vec![0.0; n]; n];
    for (row, y) in table.iter_mut().zip(ys) {
        row[0] = *y;
    }
    for j in 1..n {
        for i in 0..n - j {
            table[i][j] = (table[i + 1][j - 1] - table[i][j - 1]) / (xs[i + j] - xs[i]);
        }
    }
    Ok(table)
}

pub fn forward(xs: &[f64], ys: &[f64], index: usize) -> Result<f64, DifferentiationError> {
    validate(xs, ys, 2)?;
    if index + 1 >= xs.len() {
        return Err(out_of_range(index, xs.len(), "forward"));
    }
    Ok((ys[index + 1] - ys[index]) / (xs[index + 1] - xs[index]))
}

pub fn backward(xs: &[f64], ys: &[f64], index: usize) -> Result<f64, DifferentiationError> {
    validate(xs, ys, 2)?;
    if index == 0 || index >= xs.len() {
        return Err(out_of_range(index, xs.len(), "backward"));
    }
    Ok((ys[index] - ys[index - 1]) / (xs[index] - xs[index - 1]))
}

/// Three-point centered formula, exact for quadratics on any spacing.
pub fn centered(xs: &[f64], ys: &[f64], index: usize) -> Result<f64, DifferentiationError> {
    validate(xs, ys, 3)?;
    if index == 0 || index + 1 >= xs.len() {
        return Err(out_of_range(index, xs.len(), "centered"));
    }
    let h1 = xs[index] - xs[index - 1];
    let h2 = xs[index + 1] - xs[index];
    Ok(
        (h1 * h1 * ys[index + 1] - (h1 * h1 - h2 * h2) * ys[index] - h2 * h2 * ys[index - 1])
            / (h1 * h2 * (h1 + h2)),
    )
}

fn out_of_range(index: usize, len: usize, scheme: &'static str) -> DifferentiationError {
    DifferentiationError::IndexOutOfRange { index, len, scheme }
}
