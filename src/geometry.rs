// src/geometry.rs
/*!
Membership predicates and closed-form volumes for the **n-ball** and the centred
**hypercube** `[-edge/2, edge/2]^D`.

Predicates take a coordinate slice of any length `D` and are generic over
[`num_traits::Float`]; both depend only on component magnitudes, so they are
invariant under permutation and sign flips of the coordinate.

> **Note**
> [`in_sphere`] compares `Σ x_i²` against `radius` itself, **not** `radius²`.
> With the default unit radius the two agree. The literal comparison is kept so that
> non-unit radii keep the historical results reproducible.
*/

use std::f64::consts::PI;

use num_traits::Float;

// ======================================================================================
// ----------------------------------- Predicates ---------------------------------------
// ======================================================================================

/// `Σ x_i² <= radius`.
#[inline]
pub fn in_sphere<T: Float>(coord: &[T], radius: T) -> bool {
    let norm_sq = coord.iter().fold(T::zero(), |acc, &x| acc + x * x);
    norm_sq <= radius
}

/// `max |x_i| <= edge / 2`.
#[inline]
pub fn in_cube<T: Float>(coord: &[T], edge: T) -> bool {
    let half = edge / (T::one() + T::one());
    let max_abs = coord.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()));
    max_abs <= half
}

#[inline]
pub fn in_both<T: Float>(coord: &[T], radius: T, edge: T) -> bool {
    in_cube(coord, edge) && in_sphere(coord, radius)
}

// ======================================================================================
// ------------------------------------- Volumes ----------------------------------------
// ======================================================================================

/// Volume of the unit `dim`-ball: `π^(dim/2) / Γ(dim/2 + 1)`.
///
/// # Panics
/// If `dim == 0`.
pub fn sphere_volume(dim: usize) -> f64 {
    assert!(dim > 0, "sphere_volume: require dim >= 1");
    PI.powf(dim as f64 / 2.0) / gamma_half(dim + 2)
}

/// `edge^dim`; exact repeated multiplication while `dim` fits an `i32`.
#[inline]
pub fn cube_volume(edge: f64, dim: usize) -> f64 {
    match i32::try_from(dim) {
        Ok(n) => edge.powi(n),
        Err(_) => edge.powf(dim as f64),
    }
}

/// `Γ(n / 2)` for `n >= 1`, built up from `Γ(1) = 1` or `Γ(1/2) = √π`
/// with `Γ(x + 1) = x Γ(x)`. Exact up to rounding for every half-integer.
fn gamma_half(n: usize) -> f64 {
    debug_assert!(n >= 1);
    let target = n as f64 / 2.0;
    let (mut g, mut x) = if n % 2 == 0 { (1.0, 1.0) } else { (PI.sqrt(), 0.5) };
    while x < target {
        g *= x;
        x += 1.0;
    }
    g
}
