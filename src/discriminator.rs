//! # Frequency Discriminator
//!
//! Computes an instantaneous-frequency proxy from two consecutive complex
//! baseband samples: the argument of `s_n * conj(s_{n-1})`. Only the sign
//! of this phase delta is consumed downstream by [`crate::slicer`]; the
//! magnitude is discarded.

use crate::iq::ComplexSample;

/// Angle (in radians, `(-pi, +pi]`) between `current` and `previous`.
///
/// The first call in a stream should pass [`ComplexSample::ZERO`] as
/// `previous`; the resulting angle is defined but unused for slicing
/// beyond seeding the slicer's `last_angle` to zero.
pub fn calc_angle(current: ComplexSample, previous: ComplexSample) -> f32 {
    let d = current.mul_conj(previous);
    d.q.atan2(d.i)
}
