//! Fixed coefficients for the DCT decoder's 16-band synthesis transform.

pub const MAX_BANDS: usize = 16;
pub const MAX_TRANSFORM_STEPS: usize = 8;
pub const MAX_PREV: usize = 4;

/// Base per-band DCT-III coefficients before per-block scale and sign are applied.
pub const TRANSFORM_COEFS: [f32; 16] = [
    0.25, 0.35185099, 0.34676, 0.33832899, 0.32664099, 0.31180599, 0.29396901, 0.27329999, 0.25, 0.224292,
    0.19642401, 0.166664, 0.135299, 0.102631, 0.068975002, 0.034653999,
];

pub const TRANSFORM_SCALES: [f32; 16] =
    [4.0, 6.0, 8.0, 10.0, 12.0, 12.0, 13.0, 15.0, 16.0, 16.0, 20.0, 24.0, 28.0, 35.0, 41.0, 41.0];

pub const TRANSFORM_STEPS: [usize; 16] = [1, 8, 4, 8, 2, 8, 4, 8, 1, 8, 4, 8, 2, 8, 4, 8];
