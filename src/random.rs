// src/random.rs
//! Primitive random draws over fixed ranges.
//!
//! | kind   | range                          |
//! |--------|--------------------------------|
//! | i32    | `[0, 1000)`                    |
//! | f64    | `[0.0, 1000.0)`                |
//! | f32    | `[0.0, 1000.0)`                |
//! | bool   | uniform                        |
//! | i64    | any i64, reduced modulo 1000   |
//! | byte   | `[0, 256)`                     |
//! | i16    | `[0, 1000)`                    |
//! | char   | `'a'..='z'`                    |
//! | string | length `[5, 14]`, `'a'..='z'`  |
//! | list   | length `[0, 5]`                |

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PrimitiveType;
use crate::value::Value;

/// Exclusive upper bound for i32, i16, f32 and f64 draws.
pub const NUMERIC_BOUND: i32 = 1000;
/// Modulus applied to i64 draws.
pub const WIDE_MODULUS: i64 = 1000;
/// Shortest generated string.
pub const STRING_MIN_LEN: usize = 5;
/// Random offset added to [`STRING_MIN_LEN`], drawn from `[0, STRING_LEN_SPREAD)`.
pub const STRING_LEN_SPREAD: usize = 10;
/// Longest generated sequence.
pub const LIST_MAX_LEN: usize = 5;

/// Random source owned by one generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn i32(&mut self) -> i32 {
        self.rng.gen_range(0..NUMERIC_BOUND)
    }

    pub fn i64(&mut self) -> i64 {
        self.rng.r#gen::<i64>() % WIDE_MODULUS
    }

    pub fn f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>() * f64::from(NUMERIC_BOUND)
    }

    pub fn f32(&mut self) -> f32 {
        // The product can round up to the bound itself.
        let v = self.rng.r#gen::<f32>() * NUMERIC_BOUND as f32;
        if v < NUMERIC_BOUND as f32 {
            v
        } else {
            0.0
        }
    }

    pub fn bool(&mut self) -> bool {
        self.rng.r#gen()
    }

    pub fn byte(&mut self) -> u8 {
        self.rng.r#gen()
    }

    pub fn i16(&mut self) -> i16 {
        self.rng.gen_range(0..NUMERIC_BOUND as i16)
    }

    pub fn char(&mut self) -> char {
        char::from(self.rng.gen_range(b'a'..=b'z'))
    }

    /// Lowercase alphabetic string, length in `[5, 14]`.
    pub fn string(&mut self) -> String {
        let len = STRING_MIN_LEN + self.rng.gen_range(0..STRING_LEN_SPREAD);
        (0..len).map(|_| self.char()).collect()
    }

    /// Sequence length in `[0, 5]`.
    pub fn list_len(&mut self) -> usize {
        self.rng.gen_range(0..=LIST_MAX_LEN)
    }

    /// Uniform index into a non-empty collection of `len` items.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// A value of the given primitive kind.
    pub fn primitive(&mut self, prim: PrimitiveType) -> Value {
        match prim {
            PrimitiveType::I32 => Value::I32(self.i32()),
            PrimitiveType::I64 => Value::I64(self.i64()),
            PrimitiveType::F32 => Value::F32(self.f32()),
            PrimitiveType::F64 => Value::F64(self.f64()),
            PrimitiveType::Bool => Value::Bool(self.bool()),
            PrimitiveType::Byte => Value::Byte(self.byte()),
            PrimitiveType::I16 => Value::I16(self.i16()),
            PrimitiveType::Char => Value::Char(self.char()),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
