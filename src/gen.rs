/*!
 * Draws uniformly distributed random integers and renders them as
 * space separated decimal text.
 */

use std::io::{self, Write};

use rand::Rng;

/// Magnitude of the symmetric draw range; generated values fall in `[-MAX, MAX)`.
pub const MAX: i64 = 100_000;

/// Source of uniform values in `[0, 1)`, one per call.
/// Keeps the generator injectable: a normal run plugs in `thread_rng`
/// through [`RngSource`], tests plug in a seeded or hand-fed source.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator to [`UnitSource`].
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UnitSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen()
    }
}

/// Draws one integer uniformly from `[low, high)`:
/// `low + u * (high - low)` floored, with `u` uniform in `[0, 1)`.
fn draw_in(low: i64, high: i64, source: &mut impl UnitSource) -> i64 {
    (low as f64 + source.next_unit() * (high - low) as f64).floor() as i64
}

/// Draws one integer uniformly from `[-MAX, MAX)`.
pub fn draw(source: &mut impl UnitSource) -> i64 {
    draw_in(-MAX, MAX, source)
}

/// Draws `count` independent integers in draw order.
/// A count of zero or less yields an empty sequence.
pub fn draw_list(source: &mut impl UnitSource, count: i64) -> Vec<i64> {
    let count = if count > 0 { count as usize } else { 0 };
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(draw(source));
    }
    values
}

/// Writes every value in decimal followed by a single space (the last
/// one included), then one newline.
pub fn write_list<W: Write>(out: &mut W, values: &[i64]) -> io::Result<()> {
    for v in values {
        write!(out, "{} ", v)?;
    }
    out.write_all(b"\n")?;
    Ok(())
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
