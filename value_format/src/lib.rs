use std::fmt::{self, Display};

/// Smallest decimal exponent still printed in plain notation.
const MIN_PLAIN_EXPONENT: i32 = -4;
/// Decimal exponent at which plain notation switches to exponent form.
const MAX_PLAIN_EXPONENT: i32 = 6;

/// Wrapper that renders an `f64` with the canonical float rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalFloat(pub f64);

impl Display for CanonicalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "+Inf" } else { "-Inf" });
        }

        // `{:e}` yields the shortest round-trip digits, e.g. `1.234567e6`.
        let scientific = format!("{value:e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return write!(f, "{value}");
        };
        let exponent: i32 = match exponent.parse() {
            Ok(exponent) => exponent,
            Err(_) => return write!(f, "{value}"),
        };

        if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
            write!(f, "{value}")
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
    }
}

/// Render a float the way the sample target prints it (`3.0` becomes `3`).
pub fn format_float(value: f64) -> String {
    CanonicalFloat(value).to_string()
}

/// Render a sequence as space-separated elements inside square brackets.
///
/// Elements use their own `Display`; wrap floats in [`CanonicalFloat`] to get
/// the canonical float rule inside a sequence.
pub fn format_sequence<T: Display>(items: &[T]) -> String {
    let mut rendered = String::with_capacity(items.len() * 2 + 2);
    rendered.push('[');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            rendered.push(' ');
        }
        rendered.push_str(&item.to_string());
    }
    rendered.push(']');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_drop_the_fraction() {
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(-3.0), "-3");
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(100000.0), "100000");
    }

    #[test]
    fn fractional_floats_keep_shortest_digits() {
        assert_eq!(format_float(123.123), "123.123");
        assert_eq!(format_float(2.345), "2.345");
        assert_eq!(format_float(0.0001), "0.0001");
    }

    #[test]
    fn large_and_small_floats_use_signed_exponent() {
        assert_eq!(format_float(1_000_000.0), "1e+06");
        assert_eq!(format_float(1_234_567.0), "1.234567e+06");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(-2.5e-7), "-2.5e-07");
        assert_eq!(format_float(1e100), "1e+100");
    }

    #[test]
    fn non_finite_floats_have_fixed_names() {
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "+Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn sequences_are_bracketed_and_space_separated() {
        assert_eq!(format_sequence(&[1, 2, 3]), "[1 2 3]");
        assert_eq!(format_sequence(&[3, 1, 2]), "[3 1 2]");
        assert_eq!(format_sequence::<i64>(&[]), "[]");
        assert_eq!(format_sequence(&["a", "b"]), "[a b]");
        assert_eq!(
            format_sequence(&[CanonicalFloat(3.0), CanonicalFloat(0.5)]),
            "[3 0.5]"
        );
    }
}
