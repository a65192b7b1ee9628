// This file is part of Vernier.
//
// Vernier is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Vernier is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Vernier.  If not, see <http://www.gnu.org/licenses/>.
use anyhow::{bail, Result};
use log::debug;
use quantity::{registry, Scalar};
use structopt::StructOpt;

/// Convert and combine unit-tagged scalars from the command line.
///
/// Operands are written as "<number><abbreviation>", e.g. "100m", "2.5km",
/// "9.81m/s2" or "72°F". A bare number is dimensionless. Prefix an operand
/// with "abs:" to mark a point on a scale rather than a difference, e.g.
/// "abs:20°C".
#[derive(Debug, StructOpt)]
#[structopt(name = "unit-calc")]
enum Opt {
    /// Re-express a scalar in another unit of the same dimension.
    Convert {
        /// The scalar to convert, e.g. "100m" or "abs:20°C".
        value: String,
        /// The abbreviation of the target unit, e.g. "ft".
        to: String,
    },
    /// Combine two scalars with an arithmetic operator.
    Eval {
        /// The left operand.
        lhs: String,
        /// One of +, -, x, /.
        op: String,
        /// The right operand.
        rhs: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    match Opt::from_args() {
        Opt::Convert { value, to } => {
            let scalar = parse_scalar(&value)?;
            let target = registry().unit(&to)?;
            println!("{:#}", scalar.with_display_unit(target)?);
        }
        Opt::Eval { lhs, op, rhs } => {
            let lhs = parse_scalar(&lhs)?;
            let rhs = parse_scalar(&rhs)?;
            let result = match op.as_str() {
                "+" => lhs.plus(&rhs)?,
                "-" => lhs.minus(&rhs)?,
                "x" | "*" => lhs.multiply(&rhs),
                "/" => lhs.divide(&rhs),
                other => bail!("unrecognized operator '{}'; use +, -, x, or /", other),
            };
            println!("{:#}", result);
        }
    }
    Ok(())
}

/// Split an operand into magnitude and unit abbreviation. The magnitude is
/// the longest leading slice that parses as a float, so "1e3m" is a thousand
/// meters and "2eur" is two euros; whatever follows names the unit, with the
/// empty string naming the dimensionless unit.
fn parse_scalar(text: &str) -> Result<Scalar> {
    let (absolute, rest) = match text.strip_prefix("abs:") {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let rest = rest.trim();
    for boundary in (1..=rest.len()).rev() {
        if !rest.is_char_boundary(boundary) {
            continue;
        }
        let (number, suffix) = rest.split_at(boundary);
        let value = match number.parse::<f64>() {
            Ok(value) => value,
            Err(_) => continue,
        };
        let unit = registry().unit(suffix.trim())?;
        debug!("parsed '{}' as {} in '{}'", rest, value, unit.name());
        return Ok(if absolute {
            Scalar::absolute(value, unit)
        } else {
            Scalar::relative(value, unit)
        });
    }
    bail!("could not parse '{}' as <number><unit-abbreviation>", text)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use quantity::UnitError;

    #[test]
    fn test_parse_operands() {
        let m = parse_scalar("100m").unwrap();
        assert!(m.is_relative());
        assert_abs_diff_eq!(m.si_value(), 100.0);

        let km = parse_scalar("2.5 km").unwrap();
        assert_abs_diff_eq!(km.si_value(), 2_500.0);

        let c = parse_scalar("abs:20°C").unwrap();
        assert!(c.is_absolute());
        assert_abs_diff_eq!(c.si_value(), 293.15, epsilon = 1e-12);

        let plain = parse_scalar("1e3").unwrap();
        assert!(plain.dimensions().is_dimensionless());
        assert_abs_diff_eq!(plain.si_value(), 1_000.0);

        let euros = parse_scalar("2eur").unwrap();
        assert_abs_diff_eq!(euros.value_in_unit(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_rejects_unknown_units() {
        let err = parse_scalar("12parsec").unwrap_err();
        assert_eq!(
            err.downcast::<UnitError>().unwrap(),
            UnitError::UnknownUnit("parsec".to_owned())
        );
    }

    #[test]
    fn test_parse_rejects_unit_only_operands() {
        assert!(parse_scalar("meters").unwrap_err().downcast::<UnitError>().is_err());
    }
}
