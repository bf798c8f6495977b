//! Fixed-point length type

use derive_more::{Add, Sub};
use std::{fmt, str::FromStr};

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, i64, one_of, u32},
    combinator::{all_consuming, consumed, map, opt},
    sequence::{preceded, terminated, tuple},
    IResult,
};

/// Micrometers per millimeter
pub const UM_PER_MM: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Add, Sub)]
pub struct Micrometer(pub i64);

impl Micrometer {
    /// Parse from `nom`
    ///
    /// Accepts either integer micrometers with an `um` suffix (`22000um`)
    /// or decimal millimeters with an optional `mm` suffix (`22`, `-.42mm`).
    pub fn parse(input: &str) -> IResult<&str, Micrometer> {
        alt((
            map(terminated(i64, tag("um")), Micrometer),
            terminated(Self::parse_mm, opt(tag("mm"))),
        ))(input)
    }

    fn parse_mm(input: &str) -> IResult<&str, Micrometer> {
        fn decimal(input: &str) -> IResult<&str, u32> {
            map(consumed(u32::<&str, _>), |(s, n)| match s.len() {
                3 => n,
                a @ 0..=2 => n * 10_u32.pow(3 - a as u32),
                a => n / 10_u32.pow(a as u32 - 3),
            })(input)
        }

        map(
            tuple((
                opt(map(one_of("+-"), |s| s == '-')),
                alt((
                    map(preceded(char('.'), decimal), |d| (0, Some(d))),
                    tuple((u32, opt(preceded(char('.'), decimal)))),
                )),
            )),
            |(sign, (x, d))| {
                let x = x as i64 * 1000 + d.unwrap_or(0) as i64;
                let x = if sign.unwrap_or(false) { -x } else { x };
                Micrometer(x)
            },
        )(input)
    }

    /// Convert micrometers to millimeter float
    pub fn to_mm(self) -> f64 {
        um_to_mm(self.0 as f64)
    }
}

/// Convert fractional micrometers to millimeters
pub fn um_to_mm(um: f64) -> f64 {
    um / UM_PER_MM
}

impl FromStr for Micrometer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(Self::parse)(s.trim())
            .map(|(_, um)| um)
            .map_err(|_| format!("invalid length '{s}', expected e.g. '22', '22.5mm' or '22000um'"))
    }
}

impl fmt::Display for Micrometer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let v = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:03}", v / 1000, v % 1000)
    }
}
