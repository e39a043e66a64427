use serde::Serialize;
use std::{fmt, str::FromStr};

/// Descriptor of engineering prefix
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Scale {
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    #[default]
    Base,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Scale {
    const ALL: [Scale; 11] = [
        Scale::Atto,
        Scale::Femto,
        Scale::Pico,
        Scale::Nano,
        Scale::Micro,
        Scale::Milli,
        Scale::Base,
        Scale::Kilo,
        Scale::Mega,
        Scale::Giga,
        Scale::Tera,
    ];

    pub fn to_str(&self) -> &str {
        match self {
            Scale::Atto => "a",
            Scale::Femto => "f",
            Scale::Pico => "p",
            Scale::Nano => "n",
            Scale::Micro => "u",
            Scale::Milli => "m",
            Scale::Base => "",
            Scale::Kilo => "k",
            Scale::Mega => "M",
            Scale::Giga => "G",
            Scale::Tera => "T",
        }
    }

    /// Provides multiplier for scale
    /// Scale::Pico = 1e-12
    pub fn multiplier(&self) -> f64 {
        match self {
            Scale::Atto => 1e-18,
            Scale::Femto => 1e-15,
            Scale::Pico => 1e-12,
            Scale::Nano => 1e-9,
            Scale::Micro => 1e-6,
            Scale::Milli => 1e-3,
            Scale::Base => 1.0,
            Scale::Kilo => 1e3,
            Scale::Mega => 1e6,
            Scale::Giga => 1e9,
            Scale::Tera => 1e12,
        }
    }

    /// Largest prefix that keeps the scaled magnitude at or above one.
    ///
    /// Zero and non-finite values stay at `Scale::Base`.
    pub fn from_val(val: f64) -> Scale {
        let mag = val.abs();
        if mag == 0.0 || !mag.is_finite() {
            return Scale::Base;
        }
        Scale::ALL
            .iter()
            .rev()
            .find(|s| mag >= s.multiplier() * (1.0 - 1e-12))
            .copied()
            .unwrap_or(Scale::Atto)
    }

    pub fn scale(&self, val: f64) -> f64 {
        val / self.multiplier()
    }

    pub fn unscale(&self, val: f64) -> f64 {
        val * self.multiplier()
    }
}

impl FromStr for Scale {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Atto" | "atto" | "a" => Ok(Scale::Atto),
            "Femto" | "femto" | "f" => Ok(Scale::Femto),
            "Pico" | "pico" | "p" => Ok(Scale::Pico),
            "Nano" | "nano" | "n" => Ok(Scale::Nano),
            "Micro" | "micro" | "u" | "μ" => Ok(Scale::Micro),
            "Milli" | "milli" | "m" => Ok(Scale::Milli),
            "Kilo" | "kilo" | "k" => Ok(Scale::Kilo),
            "Mega" | "mega" | "M" => Ok(Scale::Mega),
            "Giga" | "giga" | "G" => Ok(Scale::Giga),
            "Tera" | "tera" | "T" => Ok(Scale::Tera),
            _ => Ok(Scale::Base),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod scale_tests {
    use super::*;
    use crate::util::comp_f64;
    use float_cmp::F64Margin;

    #[test]
    fn test_parse_scale() {
        assert_eq!(Scale::Base, Scale::from_str("").unwrap());
        assert_eq!(Scale::Base, Scale::from_str("x").unwrap());
        assert_eq!(Scale::Atto, Scale::from_str("atto").unwrap());
        assert_eq!(Scale::Femto, Scale::from_str("f").unwrap());
        assert_eq!(Scale::Pico, Scale::from_str("Pico").unwrap());
        assert_eq!(Scale::Nano, Scale::from_str("n").unwrap());
        assert_eq!(Scale::Micro, Scale::from_str("u").unwrap());
        assert_eq!(Scale::Micro, Scale::from_str("μ").unwrap());
        assert_eq!(Scale::Milli, Scale::from_str("m").unwrap());
        assert_eq!(Scale::Kilo, Scale::from_str("kilo").unwrap());
        assert_eq!(Scale::Mega, Scale::from_str("M").unwrap());
        assert_eq!(Scale::Giga, Scale::from_str("Giga").unwrap());
        assert_eq!(Scale::Tera, Scale::from_str("T").unwrap());
    }

    #[test]
    fn test_scale_from_val() {
        assert_eq!(Scale::Nano, Scale::from_val(1e-9));
        assert_eq!(Scale::Nano, Scale::from_val(4.7e-9));
        assert_eq!(Scale::Pico, Scale::from_val(-220e-12));
        assert_eq!(Scale::Micro, Scale::from_val(1.0e-6));
        assert_eq!(Scale::Base, Scale::from_val(3.3));
        assert_eq!(Scale::Mega, Scale::from_val(1.5e6));
        assert_eq!(Scale::Base, Scale::from_val(0.0));
        assert_eq!(Scale::Base, Scale::from_val(f64::INFINITY));
        assert_eq!(Scale::Atto, Scale::from_val(1e-21));
    }

    #[test]
    fn test_scale_unscale() {
        let val: f64 = 3.24;
        let margin = F64Margin::default();

        comp_f64(&Scale::Giga.scale(val), &(val * 1e-9), margin, "scale()", "Scale::Giga");
        comp_f64(&Scale::Giga.unscale(val), &(val * 1e9), margin, "unscale()", "Scale::Giga");
        comp_f64(&Scale::Nano.scale(val), &(val * 1e9), margin, "scale()", "Scale::Nano");
        comp_f64(&Scale::Nano.unscale(val), &(val * 1e-9), margin, "unscale()", "Scale::Nano");
        comp_f64(&Scale::Base.scale(val), &val, margin, "scale()", "Scale::Base");
    }
}
