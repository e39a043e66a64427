use crate::scale::Scale;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Descriptor of unit
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Unit {
    #[default]
    None, // No Unit
    Farad, // Capacitance in farads
    Henry, // Inductance in henries
}

impl Unit {
    pub fn to_str(&self) -> &str {
        match self {
            Unit::None => "",
            Unit::Farad => "F",
            Unit::Henry => "H",
        }
    }
}

impl FromStr for Unit {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Farad" | "farad" | "F" => Ok(Unit::Farad),
            "Henry" | "henry" | "H" => Ok(Unit::Henry),
            _ => Ok(Unit::None),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

pub trait Unitized {
    fn val_scaled(&self) -> f64;
    fn unitval(&self) -> UnitVal;
    fn scale(&self) -> Scale;
    fn unit(&self) -> Unit;
    fn set_val_scaled(&mut self, val: f64);
    fn set_scale(&mut self, scale: Scale);
}

/// Encapsulation of a value with scale. Value is stored unscaled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UnitVal {
    val: f64,
    scale: Scale,
    unit: Unit,
}

impl UnitVal {
    pub fn new(val: f64, scale: Scale, unit: Unit) -> Self {
        UnitVal { val, scale, unit }
    }

    pub fn new_scaled(val: f64, scale: Scale, unit: Unit) -> Self {
        UnitVal {
            val: scale.unscale(val),
            scale,
            unit,
        }
    }

    /// Retrieve value unscaled
    pub fn val(&self) -> f64 {
        self.val
    }

    /// Retrieve value in scaled scale
    pub fn val_scaled(&self) -> f64 {
        self.scale.scale(self.val)
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Set value unscaled
    pub fn set_val(&mut self, val: f64) -> &Self {
        self.val = val;
        self
    }

    /// Set value in scaled scale
    pub fn set_val_scaled(&mut self, val: f64) -> &Self {
        self.val = self.scale.unscale(val);
        self
    }

    pub fn set_scale(&mut self, scale: Scale) -> &Self {
        self.scale = scale;
        self
    }

    pub fn set_unit(&mut self, unit: Unit) -> &Self {
        self.unit = unit;
        self
    }
}

impl Default for UnitVal {
    fn default() -> Self {
        UnitVal {
            val: 0.0,
            scale: Scale::Base,
            unit: Unit::None,
        }
    }
}

impl fmt::Display for UnitVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.val_scaled(), self.scale, self.unit)
    }
}
