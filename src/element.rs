use crate::error::ElementError;
use crate::scale::Scale;
use crate::unit::{Unit, UnitVal, Unitized};
use ndarray::{Array1, Zip};
use num::complex::Complex64;
use regex::Regex;
use serde::Serialize;
use simple_error::{bail, SimpleError};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub mod capacitor;
pub mod inductor;
pub mod q;

pub use self::capacitor::{Capacitor, CapacitorBuilder};
pub use self::inductor::{Inductor, InductorBuilder};
pub use self::q::QFactor;

static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?<kind>[CL])(?<index>\d*)\s*=\s*(?<val>[-+]?(?:inf|NaN|\d*\.?\d+(?:[eE][-+]?\d+)?))\s*(?<scale>[afpnumμkMGT]?)(?<unit>[FH])\s*$",
    )
    .expect("Invalid regex!")
});

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ElemType {
    #[default]
    Capacitor,
    Inductor,
}

impl ElemType {
    /// Convert ElemType to String
    pub fn to_str(&self) -> &str {
        match self {
            ElemType::Capacitor => "Capacitor",
            ElemType::Inductor => "Inductor",
        }
    }

    /// Symbol prefix
    pub fn prefix(&self) -> &str {
        match self {
            ElemType::Capacitor => "C",
            ElemType::Inductor => "L",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            ElemType::Capacitor => Unit::Farad,
            ElemType::Inductor => Unit::Henry,
        }
    }
}

impl FromStr for ElemType {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "c" | "Cap" | "cap" | "Capacitor" | "capacitor" => Ok(ElemType::Capacitor),
            "L" | "l" | "Ind" | "ind" | "Inductor" | "inductor" => Ok(ElemType::Inductor),
            _ => bail!("ElemType not recognized"),
        }
    }
}

impl fmt::Display for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Lossless two-terminal element.
///
/// Implementors supply the single-frequency formulas; the sweep forms map
/// those formulas point by point so both shapes share one code path.
pub trait OnePort {
    fn elem(&self) -> ElemType;
    fn index(&self) -> Option<usize>;
    fn set_index(&mut self, index: Option<usize>);
    fn val(&self) -> f64;
    fn set_val(&mut self, val: f64);

    /// Reactance in ohms at `freq` Hz.
    fn reactance(&self, freq: f64) -> f64;

    /// Impedance in ohms at `freq` Hz with quality factor `q`.
    /// `q = f64::INFINITY` is the ideal element.
    fn impedance(&self, freq: f64, q: f64) -> Complex64;

    /// Display label, e.g. `C3`. Empty index gives the bare prefix.
    fn symbol(&self) -> String {
        match self.index() {
            Some(index) => format!("{}{}", self.elem().prefix(), index),
            None => self.elem().prefix().to_string(),
        }
    }

    /// Lossless impedance at `freq` Hz.
    fn z(&self, freq: f64) -> Complex64 {
        self.impedance(freq, f64::INFINITY)
    }

    fn reactance_sweep(&self, freq: &Array1<f64>) -> Array1<f64> {
        freq.mapv(|f| self.reactance(f))
    }

    fn impedance_sweep(
        &self,
        freq: &Array1<f64>,
        q: &QFactor,
    ) -> Result<Array1<Complex64>, ElementError> {
        log::trace!(
            "{} impedance over {} points, {}",
            self.symbol(),
            freq.len(),
            if q.is_lossless() { "lossless" } else { "lossy" }
        );
        let q = q.broadcast(freq.len())?;
        Ok(Zip::from(freq)
            .and(&q)
            .map_collect(|&f, &q| self.impedance(f, q)))
    }
}

macro_rules! define_element_impl {
    (variants: [$($variant:ident),+ $(,)?]) => {
        impl OnePort for Element {
            fn elem(&self) -> ElemType {
                match self {
                    $(
                        Element::$variant(elem) => elem.elem(),
                    )+
                }
            }

            fn index(&self) -> Option<usize> {
                match self {
                    $(
                        Element::$variant(elem) => elem.index(),
                    )+
                }
            }

            fn set_index(&mut self, index: Option<usize>) {
                match self {
                    $(
                        Element::$variant(elem) => elem.set_index(index),
                    )+
                }
            }

            fn val(&self) -> f64 {
                match self {
                    $(
                        Element::$variant(elem) => elem.val(),
                    )+
                }
            }

            fn set_val(&mut self, val: f64) {
                match self {
                    $(
                        Element::$variant(elem) => elem.set_val(val),
                    )+
                }
            }

            fn reactance(&self, freq: f64) -> f64 {
                match self {
                    $(
                        Element::$variant(elem) => elem.reactance(freq),
                    )+
                }
            }

            fn impedance(&self, freq: f64, q: f64) -> Complex64 {
                match self {
                    $(
                        Element::$variant(elem) => elem.impedance(freq, q),
                    )+
                }
            }
        }

        impl Unitized for Element {
            fn val_scaled(&self) -> f64 {
                match self {
                    $(
                        Element::$variant(elem) => elem.val_scaled(),
                    )+
                }
            }

            fn unitval(&self) -> UnitVal {
                match self {
                    $(
                        Element::$variant(elem) => elem.unitval(),
                    )+
                }
            }

            fn scale(&self) -> Scale {
                match self {
                    $(
                        Element::$variant(elem) => elem.scale(),
                    )+
                }
            }

            fn unit(&self) -> Unit {
                match self {
                    $(
                        Element::$variant(elem) => elem.unit(),
                    )+
                }
            }

            fn set_val_scaled(&mut self, val: f64) {
                match self {
                    $(
                        Element::$variant(elem) => elem.set_val_scaled(val),
                    )+
                }
            }

            fn set_scale(&mut self, scale: Scale) {
                match self {
                    $(
                        Element::$variant(elem) => elem.set_scale(scale),
                    )+
                }
            }
        }

        impl fmt::Display for Element {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Element::$variant(elem) => fmt::Display::fmt(elem, f),
                    )+
                }
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Capacitor(Capacitor),
    Inductor(Inductor),
}

define_element_impl!(variants: [Capacitor, Inductor]);

impl Element {
    /// Element realizing `reactance` ohms at `freq` Hz.
    ///
    /// Negative reactance gives a capacitor, anything else an inductor, so a
    /// zero reactance becomes a zero-valued inductor.
    pub fn from_reactance_at_frequency(reactance: f64, freq: f64, index: Option<usize>) -> Element {
        let elem = if reactance < 0.0 {
            Element::Capacitor(Capacitor::from_reactance_at_frequency(reactance, freq, index))
        } else {
            Element::Inductor(Inductor::from_reactance_at_frequency(reactance, freq, index))
        };
        log::debug!("synthesized {} from X = {} Ω at {} Hz", elem, reactance, freq);
        elem
    }

    /// One element per reactance at a shared frequency, indexed from 1 in
    /// input order.
    pub fn from_reactances_at_frequency<'a, I>(reactances: I, freq: f64) -> Vec<Element>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        reactances
            .into_iter()
            .enumerate()
            .map(|(i, &x)| Element::from_reactance_at_frequency(x, freq, Some(i + 1)))
            .collect()
    }

    pub fn as_capacitor(&self) -> Option<&Capacitor> {
        match self {
            Element::Capacitor(cap) => Some(cap),
            _ => None,
        }
    }

    pub fn as_inductor(&self) -> Option<&Inductor> {
        match self {
            Element::Inductor(ind) => Some(ind),
            _ => None,
        }
    }

    /// Display string with an engineering prefix picked from the value,
    /// e.g. `C1 = 4.7 nF`.
    pub fn to_scaled_string(&self) -> String {
        let scale = Scale::from_val(self.val());
        let scaled = (scale.scale(self.val()) * 1e9).round() / 1e9;
        format!("{} = {} {}{}", self.symbol(), scaled, scale, self.unit())
    }
}

impl From<Capacitor> for Element {
    fn from(cap: Capacitor) -> Self {
        Element::Capacitor(cap)
    }
}

impl From<Inductor> for Element {
    fn from(ind: Inductor) -> Self {
        Element::Inductor(ind)
    }
}

impl FromStr for Element {
    type Err = SimpleError;

    /// Parse the display form `{symbol} = {value} {unit}`. The unit may carry
    /// an engineering prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = match ELEMENT_RE.captures(s) {
            Some(caps) => caps,
            None => {
                return Err(SimpleError::new(format!(
                    "'{}' is not of the form '<symbol> = <value> <unit>'",
                    s
                )))
            }
        };

        let elem = ElemType::from_str(&caps["kind"])?;
        let unit = Unit::from_str(&caps["unit"]).map_err(|e| SimpleError::new(e.to_string()))?;
        if unit != elem.unit() {
            return Err(SimpleError::new(format!("{} cannot carry unit {}", elem, unit)));
        }

        let index = match &caps["index"] {
            "" => None,
            idx => match idx
                .parse::<usize>()
                .map_err(|e| SimpleError::new(format!("bad index '{}': {}", idx, e)))?
            {
                0 => return Err(SimpleError::new("element index must be positive")),
                n => Some(n),
            },
        };
        let val = caps["val"]
            .parse::<f64>()
            .map_err(|e| SimpleError::new(format!("bad value '{}': {}", &caps["val"], e)))?;
        let scale =
            Scale::from_str(&caps["scale"]).map_err(|e| SimpleError::new(e.to_string()))?;

        Ok(ElementBuilder::new()
            .elem(elem)
            .val_scaled(val, scale)
            .index_opt(index)
            .build())
    }
}

/// Builder design pattern for Element
///
/// ## Example
/// ```
/// use lcbalun::prelude::*;
///
/// let elem = ElementBuilder::new()
///     .elem(ElemType::Inductor)
///     .val_scaled(1.0, Scale::Nano)
///     .index(2)
///     .build();
/// assert_eq!(elem.symbol(), "L2");
/// ```
#[derive(Default)]
pub struct ElementBuilder {
    index: Option<usize>,
    unitval: UnitVal,
    elemtype: ElemType,
}

impl ElementBuilder {
    pub fn new() -> Self {
        ElementBuilder::default()
    }

    /// Provide element type
    pub fn elem(mut self, elemtype: ElemType) -> Self {
        self.elemtype = elemtype;
        self
    }

    /// Provide element index
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn index_opt(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    /// Provide element value in base unit
    pub fn val(mut self, val: f64) -> Self {
        self.unitval.set_val(val);
        self
    }

    /// Provide element value in scaled unit
    pub fn val_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.unitval.set_scale(scale);
        self.unitval.set_val_scaled(val);
        self
    }

    pub fn build(self) -> Element {
        let mut unitval = self.unitval;
        unitval.set_unit(self.elemtype.unit());
        match self.elemtype {
            ElemType::Capacitor => CapacitorBuilder::new()
                .unitval(unitval)
                .index_opt(self.index)
                .build()
                .into(),
            ElemType::Inductor => InductorBuilder::new()
                .unitval(unitval)
                .index_opt(self.index)
                .build()
                .into(),
        }
    }
}

/// Frequency in Hz at which the inductor and capacitor reactances cancel.
pub fn resonant_frequency(ind: &Inductor, cap: &Capacitor) -> f64 {
    1.0 / (2.0 * PI * (ind.val() * cap.val()).sqrt())
}
