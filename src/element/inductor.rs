use crate::element::{ElemType, OnePort};
use crate::scale::Scale;
use crate::unit::{Unit, UnitVal, Unitized};
use num::complex::{c64, Complex64};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Inductor {
    index: Option<usize>,
    ind: UnitVal,
}

impl Inductor {
    pub fn new(ind: f64, index: Option<usize>) -> Inductor {
        Inductor {
            index,
            ind: UnitVal::new(ind, Scale::Base, Unit::Henry),
        }
    }

    /// Inductor with reactance `reactance` ohms at `freq` Hz.
    pub fn from_reactance_at_frequency(reactance: f64, freq: f64, index: Option<usize>) -> Inductor {
        Inductor::new(reactance / (2.0 * PI * freq), index)
    }
}

impl Default for Inductor {
    fn default() -> Self {
        Self {
            index: None,
            ind: *UnitVal::default().set_unit(Unit::Henry),
        }
    }
}

impl OnePort for Inductor {
    fn elem(&self) -> ElemType {
        ElemType::Inductor
    }

    fn index(&self) -> Option<usize> {
        self.index
    }

    fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }

    fn val(&self) -> f64 {
        self.ind.val()
    }

    fn set_val(&mut self, val: f64) {
        self.ind.set_val(val);
    }

    fn reactance(&self, freq: f64) -> f64 {
        2.0 * PI * freq * self.ind.val()
    }

    /// Shunt admittance `Y = G + jB` with `B = -1/X` and `G = |B| / Q`,
    /// inverted in closed form as `Z = (|X|/Q + jX) / (1 + 1/Q²)`.
    ///
    /// A zero reactance is a short at any Q, and so is `Q = 0`.
    fn impedance(&self, freq: f64, q: f64) -> Complex64 {
        let x = self.reactance(freq);
        if x == 0.0 {
            return Complex64::ZERO;
        }
        if q == f64::INFINITY {
            return c64(0.0, x);
        }
        // same expression scaled by Q², keeps 1/Q finite for Q < 1
        if q.abs() < 1.0 {
            let d = q * q + 1.0;
            return c64(x.abs() * q / d, x * q * q / d);
        }
        let inv_q = 1.0 / q;
        let d = 1.0 + inv_q * inv_q;
        c64(x.abs() * inv_q / d, x / d)
    }
}

impl Unitized for Inductor {
    fn val_scaled(&self) -> f64 {
        self.ind.val_scaled()
    }

    fn unitval(&self) -> UnitVal {
        self.ind
    }

    fn scale(&self) -> Scale {
        self.ind.scale()
    }

    fn unit(&self) -> Unit {
        self.ind.unit()
    }

    fn set_val_scaled(&mut self, val: f64) {
        self.ind.set_val_scaled(val);
    }

    fn set_scale(&mut self, scale: Scale) {
        self.ind.set_scale(scale);
    }
}

impl fmt::Display for Inductor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.symbol(), self.ind.val(), Unit::Henry)
    }
}

#[derive(Clone)]
pub struct InductorBuilder {
    index: Option<usize>,
    ind: UnitVal,
}

impl InductorBuilder {
    pub fn new() -> Self {
        InductorBuilder::default()
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn index_opt(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    pub fn unitval(mut self, ind: UnitVal) -> Self {
        self.ind = ind;
        self.ind.set_unit(Unit::Henry);
        self
    }

    pub fn val(mut self, ind: f64) -> Self {
        self.ind.set_val(ind);
        self
    }

    pub fn val_scaled(mut self, ind: f64, scale: Scale) -> Self {
        self.ind.set_scale(scale);
        self.ind.set_val_scaled(ind);
        self
    }

    pub fn build(self) -> Inductor {
        Inductor {
            index: self.index,
            ind: self.ind,
        }
    }
}

impl Default for InductorBuilder {
    fn default() -> Self {
        Self {
            index: None,
            ind: *UnitVal::default().set_unit(Unit::Henry),
        }
    }
}
