use crate::element::{ElemType, OnePort};
use crate::scale::Scale;
use crate::unit::{Unit, UnitVal, Unitized};
use num::complex::{c64, Complex64};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Capacitor {
    index: Option<usize>,
    cap: UnitVal,
}

impl Capacitor {
    pub fn new(cap: f64, index: Option<usize>) -> Capacitor {
        Capacitor {
            index,
            cap: UnitVal::new(cap, Scale::Base, Unit::Farad),
        }
    }

    /// Capacitor with reactance `reactance` ohms at `freq` Hz.
    ///
    /// Only a negative reactance yields a positive capacitance.
    pub fn from_reactance_at_frequency(reactance: f64, freq: f64, index: Option<usize>) -> Capacitor {
        Capacitor::new(-1.0 / (2.0 * PI * freq * reactance), index)
    }
}

impl Default for Capacitor {
    fn default() -> Self {
        Self {
            index: None,
            cap: *UnitVal::default().set_unit(Unit::Farad),
        }
    }
}

impl OnePort for Capacitor {
    fn elem(&self) -> ElemType {
        ElemType::Capacitor
    }

    fn index(&self) -> Option<usize> {
        self.index
    }

    fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }

    fn val(&self) -> f64 {
        self.cap.val()
    }

    fn set_val(&mut self, val: f64) {
        self.cap.set_val(val);
    }

    fn reactance(&self, freq: f64) -> f64 {
        -1.0 / (2.0 * PI * freq * self.cap.val())
    }

    // series loss resistance R = -X / Q, open at Q = 0
    fn impedance(&self, freq: f64, q: f64) -> Complex64 {
        let x = self.reactance(freq);
        let r = if q == f64::INFINITY { 0.0 } else { -x / q };
        c64(r, x)
    }
}

impl Unitized for Capacitor {
    fn val_scaled(&self) -> f64 {
        self.cap.val_scaled()
    }

    fn unitval(&self) -> UnitVal {
        self.cap
    }

    fn scale(&self) -> Scale {
        self.cap.scale()
    }

    fn unit(&self) -> Unit {
        self.cap.unit()
    }

    fn set_val_scaled(&mut self, val: f64) {
        self.cap.set_val_scaled(val);
    }

    fn set_scale(&mut self, scale: Scale) {
        self.cap.set_scale(scale);
    }
}

impl fmt::Display for Capacitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.symbol(), self.cap.val(), Unit::Farad)
    }
}

#[derive(Clone)]
pub struct CapacitorBuilder {
    index: Option<usize>,
    cap: UnitVal,
}

impl CapacitorBuilder {
    pub fn new() -> Self {
        CapacitorBuilder::default()
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn index_opt(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    pub fn unitval(mut self, cap: UnitVal) -> Self {
        self.cap = cap;
        self.cap.set_unit(Unit::Farad);
        self
    }

    pub fn val(mut self, cap: f64) -> Self {
        self.cap.set_val(cap);
        self
    }

    pub fn val_scaled(mut self, cap: f64, scale: Scale) -> Self {
        self.cap.set_scale(scale);
        self.cap.set_val_scaled(cap);
        self
    }

    pub fn build(self) -> Capacitor {
        Capacitor {
            index: self.index,
            cap: self.cap,
        }
    }
}

impl Default for CapacitorBuilder {
    fn default() -> Self {
        Self {
            index: None,
            cap: *UnitVal::default().set_unit(Unit::Farad),
        }
    }
}
