use crate::error::ElementError;
use ndarray::Array1;
use serde::Serialize;
use std::fmt;

/// Quality factor applied across a frequency sweep.
///
/// `Lossless` is equivalent to a constant `f64::INFINITY`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub enum QFactor {
    #[default]
    Lossless,
    Constant(f64),
    PerPoint(Array1<f64>),
}

impl QFactor {
    /// Expand to one Q value per frequency point.
    pub fn broadcast(&self, npts: usize) -> Result<Array1<f64>, ElementError> {
        match self {
            QFactor::Lossless => Ok(Array1::from_elem(npts, f64::INFINITY)),
            QFactor::Constant(q) => Ok(Array1::from_elem(npts, *q)),
            QFactor::PerPoint(q) => {
                if q.len() != npts {
                    return Err(ElementError::DimensionMismatch(format!(
                        "{} Q values for {} frequency points",
                        q.len(),
                        npts
                    )));
                }
                Ok(q.clone())
            }
        }
    }

    pub fn is_lossless(&self) -> bool {
        match self {
            QFactor::Lossless => true,
            QFactor::Constant(q) => q.is_infinite() && q.is_sign_positive(),
            QFactor::PerPoint(q) => q.iter().all(|x| x.is_infinite() && x.is_sign_positive()),
        }
    }
}

impl From<f64> for QFactor {
    fn from(q: f64) -> Self {
        QFactor::Constant(q)
    }
}

impl From<Array1<f64>> for QFactor {
    fn from(q: Array1<f64>) -> Self {
        QFactor::PerPoint(q)
    }
}

impl From<Vec<f64>> for QFactor {
    fn from(q: Vec<f64>) -> Self {
        QFactor::PerPoint(Array1::from(q))
    }
}

impl fmt::Display for QFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QFactor::Lossless => write!(f, "Q = inf"),
            QFactor::Constant(q) => write!(f, "Q = {}", q),
            QFactor::PerPoint(q) => write!(f, "Q = {} points", q.len()),
        }
    }
}
