use lcbalun::prelude::*;
use lcbalun::util::{comp_array_f64, comp_f64, RELAXED_MARGIN};
use ndarray::{array, Array1};
use num::complex::Complex64;
use std::f64::consts::PI;
use std::str::FromStr;

#[test]
fn test_capacitor_reactance_negative() {
    for &c in [1e-12, 1e-9, 1e-6].iter() {
        for &f in [1e3, 1e6, 1e9].iter() {
            let x = Capacitor::new(c, None).reactance(f);
            assert!(x < 0.0);
            comp_f64(&(-1.0 / (2.0 * PI * f * c)), &x, RELAXED_MARGIN, "capacitor", "");
        }
    }
}

#[test]
fn test_inductor_reactance_positive() {
    for &l in [1e-9, 1e-6, 1e-3].iter() {
        let ind = Inductor::new(l, None);
        for &f in [1e3, 1e6, 1e9].iter() {
            let x = ind.reactance(f);
            assert!(x > 0.0);
            comp_f64(&(2.0 * PI * f * l), &x, RELAXED_MARGIN, "inductor", "");
        }
        assert_eq!(ind.reactance(0.0), 0.0);
    }
}

#[test]
fn test_reference_values() {
    let xc = Capacitor::new(1e-9, None).reactance(1e6);
    let xl = Inductor::new(1e-6, None).reactance(1e6);
    assert!((xc + 159.15).abs() < 1e-2);
    assert!((xl - 6.283).abs() < 1e-3);

    let elem = Element::from_reactance_at_frequency(-159.15, 1e6, Some(1));
    assert_eq!(elem.elem(), ElemType::Capacitor);
    assert!((elem.val() - 1e-9).abs() < 1e-12);
}

#[test]
fn test_round_trip_and_dispatch() {
    let freq = 433.92e6;
    for &x in [-500.0, -12.5, -1e-3, 1e-3, 12.5, 500.0].iter() {
        let elem = Element::from_reactance_at_frequency(x, freq, Some(5));
        let expected = if x < 0.0 {
            ElemType::Capacitor
        } else {
            ElemType::Inductor
        };
        assert_eq!(elem.elem(), expected);
        assert_eq!(elem.index(), Some(5));
        comp_f64(&x, &elem.reactance(freq), RELAXED_MARGIN, "round trip", &elem.to_string());
    }
}

#[test]
fn test_lossless_impedance_is_reactance() {
    let freq = 2.45e9;
    let elems: Vec<Element> = vec![Capacitor::new(1.5e-12, Some(1)).into(), Inductor::new(3.3e-9, Some(2)).into()];
    for elem in elems.iter() {
        let z = elem.impedance(freq, f64::INFINITY);
        assert_eq!(z.re, 0.0);
        assert_eq!(z.im, elem.reactance(freq));
    }

    for &l in [1e-9, 3.3e-9, 10e-9, 100e-9, 1e-6].iter() {
        for &f in [13.56e6, 433.92e6, 915e6, 2.45e9, 5.8e9].iter() {
            let ind = Inductor::new(l, None);
            assert_eq!(ind.z(f).im, ind.reactance(f));
        }
    }
}

#[test]
fn test_inductor_dc_is_short() {
    for &l in [0.0, 1e-9, 1e-3].iter() {
        let ind = Inductor::new(l, Some(1));
        for &q in [0.1, 1.0, 100.0].iter() {
            assert_eq!(ind.impedance(0.0, q), Complex64::ZERO);
        }
    }
}

#[test]
fn test_sweep_matches_scalar() {
    let freq: Array1<f64> = Array1::linspace(1e6, 100e6, 25);
    let elems: Vec<Element> = vec![Capacitor::new(10e-12, Some(1)).into(), Inductor::new(100e-9, Some(2)).into()];
    for elem in elems.iter() {
        let x = elem.reactance_sweep(&freq);
        assert_eq!(x.len(), freq.len());
        for (i, &f) in freq.iter().enumerate() {
            assert_eq!(x[i], elem.reactance(f));
        }

        let z = elem.impedance_sweep(&freq, &QFactor::Constant(60.0)).unwrap();
        for (i, &f) in freq.iter().enumerate() {
            assert_eq!(z[i], elem.impedance(f, 60.0));
        }
    }
}

#[test]
fn test_batch_synthesis() {
    let reactances = vec![-30.0, 0.0, 45.0, -2.0, 7.5];
    let freq = 868e6;
    let elems = Element::from_reactances_at_frequency(&reactances, freq);

    assert_eq!(elems.len(), reactances.len());
    for (i, elem) in elems.iter().enumerate() {
        assert_eq!(elem.index(), Some(i + 1));
        assert_eq!(
            elem,
            &Element::from_reactance_at_frequency(reactances[i], freq, Some(i + 1))
        );
    }

    let x = Array1::from_iter(elems.iter().map(|e| e.reactance(freq)));
    comp_array_f64(&Array1::from(reactances), &x, RELAXED_MARGIN, "batch reactance");
}

#[test]
fn test_display_parse() {
    let elems = Element::from_reactances_at_frequency(&[-75.0, 75.0], 13.56e6);
    for elem in elems.iter() {
        let text = elem.to_string();
        let unit = if elem.elem() == ElemType::Capacitor { "F" } else { "H" };
        assert!(text.starts_with(&format!("{} = ", elem.symbol())));
        assert!(text.ends_with(&format!(" {}", unit)));

        let parsed = Element::from_str(&text).unwrap();
        assert_eq!(parsed.elem(), elem.elem());
        assert_eq!(parsed.index(), elem.index());
        assert_eq!(parsed.val(), elem.val());
    }
}

#[test]
fn test_matched_pair_resonates() {
    let f0 = 13.56e6;
    let elems = Element::from_reactances_at_frequency(&[50.0, -50.0], f0);
    let ind = elems[0].as_inductor().unwrap();
    let cap = elems[1].as_capacitor().unwrap();

    comp_f64(&f0, &resonant_frequency(ind, cap), RELAXED_MARGIN, "resonant_frequency()", "");

    let freq = array![f0 / 2.0, f0, f0 * 2.0];
    let total = ind.reactance_sweep(&freq) + cap.reactance_sweep(&freq);
    assert!(total[0] < 0.0);
    assert!(total[1].abs() < 1e-9);
    assert!(total[2] > 0.0);
}
