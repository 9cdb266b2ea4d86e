//! Rothfusz heat index regression.

const C1: f64 = -42.379;
const C2: f64 = 2.049_015_23;
const C3: f64 = 10.143_331_27;
const C4: f64 = -0.224_755_41;
const C5: f64 = -6.837_83e-3;
const C6: f64 = -5.481_717e-2;
const C7: f64 = 1.228_74e-3;
const C8: f64 = 8.528_2e-4;
const C9: f64 = -1.99e-6;

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Apparent temperature in °C for an air temperature in °C and a relative
/// humidity in percent (0-100).
///
/// The full regression is applied at every input, including the mild range
/// where NWS would switch to Steadman's simpler formula.
pub fn heat_index(temperature_c: f64, humidity_pct: f64) -> f64 {
    let t = celsius_to_fahrenheit(temperature_c);
    let r = humidity_pct;
    let t2 = t * t;
    let r2 = r * r;

    let hi = C1
        + C2 * t
        + C3 * r
        + C4 * t * r
        + C5 * t2
        + C6 * r2
        + C7 * t2 * r
        + C8 * t * r2
        + C9 * t2 * r2;

    fahrenheit_to_celsius(hi)
}
