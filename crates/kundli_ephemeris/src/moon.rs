//! Geocentric longitude of the Moon.
//!
//! Principal periodic terms of the ELP-2000/82 truncation in Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47. The series below keeps
//! every longitude term of at least 0.002 deg; the result is
//! referred to the mean equinox of date.

/// One longitude term: multipliers of D, M, M', F and the amplitude in
/// 1e-6 degrees.
struct Term {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    amplitude: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, amplitude: f64) -> Term {
    Term { d, m, mp, f, amplitude }
}

#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 35] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),
    term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),
    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),
    term(2, -1, -2, 0, 2_390.0),
    term(1, 0, 1, 0, -2_348.0),
    term(2, -2, 0, 0, 2_236.0),
    term(0, 1, 2, 0, -2_120.0),
    term(0, 2, 0, 0, -2_069.0),
    term(2, -2, -1, 0, 2_048.0),
];

/// Fundamental lunar arguments in degrees: (L', D, M, M', F).
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let l_prime = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (l_prime, d, m, mp, f)
}

/// Moon's geocentric ecliptic longitude, mean equinox of date, degrees in [0, 360).
///
/// `t` is Julian centuries since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let (l_prime, d, m, mp, f) = fundamental_arguments(t);
    // solar eccentricity damping for terms involving M
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum = 0.0;
    for term in &LONGITUDE_TERMS {
        let arg = term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f;
        let damping = match term.m.unsigned_abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += term.amplitude * damping * arg.to_radians().sin();
    }

    // Venus, Jupiter and flattening terms
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    sum += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (l_prime - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    (l_prime + sum / 1_000_000.0).rem_euclid(360.0)
}
