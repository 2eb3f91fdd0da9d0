//! Seeded statistical self-checks over `planar::Vec2`.
//!
//! Each check draws `trials` random inputs, records the worst observed error
//! and counts trials whose error exceeds `eps`. Errors are absolute for unit
//! vectors and relative to `max(1, magnitude)` otherwise.

use planar::{rand_vec, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Number of angle bins used by the uniformity check.
const ANGLE_BINS: usize = 8;
/// Allowed deviation per bin, in standard deviations of a binomial count.
const BIN_SIGMAS: f64 = 6.0;

#[derive(Clone, Copy, Debug)]
pub struct CheckCfg {
    pub trials: usize,
    pub seed: u64,
    pub eps: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub trials: usize,
    pub max_err: f64,
    pub failures: usize,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckReport {
    pub seed: u64,
    pub trials: usize,
    pub eps: f64,
    pub checks: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }

    pub fn failed_names(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|c| !c.passed())
            .map(|c| c.name)
            .collect()
    }
}

struct Tally {
    name: &'static str,
    eps: f64,
    trials: usize,
    max_err: f64,
    failures: usize,
}

impl Tally {
    fn new(name: &'static str, eps: f64) -> Self {
        Self {
            name,
            eps,
            trials: 0,
            max_err: 0.0,
            failures: 0,
        }
    }

    fn record(&mut self, err: f64) {
        self.trials += 1;
        if err.is_nan() || err > self.eps {
            self.failures += 1;
        }
        if err > self.max_err || err.is_nan() {
            self.max_err = err;
        }
    }

    fn fail(&mut self) {
        self.failures += 1;
    }

    fn finish(self) -> CheckOutcome {
        tracing::info!(
            check = self.name,
            trials = self.trials,
            max_err = self.max_err,
            failures = self.failures,
            "check"
        );
        CheckOutcome {
            name: self.name,
            trials: self.trials,
            max_err: self.max_err,
            failures: self.failures,
        }
    }
}

#[inline]
fn coord_err(a: Vec2, b: Vec2) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

fn scaled(rng: &mut StdRng) -> Vec2 {
    let r: f64 = rng.gen_range(0.0..100.0);
    rand_vec(rng).times(r)
}

/// Run the full suite from a single seed.
pub fn run_checks(cfg: CheckCfg) -> CheckReport {
    tracing::info!(trials = cfg.trials, seed = cfg.seed, eps = cfg.eps, "run_checks");
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let checks = vec![
        check_unit_len(&mut rng, cfg),
        check_len2(&mut rng, cfg),
        check_dist(&mut rng, cfg),
        check_with_len(&mut rng, cfg),
        check_rotate_roundtrip(&mut rng, cfg),
        check_mut_pure(&mut rng, cfg),
        check_angle_uniformity(&mut rng, cfg, rand_vec),
    ];
    CheckReport {
        seed: cfg.seed,
        trials: cfg.trials,
        eps: cfg.eps,
        checks,
    }
}

fn check_unit_len(rng: &mut StdRng, cfg: CheckCfg) -> CheckOutcome {
    let mut t = Tally::new("rand_vec_unit_len", cfg.eps);
    for _ in 0..cfg.trials {
        let v = rand_vec(rng);
        t.record((v.len() - 1.0).abs());
    }
    t.finish()
}

fn check_len2(rng: &mut StdRng, cfg: CheckCfg) -> CheckOutcome {
    let mut t = Tally::new("len2_is_len_squared", cfg.eps);
    for _ in 0..cfg.trials {
        let v = scaled(rng);
        let l = v.len();
        t.record((v.len2() - l * l).abs() / v.len2().max(1.0));
    }
    t.finish()
}

fn check_dist(rng: &mut StdRng, cfg: CheckCfg) -> CheckOutcome {
    let mut t = Tally::new("dist_matches_minus", cfg.eps);
    for _ in 0..cfg.trials {
        let (a, b) = (scaled(rng), scaled(rng));
        let d = a.minus(b);
        let err = (a.dist(b) - d.len())
            .abs()
            .max((a.dist2(b) - d.len2()).abs() / d.len2().max(1.0));
        t.record(err);
    }
    t.finish()
}

fn check_with_len(rng: &mut StdRng, cfg: CheckCfg) -> CheckOutcome {
    let mut t = Tally::new("with_len_length_and_direction", cfg.eps);
    for _ in 0..cfg.trials {
        let v = scaled(rng);
        let target: f64 = rng.gen_range(-100.0..100.0);
        if v.is_zero() {
            t.record(if v.with_len(target).is_zero() { 0.0 } else { f64::INFINITY });
            continue;
        }
        let got = v.with_len(target);
        t.record((got.len() - target.abs()).abs() / target.abs().max(1.0));
        let along = got.dot(v);
        if (target > 0.0 && along <= 0.0) || (target < 0.0 && along >= 0.0) {
            t.fail();
        }
    }
    t.finish()
}

fn check_rotate_roundtrip(rng: &mut StdRng, cfg: CheckCfg) -> CheckOutcome {
    let mut t = Tally::new("rotate_angle_from_roundtrip", cfg.eps);
    for _ in 0..cfg.trials {
        let v1 = rand_vec(rng);
        let v2 = rand_vec(rng);
        let between = v1.angle_from(v2);
        let mut in_place = v2;
        in_place.rotate(between);
        t.record(coord_err(v2.rotated(between), v1).max(coord_err(in_place, v1)));
    }
    t.finish()
}

fn check_mut_pure(rng: &mut StdRng, cfg: CheckCfg) -> CheckOutcome {
    let mut t = Tally::new("mut_pure_agreement", cfg.eps);
    for _ in 0..cfg.trials {
        let (a, b) = (scaled(rng), scaled(rng));
        let s: f64 = rng.gen_range(-100.0..100.0);
        let th: f64 = rng.gen_range(-10.0..10.0);
        let mut m = a;
        m.set_len(s);
        let mut same = m == a.with_len(s);
        let mut m = a;
        m.limit(s.abs());
        same &= m == a.limited(s.abs());
        let mut m = a;
        m.project(b);
        same &= m == a.projected(b);
        let mut m = a;
        m.rotate(th);
        same &= m == a.rotated(th);
        t.record(if same { 0.0 } else { f64::INFINITY });
    }
    t.finish()
}

/// Angle-bin uniformity of `sample`; a bin fails when its count deviates from
/// the expected count by more than `BIN_SIGMAS` binomial standard deviations.
fn check_angle_uniformity<F>(rng: &mut StdRng, cfg: CheckCfg, mut sample: F) -> CheckOutcome
where
    F: FnMut(&mut StdRng) -> Vec2,
{
    let mut t = Tally::new("rand_vec_angle_uniformity", f64::INFINITY);
    let mut counts = [0usize; ANGLE_BINS];
    for _ in 0..cfg.trials {
        let a = sample(rng).angle() + std::f64::consts::PI;
        let k = ((a / std::f64::consts::TAU) * ANGLE_BINS as f64) as usize;
        counts[k.min(ANGLE_BINS - 1)] += 1;
    }
    let p = 1.0 / ANGLE_BINS as f64;
    let expected = cfg.trials as f64 * p;
    let sigma = (cfg.trials as f64 * p * (1.0 - p)).sqrt();
    for &c in &counts {
        let dev = (c as f64 - expected).abs();
        t.record(dev / expected.max(1.0));
        if dev > BIN_SIGMAS * sigma {
            t.fail();
        }
    }
    tracing::debug!(?counts, "angle_bins");
    t.finish()
}
