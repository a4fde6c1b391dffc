use crate::core::{Fps, FrameIndex};

/// Damped-spring step response from 0 toward 1, with x(0)=0 and v(0)=0.
///
/// Sampled at `local_frame / fps` seconds, so the feel of an entrance is
/// stable across frame rates. Underdamped configurations overshoot 1.0 before
/// settling; callers that need a hard bound clamp the result.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn progress(self, local: FrameIndex, fps: Fps) -> f64 {
        let t = fps.frames_to_secs(local.0);

        let k = self.stiffness.max(0.0);
        let c = self.damping.max(0.0);
        let m = self.mass.max(1e-9);

        let w0 = (k / m).sqrt();
        if w0 == 0.0 {
            return 0.0;
        }
        let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            // Underdamped.
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            let c1 = (wd * t).cos();
            let s1 = (wd * t).sin();
            let k = zeta / (1.0 - zeta * zeta).sqrt();
            1.0 - e * (c1 + k * s1)
        } else {
            // Overdamped.
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        }
    }
}

/// Linear 0..1 progress over `[start, end]` frames, clamped at both ends.
pub fn ramp(local: FrameIndex, start: u64, end: u64) -> f64 {
    if end <= start {
        return if local.0 >= end { 1.0 } else { 0.0 };
    }
    let f = local.0.clamp(start, end);
    ((f - start) as f64) / ((end - start) as f64)
}

/// Number tween: a figure counting up toward `target` on a spring curve.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CountUp {
    pub target: u64,
    pub spring: Spring,
}

impl CountUp {
    pub fn new(target: u64, spring: Spring) -> Self {
        Self { target, spring }
    }

    pub fn value_at(self, local: FrameIndex, fps: Fps) -> u64 {
        let p = self.spring.progress(local, fps).clamp(0.0, 1.0);
        ((self.target as f64) * p).round() as u64
    }

    pub fn display_at(self, local: FrameIndex, fps: Fps) -> String {
        format_grouped(self.value_at(local, fps))
    }
}

/// Render an integer with thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps30() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    #[test]
    fn spring_starts_at_rest() {
        for spring in [
            Spring::default(),
            Spring::new(80.0, 30.0, 0.5),
            Spring::new(100.0, 20.0, 1.0),
        ] {
            let p = spring.progress(FrameIndex(0), fps30());
            assert!(p.abs() < 1e-12, "rest position was {p}");
        }
    }

    #[test]
    fn spring_settles_near_one() {
        for spring in [
            Spring::new(80.0, 30.0, 0.5),  // overdamped
            Spring::new(100.0, 20.0, 1.0), // critically damped
            Spring::new(100.0, 10.0, 1.0), // underdamped
        ] {
            let settled = spring.progress(FrameIndex(300), fps30());
            assert!((settled - 1.0).abs() < 1e-3, "settled at {settled}");
        }
    }

    #[test]
    fn spring_progress_is_finite_everywhere() {
        for f in 0..600u64 {
            let p = Spring::new(100.0, 10.0, 1.0).progress(FrameIndex(f), fps30());
            assert!(p.is_finite());
        }
    }

    #[test]
    fn ramp_clamps_both_ends() {
        assert_eq!(ramp(FrameIndex(0), 0, 8), 0.0);
        assert_eq!(ramp(FrameIndex(4), 0, 8), 0.5);
        assert_eq!(ramp(FrameIndex(8), 0, 8), 1.0);
        assert_eq!(ramp(FrameIndex(200), 0, 8), 1.0);
    }

    #[test]
    fn count_up_reaches_target_and_never_exceeds_it() {
        let c = CountUp::new(4279, Spring::new(80.0, 30.0, 0.5));
        assert_eq!(c.value_at(FrameIndex(0), fps30()), 0);
        for f in 0..400u64 {
            assert!(c.value_at(FrameIndex(f), fps30()) <= 4279);
        }
        assert_eq!(c.value_at(FrameIndex(400), fps30()), 4279);
    }

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }
}
