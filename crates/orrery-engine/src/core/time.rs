/// Converts variable browser frame deltas into whole simulation steps.
///
/// `requestAnimationFrame` delivers uneven deltas (and huge ones after a
/// background-tab stall), while the orbital update advances angles by a
/// per-step constant, so it has to run at a fixed rate for the planets to
/// move at the same pace on every display. Leftover time carries over to
/// the next frame; a single frame never runs more than [`MAX_STEPS`] steps.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

/// Ceiling on catch-up steps per frame. Ten steps of backlog is a quarter
/// of a second at 1/60; anything beyond that is dropped, not replayed.
pub const MAX_STEPS: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's delta. Returns how many fixed steps to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Fraction of a step left in the accumulator, in [0, 1). Available to
    /// a renderer that interpolates between steps.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed step length in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / 60.0;

    #[test]
    fn steady_sixty_hz_runs_one_step_per_frame() {
        let mut ts = FixedTimestep::new(STEP);
        for _ in 0..120 {
            assert_eq!(ts.accumulate(STEP), 1);
        }
    }

    #[test]
    fn high_refresh_frames_bank_time_for_the_next_step() {
        // 144 Hz deltas are smaller than the step; the third frame tips
        // the accumulator over one step and none of the time is lost.
        let mut ts = FixedTimestep::new(STEP);
        assert_eq!(ts.accumulate(1.0 / 144.0), 0);
        assert_eq!(ts.accumulate(1.0 / 144.0), 0);
        assert_eq!(ts.accumulate(1.0 / 144.0), 1);
    }

    #[test]
    fn dropped_frame_is_caught_up() {
        let mut ts = FixedTimestep::new(STEP);
        assert_eq!(ts.accumulate(STEP), 1);
        // One missed vsync: the double-length delta yields two steps.
        assert_eq!(ts.accumulate(2.0 * STEP), 2);
    }

    #[test]
    fn background_tab_stall_is_capped() {
        let mut ts = FixedTimestep::new(STEP);
        // Several seconds in a background tab must not replay the backlog.
        assert_eq!(ts.accumulate(5.0), MAX_STEPS);
        assert_eq!(ts.accumulate(STEP), 1);
    }

    #[test]
    fn alpha_reports_the_unconsumed_fraction() {
        let mut ts = FixedTimestep::new(STEP);
        ts.accumulate(STEP * 0.5);
        assert!((ts.alpha() - 0.5).abs() < 1e-4, "alpha was {}", ts.alpha());
        ts.accumulate(STEP * 0.5);
        assert!(ts.alpha() < 1e-4);
    }
}
