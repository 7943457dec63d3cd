//! Back-and-forth translation with a slerped half-turn.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::options::AnimationOptions;
use crate::scene::Transformable;

/// Result of one [`AnimationController::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Segment progress. Not clamped; may exceed 1.0 when a frame lands
    /// more than one segment past the last boundary.
    pub t: f64,
    /// X coordinate for the animated mesh.
    pub x: f32,
    /// Orientation for the animated mesh.
    pub orientation: Quat,
}

/// Mutable per-segment state. Captured lazily on the first update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// X at the start of the current segment.
    pub start_x: f32,
    /// X at the end of the current segment.
    pub end_x: f32,
    /// Signed travel for the current segment (`end_x - start_x`).
    pub distance: f32,
    /// Segment start time (ms).
    pub segment_start: f64,
    /// Segment end time (ms).
    pub segment_end: f64,
    /// Orientation at `t = 0`.
    pub rotation_start: Quat,
    /// Orientation at `t = 1`.
    pub rotation_end: Quat,
}

/// The three fixed orientations about +Y the rotation cycles through.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Orientations {
    /// Facing forward (angle 0).
    rest: Quat,
    /// Just short of a half turn (π − ε).
    half_before: Quat,
    /// Just past a half turn (π + ε).
    half_after: Quat,
}

impl Orientations {
    fn new(epsilon: f32) -> Self {
        Self {
            rest: Quat::from_axis_angle(Vec3::Y, 0.0),
            half_before: Quat::from_axis_angle(Vec3::Y, PI - epsilon),
            half_after: Quat::from_axis_angle(Vec3::Y, PI + epsilon),
        }
    }

    /// Rotation pair for a segment travelling by `distance`.
    fn pair_for(&self, distance: f32) -> (Quat, Quat) {
        if distance < 0.0 {
            (self.rest, self.half_before)
        } else {
            (self.half_after, self.rest)
        }
    }
}

/// Drives one mesh back and forth along X while it rotates about +Y.
///
/// Each segment takes the time needed to cover `|2 * start_x|` at the
/// configured speed. At every boundary the direction reverses and the
/// rotation pair is picked from the new direction: `rest → half_before`
/// when heading toward -X, `half_after → rest` when heading toward +X.
/// The very first segment always uses `rest → half_before`.
#[derive(Debug, Clone)]
pub struct AnimationController {
    options: AnimationOptions,
    segment_duration: f64,
    orientations: Orientations,
    state: Option<AnimationState>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationOptions::default())
    }
}

impl AnimationController {
    /// Create an uninitialized controller; the first update starts it.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        let segment_duration = options.segment_duration_ms();
        let orientations = Orientations::new(options.rotation_epsilon);
        Self {
            options,
            segment_duration,
            orientations,
            state: None,
        }
    }

    /// Segment length in milliseconds.
    #[must_use]
    pub fn segment_duration(&self) -> f64 {
        self.segment_duration
    }

    /// Current segment state, `None` before the first update.
    #[must_use]
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Drop back to the uninitialized state; the next update restarts
    /// from the configured start position.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// X position the mesh should be placed at before the first update.
    #[must_use]
    pub fn initial_x(&self) -> f32 {
        self.options.start_x
    }

    fn initial_state(&self, time: f64) -> AnimationState {
        let start_x = self.options.start_x;
        AnimationState {
            start_x,
            end_x: -start_x,
            distance: -2.0 * start_x,
            segment_start: time,
            segment_end: time + self.segment_duration,
            rotation_start: self.orientations.rest,
            rotation_end: self.orientations.half_before,
        }
    }

    /// Advance to `time` (milliseconds, monotonically increasing) and
    /// return the interpolated placement.
    ///
    /// At most one segment boundary is crossed per call.
    pub fn update(&mut self, time: f64) -> AnimationFrame {
        let duration = self.segment_duration;
        let orientations = self.orientations;
        let initial = self.initial_state(time);
        let state = self.state.get_or_insert(initial);

        if time > state.segment_end {
            state.segment_start = state.segment_end;
            state.segment_end = state.segment_start + duration;
            state.start_x = -state.start_x;
            state.end_x = -state.end_x;
            state.distance = -state.distance;
            (state.rotation_start, state.rotation_end) =
                orientations.pair_for(state.distance);
            log::trace!(
                "animation segment flipped, heading {} toward x = {}",
                if state.distance < 0.0 { "-x" } else { "+x" },
                state.end_x
            );
        }

        let t = (time - state.segment_start) / duration;
        let x = state.start_x + t as f32 * state.distance;
        let orientation =
            state.rotation_start.slerp(state.rotation_end, t as f32);

        AnimationFrame { t, x, orientation }
    }

    /// Update and write the result onto `target`'s X position and
    /// orientation. Y and Z are left untouched.
    pub fn apply<T: Transformable + ?Sized>(
        &mut self,
        time: f64,
        target: &mut T,
    ) -> AnimationFrame {
        let frame = self.update(time);
        let mut position = target.position();
        position.x = frame.x;
        target.set_position(position);
        target.set_orientation(frame.orientation);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn quat_close(a: Quat, b: Quat) -> bool {
        // q and -q are the same rotation
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn first_update_starts_segment_at_start_x() {
        let mut anim = AnimationController::default();
        assert!(anim.state().is_none());

        let frame = anim.update(500.0);
        assert_eq!(frame.t, 0.0);
        assert!((frame.x - -1.5).abs() < EPS);
        assert!(quat_close(frame.orientation, Quat::IDENTITY));

        let state = anim.state().unwrap();
        assert_eq!(state.segment_start, 500.0);
        assert_eq!(state.segment_end, 1500.0);
        assert_eq!(state.distance, 3.0);
    }

    #[test]
    fn position_is_monotonic_within_a_segment() {
        let mut anim = AnimationController::default();
        let mut last = anim.update(0.0).x;
        for ms in (10..=1000).step_by(10) {
            let x = anim.update(f64::from(ms)).x;
            assert!(x >= last, "x went backwards at {ms}ms");
            assert!((-1.5 - EPS..=1.5 + EPS).contains(&x));
            last = x;
        }
        assert!((last - 1.5).abs() < EPS);
    }

    #[test]
    fn position_decreases_on_the_return_segment() {
        let mut anim = AnimationController::default();
        let _ = anim.update(0.0);
        let _ = anim.update(1000.0);

        let mut last = 1.5;
        for ms in (1010..=2000).step_by(10) {
            let x = anim.update(f64::from(ms)).x;
            assert!(x <= last, "x went forwards at {ms}ms");
            assert!((-1.5 - EPS..=1.5 + EPS).contains(&x));
            last = x;
        }
        assert!(anim.state().unwrap().distance < 0.0);
        assert!((last + 1.5).abs() < EPS);
    }

    #[test]
    fn orientation_hits_segment_endpoints() {
        let mut anim = AnimationController::default();
        let start = anim.update(0.0);
        let state = *anim.state().unwrap();
        assert!(quat_close(start.orientation, state.rotation_start));

        let end = anim.update(1000.0);
        assert_eq!(end.t, 1.0);
        assert!(quat_close(end.orientation, state.rotation_end));
    }

    #[test]
    fn boundary_reverses_direction() {
        let mut anim = AnimationController::default();
        let _ = anim.update(0.0);
        let before = *anim.state().unwrap();

        let frame = anim.update(1000.5);
        let after = *anim.state().unwrap();
        assert_eq!(after.distance, -before.distance);
        assert_eq!(after.start_x, -before.start_x);
        assert_eq!(after.end_x, -before.end_x);
        assert_eq!(after.segment_start, 1000.0);
        assert_eq!(after.segment_end, 2000.0);
        // Just past the boundary, heading back from +1.5
        assert!(frame.x < 1.5 && frame.x > 1.49);
    }

    #[test]
    fn n_boundaries_give_n_flips() {
        let mut anim = AnimationController::default();
        let _ = anim.update(0.0);

        let mut flips = 0;
        let mut sign = anim.state().unwrap().distance.signum();
        // 60 fps for 7.5 segments
        for frame in 1..=450 {
            let _ = anim.update(f64::from(frame) * 1000.0 / 60.0);
            let now = anim.state().unwrap().distance.signum();
            if now != sign {
                flips += 1;
                sign = now;
            }
        }
        assert_eq!(flips, 7);
    }

    #[test]
    fn rotation_pairs_follow_distance_sign() {
        let o = Orientations::new(0.01);
        let mut anim = AnimationController::default();
        let _ = anim.update(0.0);

        // Second segment: distance negative, rest -> half_before
        let _ = anim.update(1001.0);
        let state = *anim.state().unwrap();
        assert!(state.distance < 0.0);
        assert_eq!(state.rotation_start, o.rest);
        assert_eq!(state.rotation_end, o.half_before);

        // Third segment: distance positive, half_after -> rest
        let _ = anim.update(2001.0);
        let state = *anim.state().unwrap();
        assert!(state.distance > 0.0);
        assert_eq!(state.rotation_start, o.half_after);
        assert_eq!(state.rotation_end, o.rest);
    }

    #[test]
    fn half_turn_endpoints_straddle_pi() {
        let o = Orientations::new(0.01);
        let before = o.rest.angle_between(o.half_before);
        let after = o.rest.angle_between(o.half_after);
        // Both sit just short of a half turn away from rest, on either side
        assert!((before - (PI - 0.01)).abs() < 1e-3);
        assert!((after - (PI - 0.01)).abs() < 1e-3);
        assert!((o.half_before.angle_between(o.half_after) - 0.02).abs() < 1e-3);
    }

    #[test]
    fn long_gap_overshoots_t_for_one_frame() {
        let mut anim = AnimationController::default();
        let _ = anim.update(0.0);

        // 2.5 segments later: only one boundary is consumed
        let frame = anim.update(2500.0);
        assert!((frame.t - 1.5).abs() < 1e-9);
        assert!((frame.x - (1.5 - 1.5 * 3.0)).abs() < EPS);

        // Next frame catches up
        let frame = anim.update(2510.0);
        assert!((frame.t - 0.51).abs() < 1e-9);
    }

    #[test]
    fn apply_writes_x_and_orientation_only() {
        struct Probe {
            position: Vec3,
            orientation: Quat,
        }
        impl Transformable for Probe {
            fn position(&self) -> Vec3 {
                self.position
            }
            fn set_position(&mut self, position: Vec3) {
                self.position = position;
            }
            fn orientation(&self) -> Quat {
                self.orientation
            }
            fn set_orientation(&mut self, orientation: Quat) {
                self.orientation = orientation;
            }
        }

        let mut probe = Probe {
            position: Vec3::new(9.0, 2.0, 3.0),
            orientation: Quat::IDENTITY,
        };
        let mut anim = AnimationController::default();
        let _ = anim.apply(0.0, &mut probe);
        let frame = anim.apply(500.0, &mut probe);

        assert!((probe.position - Vec3::new(0.0, 2.0, 3.0)).length() < EPS);
        assert_eq!(probe.orientation, frame.orientation);
    }

    #[test]
    fn reset_restarts_from_configured_start() {
        let mut anim = AnimationController::default();
        let _ = anim.update(0.0);
        let _ = anim.update(1500.0);
        anim.reset();
        assert!(anim.state().is_none());
        let frame = anim.update(10_000.0);
        assert!((frame.x - anim.initial_x()).abs() < EPS);
    }
}
