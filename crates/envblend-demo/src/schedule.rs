/// One entry of a looping blend schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStep {
    pub preset: String,
    pub blend_seconds: f32,
    /// Time from this step's start to the next step's start.
    pub hold_seconds: f32,
}

impl ScheduleStep {
    pub fn new(preset: &str, blend_seconds: f32, hold_seconds: f32) -> Self {
        Self {
            preset: preset.to_string(),
            blend_seconds,
            hold_seconds,
        }
    }
}

/// Cycles through its steps forever, firing each one when the previous
/// step's hold time has elapsed.
#[derive(Debug, Clone)]
pub struct SampleSchedule {
    steps: Vec<ScheduleStep>,
    next: usize,
    /// Seconds until the next step fires.
    wait: f32,
}

impl SampleSchedule {
    pub fn new(steps: Vec<ScheduleStep>) -> Self {
        Self {
            steps,
            next: 0,
            wait: 0.0,
        }
    }

    /// Mid, Night, Day: five-second blends, ten seconds apart.
    pub fn day_cycle() -> Self {
        Self::new(vec![
            ScheduleStep::new("Mid", 5.0, 10.0),
            ScheduleStep::new("Night", 5.0, 10.0),
            ScheduleStep::new("Day", 5.0, 10.0),
        ])
    }

    /// The step due at the start of this frame, if any. Call before
    /// advancing the frame by `delta_time`.
    pub fn poll(&mut self, delta_time: f32) -> Option<&ScheduleStep> {
        if self.steps.is_empty() {
            return None;
        }

        let due = self.wait <= 0.0;
        let index = self.next;
        if due {
            self.wait += self.steps[index].hold_seconds.max(0.0);
            self.next = (index + 1) % self.steps.len();
        }
        self.wait -= delta_time;

        if due {
            self.steps.get(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(schedule: &mut SampleSchedule, frames: usize, dt: f32) -> Vec<(usize, String)> {
        (0..frames)
            .filter_map(|i| schedule.poll(dt).map(|s| (i, s.preset.clone())))
            .collect()
    }

    #[test]
    fn test_first_step_fires_immediately() {
        let mut schedule = SampleSchedule::day_cycle();
        assert_eq!(schedule.poll(1.0).map(|s| s.preset.as_str()), Some("Mid"));
        assert!(schedule.poll(1.0).is_none());
    }

    #[test]
    fn test_steps_cycle_in_order() {
        let mut schedule = SampleSchedule::day_cycle();
        let fired = fired(&mut schedule, 40, 1.0);
        assert_eq!(
            fired,
            vec![
                (0, "Mid".to_string()),
                (10, "Night".to_string()),
                (20, "Day".to_string()),
                (30, "Mid".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_schedule_never_fires() {
        let mut schedule = SampleSchedule::new(Vec::new());
        assert!(schedule.poll(1.0).is_none());
    }
}
