mod tests {
    use embassy_time::Instant;
    use motion_paper::color::Rgb;
    use motion_paper::engine::Engine;
    use motion_paper::scheduler::{FrameScheduler, TICK_INTERVAL};
    use motion_paper::sensor::SensorHub;
    use motion_paper::{PaintSurface, TouchPoint};

    /// Paint target that records every frame it is handed.
    struct RecordingSurface {
        ready: bool,
        frames: Vec<(Rgb, Option<TouchPoint>)>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                ready: true,
                frames: Vec::new(),
            }
        }
    }

    impl PaintSurface for RecordingSurface {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn paint(&mut self, color: Rgb, touch: Option<TouchPoint>) {
            self.frames.push((color, touch));
        }
    }

    fn make_scheduler(hub: &SensorHub) -> FrameScheduler<'_, RecordingSurface> {
        FrameScheduler::new(Engine::new(hub.reader()), RecordingSurface::new())
    }

    #[test]
    fn test_show_ticks_immediately_and_arms_cadence() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);

        // Hidden: nothing pending.
        assert_eq!(scheduler.poll(Instant::from_millis(0)), None);
        assert!(scheduler.surface().frames.is_empty());

        scheduler.set_visible(true, Instant::from_millis(0));
        assert_eq!(scheduler.surface().frames.len(), 1);

        // Not due yet: no tick, deadline unchanged.
        let deadline = scheduler.poll(Instant::from_millis(10));
        assert_eq!(deadline, Some(Instant::from_millis(0) + TICK_INTERVAL));
        assert_eq!(scheduler.surface().frames.len(), 1);

        // Due: tick fires and the deadline moves one interval on.
        let deadline = scheduler.poll(Instant::from_millis(33));
        assert_eq!(scheduler.surface().frames.len(), 2);
        assert_eq!(deadline, Some(Instant::from_millis(33) + TICK_INTERVAL));
    }

    #[test]
    fn test_no_ticks_while_hidden() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);

        scheduler.set_visible(true, Instant::from_millis(0));
        scheduler.set_visible(false, Instant::from_millis(5));

        assert_eq!(scheduler.poll(Instant::from_millis(500)), None);
        assert_eq!(scheduler.surface().frames.len(), 1);
        assert!(!scheduler.is_visible());
    }

    #[test]
    fn test_reentry_ticks_exactly_once() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);

        scheduler.set_visible(true, Instant::from_millis(0));
        scheduler.set_visible(false, Instant::from_millis(5));
        scheduler.set_visible(true, Instant::from_millis(100));

        assert_eq!(scheduler.surface().frames.len(), 2);
        assert_eq!(
            scheduler.poll(Instant::from_millis(101)),
            Some(Instant::from_millis(100) + TICK_INTERVAL)
        );
        assert_eq!(scheduler.surface().frames.len(), 2);
    }

    #[test]
    fn test_geometry_change_is_out_of_band() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);
        scheduler.set_visible(true, Instant::from_millis(0));

        scheduler.surface_changed(800, 600);
        assert_eq!(scheduler.center(), (400.0, 300.0));
        assert_eq!(scheduler.surface().frames.len(), 2);

        // The pending periodic deadline was not rescheduled by the extra
        // tick.
        assert_eq!(
            scheduler.poll(Instant::from_millis(10)),
            Some(Instant::from_millis(0) + TICK_INTERVAL)
        );
        assert_eq!(scheduler.surface().frames.len(), 2);

        scheduler.poll(Instant::from_millis(33));
        assert_eq!(scheduler.surface().frames.len(), 3);
    }

    #[test]
    fn test_geometry_change_while_hidden_does_not_tick() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);

        scheduler.surface_changed(640, 480);
        assert_eq!(scheduler.center(), (320.0, 240.0));
        assert!(scheduler.surface().frames.is_empty());
    }

    #[test]
    fn test_offset_change_forces_tick() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);
        scheduler.set_visible(true, Instant::from_millis(0));

        scheduler.offsets_changed(0.25);
        assert_eq!(scheduler.offset(), 0.25);
        assert_eq!(scheduler.surface().frames.len(), 2);
    }

    #[test]
    fn test_touch_point_passthrough() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);
        scheduler.set_visible(true, Instant::from_millis(0));

        scheduler.touch_moved(12.0, 34.0);
        scheduler.poll(Instant::from_millis(33));
        let (_, touch) = scheduler.surface().frames[1];
        assert_eq!(touch, Some(TouchPoint { x: 12.0, y: 34.0 }));

        scheduler.touch_ended();
        scheduler.poll(Instant::from_millis(66));
        let (_, touch) = scheduler.surface().frames[2];
        assert_eq!(touch, None);
    }

    #[test]
    fn test_not_ready_surface_skips_frame_and_smoothing() {
        let hub = SensorHub::new();
        hub.source().record_motion(-10.0, 0.0, 0.0);

        let mut scheduler = make_scheduler(&hub);
        scheduler.surface_mut().ready = false;

        scheduler.set_visible(true, Instant::from_millis(0));
        assert!(scheduler.surface().frames.is_empty());
        // Smoothing state did not advance either; frames painted and steps
        // taken stay in lockstep.
        assert_eq!(
            scheduler.engine().smoothed_color(),
            Rgb { r: 0, g: 0, b: 0 }
        );

        scheduler.surface_mut().ready = true;
        scheduler.poll(Instant::from_millis(33));
        assert_eq!(scheduler.surface().frames.len(), 1);
        assert_eq!(
            scheduler.engine().smoothed_color(),
            Rgb { r: 23, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_overrunning_tick_delays_next_deadline() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);
        scheduler.set_visible(true, Instant::from_millis(0));

        // Polled way past the deadline: one tick fires (no catch-up burst)
        // and the next deadline re-arms from now.
        let deadline = scheduler.poll(Instant::from_millis(200));
        assert_eq!(scheduler.surface().frames.len(), 2);
        assert_eq!(deadline, Some(Instant::from_millis(200) + TICK_INTERVAL));
    }

    #[test]
    fn test_surface_destroyed_cancels_scheduling() {
        let hub = SensorHub::new();
        let mut scheduler = make_scheduler(&hub);
        scheduler.set_visible(true, Instant::from_millis(0));

        scheduler.surface_destroyed();
        assert!(!scheduler.is_visible());
        assert_eq!(scheduler.poll(Instant::from_millis(33)), None);
        assert_eq!(scheduler.surface().frames.len(), 1);
    }
}
