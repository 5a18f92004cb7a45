//! Fork-join frame dispatcher.
//!
//! Each frame the output raster is partitioned into `tcount` contiguous
//! row bands, one rendering task per worker, joined before presentation.
//! The worker pool is built once at startup and reused; the per-frame
//! scope is the join barrier, so a frame is never partially presented.
//!
//! Correctness of the shared-buffer writes rests on the partition
//! arithmetic alone: the bands are disjoint `&mut` slices, so no locking
//! is involved. When `height` is not a multiple of `tcount`, the trailing
//! `height % tcount` rows are assigned to no worker and keep their
//! previous contents for that frame.

use log::info;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::camera::Camera;
use crate::input::InputState;
use crate::render::{Band, BandRenderer, Framebuffer};
use crate::scene::Scene;

/// Spawns and joins one render task per worker thread per frame.
pub struct FrameDispatcher {
    pool: ThreadPool,
    tcount: usize,
}

impl FrameDispatcher {
    /// Builds the worker pool. `tcount` is resolved once by the caller
    /// (configured constant or logical CPU count) and held for the
    /// process lifetime.
    pub fn new(tcount: usize) -> Result<Self, ThreadPoolBuildError> {
        let tcount = tcount.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(tcount)
            .thread_name(|index| format!("render-{index}"))
            .build()?;
        info!("initialized {tcount} rendering threads");
        Ok(Self { pool, tcount })
    }

    /// Number of worker slots, fixed for the dispatcher's lifetime.
    pub fn thread_count(&self) -> usize {
        self.tcount
    }

    /// Renders one frame into `frame`.
    ///
    /// Advances the camera on the calling thread, then forks one task per
    /// band and blocks until all of them complete. Returns `false`
    /// without touching the buffer when the scene has no camera or no
    /// geometry yet.
    ///
    /// A panic inside the renderer propagates out of the join: worker
    /// failure is fatal to the frame, there is no per-band recovery.
    pub fn render_frame<R: BandRenderer>(
        &self,
        renderer: &R,
        scene: &mut Scene,
        delta: f32,
        input: &InputState,
        frame: &mut Framebuffer,
    ) -> bool {
        let Some((camera, geometry)) = scene.frame_state() else {
            return false;
        };

        // Camera mutation completes before any worker spawns; workers
        // read camera and scene only through shared references.
        camera.update(delta, input);
        let camera: &Camera = camera;

        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let band_rows = height / self.tcount;
        if band_rows == 0 {
            // More workers than rows: every band is empty.
            return true;
        }

        let assigned = band_rows * self.tcount * width;
        let bands = &mut frame.pixels_mut()[..assigned];
        self.pool.scope(|scope| {
            for (index, pixels) in bands.chunks_mut(band_rows * width).enumerate() {
                let band = Band {
                    start_row: index * band_rows,
                    rows: band_rows,
                    width,
                };
                scope.spawn(move |_| renderer.render_band(geometry, camera, band, pixels));
            }
        });
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::scene::Geometry;

    const SENTINEL: u32 = 0xDEAD_BEEF;

    /// Stamps every pixel of its band with the band's start row.
    struct BandMarker;

    impl BandRenderer for BandMarker {
        fn render_band(
            &self,
            _geometry: &Geometry,
            _camera: &Camera,
            band: Band,
            pixels: &mut [u32],
        ) {
            assert_eq!(pixels.len(), band.rows * band.width);
            pixels.fill(band.start_row as u32);
        }
    }

    struct Faulty;

    impl BandRenderer for Faulty {
        fn render_band(&self, _: &Geometry, _: &Camera, _: Band, _: &mut [u32]) {
            panic!("shading failure");
        }
    }

    fn ready_scene(width: u32, height: u32) -> Scene {
        let mut scene = Scene::new();
        scene.set_camera(Camera::new(Vec3::ZERO, width, height));
        scene.set_geometry(Geometry::default());
        scene
    }

    fn assert_row(frame: &Framebuffer, row: usize, value: u32) {
        for x in 0..frame.width() as i32 {
            assert_eq!(
                frame.get_pixel(x, row as i32),
                Some(value),
                "row {row}, column {x}"
            );
        }
    }

    #[test]
    fn even_partition_covers_every_row_exactly_once() {
        let dispatcher = FrameDispatcher::new(4).unwrap();
        let mut scene = ready_scene(8, 64);
        let mut frame = Framebuffer::new(8, 64);
        frame.clear(SENTINEL);

        assert!(dispatcher.render_frame(&BandMarker, &mut scene, 0.0, &InputState::new(), &mut frame));

        for row in 0..64 {
            assert_row(&frame, row, (row / 16 * 16) as u32);
        }
    }

    #[test]
    fn uneven_partition_leaves_the_tail_rows_unassigned() {
        // height = 100, tcount = 3: bands [0,33) [33,66) [66,99).
        let dispatcher = FrameDispatcher::new(3).unwrap();
        let mut scene = ready_scene(8, 100);
        let mut frame = Framebuffer::new(8, 100);
        frame.clear(SENTINEL);

        assert!(dispatcher.render_frame(&BandMarker, &mut scene, 0.0, &InputState::new(), &mut frame));

        for row in 0..33 {
            assert_row(&frame, row, 0);
        }
        for row in 33..66 {
            assert_row(&frame, row, 33);
        }
        for row in 66..99 {
            assert_row(&frame, row, 66);
        }
        // Row 99 is never assigned to any worker.
        assert_row(&frame, 99, SENTINEL);
    }

    #[test]
    fn more_workers_than_rows_assigns_nothing() {
        let dispatcher = FrameDispatcher::new(8).unwrap();
        let mut scene = ready_scene(4, 2);
        let mut frame = Framebuffer::new(4, 2);
        frame.clear(SENTINEL);

        assert!(dispatcher.render_frame(&BandMarker, &mut scene, 0.0, &InputState::new(), &mut frame));
        assert_row(&frame, 0, SENTINEL);
        assert_row(&frame, 1, SENTINEL);
    }

    #[test]
    fn unready_scene_renders_nothing() {
        let dispatcher = FrameDispatcher::new(2).unwrap();
        let mut scene = Scene::new();
        scene.set_camera(Camera::new(Vec3::ZERO, 4, 4));

        let mut frame = Framebuffer::new(4, 4);
        frame.clear(SENTINEL);

        assert!(!dispatcher.render_frame(&BandMarker, &mut scene, 0.0, &InputState::new(), &mut frame));
        assert_row(&frame, 0, SENTINEL);
    }

    #[test]
    fn camera_advances_before_the_workers_run() {
        let dispatcher = FrameDispatcher::new(2).unwrap();
        let mut scene = ready_scene(4, 4);
        let mut frame = Framebuffer::new(4, 4);

        let mut input = InputState::new();
        input.set_scancode(crate::input::Key::W.index(), true);
        dispatcher.render_frame(&BandMarker, &mut scene, 1.0, &input, &mut frame);

        assert!(scene.camera().unwrap().position().z > 0.0);
    }

    #[test]
    #[should_panic(expected = "shading failure")]
    fn worker_panic_propagates_through_the_join() {
        let dispatcher = FrameDispatcher::new(2).unwrap();
        let mut scene = ready_scene(4, 4);
        let mut frame = Framebuffer::new(4, 4);

        dispatcher.render_frame(&Faulty, &mut scene, 0.0, &InputState::new(), &mut frame);
    }

    #[test]
    fn thread_count_is_fixed_and_positive() {
        let dispatcher = FrameDispatcher::new(3).unwrap();
        assert_eq!(dispatcher.thread_count(), 3);
        assert!(FrameDispatcher::new(0).unwrap().thread_count() >= 1);
    }
}
