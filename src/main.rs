use std::env;
use std::error::Error;
use std::process;

use log::{error, info};

use glint::camera::Camera;
use glint::config;
use glint::input::{InputState, Key};
use glint::math::Vec3;
use glint::render::{FrameDispatcher, SkyRenderer};
use glint::scene::Scene;
use glint::wavefront::WavefrontFile;
use glint::window::{Display, FpsCounter};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).ok_or("usage: glint <scene.obj>")?;

    // Load the scene before any window exists; a parse failure is fatal
    // and the partially populated state is simply dropped.
    let file = WavefrontFile::load(&path)?;

    let mut display = Display::new(config::TITLE, config::WIDTH, config::HEIGHT)?;
    let dispatcher = FrameDispatcher::new(config::thread_count())?;

    let mut scene = Scene::new();
    scene.set_camera(Camera::new(
        Vec3::new(0.0, 1.0, -5.0),
        config::WIDTH,
        config::HEIGHT,
    ));
    scene.build_geometry(&file);

    let renderer = SkyRenderer::new();
    let mut input = InputState::new();
    let mut counter = FpsCounter::new();

    info!("entering main loop");
    let mut running = true;
    while running {
        let delta = counter.tick();

        // Refresh the title with FPS / delta-time info every 16th frame.
        if counter.frames() % 16 == 1 {
            let title = format!(
                "{} | FPS: {:.1} DT: {:.4}",
                config::TITLE,
                counter.fps(),
                delta
            );
            display.set_title(&title)?;
        }

        // Snapshot on F2.
        if input.is_down(Key::F2) {
            display.save_to_file("render")?;
        }

        // Render the scene if possible; present only after the join.
        if dispatcher.render_frame(&renderer, &mut scene, delta, &input, display.frame_mut()) {
            display.present()?;
        }

        // Apply pending input/window events for the next frame.
        running = display.poll_events(&mut input);
    }

    info!("exiting");
    Ok(())
}
