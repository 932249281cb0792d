use flatline::prelude::*;
use flatline::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), String> {
    let mut window = Window::new("Flatline", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut engine = Engine::new(EngineSettings::default()).map_err(|e| e.to_string())?;
    engine.add_light(PointLight::new(
        Vec4::point(0.2, 0.6, 1.0),
        Vec4::point(2.0, -2.0, 3.0),
    ));
    engine.add_light(PointLight::new(
        Vec4::point(1.0, 0.4, 0.1),
        Vec4::point(-3.0, -1.0, 6.0),
    ));

    let mut frame_limiter = FrameLimiter::new(60);
    let mut rotation = 0.0_f32;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => canvas.resize(w, h),
            WindowEvent::None => {}
        }

        let delta_time = frame_limiter.tick();
        rotation += 0.5 * delta_time;

        let cube = primitives::cube()
            .with_rotation(Vec4::point(rotation, rotation * 0.7, 0.0))
            .with_translation(Vec4::point(0.0, 0.0, 5.0));

        engine.render_frame(&[cube], &mut canvas);
        window.present(&canvas)?;
    }

    Ok(())
}
