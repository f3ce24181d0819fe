use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use kiss3d::event::{Action, Key, WindowEvent};
use kiss3d::light::Light;
use kiss3d::nalgebra::{Point2, Point3, Quaternion as RenderQuaternion, UnitQuaternion};
use kiss3d::text::Font;
use kiss3d::window::Window;

use orientation_display::types::{EulerAngles, Quaternion, Vector3};
use orientation_display::{
    OrientationDisplayFilter, OrientationEvent, SensorAccuracy, SmoothingStrategy,
};

/// Sample cadence of the simulated push channel, in Hz.
const SAMPLE_RATE: f32 = 30.0;

fn main() {
    // The sensor is mounted rotated against the model's reference frame.
    let mounting = Quaternion::from_euler(&EulerAngles::new(-FRAC_PI_2, 0.0, -FRAC_PI_2));
    let mut filter = OrientationDisplayFilter::<f32>::new(mounting);

    let mut window = Window::new("Orientation display filter");
    window.set_framerate_limit(Some(60));
    window.set_light(Light::StickToCamera);

    let mut model = window.add_cube(0.4, 0.1, 0.6);
    model.set_color(0.85, 0.55, 0.1);

    let font = Font::default();
    let white = Point3::new(1.0, 1.0, 1.0);

    let started = Instant::now();
    let mut last_sample_time = f32::MIN;
    let mut accuracy: Option<SensorAccuracy> = None;
    let mut adaptive = true;
    let mut is_paused = false;

    while window.render() {
        for event in window.events().iter() {
            if let WindowEvent::Key(key, Action::Press, _) = event.value {
                match key {
                    Key::C => filter.recenter(),
                    Key::F => {
                        adaptive = !adaptive;
                        filter.set_smoothing(if adaptive {
                            SmoothingStrategy::default()
                        } else {
                            SmoothingStrategy::fixed(0.1)
                        });
                    }
                    Key::Space => is_paused = !is_paused,
                    _ => {}
                }
            }
        }

        let now = started.elapsed().as_secs_f32();

        // Feed the filter at the channel rate; render frames in between
        // keep converging toward the current target.
        if !is_paused && now - last_sample_time >= 1.0 / SAMPLE_RATE {
            last_sample_time = now;

            let event = sensor_event(now);
            accuracy = event.accuracy();
            if let Err(err) = filter.update(&event.reading()) {
                eprintln!("sample rejected: {err}");
            }
        }

        let displayed = filter.advance();
        model.set_local_rotation(UnitQuaternion::from_quaternion(RenderQuaternion::new(
            displayed.w, displayed.x, displayed.y, displayed.z,
        )));

        let badge = match accuracy {
            Some(accuracy) => format!("Calib: {accuracy}"),
            None => String::from("Calib: --"),
        };
        window.draw_text(&badge, &Point2::new(10.0, 10.0), 48.0, &font, &white);

        let mode = if adaptive {
            "smoothing: adaptive"
        } else {
            "smoothing: fixed 0.1"
        };
        window.draw_text(mode, &Point2::new(10.0, 64.0), 40.0, &font, &white);
        window.draw_text(
            "C: recentre  F: toggle smoothing  Space: pause",
            &Point2::new(10.0, 110.0),
            40.0,
            &font,
            &white,
        );
    }
}

/// Scripted stand-in for the sensor stream: a slow yaw sweep with a
/// pitch wobble, reported with a calibration level that improves as the
/// run progresses.
fn sensor_event(t: f32) -> OrientationEvent<f32> {
    let yaw = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.4 * t);
    let wobble = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), 0.3 * (0.9 * t).sin());
    let pose = yaw * wobble;
    let calib = ((t / 4.0) as u8).min(3);
    OrientationEvent::new(pose.x, pose.y, pose.z, pose.w, Some(calib))
}
