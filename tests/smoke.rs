use glam::Vec3;
use meshprobe::{PointerEvent, ProbeConfig, Viewer, Workbench};
use meshprobe_testkit::{client_point_of, unit_cube_scene};

#[test]
fn workbench_measures_and_estimates_a_cube() {
    let mut bench = Workbench::new(Viewer::new(640.0, 480.0), ProbeConfig::default());
    bench.content_replaced(unit_cube_scene().expect("cube fixture builds"));

    assert!(bench.toggle_volume());
    let volume = bench.volume().result().expect("cube has an estimate");
    assert!((volume.mesh_volume - 1.0).abs() < 1e-9);

    assert!(bench.toggle_measure());
    for target in [Vec3::new(-0.3, 0.2, 0.5), Vec3::new(0.3, 0.2, 0.5)] {
        let client = client_point_of(target, &bench.viewer.camera, &bench.viewer.surface.viewport);
        bench
            .handle_pointer(&PointerEvent::primary(client.x, client.y))
            .expect("click lands on the cube");
    }
    let measurement = bench.measure().measurement().expect("two points picked");
    assert_eq!(measurement.label(), "60.00 cm");

    assert_eq!(bench.render_frame(), 1);
    bench.dispose();
    assert!(bench.viewer.overlay().is_empty());
}
