use anyhow::Context;
use glshapes::coords::Vec2;
use glshapes::logging::{LoggingConfig, init_logging};
use glshapes::paint::Color;
use glshapes::scene::{DrawList, Primitive, Texture, TextureHandle};
use glshapes::world::OrthoWorld;
use glshapes::{BoxShape, Group, Segment, Shape};

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;

/// Builds a small scene, animates it for a few frames and reports what a
/// renderer would receive. No window is opened.
fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let world = OrthoWorld::new(WIDTH, HEIGHT);
    let scene = build_scene().context("building scene")?;
    scene.attach_to_world(&world);

    let mut frame = DrawList::new();
    for tick in 0..4u8 {
        let angle = f32::from(tick) * 15.0;
        scene.rotate(angle);
        scene.move_by(5.0, 0.0);

        frame.clear();
        scene
            .draw(&mut frame)
            .with_context(|| format!("drawing frame {tick}"))?;
        report(tick, angle, &scene, &frame);
    }

    let snapshot = scene.clone();
    snapshot.set_color(Color::rgb(0xaa, 0xaa, 0xaa));
    log::info!(
        "snapshot recolored to {:?}; live scene still {:?}",
        snapshot.normalized_color(),
        scene.get("hull")?.normalized_color()
    );

    let removed = scene.remove("mast").context("detaching mast")?;
    log::info!("detached mast at {:?}, {} children left", removed.center(), scene.len());
    log::debug!("final scene:\n{scene}");
    Ok(())
}

fn build_scene() -> glshapes::Result<Group> {
    let scene = Group::new();

    let mut hull = BoxShape::with_center(120.0, 40.0, Vec2::new(0.0, 40.0));
    hull.set_color(Color::rgb(0xc0, 0x40, 0x20));
    hull.set_texture(Texture::from_flat(
        TextureHandle(1),
        &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    ))?;
    scene.insert("hull", hull)?;

    let mut mast = Segment::new(0.0, 20.0, 0.0, -80.0);
    mast.set_color(Color::BLACK);
    scene.insert("mast", mast)?;

    let flag = Group::new();
    flag.append(BoxShape::with_center(30.0, 20.0, Vec2::new(15.0, -70.0)));
    flag.append(Segment::new(0.0, -80.0, 30.0, -80.0));
    flag.set_color(Color::WHITE);
    scene.insert("flag", flag)?;

    log::info!(
        "scene built: {} children, bounds {:?}, center {:?}",
        scene.len(),
        scene.bounds(),
        scene.center()
    );
    Ok(scene)
}

fn report(tick: u8, angle: f32, scene: &Group, frame: &DrawList) {
    let strips = frame
        .items()
        .iter()
        .filter(|c| c.primitive == Primitive::TriangleStrip)
        .count();
    let textured = frame.items().iter().filter(|c| c.texture.is_some()).count();
    log::info!(
        "frame {tick}: angle {angle}°, {} draws ({strips} strips, {textured} textured), {} vertices, center {:?}",
        frame.len(),
        frame.vertex_count(),
        scene.center()
    );
    for cmd in frame.items() {
        let u = cmd.uniforms();
        log::trace!(
            "  {:?}: {} bytes of vertices, model translation ({}, {})",
            cmd.primitive,
            cmd.vertex_bytes().len(),
            u.model[12],
            u.model[13]
        );
    }
}
