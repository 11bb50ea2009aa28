//! 2D visualization.
//!
//! Each frame is first recorded into a draw list by the backend-independent renderer. The list is
//! then presented by a pool of mesh and text entities: the n-th shape command is shown by the
//! n-th shape entity, unused entities are hidden, and the pool grows when a frame needs more.

use std::collections::BTreeMap;

use bevy::{
    prelude::*,
    render::{
        mesh::Indices, render_asset::RenderAssetUsages, render_resource::PrimitiveTopology,
    },
    sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle},
};

use crate::{
    config::SCREEN_SIZE,
    domain::{Angle, Position},
    render::{self, palette::Rgba, DrawCommand, FrameContext, Shape},
    resource::{FrameRes, VehicleRes, ViewportRes, WorldRes},
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (build_frame, present_frame).chain())
            .init_resource::<FrameRes>()
            .init_resource::<Scene>();
    }
}

/// Entities and assets presenting the draw list.
#[derive(Resource, Default)]
pub struct Scene {
    shapes: Vec<Entity>,
    texts: Vec<Entity>,
    meshes: BTreeMap<ShapeKey, Handle<Mesh>>,
    materials: BTreeMap<Rgba, Handle<ColorMaterial>>,
}

impl Scene {
    fn mesh(&mut self, shape: &Shape, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.meshes
            .entry(ShapeKey::from(shape))
            .or_insert_with(|| meshes.add(shape_mesh(shape)))
            .clone()
    }

    fn material(
        &mut self,
        color: Rgba,
        materials: &mut Assets<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        self.materials
            .entry(color)
            .or_insert_with(|| materials.add(ColorMaterial::from(to_bevy_color(color))))
            .clone()
    }
}

/// Shapes with identical dimensions share a mesh.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct ShapeKey([u64; 4]);

impl From<&Shape> for ShapeKey {
    fn from(value: &Shape) -> Self {
        match *value {
            Shape::Rectangle {
                x_length,
                y_length,
                corner_radius,
            } => Self([0, x_length.to_bits(), y_length.to_bits(), corner_radius.to_bits()]),
            Shape::Circle { radius } => Self([1, radius.to_bits(), 0, 0]),
        }
    }
}

#[derive(Component)]
struct ShapeNode;

#[derive(Component)]
struct TextNode;

const SEGMENTS_PER_CORNER: usize = 6;
const DEPTH_STEP: f32 = 0.01;

fn set_up(mut commands: Commands, world: Res<WorldRes>, vehicle: Res<VehicleRes>) {
    commands.spawn(Camera2dBundle::default());

    info!(
        world = ?world.bounds(),
        roads = world.roads().len(),
        landmarks = world.landmarks().len(),
        start = ?vehicle.position(),
        "free drive ready"
    );
}

fn build_frame(
    mut frame: ResMut<FrameRes>,
    world: Res<WorldRes>,
    vehicle: Res<VehicleRes>,
    viewport: Res<ViewportRes>,
) {
    let sprite = render::Sprite::car(vehicle.config());

    frame.0.clear();
    render::draw_frame(
        &mut frame.0,
        &FrameContext {
            world: &world,
            vehicle: &vehicle,
            sprite: &sprite,
            viewport_origin: viewport.0,
            screen: SCREEN_SIZE,
        },
    );
}

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
fn present_frame(
    frame: Res<FrameRes>,
    mut scene: ResMut<Scene>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut shapes: Query<
        (
            &mut Transform,
            &mut Mesh2dHandle,
            &mut Handle<ColorMaterial>,
            &mut Visibility,
        ),
        (With<ShapeNode>, Without<TextNode>),
    >,
    mut texts: Query<
        (&mut Transform, &mut Text, &mut Visibility),
        (With<TextNode>, Without<ShapeNode>),
    >,
) {
    let mut shape_count = 0;
    let mut text_count = 0;

    for (depth, command) in frame.0.commands().iter().enumerate() {
        let z = depth as f32 * DEPTH_STEP;

        match command {
            DrawCommand::Shape {
                shape,
                center,
                rotation,
                color,
            } => {
                let mesh = scene.mesh(shape, &mut meshes);
                let material = scene.material(*color, &mut materials);
                let transform = Transform {
                    translation: to_bevy_position(*center, z),
                    rotation: to_bevy_rotation(*rotation),
                    ..default()
                };

                if let Some(&entity) = scene.shapes.get(shape_count) {
                    if let Ok((
                        mut node_transform,
                        mut node_mesh,
                        mut node_material,
                        mut visibility,
                    )) = shapes.get_mut(entity)
                    {
                        *node_transform = transform;
                        if node_mesh.0 != mesh {
                            *node_mesh = Mesh2dHandle(mesh);
                        }
                        if *node_material != material {
                            *node_material = material;
                        }
                        *visibility = Visibility::Visible;
                    }
                } else {
                    let entity = commands
                        .spawn((
                            MaterialMesh2dBundle {
                                mesh: Mesh2dHandle(mesh),
                                material,
                                transform,
                                ..default()
                            },
                            ShapeNode,
                        ))
                        .id();
                    scene.shapes.push(entity);
                }
                shape_count += 1;
            }
            DrawCommand::Text {
                origin,
                text,
                font_size,
                color,
            } => {
                let style = TextStyle {
                    font_size: *font_size as f32,
                    color: to_bevy_color(*color),
                    ..default()
                };
                let transform = Transform::from_translation(to_bevy_position(*origin, z));

                if let Some(&entity) = scene.texts.get(text_count) {
                    if let Ok((mut node_transform, mut node_text, mut visibility)) =
                        texts.get_mut(entity)
                    {
                        *node_transform = transform;
                        if node_text.sections[0].value != *text {
                            node_text.sections[0].value.clone_from(text);
                        }
                        node_text.sections[0].style = style;
                        *visibility = Visibility::Visible;
                    }
                } else {
                    let entity = commands
                        .spawn((
                            Text2dBundle {
                                text: Text::from_section(text.clone(), style),
                                text_anchor: Anchor::TopLeft,
                                transform,
                                ..default()
                            },
                            TextNode,
                        ))
                        .id();
                    scene.texts.push(entity);
                }
                text_count += 1;
            }
        }
    }

    for &entity in &scene.shapes[shape_count..] {
        if let Ok((_, _, _, mut visibility)) = shapes.get_mut(entity) {
            *visibility = Visibility::Hidden;
        }
    }
    for &entity in &scene.texts[text_count..] {
        if let Ok((_, _, mut visibility)) = texts.get_mut(entity) {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Triangle fan over the shape's outline. The outline runs clockwise on screen, which becomes
/// clockwise in Bevy's y-up space too, so the fan is wound backwards to face the camera.
fn shape_mesh(shape: &Shape) -> Mesh {
    let outline = shape.outline(SEGMENTS_PER_CORNER);
    let n = outline.len() as u32;

    let positions = std::iter::once([0.0_f32; 3])
        .chain(outline.iter().map(|p| [p.x() as f32, -p.y() as f32, 0.0]))
        .collect::<Vec<_>>();
    let vertex_count = positions.len();
    let indices = (0..n)
        .flat_map(|i| [0, 1 + (i + 1) % n, 1 + i])
        .collect::<Vec<u32>>();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0_f32, 0.0, 1.0]; vertex_count])
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.0_f32, 0.0]; vertex_count])
    .with_inserted_indices(Indices::U32(indices))
}

fn to_bevy_color(color: Rgba) -> Color {
    Color::rgba_u8(color.r, color.g, color.b, color.a)
}

/// Screen pixels (origin top-left, y down) to Bevy's 2D space (origin at the center, y up).
fn to_bevy_position(position: Position, z: f32) -> Vec3 {
    let (x, y): (f32, f32) = (position - SCREEN_SIZE.center()).into();
    Vec3::new(x, -y, z)
}

fn to_bevy_rotation(heading: Angle) -> Quat {
    Quat::from_rotation_z(-(heading.to_rad() as f32))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::top_left(    Position::new(  0.0,   0.0), Vec3::new(-480.0,  270.0, 0.5) )]
    #[case::center(      Position::new(480.0, 270.0), Vec3::new(   0.0,    0.0, 0.5) )]
    #[case::bottom_right(Position::new(960.0, 540.0), Vec3::new( 480.0, -270.0, 0.5) )]
    fn test_to_bevy_position(#[case] position: Position, #[case] expected: Vec3) {
        assert_eq!(to_bevy_position(position, 0.5), expected);
    }

    #[test]
    fn test_to_bevy_rotation_turns_clockwise() {
        // A heading of 90 degrees points down the screen
        let forward = to_bevy_rotation(Angle::from_deg(90.0)) * Vec3::X;
        assert_abs_diff_eq!(forward.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(forward.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_shape_mesh() {
        let mesh = shape_mesh(&Shape::Rectangle {
            x_length: 4.0,
            y_length: 2.0,
            corner_radius: 0.0,
        });

        assert_eq!(mesh.count_vertices(), 5);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices, &vec![0, 2, 1, 0, 3, 2, 0, 4, 3, 0, 1, 4]);
    }

    #[test]
    fn test_shape_key() {
        let rect = Shape::Rectangle {
            x_length: 2.0,
            y_length: 2.0,
            corner_radius: 1.0,
        };
        let same = Shape::Rectangle {
            x_length: 2.0,
            y_length: 2.0,
            corner_radius: 1.0,
        };
        let circle = Shape::Circle { radius: 1.0 };
        assert_eq!(ShapeKey::from(&rect), ShapeKey::from(&same));
        assert!(ShapeKey::from(&rect) != ShapeKey::from(&circle));
    }
}
