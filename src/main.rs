use bevy::{
    prelude::*,
    window::{ExitCondition, WindowResolution},
};

#[cfg(test)]
mod tests;

mod config;
mod controller;
mod domain;
mod lifecycle;
mod render;
mod resource;
mod simulator;
mod visualizer;

fn main() -> Result<(), domain::WorldError> {
    let world = domain::World::open_world()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config::WINDOW_TITLE.into(),
                resolution: WindowResolution::new(
                    config::SCREEN_SIZE.width() as f32,
                    config::SCREEN_SIZE.height() as f32,
                ),
                resizable: false,
                ..default()
            }),
            exit_condition: ExitCondition::OnPrimaryClosed,
            close_when_requested: false,
        }))
        .insert_resource(resource::WorldRes::from(world))
        .add_plugins(lifecycle::Lifecycle)
        .add_plugins(controller::Controller)
        .add_plugins(simulator::Simulator)
        .add_plugins(visualizer::Visualizer)
        .run();

    Ok(())
}
