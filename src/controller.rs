//! Controller steering the vehicle.
//!
//! The vehicle is driven with the arrow keys. The key state is sampled once per tick, so a key
//! that is pressed and released between two ticks has no effect.

use bevy::prelude::*;

use crate::{domain::Controls, resource::ControlsRes, simulator::Tick};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlsRes>()
            .add_systems(FixedUpdate, control.in_set(Tick::Sample));
    }
}

fn control(keys: Res<ButtonInput<KeyCode>>, mut controls: ResMut<ControlsRes>) {
    controls.0 = Controls {
        accelerate: keys.pressed(KeyCode::ArrowUp),
        brake: keys.pressed(KeyCode::ArrowDown),
        steer_left: keys.pressed(KeyCode::ArrowLeft),
        steer_right: keys.pressed(KeyCode::ArrowRight),
    };
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::idle(&[], Controls::IDLE)]
    #[case::accelerate(&[KeyCode::ArrowUp], Controls::ACCELERATE)]
    #[case::brake(&[KeyCode::ArrowDown], Controls::BRAKE)]
    #[case::accelerate_left(
        &[KeyCode::ArrowUp, KeyCode::ArrowLeft],
        Controls { accelerate: true, steer_left: true, ..Controls::IDLE }
    )]
    #[case::reverse_right(
        &[KeyCode::ArrowDown, KeyCode::ArrowRight],
        Controls { brake: true, steer_right: true, ..Controls::IDLE }
    )]
    #[case::unrelated_key(&[KeyCode::Space], Controls::IDLE)]
    fn test_control(#[case] pressed: &[KeyCode], #[case] expected: Controls) {
        let mut app = App::new();
        let mut keys = ButtonInput::<KeyCode>::default();
        for key in pressed {
            keys.press(*key);
        }
        app.insert_resource(keys).init_resource::<ControlsRes>();

        app.world.run_system_once(control);

        assert_eq!(app.world.resource::<ControlsRes>().0, expected);
    }
}
