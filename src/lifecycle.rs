//! Lifecycle of the main loop.
//!
//! The loop runs until the window is asked to close. The request does not close the window
//! directly; it moves the loop to `Terminated`, which stops the simulation and exits the app.

use bevy::{app::AppExit, prelude::*, window::WindowCloseRequested};

#[derive(States, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

pub struct Lifecycle;

impl Plugin for Lifecycle {
    fn build(&self, app: &mut App) {
        app.init_state::<LoopState>()
            .add_systems(
                Update,
                handle_close_request.run_if(in_state(LoopState::Running)),
            )
            .add_systems(OnEnter(LoopState::Terminated), exit);
    }
}

fn handle_close_request(
    mut requests: EventReader<WindowCloseRequested>,
    mut next_state: ResMut<NextState<LoopState>>,
) {
    if requests.read().count() > 0 {
        info!("window close requested");
        next_state.set(LoopState::Terminated);
    }
}

fn exit(mut app_exit: EventWriter<AppExit>) {
    info!("shutting down");
    app_exit.send(AppExit);
}
