//=========================================================================
// Globe Viewer
//
// Demo host for the interaction core: a small globe with three
// features, one detail view and two overlay modes.
//
// Controls:
//   double-click  select a feature (opens the volcano detail view)
//   drag          orbit the camera / rotate the detail model
//   wheel         zoom
//   Escape        close the detail view / clear the selection
//   R             reset the camera
//   Space         reset the detail model rotation
//   H             back to the welcome text
//   1, 2          switch overlay mode
//
// No renderer is attached: the info panel text is written to the log.
//
//=========================================================================

use globe_engine::prelude::*;
use log::info;

//=== Overlay Modes =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Overlay {
    Physical,
    Oceans,
}

impl OverlayKey for Overlay {}

//=== LoggedPanel =========================================================

/// Info panel that logs every text change.
#[derive(Default)]
struct LoggedPanel {
    inner: InfoPanel,
}

impl DisplaySurface for LoggedPanel {
    fn show(&mut self, title: &str, body: &str) {
        info!(target: "globe_viewer", "[{}] {}", title, body);
        self.inner.show(title, body);
    }

    fn hide(&mut self) {
        self.inner.hide();
    }

    fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    fn title(&self) -> &str {
        self.inner.title()
    }

    fn body(&self) -> &str {
        self.inner.body()
    }
}

//=== World Setup =========================================================

fn build_world(systems: &mut GlobalSystems<Overlay>, ctx: &mut GlobalContext) {
    ctx.display = Box::new(LoggedPanel::default());
    ctx.stage.set_camera(CameraPose::new(Quat::IDENTITY, 20.0));

    //--- Stage objects ----------------------------------------------------

    let globe = ctx.stage.spawn(StageObject::new("globe"));
    let everest = ctx.stage.spawn(StageObject::new("everest").with_color(Color::rgb(0.6, 0.5, 0.4)));
    let fuji = ctx.stage.spawn(StageObject::new("fuji").with_color(Color::rgb(0.5, 0.5, 0.5)));
    let reef = ctx.stage.spawn(StageObject::new("great_barrier_reef").with_color(Color::rgb(0.1, 0.6, 0.7)));
    let fuji_model = ctx.stage.spawn(StageObject::new("fuji_model").inactive());
    let back_button = ctx.stage.spawn(StageObject::new("back_button").inactive());
    let legend = ctx.stage.spawn(StageObject::new("legend"));
    let currents = ctx.stage.spawn(StageObject::new("ocean_currents").inactive());
    ctx.stage.set_backdrop(Some(Backdrop::new("space")));

    //--- Features ---------------------------------------------------------

    let everest = ctx.features.register(
        Feature::new("Mount Everest", everest)
            .with_text("Highest peak above sea level, 8,849 m.")
            .with_focus(CameraPose::new(Quat::from_rotation_y(-0.6), 12.0)),
    );
    let fuji = ctx.features.register(
        Feature::new("Mount Fuji", fuji)
            .with_text("Active stratovolcano, last erupted in 1707.")
            .with_detail(
                DetailBinding::new(fuji_model, Vec3::splat(3.0))
                    .with_backdrop(Backdrop::new("studio"))
                    .with_rotation_limits(RotationLimits::default().with_pitch(AxisLimit::new(-30.0, 30.0))),
            ),
    );
    let reef = ctx.features.register(
        Feature::new("Great Barrier Reef", reef)
            .with_text("Largest coral reef system, visible from orbit.")
            .with_highlight_color(Color::rgb(1.0, 0.4, 0.6)),
    );

    //--- Systems ----------------------------------------------------------

    systems.detail.set_scene(
        DetailSceneSetup::new(globe)
            .with_ambient_ui([legend])
            .with_back_button(back_button),
    );

    systems.overlays.register_default(
        Overlay::Physical,
        OverlayMode::new("Physical", "Mountains and volcanoes.")
            .with_objects([legend])
            .with_features([everest, fuji]),
    );
    systems.overlays.register_mode(
        Overlay::Oceans,
        OverlayMode::new("Oceans", "Currents and reefs.")
            .with_objects([currents])
            .with_features([reef])
            .with_focus(CameraPose::new(Quat::from_rotation_y(1.2), 15.0))
            .with_default_feature(reef),
    );
    systems.bindings.bind(KeyCode::Digit1, UiCommand::SwitchOverlay(Overlay::Physical));
    systems.bindings.bind(KeyCode::Digit2, UiCommand::SwitchOverlay(Overlay::Oceans));

    systems.set_hit_tester(
        RegionHitTester::new()
            .with_ui_blocker(Rect::new(0.0, 0.0, 1024.0, 48.0))
            .with_world_feature(Rect::new(420.0, 260.0, 60.0, 60.0), everest)
            .with_world_feature(Rect::new(560.0, 300.0, 60.0, 60.0), fuji)
            .with_world_feature(Rect::new(600.0, 480.0, 120.0, 80.0), reef),
    );
}

//=== Entry Point =========================================================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    EngineBuilder::<Overlay>::new()
        .with_title("Globe Viewer")
        .build()
        .init(build_world)
        .run();
}
