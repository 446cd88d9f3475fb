// galaxy_sim/src/simulation/plugins/panel/mod.rs

//! The egui debug panel. It edits a copy of `GalaxyParameters` and only
//! writes it back when something actually changed, so an idle panel never
//! triggers a regeneration.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy_egui::{
    egui::{self, emath::Numeric},
    EguiContextPass, EguiContexts, EguiPlugin,
};

use crate::prelude::*;
use crate::simulation::config::load_presets_and_apply_cli;
use crate::simulation::plugins::camera::PanelPointerCapture;
use crate::simulation::plugins::points::PointStyle;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Toggled with `H`. A hidden panel never captures the pointer.
    pub visible: bool,
    /// Whether the window starts expanded.
    pub start_open: bool,
    /// Preset last picked from the catalog, if the parameters came from one.
    pub selected_preset: Option<String>,
}

pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        let start_open = app
            .world()
            .get_resource::<GalaxyConfig>()
            .is_some_and(|config| config.window.show_panel);

        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin {
                enable_multipass_for_primary_context: true,
            });
        }

        app.insert_resource(PanelState {
            visible: true,
            start_open,
            selected_preset: None,
        })
        .init_resource::<PanelPointerCapture>()
        .add_systems(
            Startup,
            select_starting_preset.after(load_presets_and_apply_cli),
        )
        .add_systems(
            Update,
            toggle_panel
                .in_set(GalaxySet::Input)
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            EguiContextPass,
            galaxy_panel.run_if(in_state(AppState::Running)),
        );
    }
}

/// Shows the `--preset` the run started from in the preset selector.
fn select_starting_preset(
    cli: Res<Cli>,
    catalog: Res<PresetCatalog>,
    mut state: ResMut<PanelState>,
) {
    state.selected_preset = cli
        .preset
        .clone()
        .filter(|name| catalog.get(name).is_some());
}

fn toggle_panel(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<PanelState>) {
    if keys.just_pressed(KeyCode::KeyH) {
        state.visible = !state.visible;
        debug!("[PANEL] Visible: {}", state.visible);
    }
}

#[allow(clippy::too_many_arguments)]
fn galaxy_panel(
    mut contexts: EguiContexts,
    mut state: ResMut<PanelState>,
    mut params: ResMut<GalaxyParameters>,
    mut style: ResMut<PointStyle>,
    mut capture: ResMut<PanelPointerCapture>,
    catalog: Res<PresetCatalog>,
    buffers: Res<GalaxyBuffers>,
    config: Res<GalaxyConfig>,
    diagnostics: Option<Res<DiagnosticsStore>>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    if !state.visible {
        capture.set_if_neq(PanelPointerCapture(false));
        return;
    }

    let bounds = ParameterBounds::DEFAULT;
    let mut edited = params.clone();
    let mut point_size = style.size;
    let mut preset = state.selected_preset.clone();

    egui::Window::new(config.window.title.as_str())
        .default_open(state.start_open)
        .resizable(false)
        .show(ctx, |ui| {
            // --- 1. Stats ---
            let fps = diagnostics
                .as_ref()
                .and_then(|d| d.get(&FrameTimeDiagnosticsPlugin::FPS))
                .and_then(|fps| fps.smoothed());
            match fps {
                Some(fps) => ui.label(format!("{fps:.0} fps")),
                None => ui.label("-- fps"),
            };
            ui.label(format!("{} particles", buffers.buffer.len()));
            ui.separator();

            // --- 2. Presets ---
            egui::ComboBox::from_label("preset")
                .selected_text(preset.as_deref().unwrap_or("custom"))
                .show_ui(ui, |ui| {
                    for (name, values) in &catalog.0 {
                        let selected = preset.as_deref() == Some(name.as_str());
                        if ui.selectable_label(selected, name.as_str()).clicked() {
                            edited = values.clone();
                            preset = Some(name.clone());
                        }
                    }
                });

            // --- 3. Generator inputs ---
            slider(ui, "seed", &mut edited.seed, bounds.seed);
            slider(ui, "count (log10)", &mut edited.count, bounds.count);
            slider(ui, "radius", &mut edited.radius, bounds.radius);
            slider(ui, "radius power", &mut edited.radius_power, bounds.radius_power);
            slider(ui, "branches", &mut edited.branches, bounds.branches);
            slider(ui, "spin", &mut edited.spin, bounds.spin);
            slider(ui, "spread", &mut edited.spread, bounds.spread);
            slider(ui, "spread power", &mut edited.spread_power, bounds.spread_power);
            slider(ui, "color exp", &mut edited.color_exp, bounds.color_exp);
            color_row(ui, "inside color", &mut edited.inside_color);
            color_row(ui, "outside color", &mut edited.outside_color);

            egui::ComboBox::from_label("rng")
                .selected_text(edited.rng.label())
                .show_ui(ui, |ui| {
                    for algorithm in RngAlgorithm::ALL {
                        ui.selectable_value(&mut edited.rng, algorithm, algorithm.label());
                    }
                });
            ui.separator();

            // --- 4. Material ---
            slider(ui, "point size", &mut point_size, bounds.point_size);

            if ui.button("reset").clicked() {
                edited = config.galaxy.clone();
                point_size = config.render.point_size;
                preset = None;
            }
            ui.label("H hides this panel");
        });

    // Hand-edits after picking a preset make the parameters custom again.
    if let Some(name) = &preset {
        if catalog.get(name) != Some(&edited) {
            preset = None;
        }
    }
    if state.selected_preset != preset {
        state.selected_preset = preset;
    }

    if params.set_if_neq(edited) {
        debug!("[PANEL] Parameters edited, regenerating.");
    }
    if style.size != point_size {
        style.size = point_size;
    }

    let wants_pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    capture.set_if_neq(PanelPointerCapture(wants_pointer));
}

/// Values loaded from files or the command line may sit outside the range;
/// they are only clamped once the user actually drags or types.
fn slider<N: Numeric>(ui: &mut egui::Ui, label: &str, value: &mut N, range: SliderRange) {
    ui.add(
        egui::Slider::new(value, N::from_f64(range.min)..=N::from_f64(range.max))
            .clamping(egui::SliderClamping::Edits)
            .step_by(range.step)
            .text(label),
    );
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut Rgb) {
    ui.horizontal(|ui| {
        let mut bytes = to_srgb_bytes(*color);
        if ui.color_edit_button_srgb(&mut bytes).changed() {
            *color = from_srgb_bytes(bytes);
        }
        ui.label(label);
    });
}

/// The components are stored as the 0..=255 hex bytes scaled down, which is
/// exactly what egui's sRGB picker edits.
fn to_srgb_bytes(color: Rgb) -> [u8; 3] {
    color
        .to_array()
        .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn from_srgb_bytes(bytes: [u8; 3]) -> Rgb {
    let [r, g, b] = bytes.map(|c| c as f32 / 255.0);
    Rgb::new(r, g, b)
}
