use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::parallax::config::StarfieldConfig;
use crate::registry::AppState;
use crate::registry::assets::{SceneConfigAsset, ShipDefAsset, StarfieldConfigAsset};
use crate::registry::scene::SceneConfig;
use crate::registry::ship::ShipConfig;
use crate::ship::animation;

use super::gate::TransitionGate;
use super::progress::LoadProgress;

/// Share of the progress bar covered by the RON manifest; the textures it
/// names take the rest. Keeps the reported fraction below 1.0 until the
/// texture list is known.
const MANIFEST_SHARE: f32 = 0.1;

/// Handles for assets being loaded.
#[derive(Resource)]
pub struct LoadingAssets {
    ship_def: Handle<ShipDefAsset>,
    scene: Handle<SceneConfigAsset>,
    starfield: Handle<StarfieldConfigAsset>,
    textures: Vec<Handle<Image>>,
    textures_queued: bool,
}

/// Handles kept alive after the loading screen is torn down, so the loaded
/// assets stay resident into gameplay.
#[derive(Resource)]
#[allow(dead_code)] // held only for the reference counts
pub struct SceneHandles {
    ship_def: Handle<ShipDefAsset>,
    scene: Handle<SceneConfigAsset>,
    starfield: Handle<StarfieldConfigAsset>,
    textures: Vec<Handle<Image>>,
}

/// Polled loading-mode status, consumed by the mode controller.
#[derive(Resource, Default)]
pub struct LoadingStatus {
    pub progress: LoadProgress,
    pub gate: TransitionGate,
    play_pressed: bool,
}

impl LoadingStatus {
    /// Loading has finished but the player has not pressed play yet.
    pub fn is_pending(&self) -> bool {
        self.gate.has_fired() && !self.play_pressed
    }

    /// The player has confirmed the transition into gameplay.
    pub fn is_complete(&self) -> bool {
        self.play_pressed
    }

    /// No-op unless the gate has fired and play has not been pressed yet.
    pub fn press_play(&mut self) {
        if self.is_pending() {
            self.play_pressed = true;
        }
    }
}

#[derive(Component)]
pub struct LoadingUi;

#[derive(Component)]
pub struct ProgressBarFill;

#[derive(Component)]
pub struct PlayButton;

const BAR_WIDTH: f32 = 420.0;
const BAR_HEIGHT: f32 = 22.0;

pub(crate) fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let ship_def = asset_server.load::<ShipDefAsset>("data/ship.def.ron");
    let scene = asset_server.load::<SceneConfigAsset>("data/scene.config.ron");
    let starfield = asset_server.load::<StarfieldConfigAsset>("data/starfield.parallax.ron");
    commands.insert_resource(LoadingAssets {
        ship_def,
        scene,
        starfield,
        textures: Vec::new(),
        textures_queued: false,
    });
}

pub(crate) fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            LoadingUi,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("STARDRIFT"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb_u8(20, 5, 35)),
            ));
            parent
                .spawn((
                    Node {
                        width: Val::Px(BAR_WIDTH),
                        height: Val::Px(BAR_HEIGHT),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        ProgressBarFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.35, 0.65, 1.0)),
                    ));
                });
            parent
                .spawn((
                    PlayButton,
                    Button,
                    Visibility::Hidden,
                    Node {
                        width: Val::Px(140.0),
                        height: Val::Px(48.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.16, 0.45, 0.28)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Text::new("PLAY"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

/// Poll the loader once per frame: queue textures as soon as the manifest is
/// readable, feed the monitor, drive the bar fill, and reveal the play
/// button exactly once when the gate fires.
pub(crate) fn monitor_progress(
    asset_server: Res<AssetServer>,
    mut loading: ResMut<LoadingAssets>,
    starfield_assets: Res<Assets<StarfieldConfigAsset>>,
    mut status: ResMut<LoadingStatus>,
    mut bar_query: Query<&mut Node, With<ProgressBarFill>>,
    mut play_query: Query<&mut Visibility, With<PlayButton>>,
) {
    report_load_failures(&asset_server, &loading);

    if !loading.textures_queued
        && let Some(starfield) = starfield_assets.get(&loading.starfield)
    {
        loading.textures = collect_textures(&asset_server, starfield);
        loading.textures_queued = true;
        info!("Manifest loaded, fetching {} textures", loading.textures.len());
    }

    let fraction = status.progress.poll(|| source_fraction(&asset_server, &loading));

    for mut node in &mut bar_query {
        node.width = Val::Percent(fraction * 100.0);
    }

    if status.gate.observe(fraction) {
        for mut visibility in &mut play_query {
            *visibility = Visibility::Visible;
        }
        info!("All assets loaded, waiting for play");
    }
}

pub(crate) fn handle_play_button(
    mut status: ResMut<LoadingStatus>,
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<PlayButton>)>,
) {
    for interaction in &interaction_query {
        if *interaction == Interaction::Pressed && status.is_pending() {
            status.press_play();
            info!("Play pressed");
        }
    }
}

/// Mode controller: leaves the loading screen once the player has confirmed.
pub(crate) fn advance_mode(status: Res<LoadingStatus>, mut next_state: ResMut<NextState<AppState>>) {
    if status.is_complete() {
        next_state.set(AppState::InGame);
    }
}

/// Build the gameplay config resources from the loaded assets and tear the
/// loading screen down. Runs on the Loading → InGame transition, before any
/// OnEnter systems.
pub(crate) fn finish_loading(
    mut commands: Commands,
    loading: Res<LoadingAssets>,
    ship_assets: Res<Assets<ShipDefAsset>>,
    scene_assets: Res<Assets<SceneConfigAsset>>,
    starfield_assets: Res<Assets<StarfieldConfigAsset>>,
    ui_query: Query<Entity, With<LoadingUi>>,
) {
    let ship = ship_assets
        .get(&loading.ship_def)
        .expect("ship def must be loaded before the gate fires");
    let scene = scene_assets
        .get(&loading.scene)
        .expect("scene config must be loaded before the gate fires");
    let starfield = starfield_assets
        .get(&loading.starfield)
        .expect("starfield config must be loaded before the gate fires");

    commands.insert_resource(ShipConfig {
        thrust: ship.thrust,
        turn_rate: ship.turn_rate,
        dampening: ship.dampening,
        bank_seconds: ship.bank_seconds,
    });
    commands.insert_resource(SceneConfig {
        clear_color: scene.clear_color,
        hud_offset: scene.hud_offset,
    });
    commands.insert_resource(StarfieldConfig {
        layers: starfield.layers.clone(),
    });
    let (r, g, b) = scene.clear_color;
    commands.insert_resource(ClearColor(Color::srgb_u8(r, g, b)));

    commands.insert_resource(SceneHandles {
        ship_def: loading.ship_def.clone(),
        scene: loading.scene.clone(),
        starfield: loading.starfield.clone(),
        textures: loading.textures.clone(),
    });

    for entity in &ui_query {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<LoadingAssets>();
    info!("Configs built, entering game");
}

/// Every texture the starfield manifest names, plus the ship filmstrip.
fn collect_textures(
    asset_server: &AssetServer,
    starfield: &StarfieldConfigAsset,
) -> Vec<Handle<Image>> {
    let mut handles = Vec::new();
    for layer in &starfield.layers {
        if let Some(ref tiling) = layer.tiling {
            handles.push(asset_server.load(&tiling.image));
        }
        for sprite in &layer.sprites {
            handles.push(asset_server.load(&sprite.image));
        }
    }
    handles.extend(animation::load_bank_frames(asset_server));
    handles
}

/// Best-effort completion fraction over everything queued so far. Not
/// trusted by the monitor: readings can regress when the texture list is
/// queued mid-load.
fn source_fraction(asset_server: &AssetServer, loading: &LoadingAssets) -> f32 {
    let configs_loaded = [
        matches!(asset_server.load_state(&loading.ship_def), LoadState::Loaded),
        matches!(asset_server.load_state(&loading.scene), LoadState::Loaded),
        matches!(
            asset_server.load_state(&loading.starfield),
            LoadState::Loaded
        ),
    ]
    .into_iter()
    .filter(|loaded| *loaded)
    .count();

    if !loading.textures_queued {
        return MANIFEST_SHARE * configs_loaded as f32 / 3.0;
    }
    if loading.textures.is_empty() {
        return 1.0;
    }

    let loaded = loading
        .textures
        .iter()
        .filter(|handle| matches!(asset_server.load_state(handle.id()), LoadState::Loaded))
        .count();
    if loaded == loading.textures.len() {
        return 1.0;
    }
    MANIFEST_SHARE + (1.0 - MANIFEST_SHARE) * loaded as f32 / loading.textures.len() as f32
}

fn report_load_failures(asset_server: &AssetServer, loading: &LoadingAssets) {
    for handle in &loading.textures {
        if let LoadState::Failed(_) = asset_server.load_state(handle.id()) {
            error!("Failed to load texture: {:?}", handle.path());
        }
    }
    if let LoadState::Failed(_) = asset_server.load_state(&loading.starfield) {
        error!("Failed to load starfield manifest — check data/starfield.parallax.ron");
    }
}
