/// Interactive solar-system orrery.
///
/// Wires the body catalog and orbit simulator to the scene: one entity per
/// body, orbit paths as line lists, the sun as the single point light, and
/// an orbiting camera driven by pointer input. All orbital math stays in
/// f64 inside the simulator; positions convert to f32 here, at the scene
/// application step.
use glam::Vec3;
use orrery_core::{Body, BodyCatalog, CatalogError, OrbitSimulator, OrbitState, ScaleProfile};
use orrery_engine::{
    AppConfig, EngineContext, Entity, EntityId, Game, GameEvent, GlowVisual, InfoError,
    InputEvent, InputQueue, Label, Material, PointLight, Rgb, RingVisual, SphereVisual,
};

use crate::textures;

// ── Custom event kinds from the UI ───────────────────────────────────

const CONTROL_SET_SPEED: u32 = 1;
const CONTROL_SET_TIME_SCALE: u32 = 2;
const CONTROL_SHOW_ORBITS: u32 = 3;
const CONTROL_SHOW_LABELS: u32 = 4;
const CONTROL_FOCUS: u32 = 5;
const CONTROL_SET_PROFILE: u32 = 6;
const CONTROL_RESET_VIEW: u32 = 7;

// ── Event kinds to the UI ────────────────────────────────────────────

const EVENT_TIME_INFO: f32 = 1.0;
const EVENT_FOCUS_INFO: f32 = 2.0;

// ── Scene constants ──────────────────────────────────────────────────

/// Sample points per orbit path.
const ORBIT_SAMPLES: usize = 96;
const ORBIT_COLOR: Rgb = Rgb::new(0.45, 0.45, 0.5);
const ORBIT_ALPHA: f32 = 0.4;

const STAR_COUNT: usize = 10_000;
const STAR_SEED: u32 = 2024;

/// Pointer-drag to camera-angle conversion, radians per pixel.
const ROTATE_SENSITIVITY: f32 = 0.005;
/// Multiplicative zoom per wheel unit.
const ZOOM_SENSITIVITY: f32 = 0.001;

const SUN_LIGHT_COLOR: [f32; 3] = [1.0, 0.95, 0.85];
const SUN_LIGHT_INTENSITY: f32 = 2.0;
const AMBIENT: [f32; 3] = [0.08, 0.08, 0.1];

const ATMOSPHERE_RADIUS_FACTOR: f32 = 1.12;
const LABEL_OFFSET_FACTOR: f32 = 1.6;

pub struct Orrery {
    profile: ScaleProfile,
    catalog: BodyCatalog,
    simulator: OrbitSimulator,
    state: OrbitState,

    /// Global simulation speed, clamped to the profile bounds.
    speed: f64,
    /// Extra time multiplier on top of speed.
    time_scale: f64,
    show_orbits: bool,
    focus: Option<Body>,

    body_ids: [Option<EntityId>; Body::COUNT],

    dragging: bool,
    last_pointer: (f32, f32),
}

impl Orrery {
    pub fn new() -> Self {
        Self::with_profile(ScaleProfile::Stylized)
    }

    pub fn with_profile(profile: ScaleProfile) -> Self {
        let catalog = BodyCatalog::new(profile);
        let simulator = OrbitSimulator::new(profile);
        let state = OrbitState::new(&catalog);
        Self {
            profile,
            catalog,
            simulator,
            state,
            speed: 1.0,
            time_scale: 1.0,
            show_orbits: true,
            focus: None,
            body_ids: [None; Body::COUNT],
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    /// Default camera distance: far enough to frame the outermost orbit.
    fn home_distance(&self) -> f32 {
        let outermost = self
            .catalog
            .iter()
            .map(|e| self.simulator.semi_axes(e).0)
            .fold(0.0_f64, f64::max);
        (outermost * 1.5) as f32
    }

    /// Spawn one entity per catalog body into a cleared scene.
    fn build_scene(&mut self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        ctx.lights.clear();

        let scale = self.catalog.scale();

        for entry in self.catalog.iter() {
            let body = entry.body;
            let radius = (scale.size_scale * entry.radius) as f32;
            let position = self
                .simulator
                .frame(&self.catalog, &self.state, body, 0.0, 0.0)
                .position
                .as_vec3();

            // The manifest's fallback colors win; the built-in table only
            // covers bodies the manifest does not name.
            let mut material = if ctx.textures.slot(body.name()).is_some() {
                ctx.textures.material(body.name())
            } else {
                Material::color(textures::fallback_color(body))
            };
            if body.is_central() {
                // The sun is self-lit.
                material = material.with_emissive(3.0);
            }

            let mut entity = Entity::new(ctx.next_id())
                .with_tag(body.name())
                .with_pos(position)
                .with_tilt(entry.axial_tilt.to_radians() as f32)
                .with_sphere(SphereVisual { radius, material })
                .with_label(Label::new(
                    body.label(),
                    radius * LABEL_OFFSET_FACTOR + 2.0,
                ));

            if let Some(ring) = &entry.ring {
                let ring_material = if ctx.textures.slot(ring.texture).is_some() {
                    ctx.textures.material(ring.texture)
                } else {
                    Material::color(textures::ring_fallback_color(ring.texture))
                };
                entity = entity.with_ring(RingVisual {
                    inner_radius: (scale.size_scale * ring.inner_radius) as f32,
                    outer_radius: (scale.size_scale * ring.outer_radius) as f32,
                    material: ring_material.with_opacity(0.8),
                    tilt: ring.tilt.to_radians() as f32,
                });
            }

            if body == Body::Earth {
                entity = entity.with_glow(GlowVisual {
                    radius: radius * ATMOSPHERE_RADIUS_FACTOR,
                    color: textures::ATMOSPHERE_COLOR,
                    intensity: 0.4,
                });
            }

            self.body_ids[body.index()] = Some(entity.id);
            ctx.scene.spawn(entity);
        }

        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            SUN_LIGHT_COLOR,
            SUN_LIGHT_INTENSITY,
            scale.light_range as f32,
        ));
        ctx.lights.set_ambient(AMBIENT[0], AMBIENT[1], AMBIENT[2]);

        let home = self.home_distance();
        ctx.camera.set_max_view(scale.max_view as f32);
        ctx.camera.reset(home);
        ctx.stars
            .generate(STAR_COUNT, home * 2.0, home * 3.0, STAR_SEED);

        log::info!(
            "scene built: {} bodies, profile {}",
            ctx.scene.len(),
            self.profile.name()
        );
    }

    /// Switch scale profile: new catalog, fresh state, rebuilt scene.
    fn set_profile(&mut self, ctx: &mut EngineContext, profile: ScaleProfile) {
        if profile == self.profile {
            return;
        }
        self.profile = profile;
        self.catalog = BodyCatalog::new(profile);
        self.simulator = OrbitSimulator::new(profile);
        self.state = OrbitState::new(&self.catalog);
        self.speed = profile.clamp_speed(self.speed);
        self.focus = None;
        self.build_scene(ctx);
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::Custom { kind, a, .. } => match *kind {
                    CONTROL_SET_SPEED => {
                        self.speed = self.profile.clamp_speed(*a as f64);
                    }
                    CONTROL_SET_TIME_SCALE => {
                        self.time_scale = *a as f64;
                    }
                    CONTROL_SHOW_ORBITS => {
                        self.show_orbits = *a != 0.0;
                    }
                    CONTROL_SHOW_LABELS => {
                        ctx.labels_visible = *a != 0.0;
                    }
                    CONTROL_FOCUS => {
                        let idx = *a as i32;
                        self.focus = Body::ALL.get(idx.max(0) as usize).copied();
                        if idx < 0 || self.focus.is_none() {
                            self.focus = None;
                            ctx.camera.set_focus(Vec3::ZERO);
                        }
                    }
                    CONTROL_SET_PROFILE => {
                        let profile = if *a != 0.0 {
                            ScaleProfile::Realistic
                        } else {
                            ScaleProfile::Stylized
                        };
                        self.set_profile(ctx, profile);
                    }
                    CONTROL_RESET_VIEW => {
                        self.focus = None;
                        let home = self.home_distance();
                        ctx.camera.reset(home);
                    }
                    _ => {}
                },
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = (*x, *y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let dx = *x - self.last_pointer.0;
                        let dy = *y - self.last_pointer.1;
                        self.last_pointer = (*x, *y);
                        ctx.camera
                            .rotate(-dx * ROTATE_SENSITIVITY, dy * ROTATE_SENSITIVITY);
                    }
                }
                InputEvent::PointerUp { .. } => {
                    self.dragging = false;
                }
                InputEvent::Wheel { delta } => {
                    let factor = 1.0 + delta.clamp(-500.0, 500.0) * ZOOM_SENSITIVITY;
                    ctx.camera.zoom(factor);
                }
                _ => {}
            }
        }
    }

    /// Write simulator output into the scene entities.
    fn apply_frames(&mut self, ctx: &mut EngineContext) {
        for body in Body::ALL {
            let frame =
                self.simulator
                    .frame(&self.catalog, &self.state, body, self.speed, self.time_scale);
            if let Some(id) = self.body_ids[body.index()] {
                if let Some(entity) = ctx.scene.get_mut(id) {
                    entity.pos = frame.position.as_vec3();
                    entity.spin += frame.spin_delta as f32;
                }
            }
        }
    }

    fn draw_orbit_paths(&self, ctx: &mut EngineContext) {
        if !self.show_orbits {
            return;
        }
        for entry in self.catalog.iter() {
            if entry.body.is_central() {
                continue;
            }
            let points: Vec<Vec3> = self
                .simulator
                .orbit_path(entry, ORBIT_SAMPLES)
                .into_iter()
                .map(|p| p.as_vec3())
                .collect();
            ctx.paths.add_polyline(&points, ORBIT_COLOR, ORBIT_ALPHA, true);
        }
    }

    fn update_focus(&self, ctx: &mut EngineContext) {
        if let Some(body) = self.focus {
            if let Some(id) = self.body_ids[body.index()] {
                if let Some(entity) = ctx.scene.get(id) {
                    let pos = entity.pos;
                    ctx.camera.set_focus(pos);
                }
            }
        }
    }

    fn emit_events(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: self.speed as f32,
            b: self.time_scale as f32,
            c: if self.show_orbits { 1.0 } else { 0.0 },
        });

        let (idx, dist) = match self.focus {
            Some(body) => {
                let entry = self.catalog.get(body);
                let (semi_major, _) = self.simulator.semi_axes(entry);
                (body.index() as f32, semi_major as f32)
            }
            None => (-1.0, 0.0),
        };
        ctx.emit_event(GameEvent {
            kind: EVENT_FOCUS_INFO,
            a: idx,
            b: dist,
            c: 0.0,
        });
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> AppConfig {
        AppConfig {
            max_instances: 64,
            max_path_vertices: Body::COUNT * ORBIT_SAMPLES * 2,
            max_labels: Body::COUNT,
            max_lights: 4,
            max_stars: STAR_COUNT,
            max_events: 16,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.build_scene(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        self.simulator
            .advance(&self.catalog, &mut self.state, self.speed, self.time_scale);
        self.apply_frames(ctx);
        self.draw_orbit_paths(ctx);
        self.update_focus(ctx);
        self.emit_events(ctx);
    }

    fn body_info(&self, name: &str) -> Result<String, InfoError> {
        let info = self.catalog.info(name).map_err(|e| match e {
            CatalogError::NotFound(n) => InfoError::UnknownBody(n),
        })?;
        Ok(serde_json::to_string(info)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_app() -> (Orrery, EngineContext) {
        let mut app = Orrery::new();
        let mut ctx = EngineContext::new();
        app.init(&mut ctx);
        (app, ctx)
    }

    fn custom(kind: u32, a: f32) -> InputQueue {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom {
            kind,
            a,
            b: 0.0,
            c: 0.0,
        });
        q
    }

    #[test]
    fn init_spawns_every_body() {
        let (app, ctx) = init_app();
        assert_eq!(ctx.scene.len(), Body::COUNT);
        for body in Body::ALL {
            assert!(ctx.scene.find_by_tag(body.name()).is_some(), "{}", body.name());
            assert!(app.body_ids[body.index()].is_some());
        }
        assert_eq!(ctx.lights.count(), 1);
        assert_eq!(ctx.stars.count(), STAR_COUNT);
    }

    #[test]
    fn only_ringed_bodies_get_rings_and_earth_gets_a_glow() {
        let (_, ctx) = init_app();
        for body in Body::ALL {
            let entity = ctx.scene.find_by_tag(body.name()).unwrap();
            let ringed = matches!(body, Body::Saturn | Body::Uranus);
            assert_eq!(entity.ring.is_some(), ringed, "{}", body.name());
            assert_eq!(entity.glow.is_some(), body == Body::Earth);
        }
    }

    #[test]
    fn sun_stays_at_origin_while_planets_move() {
        let (mut app, mut ctx) = init_app();
        let empty = InputQueue::new();
        for _ in 0..120 {
            app.update(&mut ctx, &empty);
        }
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.pos, Vec3::ZERO);
        assert!(sun.spin > 0.0);

        let earth = ctx.scene.find_by_tag("earth").unwrap();
        let start = Vec3::new(62.0, 0.0, 0.0);
        assert!((earth.pos - start).length() > 0.1, "earth never moved");
    }

    #[test]
    fn speed_control_is_clamped_to_profile_bounds() {
        let (mut app, mut ctx) = init_app();
        app.update(&mut ctx, &custom(CONTROL_SET_SPEED, 50.0));
        assert_eq!(app.speed, 20.0);
        app.update(&mut ctx, &custom(CONTROL_SET_SPEED, -10.0));
        assert_eq!(app.speed, -2.0);
    }

    #[test]
    fn negative_speed_reverses_the_orbit() {
        let (mut app, mut ctx) = init_app();
        let empty = InputQueue::new();

        app.update(&mut ctx, &custom(CONTROL_SET_SPEED, 2.0));
        let forward = app.state.angle(Body::Mercury);

        app.update(&mut ctx, &custom(CONTROL_SET_SPEED, -2.0));
        app.update(&mut ctx, &empty);
        // Two backward steps cancel the two forward ones.
        let back = app.state.angle(Body::Mercury);
        assert!(back < forward);
    }

    #[test]
    fn orbit_toggle_controls_path_vertices() {
        let (mut app, mut ctx) = init_app();
        let empty = InputQueue::new();

        ctx.clear_frame_data();
        app.update(&mut ctx, &empty);
        assert!(ctx.paths.vertex_count() > 0);

        ctx.clear_frame_data();
        app.update(&mut ctx, &custom(CONTROL_SHOW_ORBITS, 0.0));
        assert_eq!(ctx.paths.vertex_count(), 0);
    }

    #[test]
    fn profile_switch_rebuilds_the_scene() {
        let (mut app, mut ctx) = init_app();
        let stylized_radius = ctx
            .scene
            .find_by_tag("earth")
            .and_then(|e| e.sphere)
            .map(|s| s.radius)
            .unwrap();

        app.update(&mut ctx, &custom(CONTROL_SET_PROFILE, 1.0));
        assert_eq!(app.profile, ScaleProfile::Realistic);
        assert_eq!(ctx.scene.len(), Body::COUNT);

        let realistic_radius = ctx
            .scene
            .find_by_tag("earth")
            .and_then(|e| e.sphere)
            .map(|s| s.radius)
            .unwrap();
        assert_ne!(stylized_radius, realistic_radius);
        // Speed re-clamped to the wider realistic bounds still holds.
        assert!(app.speed >= -5000.0 && app.speed <= 100_000.0);
    }

    #[test]
    fn focus_follows_the_selected_body() {
        let (mut app, mut ctx) = init_app();
        app.update(&mut ctx, &custom(CONTROL_FOCUS, Body::Mars.index() as f32));
        let mars = ctx.scene.find_by_tag("mars").unwrap().pos;
        assert_eq!(ctx.camera.focus, mars);

        app.update(&mut ctx, &custom(CONTROL_FOCUS, -1.0));
        assert_eq!(ctx.camera.focus, Vec3::ZERO);
    }

    #[test]
    fn manifest_fallback_colors_reach_the_scene() {
        use orrery_engine::{TextureManifest, TextureRegistry};

        let mut app = Orrery::new();
        let mut ctx = EngineContext::new();
        let manifest = TextureManifest::from_json(
            r#"{ "textures": { "earth": { "path": "e.jpg", "fallback": { "r": 0.9, "g": 0.1, "b": 0.2 } } } }"#,
        )
        .unwrap();
        ctx.textures = TextureRegistry::from_manifest(&manifest);
        app.init(&mut ctx);

        // The host manifest's fallback color, not the built-in table's.
        let earth = ctx.scene.find_by_tag("earth").and_then(|e| e.sphere).unwrap();
        assert_eq!(earth.material.color, Rgb::new(0.9, 0.1, 0.2));

        // Bodies the manifest does not name use the built-in table.
        let mars = ctx.scene.find_by_tag("mars").and_then(|e| e.sphere).unwrap();
        assert_eq!(mars.material.color, textures::fallback_color(Body::Mars));
    }

    #[test]
    fn body_info_round_trips_json() {
        let (app, _) = init_app();
        let json = app.body_info("earth").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Earth");
        assert_eq!(value["day_length"], "24 hours");
    }

    #[test]
    fn body_info_rejects_unknown_names() {
        let (app, _) = init_app();
        let err = app.body_info("krypton").unwrap_err();
        assert!(matches!(err, InfoError::UnknownBody(_)));
    }

    #[test]
    fn events_report_speed_and_focus() {
        let (mut app, mut ctx) = init_app();
        ctx.clear_frame_data();
        app.update(&mut ctx, &custom(CONTROL_FOCUS, Body::Earth.index() as f32));

        let time = ctx.events.iter().find(|e| e.kind == EVENT_TIME_INFO).unwrap();
        assert_eq!(time.a, 1.0);

        let focus = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_FOCUS_INFO)
            .unwrap();
        assert_eq!(focus.a, Body::Earth.index() as f32);
        assert_eq!(focus.b, 62.0);
    }

    #[test]
    fn pointer_drag_steers_the_camera() {
        let (mut app, mut ctx) = init_app();
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 100.0, y: 100.0 });
        q.push(InputEvent::PointerMove { x: 160.0, y: 100.0 });
        q.push(InputEvent::PointerUp { x: 160.0, y: 100.0 });
        app.update(&mut ctx, &q);

        ctx.camera.update(1.0);
        assert!(ctx.camera.yaw != 0.0);
    }
}
