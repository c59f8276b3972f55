use crate::frame::Frame;
use crate::input::DragState;
use crate::render::{DrawItem, GpuMesh, GpuState, SceneView};
use folio_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Snow field, patrolling car and orbit camera.
pub struct SnowScene {
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    rng: StdRng,
    snow: SnowField,
    patrol: CarPatrol,
    car_mesh: Option<GpuMesh>,
    camera: Camera,
    orbit: OrbitControls,
    pub drag: DragState,
}

impl SnowScene {
    pub fn new(canvas: web::HtmlCanvasElement, mut gpu: Option<GpuState>, viewport: Viewport) -> Self {
        let mut rng = StdRng::from_entropy();
        let snow = SnowField::new(SNOW_COUNT, &mut rng);
        if let Some(g) = &mut gpu {
            g.enable_snow(snow.len());
            g.write_snow(snow.positions());
        }
        let camera = Camera::perspective(Vec3::from(SNOW_CAMERA_EYE), Vec3::ZERO, viewport);
        let orbit = OrbitControls::new(camera.eye, camera.target);
        log::info!("[snow] {} flakes, camera at {:?}", snow.len(), camera.eye);
        Self {
            canvas,
            gpu,
            rng,
            snow,
            patrol: CarPatrol::new(viewport),
            car_mesh: None,
            camera,
            orbit,
            drag: DragState::default(),
        }
    }

    /// Model finished loading: put it on the GPU and start the patrol.
    pub fn install_car(&mut self, mesh: &MeshData) {
        if let Some(g) = &self.gpu {
            self.car_mesh = Some(g.upload_mesh("car", mesh));
        }
        self.patrol.install();
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
        self.patrol.on_resize(viewport);
    }

    pub fn toggle_snow(&mut self) -> bool {
        self.snow.toggle_snowing()
    }

    pub fn orbit_drag(&mut self, dx: f32, dy: f32) {
        let height = self.canvas.client_height() as f32;
        self.orbit.rotate_by_pixels(dx, dy, height);
    }

    pub fn orbit_zoom(&mut self, wheel_delta_y: f32) {
        self.orbit.zoom_by_wheel(wheel_delta_y);
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Frame for SnowScene {
    fn frame(&mut self) {
        self.snow.advance(&mut self.rng);
        // the patrol compares against the eye before this frame's orbit update
        self.patrol.tick(self.camera.eye.z);
        self.orbit.update(&mut self.camera);

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.write_snow(self.snow.positions());
        let mut items = Vec::with_capacity(1);
        if let (Some(mesh), Some(car)) = (&self.car_mesh, self.patrol.object()) {
            items.push(DrawItem {
                mesh,
                model: car.transform.matrix(),
            });
        }
        let view = SceneView {
            camera: &self.camera,
            light_dir: Vec3::from(SNOW_LIGHT_DIR),
            light_intensity: SNOW_LIGHT_INTENSITY,
            ambient: SNOW_AMBIENT,
            snow_size: self.camera.attenuated_point_world_size(SNOW_POINT_SIZE),
            snow_color: SNOW_COLOR,
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = g.render(&view, &items) {
            log::error!("[snow] render error: {:?}", e);
        }
    }
}
