use crate::constants::MAX_FRAME_DT_SEC;
use crate::frame::Frame;
use crate::render::{DrawItem, GpuMesh, GpuState, SceneView};
use folio_core::*;
use glam::Vec3;
use instant::Instant;
use web_sys as web;

/// Three section objects, scroll-linked spins and cursor parallax.
pub struct ShowcaseScene {
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    meshes: Vec<GpuMesh>,
    rotator: ScrollRotator,
    pointer: PointerState,
    viewport: Viewport,
    camera: Camera,
    last_instant: Instant,
}

impl ShowcaseScene {
    pub fn new(canvas: web::HtmlCanvasElement, gpu: Option<GpuState>, viewport: Viewport) -> Self {
        let meshes = match &gpu {
            Some(g) => showcase_meshes()
                .iter()
                .enumerate()
                .map(|(i, m)| g.upload_mesh(&format!("section_{i}"), m))
                .collect(),
            None => Vec::new(),
        };
        let rotator = ScrollRotator::new(viewport);
        let eye = rotator.camera_eye();
        Self {
            canvas,
            gpu,
            meshes,
            rotator,
            pointer: PointerState::default(),
            viewport,
            camera: Camera::perspective(eye, eye - Vec3::Z, viewport),
            last_instant: Instant::now(),
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        if let Some(section) = self.rotator.on_scroll(scroll_y, self.viewport) {
            log::info!("[scroll] section {} entered", section);
        }
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(viewport);
        self.rotator.on_resize(viewport);
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Frame for ShowcaseScene {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.rotator.tick(dt, self.pointer);
        self.camera.eye = self.rotator.camera_eye();
        self.camera.target = self.camera.eye - Vec3::Z;

        let Some(g) = &mut self.gpu else {
            return;
        };
        let items: Vec<DrawItem> = self
            .meshes
            .iter()
            .zip(self.rotator.objects())
            .map(|(mesh, obj)| DrawItem {
                mesh,
                model: obj.transform.matrix(),
            })
            .collect();
        let view = SceneView {
            camera: &self.camera,
            light_dir: Vec3::from(SHOWCASE_LIGHT_DIR),
            light_intensity: SHOWCASE_LIGHT_INTENSITY,
            ambient: SHOWCASE_AMBIENT,
            snow_size: 0.0,
            snow_color: [0.0; 3],
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = g.render(&view, &items) {
            log::error!("[showcase] render error: {:?}", e);
        }
    }
}
