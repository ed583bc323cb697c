use serde::{Deserialize, Serialize};

/// Host camera handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    /// Camera playing back an image sequence
    Sequence,
    /// Reference-frame camera (stills)
    RefFrame,
}

/// Camera operations the import needs from the host application
pub trait CameraScene {
    fn camera_count(&self) -> usize;

    /// Selected cameras, in host order
    fn selected_cameras(&self) -> Vec<CameraId>;

    fn camera_kind(&self, id: CameraId) -> Option<CameraKind>;

    fn camera_name(&self, id: CameraId) -> Option<String>;

    fn find_camera_by_name(&self, name: &str) -> Option<CameraId>;

    fn set_camera_name(&mut self, id: CameraId, name: &str);

    fn set_sequence_attr(&mut self, id: CameraId, start: i64, end: i64, step: i64);

    fn set_frame_offset(&mut self, id: CameraId, offset: i64);

    fn set_frame_range_calculation(&mut self, id: CameraId, enabled: bool);

    fn set_camera_path(&mut self, id: CameraId, path: &str);
}

/// Camera state kept by [`InMemoryScene`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryCamera {
    pub id: CameraId,
    pub name: String,
    pub kind: CameraKind,
    pub selected: bool,
    pub path: Option<String>,
    pub sequence: Option<(i64, i64, i64)>,
    pub frame_offset: Option<i64>,
    pub frame_range_calculation: bool,
}

/// Scene kept in memory, for offline runs and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    cameras: Vec<InMemoryCamera>,
    next_id: u64,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_camera(&mut self, name: &str, kind: CameraKind, selected: bool) -> CameraId {
        self.next_id += 1;
        let id = CameraId(self.next_id);
        self.cameras.push(InMemoryCamera {
            id,
            name: name.to_string(),
            kind,
            selected,
            path: None,
            sequence: None,
            frame_offset: None,
            frame_range_calculation: false,
        });
        id
    }

    pub fn camera(&self, id: CameraId) -> Option<&InMemoryCamera> {
        self.cameras.iter().find(|camera| camera.id == id)
    }

    pub fn cameras(&self) -> &[InMemoryCamera] {
        &self.cameras
    }

    fn camera_mut(&mut self, id: CameraId) -> Option<&mut InMemoryCamera> {
        self.cameras.iter_mut().find(|camera| camera.id == id)
    }
}

impl CameraScene for InMemoryScene {
    fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    fn selected_cameras(&self) -> Vec<CameraId> {
        self.cameras
            .iter()
            .filter(|camera| camera.selected)
            .map(|camera| camera.id)
            .collect()
    }

    fn camera_kind(&self, id: CameraId) -> Option<CameraKind> {
        self.camera(id).map(|camera| camera.kind)
    }

    fn camera_name(&self, id: CameraId) -> Option<String> {
        self.camera(id).map(|camera| camera.name.clone())
    }

    fn find_camera_by_name(&self, name: &str) -> Option<CameraId> {
        self.cameras
            .iter()
            .find(|camera| camera.name == name)
            .map(|camera| camera.id)
    }

    fn set_camera_name(&mut self, id: CameraId, name: &str) {
        if let Some(camera) = self.camera_mut(id) {
            camera.name = name.to_string();
        }
    }

    fn set_sequence_attr(&mut self, id: CameraId, start: i64, end: i64, step: i64) {
        if let Some(camera) = self.camera_mut(id) {
            camera.sequence = Some((start, end, step));
        }
    }

    fn set_frame_offset(&mut self, id: CameraId, offset: i64) {
        if let Some(camera) = self.camera_mut(id) {
            camera.frame_offset = Some(offset);
        }
    }

    fn set_frame_range_calculation(&mut self, id: CameraId, enabled: bool) {
        if let Some(camera) = self.camera_mut(id) {
            camera.frame_range_calculation = enabled;
        }
    }

    fn set_camera_path(&mut self, id: CameraId, path: &str) {
        if let Some(camera) = self.camera_mut(id) {
            camera.path = Some(path.to_string());
        }
    }
}
