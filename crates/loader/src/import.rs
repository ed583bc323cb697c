use crate::actions::{ActionRequest, ImportAction};
use crate::config::LoaderConfig;
use crate::error::{LoaderError, Result};
use crate::scene::{CameraId, CameraKind, CameraScene};
use serde::{Deserialize, Serialize};
use tde4_sequence::{ensure_file_exists, SequenceRange, SequenceResolver, SequenceTemplate};

/// Name change and attributes applied to one camera
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraAssignment {
    pub camera: CameraId,
    pub previous_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub range: SequenceRange,
    pub cameras: Vec<CameraAssignment>,
}

/// Runs loader actions against a camera scene for one entity (shot)
pub struct SequenceLoader {
    entity_name: String,
    resolver: SequenceResolver,
    config: LoaderConfig,
}

impl SequenceLoader {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            resolver: SequenceResolver::default(),
            config: LoaderConfig::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: SequenceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Run every request in order, stopping at the first failure
    pub fn execute_multiple_actions<S: CameraScene>(
        &self,
        scene: &mut S,
        requests: &[ActionRequest],
    ) -> Result<Vec<ImportReport>> {
        requests
            .iter()
            .map(|request| self.execute_action(scene, request))
            .collect()
    }

    pub fn execute_action<S: CameraScene>(
        &self,
        scene: &mut S,
        request: &ActionRequest,
    ) -> Result<ImportReport> {
        log::debug!(
            "Execute action {} for publish {:?} with params {}",
            request.name,
            request.publish.id,
            request.params
        );

        match ImportAction::from_name(&request.name) {
            Some(ImportAction::ImportImageSeq) => {
                self.import_image_seq(scene, request.publish.local_path())
            }
            None => Err(LoaderError::UnknownAction(request.name.clone())),
        }
    }

    /// Attach the sequence at `path` to every selected sequence camera
    pub fn import_image_seq<S: CameraScene>(
        &self,
        scene: &mut S,
        path: &str,
    ) -> Result<ImportReport> {
        let template = SequenceTemplate::parse(path)?;
        if !template.is_sequence() {
            ensure_file_exists(template.path())?;
        }
        let range = self.resolver.resolve_template(&template)?;

        if scene.camera_count() == 0 {
            return Err(LoaderError::NoCameras);
        }

        let selected: Vec<CameraId> = scene
            .selected_cameras()
            .into_iter()
            .filter(|id| scene.camera_kind(*id) == Some(CameraKind::Sequence))
            .collect();
        if selected.is_empty() {
            return Err(LoaderError::NoSequenceCamerasSelected);
        }
        log::info!(
            "{} sequence cameras selected, assigning to all",
            selected.len()
        );

        let mut cameras = Vec::with_capacity(selected.len());
        for id in selected {
            let previous_name = scene.camera_name(id).unwrap_or_default();
            let name = if previous_name.starts_with(&self.entity_name) {
                log::info!("'{previous_name}' already has name referring to Shot");
                previous_name.clone()
            } else {
                let name =
                    unique_camera_name(&*scene, &self.entity_name, &self.config.name_separator);
                log::info!("Renaming '{previous_name}' to '{name}'");
                scene.set_camera_name(id, &name);
                name
            };

            scene.set_sequence_attr(id, range.start, range.end, range.step);
            scene.set_frame_offset(id, range.start);
            scene.set_frame_range_calculation(id, self.config.frame_range_calculation);
            scene.set_camera_path(id, &range.hashed_path);

            cameras.push(CameraAssignment {
                camera: id,
                previous_name,
                name,
            });
        }

        Ok(ImportReport { range, cameras })
    }
}

/// First of `base`, `base__01`, `base__02`, ... not used by any camera
pub fn unique_camera_name<S: CameraScene + ?Sized>(
    scene: &S,
    base: &str,
    separator: &str,
) -> String {
    let mut name = base.to_string();
    let mut count = 0u32;
    while scene.find_camera_by_name(&name).is_some() {
        count += 1;
        name = format!("{base}{separator}{count:02}");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::InMemoryScene;
    use pretty_assertions::assert_eq;

    #[test]
    fn unique_names_count_up() {
        let mut scene = InMemoryScene::new();
        assert_eq!(unique_camera_name(&scene, "sh010", "__"), "sh010");

        scene.add_camera("sh010", CameraKind::Sequence, false);
        assert_eq!(unique_camera_name(&scene, "sh010", "__"), "sh010__01");

        scene.add_camera("sh010__01", CameraKind::Sequence, false);
        assert_eq!(unique_camera_name(&scene, "sh010", "__"), "sh010__02");
        assert_eq!(unique_camera_name(&scene, "sh010", "-"), "sh010-01");
    }

    #[test]
    fn still_import_requires_existing_file() {
        let mut scene = InMemoryScene::new();
        scene.add_camera("cam", CameraKind::Sequence, true);

        let err = SequenceLoader::new("sh010")
            .import_image_seq(&mut scene, "/no/such/still.exr")
            .unwrap_err();
        assert_eq!(err.code(), "sequence_not_found");
    }

    #[test]
    fn unknown_action_is_rejected() {
        let mut scene = InMemoryScene::new();
        let request: ActionRequest = serde_json::from_value(serde_json::json!({
            "name": "reference",
            "publish": {"path": {"local_path": "/plates/a.exr"}}
        }))
        .unwrap();

        let err = SequenceLoader::new("sh010")
            .execute_action(&mut scene, &request)
            .unwrap_err();
        assert!(matches!(err, LoaderError::UnknownAction(name) if name == "reference"));
    }
}
