use crate::config::ResolverConfig;
use crate::error::{Result, SequenceError};
use crate::range::SequenceRange;
use crate::template::SequenceTemplate;
use std::path::{Path, PathBuf};

/// Resolves sequence templates against the file system
#[derive(Debug, Clone, Default)]
pub struct SequenceResolver {
    config: ResolverConfig,
}

impl SequenceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `path` into its hashed form and on-disk frame range.
    ///
    /// Paths without a `%0Nd` placeholder are treated as stills and returned
    /// as `1-1 x1` without touching the disk. Entries whose names are not
    /// valid UTF-8 are never listed by `glob`, so strict mode does not see them.
    pub fn resolve(&self, path: &str) -> Result<SequenceRange> {
        let template = SequenceTemplate::parse(path)?;
        self.resolve_template(&template)
    }

    pub fn resolve_template(&self, template: &SequenceTemplate) -> Result<SequenceRange> {
        let Some(pattern) = template.glob_pattern() else {
            return Ok(SequenceRange::single(template.path()));
        };

        let matches = glob::glob(&pattern)?
            .collect::<std::result::Result<Vec<PathBuf>, _>>()?;
        if matches.is_empty() {
            return Err(SequenceError::SequenceFileNotFound(
                template.path().to_string(),
            ));
        }

        let mut frames = self.collect_frames(template, &matches)?;
        if frames.is_empty() {
            return Err(SequenceError::SequenceFileNotFound(
                template.path().to_string(),
            ));
        }
        frames.sort_unstable();

        let step = infer_step(&frames).map_err(|steps| SequenceError::InconsistentFrameStep {
            path: template.path().to_string(),
            steps,
        })?;

        let (Some(&start), Some(&end)) = (frames.first(), frames.last()) else {
            return Err(SequenceError::SequenceFileNotFound(
                template.path().to_string(),
            ));
        };

        log::debug!(
            "Resolved {} to {} frames ({}-{} x{})",
            template.path(),
            frames.len(),
            start,
            end,
            step
        );

        Ok(SequenceRange {
            hashed_path: template.hashed_path(),
            start,
            end,
            step,
        })
    }

    fn collect_frames(
        &self,
        template: &SequenceTemplate,
        matches: &[PathBuf],
    ) -> Result<Vec<i64>> {
        let mut frames = Vec::with_capacity(matches.len());
        for path in matches {
            let reason = match frame_number(template, path) {
                FrameName::Frame(frame) => {
                    frames.push(frame);
                    continue;
                }
                FrameName::Foreign => "does not carry a frame number at the placeholder position",
                FrameName::Overflow => "carries a frame number too large for a 64-bit integer",
            };
            if self.config.strict_frame_names {
                return Err(SequenceError::unsupported(
                    template.path(),
                    format!("{} {reason}", path.display()),
                ));
            }
            log::warn!("Skipping {} ({reason})", path.display());
        }
        Ok(frames)
    }
}

/// Resolve with the default (strict) configuration
pub fn resolve(path: &str) -> Result<SequenceRange> {
    SequenceResolver::default().resolve(path)
}

/// Fail with `SequenceFileNotFound` unless `path` exists on disk
pub fn ensure_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    Err(SequenceError::SequenceFileNotFound(
        path.display().to_string(),
    ))
}

enum FrameName {
    Frame(i64),
    Foreign,
    Overflow,
}

fn frame_number(template: &SequenceTemplate, path: &Path) -> FrameName {
    let Some(text) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| template.frame_from_file_name(name))
    else {
        return FrameName::Foreign;
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return FrameName::Foreign;
    }
    match text.parse() {
        Ok(frame) => FrameName::Frame(frame),
        Err(_) => FrameName::Overflow,
    }
}

/// Single non-zero gap between sorted frames, or every distinct gap when
/// more than one occurs. Repeated frame numbers are zero-width gaps and do
/// not count as a step.
fn infer_step(frames: &[i64]) -> std::result::Result<i64, Vec<i64>> {
    let mut steps: Vec<i64> = frames
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|gap| *gap != 0)
        .collect();
    steps.sort_unstable();
    steps.dedup();

    match steps.as_slice() {
        [] => Ok(1),
        [step] => Ok(*step),
        _ => Err(steps),
    }
}

#[cfg(test)]
mod tests {
    use super::{infer_step, SequenceResolver};
    use crate::{ResolverConfig, SequenceError, SequenceRange};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn touch_frames(dir: &Path, frames: impl IntoIterator<Item = u32>) {
        for frame in frames {
            fs::write(dir.join(format!("a.{frame:04}.exr")), b"").unwrap();
        }
    }

    fn template_in(dir: &Path) -> String {
        dir.join("a.%04d.exr").to_string_lossy().into_owned()
    }

    #[test]
    fn step_inference() {
        assert_eq!(infer_step(&[7]), Ok(1));
        assert_eq!(infer_step(&[1, 2, 3]), Ok(1));
        assert_eq!(infer_step(&[2, 4, 6]), Ok(2));
        assert_eq!(infer_step(&[3, 3, 4, 5]), Ok(1));
        assert_eq!(infer_step(&[5, 5]), Ok(1));
        assert_eq!(infer_step(&[1, 2, 4, 5]), Err(vec![1, 2]));
    }

    #[test]
    fn still_path_skips_disk() {
        let resolver = SequenceResolver::new();
        let range = resolver.resolve("/does/not/exist/plate.exr").unwrap();
        assert_eq!(range, SequenceRange::single("/does/not/exist/plate.exr"));
    }

    #[test]
    fn contiguous_sequence() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), 1..=10);

        let range = SequenceResolver::new()
            .resolve(&template_in(temp.path()))
            .unwrap();
        assert_eq!(
            range.hashed_path,
            temp.path().join("a.####.exr").to_string_lossy()
        );
        assert_eq!((range.start, range.end, range.step), (1, 10, 1));
    }

    #[test]
    fn missing_frame_is_inconsistent() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), (1..=10).filter(|f| *f != 5));

        let err = SequenceResolver::new()
            .resolve(&template_in(temp.path()))
            .unwrap_err();
        match err {
            SequenceError::InconsistentFrameStep { steps, .. } => assert_eq!(steps, vec![1, 2]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn uniform_step_two() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), [2, 4, 6]);

        let range = SequenceResolver::new()
            .resolve(&template_in(temp.path()))
            .unwrap();
        assert_eq!((range.start, range.end, range.step), (2, 6, 2));
    }

    #[test]
    fn empty_directory_is_not_found() {
        let temp = tempdir().unwrap();
        let err = SequenceResolver::new()
            .resolve(&template_in(temp.path()))
            .unwrap_err();
        assert!(matches!(err, SequenceError::SequenceFileNotFound(_)));
        assert_eq!(err.code(), "sequence_not_found");
    }

    #[test]
    fn single_frame_defaults_step() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), [7]);

        let range = SequenceResolver::new()
            .resolve(&template_in(temp.path()))
            .unwrap();
        assert_eq!((range.start, range.end, range.step), (7, 7, 1));
    }

    #[test]
    fn duplicate_frame_numbers_do_not_break_the_step() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), [1, 2, 3]);
        fs::write(temp.path().join("a.02.exr"), b"").unwrap();

        let range = SequenceResolver::new()
            .resolve(&template_in(temp.path()))
            .unwrap();
        assert_eq!((range.start, range.end, range.step), (1, 3, 1));
    }

    #[test]
    fn foreign_file_strict_vs_lenient() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), 1..=3);
        fs::write(temp.path().join("a.0002_v2.exr"), b"").unwrap();
        let template = template_in(temp.path());

        let err = SequenceResolver::new().resolve(&template).unwrap_err();
        assert!(matches!(err, SequenceError::UnsupportedInput { .. }));

        let range = SequenceResolver::with_config(ResolverConfig::lenient())
            .resolve(&template)
            .unwrap();
        assert_eq!((range.start, range.end, range.step), (1, 3, 1));
    }

    #[test]
    fn oversized_frame_number_strict_vs_lenient() {
        let temp = tempdir().unwrap();
        touch_frames(temp.path(), [1]);
        fs::write(temp.path().join("a.99999999999999999999.exr"), b"").unwrap();
        let template = template_in(temp.path());

        let err = SequenceResolver::new().resolve(&template).unwrap_err();
        assert!(matches!(err, SequenceError::UnsupportedInput { .. }));
        assert!(err.to_string().contains("too large"), "{err}");

        let range = SequenceResolver::with_config(ResolverConfig::lenient())
            .resolve(&template)
            .unwrap();
        assert_eq!((range.start, range.end, range.step), (1, 1, 1));
    }

    #[test]
    fn lenient_mode_with_only_foreign_files_is_not_found() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.latest.exr"), b"").unwrap();

        let err = SequenceResolver::with_config(ResolverConfig::lenient())
            .resolve(&template_in(temp.path()))
            .unwrap_err();
        assert!(matches!(err, SequenceError::SequenceFileNotFound(_)));
    }
}
