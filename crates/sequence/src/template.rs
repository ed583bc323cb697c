use crate::error::{Result, SequenceError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::is_separator;

static FRAME_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%0(\d+)d").expect("frame placeholder regex"));

/// Padded frame-number placeholder (`%04d`) found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    token: String,
    offset: usize,
    width: usize,
}

impl FrameSpec {
    /// Placeholder text as written in the template, e.g. `%04d`
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Declared padding width
    pub fn width(&self) -> usize {
        self.width
    }

    fn end(&self) -> usize {
        self.offset + self.token.len()
    }
}

/// A file path that may name an image sequence through a `%0Nd` placeholder.
///
/// Parsing enforces the shapes the resolver can reason about: at most one
/// placeholder, a positive width, and the placeholder inside the file name
/// rather than a directory component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTemplate {
    path: String,
    spec: Option<FrameSpec>,
}

impl SequenceTemplate {
    pub fn parse(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let spec = Self::find_spec(&path)?;
        Ok(Self { path, spec })
    }

    fn find_spec(path: &str) -> Result<Option<FrameSpec>> {
        let mut captures = FRAME_SPEC.captures_iter(path);
        let Some(first) = captures.next() else {
            return Ok(None);
        };
        if captures.next().is_some() {
            return Err(SequenceError::unsupported(
                path,
                "more than one frame placeholder",
            ));
        }

        let Some(whole) = first.get(0) else {
            return Ok(None);
        };
        let digits = &first[1];
        let width: usize = digits.parse().map_err(|_| {
            SequenceError::unsupported(path, format!("placeholder width {digits} is out of range"))
        })?;
        if width == 0 {
            return Err(SequenceError::unsupported(
                path,
                "placeholder width must be positive",
            ));
        }
        if path[whole.end()..].chars().any(is_separator) {
            return Err(SequenceError::unsupported(
                path,
                "frame placeholder must be part of the file name",
            ));
        }

        Ok(Some(FrameSpec {
            token: whole.as_str().to_string(),
            offset: whole.start(),
            width,
        }))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn frame_spec(&self) -> Option<&FrameSpec> {
        self.spec.as_ref()
    }

    pub fn is_sequence(&self) -> bool {
        self.spec.is_some()
    }

    /// Path with the placeholder replaced by one `#` per padded digit
    pub fn hashed_path(&self) -> String {
        match &self.spec {
            Some(spec) => format!(
                "{}{}{}",
                &self.path[..spec.offset],
                "#".repeat(spec.width),
                &self.path[spec.end()..]
            ),
            None => self.path.clone(),
        }
    }

    /// Glob matching every candidate frame file, literal parts escaped
    pub fn glob_pattern(&self) -> Option<String> {
        let spec = self.spec.as_ref()?;
        Some(format!(
            "{}*{}",
            glob::Pattern::escape(&self.path[..spec.offset]),
            glob::Pattern::escape(&self.path[spec.end()..])
        ))
    }

    /// Text that the wildcard consumed in `file_name`, if the name fits the template
    pub fn frame_from_file_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let spec = self.spec.as_ref()?;
        let head = &self.path[..spec.offset];
        let name_start = head.rfind(is_separator).map(|idx| idx + 1).unwrap_or(0);
        let prefix = &head[name_start..];
        let suffix = &self.path[spec.end()..];

        file_name.strip_prefix(prefix)?.strip_suffix(suffix)
    }
}
