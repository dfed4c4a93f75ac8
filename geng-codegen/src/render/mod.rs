//! Rendering of package artifacts into Go source.
//!
//! A [`Renderer`] is built once, owns its template, and is passed into the
//! generator. Templates implement [`InterfaceTemplate`]; the default one is
//! [`GoInterfaceTemplate`].

mod helpers;
mod template;

pub use helpers::{format_comment, format_imports, format_results};
pub use template::{GoInterfaceTemplate, InterfaceDefinition, InterfaceTemplate};

use crate::{Error, PackageArtifact, Result};

/// Renders artifacts through one template.
pub struct Renderer {
    template: Box<dyn InterfaceTemplate>,
}

impl Renderer {
    /// Renderer using [`GoInterfaceTemplate`].
    pub fn new() -> Self {
        Self::with_template(GoInterfaceTemplate)
    }

    /// Renderer using a custom template.
    pub fn with_template(template: impl InterfaceTemplate + 'static) -> Self {
        Self {
            template: Box::new(template),
        }
    }

    /// Render an artifact to source text.
    pub fn render(&self, artifact: &PackageArtifact) -> Result<String> {
        let mut out = String::new();
        self.template
            .render(&artifact.definition(), &mut out)
            .map_err(|e| Error::template(&artifact.package, e))?;
        Ok(out)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::ErrorKind;

    struct Broken;

    impl InterfaceTemplate for Broken {
        fn render(&self, _: &InterfaceDefinition<'_>, _: &mut dyn fmt::Write) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    struct PackageOnly;

    impl InterfaceTemplate for PackageOnly {
        fn render(&self, def: &InterfaceDefinition<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
            out.write_str(def.package_name)
        }
    }

    fn artifact() -> PackageArtifact {
        PackageArtifact::merge("d", "demo", Vec::new())
    }

    #[test]
    fn test_default_template() {
        let rendered = Renderer::new().render(&artifact()).unwrap();
        assert_eq!(rendered, "package demo\n");
    }

    #[test]
    fn test_custom_template() {
        let renderer = Renderer::with_template(PackageOnly);
        assert_eq!(renderer.render(&artifact()).unwrap(), "demo");
    }

    #[test]
    fn test_template_failure() {
        let renderer = Renderer::with_template(Broken);
        let err = renderer.render(&artifact()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Template);
        assert!(err.to_string().contains("demo"));
    }
}
