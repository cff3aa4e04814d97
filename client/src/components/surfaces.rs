//! Render surfaces for the third-party 3D scene and AR model viewer.
//!
//! DESIGN
//! ======
//! Both viewers are custom elements implemented by external scripts. Panels
//! ask a [`RenderSurfaces`] implementation for markup instead of naming the
//! elements themselves, so the page can be rendered and tested with any
//! stand-in. [`EmbeddedSurfaces`] is the production implementation.

#[cfg(test)]
#[path = "surfaces_test.rs"]
mod surfaces_test;

use std::sync::Arc;

use leptos::prelude::*;

pub const SCENE_URL: &str = "https://prod.spline.design/7m4PRZ7kg6K1jPfF/scene.splinecode";
pub const PLACEHOLDER_MODEL_URL: &str = "https://modelviewer.dev/shared-assets/models/Astronaut.glb";

/// How the model is sized when placed in AR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArScale {
    #[default]
    Fixed,
    Auto,
}

impl ArScale {
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Auto => "auto",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescriptor {
    pub url: String,
}

impl Default for SceneDescriptor {
    fn default() -> Self {
        Self { url: SCENE_URL.to_owned() }
    }
}

/// Everything the AR overlay needs to present one model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelDescriptor {
    pub src: String,
    pub poster: Option<String>,
    pub exposure: f64,
    pub ar_scale: ArScale,
}

impl Default for ModelDescriptor {
    fn default() -> Self {
        Self { src: PLACEHOLDER_MODEL_URL.to_owned(), poster: None, exposure: 1.0, ar_scale: ArScale::Fixed }
    }
}

impl ModelDescriptor {
    /// Model at `url`, or the placeholder model when `url` is missing or blank.
    #[must_use]
    pub fn for_url(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(src) => Self { src: src.to_owned(), ..Self::default() },
            None => Self::default(),
        }
    }
}

/// Produces markup for the external rendering elements.
pub trait RenderSurfaces: Send + Sync {
    fn scene(&self, scene: &SceneDescriptor) -> String;
    fn model(&self, model: &ModelDescriptor) -> String;
}

/// `<spline-viewer>` and `<model-viewer>` custom elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedSurfaces;

impl RenderSurfaces for EmbeddedSurfaces {
    fn scene(&self, scene: &SceneDescriptor) -> String {
        format!(
            r#"<spline-viewer url="{}" style="width:100%;height:100%"></spline-viewer>"#,
            escape_attr(&scene.url)
        )
    }

    fn model(&self, model: &ModelDescriptor) -> String {
        let poster = model
            .poster
            .as_deref()
            .map(|p| format!(r#" poster="{}""#, escape_attr(p)))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<model-viewer src="{src}" ar ar-modes="webxr scene-viewer quick-look" ar-scale="{scale}" "#,
                r#"camera-controls touch-action="pan-y" autoplay exposure="{exposure}" shadow-intensity="0.7" "#,
                r#"environment-image="neutral"{poster} class="ar-overlay__viewer">"#,
                r#"<div slot="poster" class="ar-overlay__poster">Loading AR…</div>"#,
                r#"<button slot="ar-button" class="btn ar-overlay__ar-button">View in AR</button>"#,
                "</model-viewer>"
            ),
            src = escape_attr(&model.src),
            scale = model.ar_scale.as_attr(),
            exposure = model.exposure,
            poster = poster,
        )
    }
}

/// Context handle for the active [`RenderSurfaces`].
#[derive(Clone)]
pub struct Surfaces(Arc<dyn RenderSurfaces>);

impl Surfaces {
    pub fn new(surfaces: impl RenderSurfaces + 'static) -> Self {
        Self(Arc::new(surfaces))
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSurfaces)
    }

    /// The surfaces provided by the app, falling back to the embedded ones.
    #[must_use]
    pub fn from_context() -> Self {
        use_context::<Self>().unwrap_or_else(Self::embedded)
    }

    #[must_use]
    pub fn scene(&self, scene: &SceneDescriptor) -> String {
        self.0.scene(scene)
    }

    #[must_use]
    pub fn model(&self, model: &ModelDescriptor) -> String {
        self.0.model(model)
    }
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
