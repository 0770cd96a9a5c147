//! DOM-backed surface
//!
//! Each flake is an absolutely-positioned `div` carrying the configured
//! image, moved with CSS transforms. The host region is forced to clip its
//! children so flakes vanish at the edge instead of spilling out.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::surface::{FlakeStyle, SnowError, Surface};

/// A [`Surface`] rendering into an HTML container element.
pub struct DomSurface {
    window: Window,
    document: Document,
    container: Option<HtmlElement>,
}

impl DomSurface {
    /// Fails when no window/document exists (non-browser execution).
    pub fn new() -> Result<Self, SnowError> {
        let window = web_sys::window().ok_or(SnowError::EnvironmentUnavailable)?;
        let document = window.document().ok_or(SnowError::EnvironmentUnavailable)?;
        Ok(Self {
            window,
            document,
            container: None,
        })
    }
}

impl Surface for DomSurface {
    type Node = HtmlElement;

    fn attach(&mut self, selector: &str) -> Result<(), SnowError> {
        let container = self
            .document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| SnowError::RegionNotFound(selector.to_string()))?;

        // Give the region a positioning context if it has none, and clip
        // flakes once they leave its bounds
        let position = self
            .window
            .get_computed_style(&container)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("position").ok())
            .unwrap_or_default();
        if position == "static" {
            set_style(&container, "position", "relative");
        }
        set_style(&container, "overflow", "hidden");

        self.container = Some(container);
        Ok(())
    }

    fn region_size(&self) -> Vec2 {
        match &self.container {
            Some(container) => {
                let rect = container.get_bounding_client_rect();
                Vec2::new(rect.width() as f32, rect.height() as f32)
            }
            None => Vec2::ZERO,
        }
    }

    fn create_node(&mut self, style: &FlakeStyle<'_>) -> HtmlElement {
        let node: HtmlElement = self
            .document
            .create_element("div")
            .expect("failed to create flake element")
            .unchecked_into();

        set_style(&node, "position", "absolute");
        set_style(&node, "left", "0");
        set_style(&node, "top", "0");
        set_style(&node, "width", &format!("{}px", style.size));
        set_style(&node, "height", &format!("{}px", style.size));
        set_style(&node, "background-image", &format!("url({})", style.image_url));
        set_style(&node, "background-size", "contain");
        set_style(&node, "background-repeat", "no-repeat");
        set_style(&node, "opacity", &style.opacity.to_string());
        set_style(&node, "will-change", "transform");

        if let Some(container) = &self.container {
            let _ = container.append_child(&node);
        }
        node
    }

    fn place_node(&mut self, node: &HtmlElement, pos: Vec2, rotation: Option<f32>) {
        let transform = match rotation {
            Some(degrees) => format!(
                "translate3d({}px, {}px, 0) rotate({}deg)",
                pos.x, pos.y, degrees
            ),
            None => format!("translate({}px, {}px)", pos.x, pos.y),
        };
        set_style(node, "transform", &transform);
    }

    fn remove_node(&mut self, node: HtmlElement) {
        node.remove();
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}
