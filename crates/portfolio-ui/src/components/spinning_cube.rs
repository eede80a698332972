//! Decorative 3D solids
//!
//! CSS-transformed cube faces rotated by a frame loop. The cube is the brand
//! mark (header, footer, home hero); `PreviewSolid` is the per-project
//! turntable shape.

use dioxus::prelude::*;
use portfolio_core::content::PreviewShape;
use portfolio_core::Spin;

use crate::hooks::use_frame_loop;

const FACES: [&str; 6] = ["front", "back", "right", "left", "top", "bottom"];

/// Per-face transform placing a face of a cube with edge `size` px.
pub fn face_transform(face: &str, size: u32) -> String {
    let half = f64::from(size) / 2.0;
    match face {
        "front" => format!("translateZ({half}px)"),
        "back" => format!("rotateY(180deg) translateZ({half}px)"),
        "right" => format!("rotateY(90deg) translateZ({half}px)"),
        "left" => format!("rotateY(-90deg) translateZ({half}px)"),
        "top" => format!("rotateX(90deg) translateZ({half}px)"),
        _ => format!("rotateX(-90deg) translateZ({half}px)"),
    }
}

fn use_spin(initial: fn() -> Spin) -> Signal<Spin> {
    let mut spin = use_signal(initial);
    use_frame_loop(move |dt| spin.write().advance(dt));
    spin
}

/// Continuously tumbling cube, sized in pixels.
#[component]
pub fn SpinningCube(#[props(default = 32)] size: u32) -> Element {
    let spin = use_spin(Spin::mark);
    let transform = spin.read().css_transform();
    let faces = FACES.map(|face| {
        (
            face,
            format!(
                "width: {size}px; height: {size}px; transform: {};",
                face_transform(face, size)
            ),
        )
    });

    rsx! {
        div {
            class: "cube-scene",
            style: "width: {size}px; height: {size}px;",
            "aria-hidden": "true",
            div { class: "cube", style: "transform: {transform};",
                for (face, style) in faces {
                    div { key: "{face}", class: "cube-face cube-{face}", style: "{style}" }
                }
            }
        }
    }
}

/// Project preview shape turning slowly about its vertical axis.
#[component]
pub fn PreviewSolid(shape: PreviewShape) -> Element {
    let spin = use_spin(Spin::turntable);
    let transform = spin.read().css_transform();
    let shape_class = shape.class();

    rsx! {
        div { class: "preview-stage", "aria-hidden": "true",
            div { class: "preview-solid {shape_class}", style: "transform: {transform};" }
        }
    }
}
