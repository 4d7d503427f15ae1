// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial layout as SVG.
//!
//! Lay out one level of the countries dataset and print a standalone SVG
//! document with the focus circle, the children and their bowed connectors.
//!
//! Run:
//! - `cargo run -p understory_radial_demos --example layout_svg > countries.svg`
//! - `cargo run -p understory_radial_demos --example layout_svg -- Kyrgyzstan > kg.svg`

use std::error::Error;
use std::fmt::Write as _;

use kurbo::Size;
use understory_camera::ViewportController;
use understory_hierarchy::Hierarchy;
use understory_radial_layout::LayoutEngine;

const COUNTRIES: &str = include_str!("../data/countries.json");

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let hierarchy = Hierarchy::from_json_str(COUNTRIES)?;
    let names: Vec<String> = std::env::args().skip(1).collect();
    let focus = hierarchy
        .find_path(names.iter().map(String::as_str))
        .ok_or("no such path in the dataset")?;

    let container = Size::new(900.0, 900.0);
    let layout = LayoutEngine::default().compute(&hierarchy, focus, container);
    let mut camera = ViewportController::default();
    camera.reset_to_fit(container, layout.scene_radius);

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        container.width, container.height
    )?;
    writeln!(svg, r#"<g transform="{}">"#, svg_transform(&camera))?;
    for connector in layout.connectors() {
        writeln!(
            svg,
            r##"<path d="{}" fill="none" stroke="#94a3b8" stroke-width="2"/>"##,
            connector.svg_path()
        )?;
    }
    writeln!(
        svg,
        r##"<circle r="{:.2}" fill="#1e3a8a"/><text text-anchor="middle" fill="white">{}</text>"##,
        layout.focus_radius,
        hierarchy.name(focus)
    )?;
    for child in &layout.placements {
        writeln!(
            svg,
            r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="#bfdbfe"/><text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"##,
            child.center.x,
            child.center.y,
            child.radius,
            child.center.x,
            child.center.y,
            hierarchy.name(child.node)
        )?;
    }
    writeln!(svg, "</g>\n</svg>")?;
    print!("{svg}");
    Ok(())
}

fn svg_transform(camera: &ViewportController) -> String {
    let pan = camera.pan();
    format!("translate({} {}) scale({})", pan.x, pan.y, camera.scale())
}
