// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial navigator walkthrough.
//!
//! Load the countries dataset (or a JSON file given on the command line),
//! drill into it with simulated clicks, pan, zoom and walk back out, printing
//! each frame.
//!
//! Run:
//! - `cargo run -p understory_radial_demos --example navigator_walkthrough`
//! - `RUST_LOG=debug cargo run -p understory_radial_demos --example navigator_walkthrough -- data.json`

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use kurbo::{Point, Size};
use overstory_radial::{MenuAction, Navigator, NavigatorConfig, RenderFrame};
use understory_hierarchy::Hierarchy;

const COUNTRIES: &str = include_str!("../data/countries.json");

fn print_frame(title: &str, frame: &RenderFrame<'_>) {
    println!("== {title}");
    println!("  path:  {}", frame.breadcrumbs.join(" / "));
    println!("  focus: {} (r = {:.1})", frame.focus_label, frame.focus_radius);
    if let Some(contact) = frame.focus_contact {
        println!(
            "  contact: {} {}",
            contact.email.as_deref().unwrap_or("-"),
            contact.phone.as_deref().unwrap_or("-")
        );
    }
    println!("  view:  {}", frame.css_transform);
    if frame.empty {
        println!("  (no one here yet)");
    }
    for child in &frame.children {
        let mark = if child.is_active() { '*' } else { ' ' };
        println!(
            "  {mark} {:<24} at ({:>7.1}, {:>7.1}) r = {:.1}",
            child.name, child.center.x, child.center.y, child.radius
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let hierarchy = match std::env::args().nth(1) {
        Some(path) => Hierarchy::from_json_reader(BufReader::new(File::open(path)?))?,
        None => Hierarchy::from_json_str(COUNTRIES)?,
    };
    for collision in hierarchy.sibling_name_collisions() {
        log::warn!(
            "{} children of {:?} share the name {:?}",
            collision.nodes.len(),
            hierarchy.name(collision.parent),
            collision.name
        );
    }

    let mut nav = Navigator::new(hierarchy, NavigatorConfig::default());
    nav.resize(Size::new(1280.0, 800.0));
    print_frame("start", &nav.frame());

    // Follow the first child with children of its own, two levels deep.
    for _ in 0..2 {
        let next = nav.frame().children.iter().map(|c| c.node).find(|&id| {
            !nav.hierarchy().children(id).is_empty()
        });
        let Some(next) = next else { break };
        let at = nav
            .screen_center(next)
            .ok_or("child has no on-screen position")?;
        nav.pointer_move(at);
        nav.pointer_down(1, at);
        if let Some(event) = nav.pointer_up(at) {
            log::info!("{event:?}");
        }
        print_frame("clicked", &nav.frame());
    }

    // Drag the scene around, then zoom in on a corner.
    nav.pointer_down(1, Point::new(640.0, 400.0));
    nav.pointer_move(Point::new(700.0, 430.0));
    nav.pointer_up(Point::new(700.0, 430.0));
    nav.wheel(Point::new(900.0, 300.0), -240.0);
    print_frame("panned and zoomed", &nav.frame());

    nav.double_click();
    nav.back();
    print_frame("back", &nav.frame());

    nav.home();
    nav.toggle_menu();
    if let Some(intent) = nav.menu_action(MenuAction::Mission) {
        println!("host should navigate: {intent:?}");
    }
    Ok(())
}
