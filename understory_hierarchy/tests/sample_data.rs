// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for loading the bundled countries dataset.

use understory_hierarchy::{FocusPath, Hierarchy};

const COUNTRIES: &str = include_str!("../../demos/data/countries.json");

#[test]
fn loads_the_countries_dataset() {
    let h = Hierarchy::from_json_str(COUNTRIES).unwrap();
    assert_eq!(h.len(), 73);
    assert_eq!(h.name(h.root()), "Countries");

    let countries: Vec<&str> = h.children(h.root()).iter().map(|&c| h.name(c)).collect();
    assert_eq!(countries, ["Kyrgyzstan", "Kazakhstan", "Uzbekistan", "Russia"]);

    let kg = h.find_path(["Kyrgyzstan"]).unwrap();
    assert_eq!(h.weight(kg), 18);
    let russia = h.find_path(["Russia"]).unwrap();
    assert!(h.get(russia).unwrap().is_leaf());
    assert_eq!(h.weight(russia), 1);
}

#[test]
fn placeholder_contacts_are_absent() {
    let h = Hierarchy::from_json_str(COUNTRIES).unwrap();
    let murzaev = h.find_path(["Kyrgyzstan", "Murzaev Erlan"]).unwrap();
    assert!(h.get(murzaev).unwrap().contact().is_none());

    let bolat = h.find_path(["Kazakhstan", "Bolat"]).unwrap();
    let contact = h.get(bolat).unwrap().contact().unwrap();
    assert!(contact.email.is_some());
    assert!(contact.phone.is_none());
}

#[test]
fn near_duplicate_names_do_not_collide() {
    let h = Hierarchy::from_json_str(COUNTRIES).unwrap();
    // "Jusup" and "Jusup Erkin uulu" are distinct labels.
    assert!(h.sibling_name_collisions().is_empty());
    let a = h.find_path(["Kyrgyzstan", "Jusup"]).unwrap();
    let b = h.find_path(["Kyrgyzstan", "Jusup Erkin uulu"]).unwrap();
    assert_ne!(a, b);
}

#[test]
fn drill_down_three_levels_and_back() {
    let h = Hierarchy::from_json_str(COUNTRIES).unwrap();
    let mut focus = FocusPath::new(h.root());
    let kg = h.find_path(["Kyrgyzstan"]).unwrap();
    let azamat = h.find_child(kg, "Azamat").unwrap();
    let aman = h.find_child(azamat, "Aman").unwrap();

    focus.descend(&h, kg).unwrap();
    focus.descend(&h, azamat).unwrap();
    focus.descend(&h, aman).unwrap();
    assert_eq!(
        focus.breadcrumbs(&h),
        ["Countries", "Kyrgyzstan", "Azamat", "Aman"]
    );

    assert_eq!(focus.ascend(), Some(azamat));
    assert_eq!(focus.ascend(), Some(kg));
    assert_eq!(focus.ascend(), Some(h.root()));
    assert_eq!(focus.ascend(), None);
}
