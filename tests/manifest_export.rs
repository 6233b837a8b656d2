use oculyte::{
    CollectionInfo, Eyeball, EyeballSpec, POWERS_PLACEHOLDER, TraitManifest, export_collection,
};

#[test]
fn manifest_always_has_the_six_slots_in_order() {
    for seed in 0..200 {
        let m = TraitManifest::describe(&EyeballSpec::generate(seed));
        let names: Vec<&str> = m.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Portal Frame",
                "Sclera Essence",
                "Iris Constellation",
                "Pupil Gate",
                "Arcane Powers",
                "Essence",
            ],
            "seed {seed}"
        );
    }
}

#[test]
fn every_value_is_label_plus_parenthesized_score() {
    for seed in [0u32, 3, 77, 1234] {
        let m = TraitManifest::describe(&EyeballSpec::generate(seed));
        for e in m.entries() {
            let open = e.value.rfind('(').unwrap_or_else(|| {
                panic!("seed {seed} {}: no score in {:?}", e.name, e.value)
            });
            assert!(e.value.ends_with(')'));
            let score: f64 = e.value[open + 1..e.value.len() - 1].parse().unwrap();
            assert!(score >= 0.0);
        }
    }
}

#[test]
fn powers_placeholder_is_exact_when_no_flags_are_set() {
    let spec = (0..10_000)
        .map(EyeballSpec::generate)
        .find(|s| s.active_effects() == 0)
        .expect("some seed has no active effects");
    let m = TraitManifest::describe(&spec);
    assert_eq!(m.get("Arcane Powers"), Some(POWERS_PLACEHOLDER));
    assert_eq!(POWERS_PLACEHOLDER, "Pure Essence (1.0)");
}

#[test]
fn powers_value_joins_every_active_flag() {
    let spec = (0..10_000)
        .map(EyeballSpec::generate)
        .find(|s| s.active_effects() >= 3)
        .expect("some seed has three or more effects");
    let m = TraitManifest::describe(&spec);
    let value = m.get("Arcane Powers").unwrap();
    assert_eq!(value.matches(" + ").count(), spec.active_effects() - 1);
}

#[test]
fn collection_export_has_the_marketplace_shape() {
    let items: Vec<(u32, TraitManifest)> = (1u32..=3)
        .map(|s| {
            let e = Eyeball::new(s, 300, 300).unwrap();
            (s, e.traits().clone())
        })
        .collect();
    let info = CollectionInfo {
        collection: "Oculyte Test".to_string(),
        description: "test run".to_string(),
        external_url: "https://example.test".to_string(),
        image_base: "images/".to_string(),
    };
    let json = export_collection(&items, &info).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    for (i, entry) in arr.iter().enumerate() {
        assert_eq!(entry["collection"], "Oculyte Test");
        assert_eq!(entry["edition"], (i + 1) as u64);
        assert_eq!(entry["total_supply"], 3);
        assert_eq!(entry["seed"], (i + 1) as u64);
        let attrs = entry["attributes"].as_array().unwrap();
        assert_eq!(attrs.len(), 6);
        for a in attrs {
            assert!(a["trait_type"].is_string());
            assert!(a["value"].is_string());
        }
    }
}
