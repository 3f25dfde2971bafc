use std::cell::RefCell;
use std::rc::Rc;

use evolved_lib::preset::{
    CURVES_KEY, Preset, PresetStorage, Presets, builtin_curves, find_curve_preset, preset_list,
};
use evolved_lib::storage::{FileBackend, MemoryBackend, StorageBackend};
use evolved_lib::{Curve, Point};

fn steep() -> Curve {
    Curve::new([
        Point::new(0.0, 0.0),
        Point::new(0.1, 0.6),
        Point::new(0.4, 0.9),
        Point::new(1.0, 1.0),
    ])
}

// ============================================================================
// Built-in curves
// ============================================================================

#[test]
fn test_builtin_default_curve() {
    let builtins = builtin_curves();
    let default = &builtins["default"];
    assert_eq!(default.id, "default");
    assert_eq!(default.content.points()[1], Point::new(0.41225165562913907, 0.16428571428571426));
    assert_eq!(default.content.points()[2], Point::new(0.6473509933774835, 0.8928571428571429));
}

#[test]
fn test_find_curve_preset_tolerance() {
    let builtins = builtin_curves();
    let list = preset_list(&builtins);

    let mut nearly = builtins["default"].content;
    nearly.0[1].x += 5e-7;
    let found = find_curve_preset(&nearly, &[&list[..]]).map(|p| p.id.as_str());
    assert_eq!(found, Some("default"));

    let mut off = builtins["default"].content;
    off.0[1].x += 1e-3;
    assert!(find_curve_preset(&off, &[&list[..]]).is_none());
}

#[test]
fn test_find_curve_preset_searches_lists_in_order() {
    let builtins = builtin_curves();
    let builtin_list = preset_list(&builtins);

    let mut user = Presets::new();
    let mine = Preset::with_id("mine", "Mine", builtins["linear"].content);
    user.insert(mine.id.clone(), mine);
    let user_list = preset_list(&user);

    let found = find_curve_preset(&Curve::linear(), &[&user_list[..], &builtin_list[..]]);
    assert_eq!(found.map(|p| p.id.as_str()), Some("mine"));
    let found = find_curve_preset(&Curve::linear(), &[&builtin_list[..], &user_list[..]]);
    assert_eq!(found.map(|p| p.id.as_str()), Some("linear"));
}

// ============================================================================
// Storage
// ============================================================================

#[test]
fn test_load_empty() {
    let storage: PresetStorage<Curve, _> = PresetStorage::load(CURVES_KEY, MemoryBackend::new());
    assert!(storage.presets().is_empty());
}

#[test]
fn test_malformed_json_discarded() {
    let mut backend = MemoryBackend::new();
    backend.set(CURVES_KEY, "{not json").unwrap();
    let storage: PresetStorage<Curve, _> = PresetStorage::load(CURVES_KEY, backend);
    assert!(storage.presets().is_empty());
}

#[test]
fn test_add_persists() {
    let mut storage = PresetStorage::load(CURVES_KEY, MemoryBackend::new());
    let preset = Preset::new("Steep", steep());
    let id = preset.id.clone();
    storage.add(preset).unwrap();

    let raw = storage.backend().get(CURVES_KEY).unwrap().unwrap();
    let stored: Presets<Curve> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[&id].name, "Steep");
    assert_eq!(stored[&id].content, steep());
}

#[test]
fn test_update_and_delete() {
    let mut storage = PresetStorage::load(CURVES_KEY, MemoryBackend::new());
    storage.add(Preset::with_id("a", "First", steep())).unwrap();

    assert!(storage.update("a", |p| p.name = "Renamed".to_string()).unwrap());
    assert!(!storage.update("missing", |_| {}).unwrap());
    assert_eq!(storage.get("a").map(|p| p.name.as_str()), Some("Renamed"));

    assert!(storage.delete("a").unwrap());
    assert!(!storage.delete("a").unwrap());
    assert!(storage.presets().is_empty());
}

#[test]
fn test_subscribe_gets_current_then_changes() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut storage = PresetStorage::load(CURVES_KEY, MemoryBackend::new());
    storage.add(Preset::with_id("a", "First", steep())).unwrap();

    let log = Rc::clone(&seen);
    let id = storage.subscribe(move |presets: &Presets<Curve>| log.borrow_mut().push(presets.len()));
    assert_eq!(*seen.borrow(), [1]);

    storage.add(Preset::with_id("b", "Second", Curve::linear())).unwrap();
    assert_eq!(*seen.borrow(), [1, 2]);

    assert!(storage.unsubscribe(id));
    storage.delete("a").unwrap();
    assert_eq!(*seen.borrow(), [1, 2]);
}

#[test]
fn test_file_storage_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut storage = PresetStorage::load(CURVES_KEY, FileBackend::new(dir.path()));
        storage.add(Preset::with_id("s", "Steep", steep())).unwrap();
    }
    assert!(dir.path().join("evolved_palettes_curves.json").exists());

    let storage: PresetStorage<Curve, _> =
        PresetStorage::load(CURVES_KEY, FileBackend::new(dir.path()));
    assert_eq!(storage.get("s").map(|p| p.content), Some(steep()));
}

#[test]
fn test_list_sorted_by_name() {
    let mut storage = PresetStorage::load(CURVES_KEY, MemoryBackend::new());
    storage.add(Preset::new("Zeta", steep())).unwrap();
    storage.add(Preset::new("Alpha", steep())).unwrap();
    let names: Vec<_> = preset_list(storage.presets())
        .into_iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, ["Alpha", "Zeta"]);
}
