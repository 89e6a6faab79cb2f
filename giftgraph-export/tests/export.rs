use std::fs;
use std::path::Path;

use giftgraph_catalog::*;
use giftgraph_export::*;

fn prop(graph: &mut GiftGraph, id: &str, name: &str, icon: Option<&str>, tags: &str) -> PropId {
    let row = PropRow {
        id: id.to_string(),
        name: None,
        gift_tag_ids: Some(tags.to_string()),
        tag_list: Some(String::new()),
        is_gift: Some("1".to_string()),
        icon_path: icon.map(str::to_string),
        item_type: None,
    };
    graph.add_prop(Prop::from_row(row, name.to_string(), &ClassificationSets::default()))
}

fn npc(graph: &mut GiftGraph, id: &str, name: &str) -> NpcId {
    let row = NpcRow {
        id: id.to_string(),
        name: String::new(),
        birthday: Some("Summer 12".to_string()),
        gift_id: Some(id.to_string()),
        interact: Some("SendGift".to_string()),
    };
    graph.add_npc(Npc::from_row(row, name.to_string()))
}

fn sample_graph() -> GiftGraph {
    let mut graph = GiftGraph::new();
    let apple = prop(&mut graph, "2000", "Apple", Some("Item/Icon/Item_Apple"), "50,1");
    prop(&mut graph, "2004", "Cheese", Some("Item/Icon/Item_Cheese"), "60");
    let rock = prop(&mut graph, "2002", "Rock", Some("Item/Icon/Item_Rock"), "70");
    let gale = npc(&mut graph, "4000", "Gale Mc Gale");
    graph.connect(gale, rock, GiftLevel::Hate, Favor(-5));
    graph.connect(gale, apple, GiftLevel::Love, Favor(12));
    graph
}

fn image_dir(root: &Path) -> std::path::PathBuf {
    let images = root.join("images");
    fs::create_dir_all(&images).unwrap();
    for name in [
        "Item_Default-CAB-0001.png",
        "Item_Apple-CAB-77aa.png",
        "Item_Cheese-CAB-01.png",
    ] {
        fs::write(images.join(name), name.as_bytes()).unwrap();
    }
    images
}

fn options(root: &Path, images: &Path) -> ExportOptions {
    ExportOptions {
        output_dir: root.join("out"),
        images_dir: images.to_path_buf(),
        image_output_dir: root.join("out/images/items"),
        default_icon: "Item_Default".to_string(),
        metadata: Metadata {
            game_version: "1.0.4".to_string(),
            platform: "PC".to_string(),
            dump_date: "2026-01-15".to_string(),
        },
        dry_run: false,
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_documents_and_copies_gifted_icons() {
    let dir = tempfile::tempdir().unwrap();
    let images = image_dir(dir.path());
    let opts = options(dir.path(), &images);

    let summary = export(&sample_graph(), &opts).unwrap();
    assert_eq!(summary.props, 3);
    assert_eq!(summary.npcs, 1);
    assert_eq!(summary.gifts, 2);
    assert_eq!(summary.documents.len(), 4);
    assert_eq!(summary.images_planned, 2);
    assert_eq!(summary.images_copied, 2);
    assert_eq!(summary.icon_fallbacks, 1);
    assert!(summary.copy_failures.is_empty());

    let out = dir.path().join("out");
    let props = read_json(&out.join("props.json"));
    assert_eq!(props[0]["id"], "2000");
    assert_eq!(props[0]["icon_name"], "2000_apple");
    assert_eq!(props[0]["type"], "OTHER");
    assert_eq!(props[0]["universality"], "LOVE");

    let npcs = read_json(&out.join("npcs.json"));
    assert_eq!(npcs[0]["icon"], "gale-mc-gale");
    assert_eq!(npcs[0]["birthday"], "Summer 12");

    // Love is listed before Hate regardless of insertion order.
    let gifts = read_json(&out.join("gifts.json"));
    assert_eq!(gifts[0]["npc"], "4000");
    assert_eq!(gifts[0]["npc_name"], "Gale Mc Gale");
    assert_eq!(gifts[0]["prop_name"], "Apple");
    assert_eq!(gifts[0]["prop_icon"], "2000_apple");
    assert_eq!(gifts[0]["gift_level"], "LOVE");
    assert_eq!(gifts[0]["favor"], "+12");
    assert_eq!(gifts[1]["gift_level"], "HATE");
    assert_eq!(gifts[1]["favor"], "-5");

    let metadata = read_json(&out.join("metadata.json"));
    assert_eq!(metadata["platform"], "PC");

    let items = out.join("images/items");
    assert_eq!(
        fs::read_to_string(items.join("2000_apple.png")).unwrap(),
        "Item_Apple-CAB-77aa.png"
    );
    // Rock has no image of its own and gets the default icon.
    assert_eq!(
        fs::read_to_string(items.join("2002_rock.png")).unwrap(),
        "Item_Default-CAB-0001.png"
    );
    // Cheese has no gifts, so its icon is not exported.
    assert!(!items.join("2004_cheese.png").exists());
    assert!(!out.join("props.json.tmp").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let images = image_dir(dir.path());
    let mut opts = options(dir.path(), &images);
    opts.dry_run = true;

    let summary = export(&sample_graph(), &opts).unwrap();
    assert_eq!(summary.gifts, 2);
    assert_eq!(summary.images_planned, 2);
    assert_eq!(summary.images_copied, 0);
    assert!(summary.documents.is_empty());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn missing_default_icon_is_fatal_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let images = image_dir(dir.path());
    let mut opts = options(dir.path(), &images);
    opts.default_icon = "Item/Icon/Item_Nothing".to_string();

    let err = export(&sample_graph(), &opts).unwrap_err();
    match err {
        ExportError::DefaultIconMissing { pattern } => assert_eq!(pattern, "Item_Nothing-CAB"),
        other => panic!("expected DefaultIconMissing, got {other:?}"),
    }
    assert!(!dir.path().join("out").exists());
}

#[test]
fn missing_images_dir_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path(), &dir.path().join("nope"));
    assert!(matches!(
        export(&sample_graph(), &opts),
        Err(ExportError::ImagesDirNotFound(_))
    ));
}

#[test]
fn copy_failures_are_tallied_and_the_rest_continue() {
    let dir = tempfile::tempdir().unwrap();
    let images = image_dir(dir.path());
    let dest = dir.path().join("dest");
    let plan = vec![
        ImageCopy {
            prop_id: "1".to_string(),
            source: "gone.png".to_string(),
            dest: "1_gone.png".to_string(),
            fallback: false,
            ambiguous: false,
        },
        ImageCopy {
            prop_id: "2000".to_string(),
            source: "Item_Apple-CAB-77aa.png".to_string(),
            dest: "2000_apple.png".to_string(),
            fallback: false,
            ambiguous: false,
        },
    ];

    let (copied, failures) = copy_images(&plan, &images, &dest);
    assert_eq!(copied, 1);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].prop_id, "1");
    assert!(dest.join("2000_apple.png").exists());
}

#[test]
fn image_index_skips_directories() {
    let dir = tempfile::tempdir().unwrap();
    let images = image_dir(dir.path());
    fs::create_dir(images.join("Item_Folder-CAB-9")).unwrap();

    let index = ImageIndex::from_dir(&images).unwrap();
    assert_eq!(index.len(), 3);
    assert!(index.matches("Item_Folder").is_empty());
}
