use giftgraph_catalog::*;
use giftgraph_db::fixtures::*;
use giftgraph_db::{SqliteSource, open_memory};
use giftgraph_import::*;

fn npc_row(id: &str, name: &str, gift_id: &str, interact: &str) -> NpcRow {
    NpcRow {
        id: id.to_string(),
        name: name.to_string(),
        birthday: Some("Spring 3".to_string()),
        gift_id: Some(gift_id.to_string()),
        interact: Some(interact.to_string()),
    }
}

fn prop_row(id: &str, name: &str, gift_tags: &str, tag_list: &str, is_gift: &str) -> PropRow {
    PropRow {
        id: id.to_string(),
        name: Some(name.to_string()),
        gift_tag_ids: Some(gift_tags.to_string()),
        tag_list: Some(tag_list.to_string()),
        is_gift: Some(is_gift.to_string()),
        icon_path: Some(format!("Item/Icon/Item_{id}")),
        item_type: Some("Food".to_string()),
    }
}

fn level(tags: &str, favor: &str) -> LevelSpec {
    LevelSpec {
        tag_ids: tags.to_string(),
        favor: favor.to_string(),
    }
}

fn gift_row(
    gift_id: &str,
    love: LevelSpec,
    like: LevelSpec,
    dislike: LevelSpec,
    hate: LevelSpec,
) -> GiftRow {
    GiftRow {
        gift_id: gift_id.to_string(),
        love,
        like,
        dislike,
        hate,
    }
}

fn setup_db() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    for (id, text) in [
        ("900", "Gale"),
        ("901", "Emily"),
        ("902", "Yoyo"),
        ("903", "Ghost"),
        ("910", "Apple"),
        ("911", "Milk"),
        ("912", "Rock"),
        ("913", "Stone Hammer"),
        ("914", "Cheese"),
    ] {
        insert_string(&conn, id, text).unwrap();
    }

    insert_npc(&conn, &npc_row("4000", "900", "1", "Talk,SendGift")).unwrap();
    insert_npc(&conn, &npc_row("4001", "901", "2", "SendGift,Spar")).unwrap();
    insert_npc(&conn, &npc_row("4002", "902", "3", "Talk,SendGift")).unwrap();
    insert_npc(&conn, &npc_row("4003", "903", "4", "Talk")).unwrap();

    insert_prop(&conn, &prop_row("2000", "910", "50,60", "301", "1")).unwrap();
    insert_prop(&conn, &prop_row("2001", "911", "50", "999", "1")).unwrap();
    insert_prop(&conn, &prop_row("2002", "912", "70,4", "", "1")).unwrap();
    insert_prop(&conn, &prop_row("2003", "913", "50", "", "0")).unwrap();
    insert_prop(&conn, &prop_row("2004", "914", "60,1", "302,301", "1")).unwrap();

    insert_cookable_pc(&conn, "2000").unwrap();
    insert_cookable_ack(&conn, "2001").unwrap();
    insert_craftable(&conn, "2001").unwrap();
    insert_relic(&conn, "2002").unwrap();
    insert_craftable(&conn, "2004").unwrap();

    insert_gift(
        &conn,
        &gift_row(
            "1",
            level("50;60", "10|300_10$301_12$302_15"),
            level("", ""),
            level("70", "-5|"),
            level("", ""),
        ),
    )
    .unwrap();
    insert_gift(
        &conn,
        &gift_row(
            "2",
            level("80;60", "20|"),
            level("", ""),
            level("", ""),
            level("50", "-10|301_-20"),
        ),
    )
    .unwrap();
    // Yoyo is excluded, so this malformed spec is never parsed.
    insert_gift(
        &conn,
        &gift_row("3", level("50", "bad"), level("", ""), level("", ""), level("", "")),
    )
    .unwrap();
    insert_gift(
        &conn,
        &gift_row("9", level("50", "1|"), level("", ""), level("", ""), level("", "")),
    )
    .unwrap();
    conn
}

fn run(conn: rusqlite::Connection, options: LoadOptions) -> ExtractionContext {
    let source = SqliteSource::from_connection(conn).unwrap();
    run_pipeline(&source, options, Some(&SilentProgress)).unwrap()
}

fn prop_names(graph: &GiftGraph, gifts: &[&Gift]) -> Vec<String> {
    gifts
        .iter()
        .map(|g| format!("{} {}", graph.prop(g.prop).name, g.favor))
        .collect()
}

#[test]
fn loads_sorted_filtered_entities() {
    let ctx = run(setup_db(), LoadOptions::default());
    let graph = ctx.graph();

    let npcs: Vec<&str> = graph.npcs().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(npcs, vec!["Emily", "Gale"]);

    let props: Vec<&str> = graph.props().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(props, vec!["Apple", "Cheese", "Milk", "Rock"]);

    let types: Vec<PropType> = graph.props().iter().map(|p| p.prop_type).collect();
    assert_eq!(
        types,
        vec![
            PropType::CookablePc,
            PropType::Craftable,
            PropType::CookableAck,
            PropType::Relic,
        ]
    );
    let cheese = graph.prop(graph.find_prop("Cheese").unwrap());
    assert_eq!(cheese.universality, Universality::Love);
    let rock = graph.prop(graph.find_prop("Rock").unwrap());
    assert_eq!(rock.universality, Universality::Hate);

    let stats = ctx.stats();
    assert_eq!(stats.strings, 9);
    assert_eq!(stats.props_loaded, 4);
    assert_eq!(stats.props_not_giftable, 1);
    assert_eq!(stats.npcs_loaded, 2);
    assert_eq!(stats.npcs_excluded, 2);
    assert!(ctx.is_complete());
}

#[test]
fn resolves_favor_through_tag_lists() {
    let ctx = run(setup_db(), LoadOptions::default());
    let graph = ctx.graph();
    let gale = graph.npc(graph.find_npc("Gale").unwrap());

    // Apple (301) and Cheese (302,301) both hit 301_12, declared before
    // 302_15; the tie keeps Apple's insertion order. Milk (999) falls back.
    assert_eq!(
        prop_names(graph, &gale.loves(graph.gifts())),
        vec!["Apple +12", "Cheese +12", "Milk +10"]
    );
    assert_eq!(
        prop_names(graph, &gale.dislikes(graph.gifts())),
        vec!["Rock -5"]
    );
    assert!(gale.likes(graph.gifts()).is_empty());

    let emily = graph.npc(graph.find_npc("Emily").unwrap());
    assert_eq!(
        prop_names(graph, &emily.loves(graph.gifts())),
        vec!["Apple +20", "Cheese +20"]
    );
    assert_eq!(
        prop_names(graph, &emily.hates(graph.gifts())),
        vec!["Milk -10", "Apple -20"]
    );
}

#[test]
fn counts_gaps_and_suppressed_duplicates() {
    let ctx = run(setup_db(), LoadOptions::default());
    let stats = ctx.stats();
    assert_eq!(stats.gifts_created, 8);
    assert_eq!(ctx.graph().gifts().len(), 8);
    assert_eq!(stats.gift_rows_skipped, 2);
    assert_eq!(stats.unknown_gift_tags, 1);
    assert_eq!(stats.duplicate_gifts_suppressed, 1);
}

#[test]
fn keep_policy_reproduces_duplicate_edges() {
    let options = LoadOptions {
        duplicates: DuplicatePolicy::Keep,
        ..LoadOptions::default()
    };
    let ctx = run(setup_db(), options);
    let graph = ctx.graph();
    let gale = graph.npc(graph.find_npc("Gale").unwrap());

    // Apple carries both 50 and 60, so the Love level reaches it twice.
    assert_eq!(
        prop_names(graph, &gale.loves(graph.gifts())),
        vec!["Apple +12", "Apple +12", "Cheese +12", "Milk +10"]
    );
    assert_eq!(ctx.stats().gifts_created, 9);
    assert_eq!(ctx.stats().duplicate_gifts_suppressed, 0);
}

#[test]
fn every_edge_is_registered_on_both_endpoints() {
    let ctx = run(setup_db(), LoadOptions::default());
    let graph = ctx.graph();

    for (i, gift) in graph.gifts().iter().enumerate() {
        let on_npc = graph
            .npc(gift.npc)
            .edges()
            .iter()
            .filter(|id| id.index() == i)
            .count();
        let on_prop = graph
            .prop(gift.prop)
            .edges()
            .iter()
            .filter(|id| id.index() == i)
            .count();
        assert_eq!((on_npc, on_prop), (1, 1));
    }

    let npc_edges: usize = graph.npcs().iter().map(|n| n.edges().len()).sum();
    let prop_edges: usize = graph.props().iter().map(|p| p.edges().len()).sum();
    assert_eq!(npc_edges, graph.gifts().len());
    assert_eq!(prop_edges, graph.gifts().len());
}

#[test]
fn excluded_npcs_never_receive_edges() {
    let ctx = run(setup_db(), LoadOptions::default());
    let graph = ctx.graph();
    let filter = NpcFilter::default();
    for npc in graph.npcs() {
        assert!(filter.is_eligible(&npc.name, npc.interact.as_deref()));
    }
    assert!(graph.find_npc("Yoyo").is_none());
    assert!(graph.find_npc("Ghost").is_none());
}

#[test]
fn custom_exclusions_apply() {
    let options = LoadOptions {
        npc_filter: NpcFilter {
            excluded: vec!["Gale".to_string()],
            marker: "SendGift".to_string(),
        },
        ..LoadOptions::default()
    };
    let conn = setup_db();
    conn.execute("DELETE FROM Gift WHERE Gift_ID = '3'", []).unwrap();
    let ctx = run(conn, options);
    let names: Vec<&str> = ctx.graph().npcs().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Emily", "Yoyo"]);
}

#[test]
fn malformed_favor_spec_aborts() {
    let conn = setup_db();
    conn.execute(
        "UPDATE Gift SET Favor_Like = '7', TagID_Like = '60' WHERE Gift_ID = '1'",
        [],
    )
    .unwrap();
    let source = SqliteSource::from_connection(conn).unwrap();

    match run_pipeline(&source, LoadOptions::default(), Some(&SilentProgress)) {
        Err(LoadError::FavorSpec { gift_id, level, source }) => {
            assert_eq!(gift_id, "1");
            assert_eq!(level, GiftLevel::Like);
            assert_eq!(source, ParseError::MissingSeparator("7".to_string()));
        }
        other => panic!("expected FavorSpec error, got {other:?}"),
    }
}

#[test]
fn unnamed_entities_are_skipped() {
    let conn = setup_db();
    insert_prop(&conn, &prop_row("2010", "999", "50", "", "1")).unwrap();
    insert_npc(&conn, &npc_row("4010", "998", "1", "SendGift")).unwrap();

    let ctx = run(conn, LoadOptions::default());
    assert_eq!(ctx.stats().props_unnamed, 1);
    assert_eq!(ctx.stats().npcs_unnamed, 1);
    assert_eq!(ctx.graph().props().len(), 4);
}

#[test]
fn duplicate_prop_ids_keep_first_row() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    // No primary key so the dump can carry the same id twice.
    conn.execute_batch(
        "CREATE TABLE Translation_hint (ID TEXT, English TEXT);
         CREATE TABLE NpcRepository (Id TEXT, Name TEXT, Birthday TEXT, GiftID TEXT, Interact TEXT);
         CREATE TABLE Props_total_table (Props_Id TEXT, Props_Name TEXT, Gift_TagID TEXT,
             Tag_List TEXT, IsGift TEXT, Icon_Path TEXT, Item_Type TEXT);
         CREATE TABLE Gift (Gift_ID TEXT, TagID_Excellent TEXT, Favor_Excellent TEXT,
             TagID_Like TEXT, Favor_Like TEXT, TagID_Dislike TEXT, Favor_Dislike TEXT,
             TagID_Hate TEXT, Favor_Hate TEXT);
         CREATE TABLE Cook_Book (Food TEXT);
         CREATE TABLE Cook_AckList (Food TEXT);
         CREATE TABLE Repair_table (Item_Id TEXT);
         CREATE TABLE Synthesis_table (Item_Id TEXT);",
    )
    .unwrap();
    insert_string(&conn, "1", "First").unwrap();
    insert_string(&conn, "2", "Second").unwrap();
    insert_prop(&conn, &prop_row("7", "1", "50", "", "1")).unwrap();
    insert_prop(&conn, &prop_row("7", "2", "50", "", "1")).unwrap();

    let ctx = run(conn, LoadOptions::default());
    assert_eq!(ctx.graph().props().len(), 1);
    assert_eq!(ctx.graph().props()[0].name, "First");
    assert_eq!(ctx.stats().props_duplicate, 1);
}

#[test]
fn filtered_rows_may_carry_nulls() {
    let conn = setup_db();
    conn.execute_batch(
        "INSERT INTO NpcRepository (Id, Name, GiftID, Interact) VALUES (4010, '903', NULL, 'Talk');
         INSERT INTO Props_total_table (Props_Id, Props_Name, IsGift) VALUES (2011, NULL, '0');
         INSERT INTO Props_total_table (Props_Id, Props_Name, IsGift) VALUES (2012, '912', NULL);",
    )
    .unwrap();

    let ctx = run(conn, LoadOptions::default());
    assert_eq!(ctx.stats().npcs_excluded, 3);
    assert_eq!(ctx.stats().props_not_giftable, 3);
    assert_eq!(ctx.graph().props().len(), 4);
    assert_eq!(ctx.stats().gifts_created, 8);
}

fn expect_malformed(conn: rusqlite::Connection) -> (&'static str, &'static str, String) {
    let source = SqliteSource::from_connection(conn).unwrap();
    match run_pipeline(&source, LoadOptions::default(), Some(&SilentProgress)) {
        Err(LoadError::MalformedRow { table, column, row }) => (table, column, row),
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn giftable_prop_with_null_tags_aborts() {
    let conn = setup_db();
    conn.execute(
        "INSERT INTO Props_total_table (Props_Id, Props_Name, IsGift) VALUES (2006, '910', '1')",
        [],
    )
    .unwrap();
    assert_eq!(
        expect_malformed(conn),
        ("Props_total_table", "Gift_TagID", "2006".to_string())
    );

    let conn = setup_db();
    conn.execute(
        "INSERT INTO Props_total_table (Props_Id, Props_Name, Gift_TagID, IsGift)
         VALUES (2006, '910', '50', '1')",
        [],
    )
    .unwrap();
    assert_eq!(
        expect_malformed(conn),
        ("Props_total_table", "Tag_List", "2006".to_string())
    );
}

#[test]
fn eligible_npc_without_gift_id_aborts() {
    let conn = setup_db();
    conn.execute(
        "INSERT INTO NpcRepository (Id, Name, GiftID, Interact) VALUES (4010, '903', NULL, 'SendGift')",
        [],
    )
    .unwrap();
    assert_eq!(
        expect_malformed(conn),
        ("NpcRepository", "GiftID", "4010".to_string())
    );
}
