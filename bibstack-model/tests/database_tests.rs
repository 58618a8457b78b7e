use bibstack_model::{ModelError, StringDatabase, StringDef, StringId};
use pretty_assertions::assert_eq;

fn db_with(defs: &[(&str, &str)]) -> StringDatabase {
    let mut db = StringDatabase::new();
    for (name, content) in defs {
        db.insert(StringDef::new(*name, *content)).unwrap();
    }
    db
}

// ── Insert ───────────────────────────────────────────────────────

#[test]
fn insert_and_get_by_name() {
    let db = db_with(&[("ieee", "Institute of Electrical and Electronics Engineers")]);
    let def = db.get_by_name("ieee").unwrap();
    assert_eq!(def.name(), "ieee");
    assert_eq!(
        def.content(),
        "Institute of Electrical and Electronics Engineers"
    );
}

#[test]
fn insert_duplicate_name_rejected() {
    let mut db = db_with(&[("acm", "Association for Computing Machinery")]);
    let err = db
        .insert(StringDef::new("acm", "something else"))
        .unwrap_err();
    assert_eq!(err, ModelError::NameTaken("acm".to_string()));
    // Table unchanged.
    assert_eq!(db.len(), 1);
    assert_eq!(
        db.get_by_name("acm").unwrap().content(),
        "Association for Computing Machinery"
    );
}

#[test]
fn contains_name() {
    let db = db_with(&[("lncs", "Lecture Notes in Computer Science")]);
    assert!(db.contains_name("lncs"));
    assert!(!db.contains_name("lnai"));
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn get_by_id() {
    let mut db = StringDatabase::new();
    let def = StringDef::new("jmlr", "Journal of Machine Learning Research");
    let id = def.id();
    db.insert(def).unwrap();
    assert_eq!(db.get(&id).unwrap().name(), "jmlr");
}

#[test]
fn get_unknown_id_is_none() {
    let db = db_with(&[("a", "x")]);
    assert!(db.get(&StringId::new()).is_none());
}

// ── Rename ───────────────────────────────────────────────────────

#[test]
fn rename_changes_name_keeps_content() {
    let mut db = StringDatabase::new();
    let def = StringDef::new("tods", "Transactions on Database Systems");
    let id = def.id();
    db.insert(def).unwrap();

    db.rename(&id, "acm-tods").unwrap();

    assert!(!db.contains_name("tods"));
    let def = db.get(&id).unwrap();
    assert_eq!(def.name(), "acm-tods");
    assert_eq!(def.content(), "Transactions on Database Systems");
}

#[test]
fn rename_to_taken_name_rejected() {
    let mut db = StringDatabase::new();
    let a = StringDef::new("a", "x");
    let id = a.id();
    db.insert(a).unwrap();
    db.insert(StringDef::new("b", "y")).unwrap();

    let err = db.rename(&id, "b").unwrap_err();
    assert_eq!(err, ModelError::NameTaken("b".to_string()));
    // Unchanged on failure.
    assert_eq!(db.get(&id).unwrap().name(), "a");
}

#[test]
fn rename_to_own_name_is_noop() {
    let mut db = StringDatabase::new();
    let def = StringDef::new("a", "x");
    let id = def.id();
    db.insert(def).unwrap();
    db.rename(&id, "a").unwrap();
    assert_eq!(db.get(&id).unwrap().name(), "a");
}

#[test]
fn rename_unknown_id_rejected() {
    let mut db = db_with(&[("a", "x")]);
    let id = StringId::new();
    assert_eq!(db.rename(&id, "b").unwrap_err(), ModelError::NotFound(id));
}

// ── Content & removal ────────────────────────────────────────────

#[test]
fn set_content() {
    let mut db = StringDatabase::new();
    let def = StringDef::new("a", "old");
    let id = def.id();
    db.insert(def).unwrap();
    db.set_content(&id, "new").unwrap();
    assert_eq!(db.get(&id).unwrap().content(), "new");
}

#[test]
fn set_content_unknown_id_rejected() {
    let mut db = StringDatabase::new();
    let id = StringId::new();
    assert_eq!(
        db.set_content(&id, "x").unwrap_err(),
        ModelError::NotFound(id)
    );
}

#[test]
fn remove_returns_definition_and_frees_name() {
    let mut db = StringDatabase::new();
    let def = StringDef::new("a", "x");
    let id = def.id();
    db.insert(def).unwrap();

    let removed = db.remove(&id).unwrap();
    assert_eq!(removed.name(), "a");
    assert!(db.is_empty());

    // The name is reusable afterwards.
    db.insert(StringDef::new("a", "y")).unwrap();
}

#[test]
fn remove_unknown_id_is_none() {
    let mut db = StringDatabase::new();
    assert!(db.remove(&StringId::new()).is_none());
}

// ── Iteration & serde ────────────────────────────────────────────

#[test]
fn iter_visits_all() {
    let db = db_with(&[("a", "1"), ("b", "2"), ("c", "3")]);
    let mut names: Vec<_> = db.iter().map(|d| d.name().to_string()).collect();
    names.sort();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn serde_roundtrip() {
    let db = db_with(&[("springer", "Springer-Verlag"), ("mit", "MIT Press")]);
    let json = serde_json::to_string(&db).unwrap();
    let parsed: StringDatabase = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(
        parsed.get_by_name("springer").unwrap().content(),
        "Springer-Verlag"
    );
}

// ── Invariant holds under arbitrary operations ───────────────────

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_name() -> impl Strategy<Value = String> {
        "[a-z]{1,4}"
    }

    proptest! {
        #[test]
        fn names_stay_unique(names in proptest::collection::vec(arb_name(), 1..20)) {
            let mut db = StringDatabase::new();
            for name in &names {
                // Duplicates are rejected; successes extend the table.
                let _ = db.insert(StringDef::new(name.clone(), "content"));
            }

            let mut seen: Vec<_> = db.iter().map(|d| d.name().to_string()).collect();
            seen.sort();
            let mut deduped = seen.clone();
            deduped.dedup();
            prop_assert_eq!(seen, deduped);
        }

        #[test]
        fn rename_never_duplicates(from in arb_name(), to in arb_name()) {
            let mut db = StringDatabase::new();
            let def = StringDef::new(from.clone(), "x");
            let id = def.id();
            db.insert(def).unwrap();
            db.insert(StringDef::new(format!("{to}-other"), "y")).unwrap();

            let _ = db.rename(&id, &to);

            let mut names: Vec<_> = db.iter().map(|d| d.name().to_string()).collect();
            names.sort();
            let mut deduped = names.clone();
            deduped.dedup();
            prop_assert_eq!(names, deduped);
        }
    }
}
