#![cfg(test)]
use std::collections::HashSet;

use aliasguard_common::address::{self, GmailAddress};
use aliasguard_common::error::AliasError;
use aliasguard_common::history::HISTORY_KEY;
use aliasguard_common::method::BulkMethod;
use aliasguard_common::store::KeyValueStore;
use aliasguard_core::export::{self, CSV_HEADER};
use aliasguard_core::store::FileStore;
use aliasguard_core::AliasRequest;
use aliasguard_integration_tests::{file_history, seeded_generator, undotted_local};

/// Generated aliases are saved, survive a restart, and export as CSV.
#[test]
fn generate_save_reload_export() {
    let dir = tempfile::tempdir().unwrap();
    let address: GmailAddress = "jane.doe@gmail.com".parse().unwrap();
    let mut generator = seeded_generator(2024);

    let aliases = generator
        .generate(&address, &AliasRequest::bulk(BulkMethod::Random, 10))
        .unwrap();
    assert!(!aliases.is_empty() && aliases.len() <= 10);

    let mut history = file_history(dir.path()).unwrap();
    let inserted = history.save_all(&aliases).unwrap();
    assert_eq!(inserted, aliases.len());
    drop(history);

    let history = file_history(dir.path()).unwrap();
    assert_eq!(history.len(), aliases.len());
    for alias in &aliases {
        assert!(history.contains(alias));
        assert!(address::validate(alias), "{alias} is not a Gmail address");
    }

    let csv_path = dir.path().join("export.csv");
    assert!(export::write_csv(history.entries(), &csv_path).unwrap());
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(lines.count(), aliases.len());
}

#[test]
fn dot_aliases_deliver_to_base_inbox() {
    let address: GmailAddress = "johnsmith@googlemail.com".parse().unwrap();
    let mut generator = seeded_generator(7);

    let aliases = generator
        .generate(&address, &AliasRequest::bulk(BulkMethod::Dot, 50))
        .unwrap();
    let unique: HashSet<&String> = aliases.iter().collect();

    assert!(aliases.len() <= 50);
    assert_eq!(unique.len(), aliases.len());
    for alias in &aliases {
        assert_eq!(undotted_local(alias).as_deref(), Some("johnsmith"));
        assert!(alias.ends_with("@googlemail.com"));
        assert!(address::validate(alias));
    }
}

#[test]
fn plus_alias_and_missing_tag() {
    let address: GmailAddress = "jane@gmail.com".parse().unwrap();
    let mut generator = seeded_generator(1);

    assert_eq!(
        generator.generate(&address, &AliasRequest::plus("news")),
        Ok(vec!["jane+news@gmail.com".to_string()])
    );
    assert_eq!(
        generator.generate(&address, &AliasRequest::plus("   ")),
        Err(AliasError::MissingTag)
    );
}

#[test]
fn duplicate_saves_and_empty_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut history = file_history(dir.path()).unwrap();

    history.save("jane+news@gmail.com").unwrap();
    history.save("jane+news@gmail.com").unwrap();
    assert_eq!(history.len(), 1);

    history.clear().unwrap();
    let csv_path = dir.path().join("empty.csv");
    assert!(!export::write_csv(history.entries(), &csv_path).unwrap());
    assert!(!csv_path.exists());

    let store = FileStore::new(dir.path());
    assert_eq!(store.get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn invalid_addresses_never_reach_the_generator() {
    for input in ["", "jane", "jane@yahoo.com", "jane@gmail.co", "ja ne@gmail.com"] {
        assert!(input.parse::<GmailAddress>().is_err(), "{input:?} parsed");
        assert!(!address::validate(input));
    }
}
