//! Integration tests for the vocabulary store with word lists on disk.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use wordtree_finder::{
    Completeness, FileWordListLoader, FinderError, StoreOptions, TrieSelector, VocabularyStore,
};

fn testdata_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path
}

fn loaded_store() -> VocabularyStore {
    let store = VocabularyStore::new();
    store
        .init_from_loader(&FileWordListLoader::from_dir(testdata_dir()))
        .unwrap();
    store
}

mod file_loading_tests {
    use super::*;

    #[test]
    fn test_load_testdata_lists() {
        let store = loaded_store();
        assert!(store.is_ready());

        let names = store.names().unwrap();
        assert_eq!(names.len(), 8);
        // From the included file
        assert!(names.contains("rocio"));
        assert!(names.contains("sofia"));

        assert_eq!(store.surnames().unwrap().len(), 4);

        let connectors = store.connectors().unwrap();
        assert!(connectors.contains("del"));
        assert!(connectors.contains("de la"));
    }

    #[test]
    fn test_missing_directory() {
        let store = VocabularyStore::new();
        let loader = FileWordListLoader::from_dir(testdata_dir().join("missing"));
        let err = store.init_from_loader(&loader).unwrap_err();
        assert!(matches!(err, FinderError::LoadError { .. }), "got {:?}", err);
        assert!(!store.is_ready());
    }

    #[test]
    fn test_mixed_paths() {
        let dir = testdata_dir();
        let loader = FileWordListLoader::new()
            .with_names_path(dir.join("names_extra.txt"))
            .with_surnames_path(dir.join("surnames.txt"))
            .with_connectors_path(dir.join("connectors.txt"));

        let store = VocabularyStore::new();
        store.init_from_loader(&loader).unwrap();
        assert_eq!(store.names().unwrap().words(), &["rocio", "sofia"]);
    }
}

mod scan_tests {
    use super::*;

    #[test]
    fn test_names_with_connector() {
        let store = loaded_store();
        let matches = store
            .scan("Jose y Carmen", &TrieSelector::Names)
            .unwrap()
            .unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched, "jose");
        assert!(matches[0].connector.is_none());

        let carmen = &matches[1];
        assert_eq!(carmen.matched, "carmen");
        assert_eq!(carmen.start, 7);
        assert_eq!(carmen.completeness, Completeness::Total);
        assert_eq!(carmen.complete_string(), " y carmen");
    }

    #[test]
    fn test_multi_char_connector() {
        let store = loaded_store();
        let matches = store
            .scan("Maria del Carmen", &TrieSelector::Names)
            .unwrap()
            .unwrap();

        assert_eq!(matches.len(), 2);
        let connector = matches[1].connector.as_ref().unwrap();
        assert_eq!(connector.matched, "del");
        assert_eq!(connector.start, 6);
        assert_eq!(connector.previous_separator, Some(' '));
        assert_eq!(connector.following_separator, Some(' '));
        assert_eq!(matches[1].complete_string(), " del carmen");
    }

    #[test]
    fn test_surnames() {
        let store = loaded_store();

        let matches = store
            .scan("Ana y Garcia", &TrieSelector::Surnames)
            .unwrap()
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, "garcia");
        assert_eq!(matches[0].start, 6);
        assert_eq!(matches[0].connector.as_ref().unwrap().matched, "y");

        let matches = store
            .scan("Rocio Lopez", &TrieSelector::Surnames)
            .unwrap()
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, "lopez");
        assert!(matches[0].connector.is_none());
    }

    #[test]
    fn test_partial_runs_and_filter() {
        let store = loaded_store();

        // "garcia" starts no name, but its letters start short partial runs
        let all = store
            .scan("Pablo Garcia", &TrieSelector::Names)
            .unwrap()
            .unwrap();
        assert!(all.len() > 1);
        assert!(all[1..].iter().all(|m| m.completeness == Completeness::Partial));

        let totals = store
            .scan_filtered("Pablo Garcia", &TrieSelector::Names, |m| m.is_total())
            .unwrap()
            .unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].matched, "pablo");
    }

    #[test]
    fn test_unicode_offsets() {
        let store = VocabularyStore::new();
        store.init(vec!["sofía".into()], Vec::new(), vec!["y".into()]);

        let matches = store
            .scan("Ñú y SOFÍA", &TrieSelector::Names)
            .unwrap()
            .unwrap();
        assert_eq!(matches[0].matched, "sofía");
        // Character offset, not byte offset
        assert_eq!(matches[0].start, 5);
        assert_eq!(&*matches[0].text, "Ñú y SOFÍA");
    }

    #[test]
    fn test_custom_separators() {
        let store = VocabularyStore::with_options(StoreOptions::new().with_separators("_"));
        store.init(vec!["ana".into()], Vec::new(), vec!["y".into()]);

        let matches = store
            .scan("luis_y_ana", &TrieSelector::Names)
            .unwrap()
            .unwrap();
        let connector = matches[0].connector.as_ref().unwrap();
        assert_eq!(connector.previous_separator, Some('_'));
        assert_eq!(matches[0].complete_string(), "_y_ana");
    }

    #[test]
    fn test_options_from_json() {
        let options = StoreOptions::from_json(r#"{"separators": "-", "fold_case": false}"#).unwrap();
        let store = VocabularyStore::with_options(options);
        store.init(vec!["Ana".into()], Vec::new(), Vec::new());

        assert!(store.scan("ana", &TrieSelector::Names).unwrap().is_none());
        assert!(store.scan("Ana", &TrieSelector::Names).unwrap().is_some());
    }
}

mod registry_tests {
    use super::*;

    #[test]
    fn test_registry_contract() {
        let store = loaded_store();

        store
            .create("streets", vec!["alcala".into(), "serrano".into()])
            .unwrap();
        assert!(store.contains("streets"));

        let err = store.create("streets", Vec::new()).unwrap_err();
        assert!(matches!(err, FinderError::DuplicateKey(_)));

        let err = store.update("plazas", vec!["mayor".into()]).unwrap_err();
        assert!(matches!(err, FinderError::KeyNotFound(_)));

        store.update("streets", vec!["gran via".into()]).unwrap();
        let matches = store
            .scan("la gran via", &TrieSelector::custom("streets"))
            .unwrap()
            .unwrap();
        assert_eq!(matches.last().unwrap().matched, "gran via");

        store.remove("streets").unwrap();
        assert!(!store.contains("streets"));
        assert!(store.registry_keys().is_empty());
    }

    #[test]
    fn test_free_form_keys() {
        let store = loaded_store();
        store
            .create("madrid streets", vec!["alcala".into()])
            .unwrap();
        store.create("calles/es", vec!["serrano".into()]).unwrap();

        let matches = store
            .scan("alcala", &TrieSelector::custom("madrid streets"))
            .unwrap()
            .unwrap();
        assert_eq!(matches[0].matched, "alcala");
        assert_eq!(store.registry_keys(), vec!["calles/es", "madrid streets"]);
    }

    #[test]
    fn test_custom_scan_needs_canonical() {
        let store = VocabularyStore::new();
        store.create("streets", vec!["alcala".into()]).unwrap();

        let err = store
            .scan("alcala", &TrieSelector::custom("streets"))
            .unwrap_err();
        assert!(matches!(err, FinderError::NotReady));
    }
}

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_concurrent_scans_agree() {
        let store = Arc::new(loaded_store());
        let text = "Maria del Carmen y Jose Garcia, Ana de la Sofia; Pablo Lopez";
        let expected = store.scan(text, &TrieSelector::Names).unwrap();
        assert!(expected.is_some());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| store.scan(text, &TrieSelector::Names).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for result in handle.join().unwrap() {
                assert_eq!(result, expected);
            }
        }
    }

    #[test]
    fn test_scans_during_registry_updates() {
        let store = Arc::new(loaded_store());
        store.create("cities", vec!["madrid".into()]).unwrap();

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("list-{}", i);
                    store.create(&key, vec!["x".into()]).unwrap();
                    store.remove(&key).unwrap();
                }
            })
        };

        for _ in 0..100 {
            let matches = store
                .scan("madrid", &TrieSelector::custom("cities"))
                .unwrap()
                .unwrap();
            assert_eq!(matches[0].matched, "madrid");
        }

        writer.join().unwrap();
        assert_eq!(store.registry_keys(), vec!["cities"]);
    }
}
