//! # Replica Convergence
//!
//! Independent replicas running the same operation sequence must end with
//! byte-identical world state, whatever store backs them.

#[cfg(test)]
mod tests {
    use asset_registry::test_utils::FaultyWorldState;
    use asset_registry::{
        AssetRegistryApi, FileBackedWorldState, InMemoryWorldState, KeyValue, RegistryService,
        WorldState,
    };
    use canonical_encoding::{canonical_hash, keccak256, Value};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Register(String, String, String),
        Transfer(String, String, i64),
    }

    fn apply<S: WorldState>(registry: &mut RegistryService<S>, ops: &[Op]) {
        for op in ops {
            // Failed operations are part of the sequence too; both replicas
            // must reject the same ones.
            let _ = match op {
                Op::Register(id, address, builder) => {
                    registry.register(id, address, builder).map(|_| ())
                }
                Op::Transfer(id, owner, price) => {
                    registry.transfer(id, owner, *price as f64).map(|_| ())
                }
            };
        }
    }

    fn dump<S: WorldState>(store: &S) -> Vec<KeyValue> {
        store
            .get_state_by_range("", "")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let id = "I0000[0-4]";
        prop_oneof![
            (id, "[a-zA-Z ]{0,16}", "C[0-9]{5}").prop_map(|(i, a, b)| Op::Register(i, a, b)),
            (id, "[0-9]{5}[A-Z]", 0..1_000_000_i64).prop_map(|(i, o, p)| Op::Transfer(i, o, p)),
        ]
    }

    #[test]
    fn test_memory_and_file_replicas_agree() {
        let ops = vec![
            Op::Register("I00000".into(), "Av de la Paloma 81".into(), "C00000".into()),
            Op::Register("I00001".into(), "c/ Cienpies 23".into(), "C00001".into()),
            Op::Transfer("I00000".into(), "55555D".into(), 200_000),
            Op::Register("I00000".into(), "duplicate".into(), "C99999".into()),
            Op::Transfer("I00009".into(), "missing".into(), 1),
        ];

        let mut memory = RegistryService::new(InMemoryWorldState::new());
        apply(&mut memory, &ops);

        let dir = tempfile::tempdir().unwrap();
        let store = FileBackedWorldState::open(dir.path().join("state.bin")).unwrap();
        let mut file = RegistryService::new(store);
        apply(&mut file, &ops);

        assert_eq!(dump(memory.store()), dump(file.store()));
        assert_eq!(
            memory.content_hash("I00000").unwrap(),
            file.content_hash("I00000").unwrap()
        );
    }

    #[test]
    fn test_stored_hash_equals_hash_of_parsed_tree() {
        let mut registry = RegistryService::new(InMemoryWorldState::new());
        registry.seed().unwrap();

        for kv in dump(registry.store()) {
            let tree = Value::parse(&kv.value).unwrap();
            assert_eq!(canonical_hash(&tree).unwrap(), keccak256(&kv.value), "key {}", kv.key);
        }
    }

    #[test]
    fn test_listing_tolerates_injected_raw_value() {
        let mut store = FaultyWorldState::new();
        store.replace_next_put = Some(b"non-json-value".to_vec());
        let mut registry = RegistryService::new(store);

        for n in 1..=4 {
            registry
                .register(
                    &format!("inmueble{n}"),
                    &format!("direccion{n}"),
                    &format!("constructora{n}"),
                )
                .unwrap();
        }

        let json = registry.list_all_json().unwrap();
        assert!(json.starts_with(r#"["non-json-value",{"catastroID":"inmueble2""#));
    }

    proptest! {
        #[test]
        fn prop_replicas_converge(ops in proptest::collection::vec(op_strategy(), 0..24)) {
            let mut a = RegistryService::new(InMemoryWorldState::new());
            let mut b = RegistryService::new(InMemoryWorldState::new());
            apply(&mut a, &ops);
            apply(&mut b, &ops);

            prop_assert_eq!(dump(a.store()), dump(b.store()));
            prop_assert_eq!(a.list_all_json().unwrap(), b.list_all_json().unwrap());
        }
    }
}
