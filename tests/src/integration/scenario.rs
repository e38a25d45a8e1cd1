//! # Registry Scenario
//!
//! The register, read, sell, read flow against both world state stores.

#[cfg(test)]
mod tests {
    use asset_registry::{
        Asset, AssetRegistryApi, FileBackedWorldState, InMemoryWorldState, ListedEntry,
        RegistryError, RegistryService, WorldState,
    };

    const ID: &str = "I00000";
    const ADDRESS: &str = "Av de la Paloma 81";
    const BUILDER: &str = "C00000";

    fn run_scenario<S: WorldState>(registry: &mut RegistryService<S>) {
        assert!(!registry.exists(ID));
        registry.register(ID, ADDRESS, BUILDER).unwrap();
        assert!(registry.exists(ID));

        let stored = Asset::from_slice(&registry.get(ID).unwrap()).unwrap();
        assert_eq!(stored.catastro_id, ID);
        assert_eq!(stored.direccion, ADDRESS);
        assert_eq!(stored.constructora_cif, BUILDER);
        assert_eq!(stored.propietario_dni, None);
        assert_eq!(stored.ultimo_precio, None);

        let previous = registry.transfer(ID, "55555D", 200_000.0).unwrap();
        assert_eq!(previous, None);

        let stored = Asset::from_slice(&registry.get(ID).unwrap()).unwrap();
        assert_eq!(stored.propietario_dni.as_deref(), Some("55555D"));
        assert_eq!(stored.ultimo_precio, Some(200_000.0));

        let previous = registry.transfer(ID, "66666E", 250_000.0).unwrap();
        assert_eq!(previous.as_deref(), Some("55555D"));
    }

    #[test]
    fn test_scenario_in_memory() {
        let mut registry = RegistryService::new(InMemoryWorldState::new());
        run_scenario(&mut registry);
    }

    #[test]
    fn test_scenario_file_backed_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world_state.bin");

        {
            let mut registry = RegistryService::new(FileBackedWorldState::open(&path).unwrap());
            run_scenario(&mut registry);
        }

        // A fresh process sees the committed state and the same uniqueness rule.
        let mut registry = RegistryService::new(FileBackedWorldState::open(&path).unwrap());
        let stored = Asset::from_slice(&registry.get(ID).unwrap()).unwrap();
        assert_eq!(stored.propietario_dni.as_deref(), Some("66666E"));
        assert_eq!(
            registry.register(ID, ADDRESS, BUILDER).unwrap_err(),
            RegistryError::AlreadyExists { id: ID.to_string() }
        );
    }

    #[test]
    fn test_seeded_registry_with_user_records() {
        let mut registry = RegistryService::new(InMemoryWorldState::new());
        registry.seed().unwrap();
        registry.register("inmueble1", "direccion1", "constructora1").unwrap();

        let listed = registry.list_all().unwrap();
        assert_eq!(listed.len(), 7);

        let tagged = listed
            .iter()
            .filter_map(ListedEntry::as_asset)
            .filter(|a| a.doc_type.is_some())
            .count();
        assert_eq!(tagged, 6);
    }
}
