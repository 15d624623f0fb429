// tests/integration_tests/persistence_test.rs
use super::common::{setup_store_dir, store_path, write_store};
use anyhow::Result;
use fuelcmp::{FileStore, InputStore as _, StoredInputs, compare};

#[test]
fn test_round_trip_after_successful_compare() -> Result<()> {
    let dir = setup_store_dir()?;
    let mut store = FileStore::new(store_path(&dir));

    compare("3.5", "5.0")?;
    store.save("3.5", "5.0")?;

    let reopened = FileStore::new(store_path(&dir));
    assert_eq!(reopened.load()?, StoredInputs::new("3.5", "5.0"));
    Ok(())
}

#[test]
fn test_absent_keys_are_not_errors() -> Result<()> {
    let dir = setup_store_dir()?;
    let path = store_path(&dir);

    assert_eq!(FileStore::new(&path).load()?, StoredInputs::default());

    write_store(&path, "")?;
    assert_eq!(FileStore::new(&path).load()?, StoredInputs::default());

    write_store(&path, "alcool = \"3,19\"\nunrelated = 1\n")?;
    let inputs = FileStore::new(&path).load()?;
    assert_eq!(inputs.ethanol.as_deref(), Some("3,19"));
    assert!(inputs.gasoline.is_none());
    Ok(())
}

#[test]
fn test_save_overwrites_previous_values() -> Result<()> {
    let dir = setup_store_dir()?;
    let path = store_path(&dir);
    write_store(&path, "alcool = \"1\"\ngasolina = \"2\"\n")?;

    let mut store = FileStore::new(&path);
    store.save("3,79", "5,59")?;

    assert_eq!(store.load()?, StoredInputs::new("3,79", "5,59"));
    Ok(())
}
