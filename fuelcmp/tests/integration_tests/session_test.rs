// tests/integration_tests/session_test.rs
use super::common::{setup_store_dir, store_path, write_store};
use anyhow::Result;
use fuelcmp::{FileStore, Fuel, InputError, InputStore as _, Session, SessionState, StoredInputs};

#[test]
fn test_session_survives_restart() -> Result<()> {
    let dir = setup_store_dir()?;

    let mut first = Session::start(FileStore::new(store_path(&dir)));
    first.set_ethanol("3,49");
    first.set_gasoline("5,00");
    assert_eq!(first.calculate()?.recommended, Fuel::Alcohol);
    first.dismiss();

    let second = Session::start(FileStore::new(store_path(&dir)));
    assert_eq!(second.ethanol().raw(), "3,49");
    assert_eq!(second.gasoline().raw(), "5,00");
    assert_eq!(second.state(), SessionState::Idle);
    Ok(())
}

#[test]
fn test_invalid_input_leaves_store_untouched() -> Result<()> {
    let dir = setup_store_dir()?;
    let path = store_path(&dir);
    write_store(&path, "alcool = \"3.5\"\ngasolina = \"5.0\"\n")?;

    let mut session = Session::start(FileStore::new(&path));
    session.set_gasoline("");
    assert_eq!(session.calculate(), Err(InputError::InvalidInput));
    assert_eq!(session.state(), SessionState::Idle);

    assert_eq!(FileStore::new(&path).load()?, StoredInputs::new("3.5", "5.0"));
    Ok(())
}

#[test]
fn test_corrupt_store_starts_empty() -> Result<()> {
    let dir = setup_store_dir()?;
    let path = store_path(&dir);
    write_store(&path, "this is = = not toml")?;

    let session = Session::start(FileStore::new(&path));
    assert_eq!(session.ethanol().raw(), "");
    assert_eq!(session.gasoline().raw(), "");
    Ok(())
}

#[test]
fn test_unwritable_store_still_shows_result() -> Result<()> {
    let dir = setup_store_dir()?;

    // The store path is a directory, so every write fails.
    let mut session = Session::start(FileStore::new(dir.path()));
    session.set_ethanol("4.5");
    session.set_gasoline("5.0");

    let result = session.calculate()?;
    assert_eq!(result.recommended, Fuel::Gasoline);
    assert_eq!(session.state(), SessionState::ResultShown(result));
    Ok(())
}
