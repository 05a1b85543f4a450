//! End-to-end account flows against the file-backed directory.

use shared::forms::{create_account, login};
use shared::{
    ChainedCredentials, CreateAccountForm, FieldState, FormError, JsonFileStore, KeyValueStore,
    LoginForm, StaticCredentials, USERS_KEY, UserDirectory,
};
use tempfile::TempDir;

fn sign_up(
    directory: UserDirectory<JsonFileStore>,
    email: &str,
) -> (CreateAccountForm<JsonFileStore>, Result<shared::UserRecord, FormError>) {
    let mut form = CreateAccountForm::new(directory, true).unwrap();
    form.set_value(create_account::FULL_NAME, "Jane Roe").unwrap();
    form.set_value(create_account::PHONE_NUMBER, "5550100").unwrap();
    form.set_value(create_account::EMAIL, email).unwrap();
    form.set_value(create_account::PASSWORD, "correct horse").unwrap();
    form.set_agency(false);
    let result = form.submit();
    (form, result)
}

#[test]
fn test_sign_up_persists_and_allows_login() {
    let temp_dir = TempDir::new().unwrap();
    let directory = UserDirectory::new(JsonFileStore::new(temp_dir.path()));

    let (_, result) = sign_up(directory, "jane@example.com");
    let created = result.unwrap();
    assert_eq!(created.full_name, "Jane Roe");

    let reopened = UserDirectory::new(JsonFileStore::new(temp_dir.path()));
    assert_eq!(reopened.all().unwrap(), vec![created.clone()]);

    let mut login_form = LoginForm::new(reopened).unwrap();
    login_form.set_value(login::EMAIL, "JANE@example.com").unwrap();
    login_form.set_value(login::PASSWORD, "correct horse").unwrap();
    assert_eq!(login_form.submit().unwrap(), created);
}

#[test]
fn test_duplicate_sign_up_is_rejected_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let (_, first) = sign_up(
        UserDirectory::new(JsonFileStore::new(temp_dir.path())),
        "jane@example.com",
    );
    assert!(first.is_ok());

    let path = JsonFileStore::new(temp_dir.path()).path_for(USERS_KEY);
    let before = std::fs::read_to_string(&path).unwrap();

    let (form, second) = sign_up(
        UserDirectory::new(JsonFileStore::new(temp_dir.path())),
        "Jane@Example.com",
    );
    assert!(matches!(second, Err(FormError::DuplicateRecord { .. })));
    assert_eq!(
        form.session()
            .field(create_account::EMAIL)
            .map(shared::FieldController::state),
        Some(FieldState::Error)
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_demo_account_blocks_sign_up_and_logs_in() {
    let store =
        shared::MemoryStore::with_records(USERS_KEY, StaticCredentials::demo().users().to_vec());
    let mut form = CreateAccountForm::new(UserDirectory::new(store), true).unwrap();
    form.set_value(create_account::FULL_NAME, "Marry Again").unwrap();
    form.set_value(create_account::PHONE_NUMBER, "1234567890").unwrap();
    form.set_value(create_account::EMAIL, "marry@gmail.com").unwrap();
    form.set_value(create_account::PASSWORD, "Password123").unwrap();

    assert!(matches!(form.submit(), Err(FormError::DuplicateRecord { .. })));
    let directory = form.into_directory();
    assert_eq!(directory.store().get(USERS_KEY).unwrap().len(), 1);

    let credentials = ChainedCredentials::new(directory, StaticCredentials::default());
    let mut login_form = LoginForm::new(credentials).unwrap();
    login_form.set_value(login::EMAIL, "marry@gmail.com").unwrap();
    login_form.set_value(login::PASSWORD, "Password123").unwrap();
    assert_eq!(login_form.submit().unwrap().full_name, "Marry Doe");
}
