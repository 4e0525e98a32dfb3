use event_service::application::configuration::configuration::ConfigurationBuilder;
use event_service::domain::crypto::HashingScheme;
use std::env;

pub const TEST_SECRET: &str = "test-secret";

pub fn init_test_config_builder(
    test_case_id: &str,
    configurator: impl FnOnce(&mut ConfigurationBuilder),
) -> ConfigurationBuilder {
    let mut builder = ConfigurationBuilder::default();
    builder.load_env();

    let path = env::temp_dir().join(format!("event_service_{}.db", test_case_id));

    builder
        .app
        .secret(TEST_SECRET)
        .password_hashing_scheme(HashingScheme::BcryptLow);
    builder
        .db
        .database_url(format!("sqlite://{}", path.display()));

    configurator(&mut builder);

    builder
}
