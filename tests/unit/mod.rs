mod configuration_test;
mod event_test;
