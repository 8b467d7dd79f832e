pub mod application_configuration;
