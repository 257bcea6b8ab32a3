mod json_register;
mod json_register_source;

pub use json_register_source::JsonFileRegisterSource;
