pub mod apk_builder;
