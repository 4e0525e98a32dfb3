pub mod auth_extractor;
pub mod validated_json;
