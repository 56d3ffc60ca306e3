use crate::error::ConfigError;
use crate::models::PhysicalProfile;
use log::info;
use std::path::Path;

/// Parser profil-JSON, f.eks. `{"weight_kg": 75.0, "height_m": 1.75}`.
/// Feilmeldingen peker på feltet som feilet.
pub fn parse_profile_json(json: &str) -> Result<PhysicalProfile, ConfigError> {
    let de = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(de).map_err(|e| ConfigError::Json {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Leser inn profil fra disk (JSON). Manglende fil er en feil.
pub fn load_profile(path: impl AsRef<Path>) -> Result<PhysicalProfile, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let profile = parse_profile_json(&contents)?;
    info!(
        "Profil lastet fra {} (weight_kg={}, height_m={})",
        path.display(),
        profile.weight_kg,
        profile.height_m
    );
    Ok(profile)
}
