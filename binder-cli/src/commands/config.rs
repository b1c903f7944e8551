//! `config validate` and `config generate`

use anyhow::{bail, Context, Result};
use binder_config::{ConfigLoader, RegistryConfig};
use std::path::Path;

pub fn handle_config_validate(config_path: &Path) -> Result<()> {
    let config = ConfigLoader::new()
        .from_file(config_path)
        .with_context(|| format!("Configuration {} is invalid", config_path.display()))?;

    println!("Configuration {} is valid", config_path.display());
    println!("  component: {}", config.name);
    println!("  listen:    {}", config.server.socket_address());
    println!("  database:  {}", config.database.url);
    println!("  auth:      {}", if config.auth.require_auth { "api key" } else { "open" });
    Ok(())
}

pub fn handle_config_generate(output: Option<&Path>, force: bool) -> Result<()> {
    let yaml = RegistryConfig::generate_sample_yaml().context("Failed to render sample configuration")?;

    match output {
        Some(path) => {
            if path.exists() && !force {
                bail!("{} already exists, pass --force to overwrite", path.display());
            }
            std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Sample configuration written to {}", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_file_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.yaml");

        handle_config_generate(Some(&path), false).unwrap();
        handle_config_validate(&path).unwrap();
    }

    #[test]
    fn test_generate_refuses_to_overwrite() {
        let file = tempfile::NamedTempFile::new().unwrap();

        assert!(handle_config_generate(Some(file.path()), false).is_err());
        assert!(handle_config_generate(Some(file.path()), true).is_ok());
    }
}
