use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default presets file name, looked up in the working directory.
pub const PRESETS_FILE: &str = "presets.yaml";

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Brand presets driving prompt assembly and card publishing.
///
/// Every field has a default so a hand-edited file can stay minimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presets {
    /// Brand name, used in the prompt and as the default card prefix.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Thematic content pillars the operator can activate per run.
    #[serde(default = "default_pillars")]
    pub pillars: Vec<String>,

    /// Target audience, embedded verbatim in the user instruction.
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Monthly objective, embedded verbatim in the user instruction.
    #[serde(default = "default_objective")]
    pub objective: String,

    /// Hashtags appended to every row that does not already carry them.
    #[serde(default = "default_base_hashtags")]
    pub base_hashtags: Vec<String>,

    /// Prefix for Trello card names. Falls back to the brand name.
    #[serde(default)]
    pub card_prefix: Option<String>,
}

fn default_brand() -> String {
    "A Amiga Digital".to_string()
}

fn default_pillars() -> Vec<String> {
    [
        "Bastidores",
        "Educativo",
        "Prova social",
        "Humor",
        "Oferta",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_audience() -> String {
    "Pequenos negócios e criadoras de conteúdo em Portugal".to_string()
}

fn default_objective() -> String {
    "Aumentar o alcance orgânico e gerar pedidos de gestão de redes sociais".to_string()
}

fn default_base_hashtags() -> Vec<String> {
    [
        "#aamigadigital",
        "#marketingdigital",
        "#gestaoderedessociais",
        "#portugal",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            pillars: default_pillars(),
            audience: default_audience(),
            objective: default_objective(),
            base_hashtags: default_base_hashtags(),
            card_prefix: None,
        }
    }
}

impl Presets {
    /// Load presets from `path`. Missing file is a distinct error so the CLI
    /// can point the operator at `planner init`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlannerError::PresetsNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Card-name prefix: explicit override or the brand name.
    pub fn card_prefix(&self) -> &str {
        self.card_prefix.as_deref().unwrap_or(&self.brand)
    }

    /// Resolve the pillars active for one run. An empty selection means all
    /// preset pillars; any selected pillar must exist in the vocabulary.
    pub fn resolve_pillars(&self, selected: &[String]) -> Result<Vec<String>> {
        if selected.is_empty() {
            return Ok(self.pillars.clone());
        }
        for pillar in selected {
            if !self.pillars.iter().any(|p| p == pillar) {
                return Err(PlannerError::UnknownPillar(pillar.clone()));
            }
        }
        Ok(selected.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.yaml");
        let err = Presets::load(&path).unwrap_err();
        assert!(matches!(err, PlannerError::PresetsNotFound(_)));
        assert!(err.to_string().contains("planner init"));
    }

    #[test]
    fn roundtrip_through_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.yaml");
        let presets = Presets::default();
        presets.save(&path).unwrap();
        let loaded = Presets::load(&path).unwrap();
        assert_eq!(loaded.brand, presets.brand);
        assert_eq!(loaded.pillars, presets.pillars);
        assert_eq!(loaded.base_hashtags, presets.base_hashtags);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.yaml");
        std::fs::write(&path, "brand: Outra Marca\n").unwrap();
        let loaded = Presets::load(&path).unwrap();
        assert_eq!(loaded.brand, "Outra Marca");
        assert!(!loaded.pillars.is_empty());
        assert!(!loaded.base_hashtags.is_empty());
    }

    #[test]
    fn card_prefix_falls_back_to_brand() {
        let mut presets = Presets::default();
        assert_eq!(presets.card_prefix(), "A Amiga Digital");
        presets.card_prefix = Some("Planner".into());
        assert_eq!(presets.card_prefix(), "Planner");
    }

    #[test]
    fn resolve_pillars_empty_selection_means_all() {
        let presets = Presets::default();
        let resolved = presets.resolve_pillars(&[]).unwrap();
        assert_eq!(resolved, presets.pillars);
    }

    #[test]
    fn resolve_pillars_rejects_unknown() {
        let presets = Presets::default();
        let err = presets
            .resolve_pillars(&["Inexistente".to_string()])
            .unwrap_err();
        assert!(matches!(err, PlannerError::UnknownPillar(_)));
    }
}
