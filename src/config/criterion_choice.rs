use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_clamp_negative_impurity() -> bool {
    true
}

/// Empty parameter object so every variant still carries "params".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SquaredErrorParams {
    #[serde(default = "default_clamp_negative_impurity")]
    #[schemars(
        title = "Clamp negative impurity",
        description = "Clamp variances that cancellation pushed below zero back to zero.",
        default = "default_clamp_negative_impurity"
    )]
    pub clamp_negative_impurity: bool,
}

impl Default for SquaredErrorParams {
    fn default() -> Self {
        Self {
            clamp_negative_impurity: default_clamp_negative_impurity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(CriterionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum CriterionChoice {
    #[strum_discriminants(strum(
        message = "Squared Error",
        detailed_message = "Weighted variance of the targets; predicts the weighted mean."
    ))]
    SquaredError(SquaredErrorParams),
    #[strum_discriminants(strum(
        message = "Log-Linked",
        detailed_message = "Variance formulas over sums of ln(w·y); experimental."
    ))]
    LogLinked(NoParams),
    #[strum_discriminants(strum(
        message = "Gamma Deviance",
        detailed_message = "Half Gamma deviance for strictly positive targets."
    ))]
    GammaDeviance(NoParams),
}

impl Default for CriterionChoice {
    fn default() -> Self {
        Self::SquaredError(SquaredErrorParams::default())
    }
}

impl CriterionChoice {
    /// JSON Schema for the whole tagged enum.
    pub fn schema() -> Schema {
        schema_for!(CriterionChoice)
    }

    pub fn kind(&self) -> CriterionKind {
        self.into()
    }

    /// Default `params` JSON for a given kind.
    pub fn default_params(kind: CriterionKind) -> Value {
        match kind {
            CriterionKind::SquaredError => json!(SquaredErrorParams::default()),
            CriterionKind::LogLinked | CriterionKind::GammaDeviance => json!(NoParams::default()),
        }
    }

    /// Build the typed enum from kind + params.
    pub fn from_parts(kind: CriterionKind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        serde_json::from_value(v).with_context(|| format!("invalid params for criterion '{key}'"))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse criterion choice")
    }
}

/// Reads a [`CriterionChoice`] from a JSON file.
pub fn load_criterion_choice(path: impl AsRef<Path>) -> Result<CriterionChoice> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read criterion config {}", path.display()))?;
    let choice = CriterionChoice::from_json_str(&text)
        .with_context(|| format!("in criterion config {}", path.display()))?;
    log::debug!("loaded criterion '{}' from {}", choice.kind(), path.display());
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tags_are_kebab_case() {
        let choice = CriterionChoice::GammaDeviance(NoParams {});
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v["type"], "gamma-deviance");
        assert_eq!(CriterionKind::from_str("log-linked").unwrap(), CriterionKind::LogLinked);
        assert_eq!(CriterionKind::SquaredError.to_string(), "squared-error");
    }

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let choice =
            CriterionChoice::from_json_str(r#"{"type": "squared-error", "params": {}}"#).unwrap();
        assert_eq!(choice, CriterionChoice::default());
    }

    #[test]
    fn from_parts_round_trips_every_kind() {
        for kind in CriterionKind::iter() {
            let choice =
                CriterionChoice::from_parts(kind, CriterionChoice::default_params(kind)).unwrap();
            assert_eq!(choice.kind(), kind);
        }
    }

    #[test]
    fn from_parts_rejects_bad_params() {
        let err = CriterionChoice::from_parts(
            CriterionKind::SquaredError,
            json!({ "clamp_negative_impurity": "yes" }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("squared-error"));
    }

    #[test]
    fn schema_lists_every_kind() {
        let schema = serde_json::to_string(&CriterionChoice::schema()).unwrap();
        for kind in CriterionKind::iter() {
            let key: &'static str = kind.into();
            assert!(schema.contains(key), "schema is missing {key}");
        }
    }

    #[test]
    fn loads_choice_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"type": "squared-error", "params": {{"clamp_negative_impurity": false}}}}"#
        )
        .unwrap();

        let choice = load_criterion_choice(file.path()).unwrap();
        assert_eq!(
            choice,
            CriterionChoice::SquaredError(SquaredErrorParams {
                clamp_negative_impurity: false
            })
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_criterion_choice(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read criterion config"));
    }
}
