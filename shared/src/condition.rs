use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Field health classes produced by the prediction server.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Condition {
    #[default]
    Healthy,
    Mild,
    Moderate,
    Severe,
}

impl Condition {
    /// Resolves a server label. Anything outside the known set is treated as `Healthy`.
    pub fn from_label(label: &str) -> Self {
        match label.parse::<Condition>() {
            Ok(condition) => condition,
            Err(_) => {
                log::debug!("Unrecognized condition label {:?}, using healthy", label);
                Condition::Healthy
            }
        }
    }

    pub fn is_known_label(label: &str) -> bool {
        label.parse::<Condition>().is_ok()
    }

    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn needs_treatment(self) -> bool {
        matches!(self, Condition::Moderate | Condition::Severe)
    }
}
