use crate::condition::Condition;

/// Diagnostic detail shown in the "View Details" dialog.
#[derive(Debug, PartialEq, Eq)]
pub struct IssueProfile {
    pub possible: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
}

static HEALTHY: IssueProfile = IssueProfile {
    possible: &["No significant issues detected", "Field is in optimal condition"],
    symptoms: &["Healthy green leaves", "Good plant density", "Proper growth rate"],
    causes: &[
        "Good farming practices",
        "Optimal environmental conditions",
        "Proper care and maintenance",
    ],
};

static MILD: IssueProfile = IssueProfile {
    possible: &[
        "Early nutrient deficiency",
        "Minor irrigation issues",
        "Beginning of pest activity",
    ],
    symptoms: &["Slight leaf yellowing", "Reduced growth rate", "Minor discoloration"],
    causes: &[
        "Nutrient imbalance",
        "Irregular watering",
        "Seasonal changes",
        "Soil pH fluctuation",
    ],
};

static MODERATE: IssueProfile = IssueProfile {
    possible: &[
        "Pest infestation",
        "Nutrient deficiency",
        "Water logging",
        "Disease onset",
    ],
    symptoms: &[
        "Visible leaf damage",
        "Stunted growth",
        "Brown/yellow patches",
        "Wilting plants",
    ],
    causes: &[
        "Poor drainage",
        "Pest attack",
        "Fungal infection",
        "Over/under watering",
        "Nutrient deficiency",
    ],
};

static SEVERE: IssueProfile = IssueProfile {
    possible: &[
        "Major disease outbreak",
        "Severe pest damage",
        "Critical nutrient deficiency",
        "Environmental stress",
    ],
    symptoms: &[
        "Extensive leaf damage",
        "Plant death",
        "Severe discoloration",
        "Complete wilting",
    ],
    causes: &[
        "Disease epidemic",
        "Severe pest infestation",
        "Extreme weather damage",
        "Soil contamination",
        "Complete system failure",
    ],
};

pub fn issues_for(condition: Condition) -> &'static IssueProfile {
    match condition {
        Condition::Healthy => &HEALTHY,
        Condition::Mild => &MILD,
        Condition::Moderate => &MODERATE,
        Condition::Severe => &SEVERE,
    }
}

pub fn issues_for_label(label: &str) -> &'static IssueProfile {
    issues_for(Condition::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_healthy() {
        assert_eq!(issues_for_label("rust"), issues_for(Condition::Healthy));
        assert_eq!(issues_for_label("Mild"), issues_for(Condition::Mild));
    }

    #[test]
    fn severe_lists_five_causes() {
        assert_eq!(issues_for(Condition::Severe).causes.len(), 5);
        assert_eq!(issues_for(Condition::Severe).causes[4], "Complete system failure");
    }
}
