use crate::condition::Condition;

/// Static advisory content for one field condition.
#[derive(Debug, PartialEq, Eq)]
pub struct ConditionAdvice {
    pub headline: &'static str,
    pub immediate: &'static [&'static str],
    pub weekly: &'static [&'static str],
    pub monitoring: &'static [&'static str],
    /// Only present for conditions that need active treatment.
    pub treatment: Option<&'static [&'static str]>,
    pub timeline: &'static [&'static str],
}

static HEALTHY: ConditionAdvice = ConditionAdvice {
    headline: "Excellent! Your paddy field is in optimal condition. Continue with current farming practices and maintain regular monitoring schedule.",
    immediate: &[
        "Continue current irrigation schedule",
        "Maintain proper field drainage",
        "Keep monitoring for any changes",
    ],
    weekly: &[
        "Check water levels twice weekly",
        "Inspect plants for early signs of issues",
        "Monitor weather conditions for planning",
        "Document growth progress with photos",
    ],
    monitoring: &[
        "Leaf color and texture changes",
        "Plant height and density",
        "Water quality and pH levels",
        "Pest activity around the field",
    ],
    treatment: None,
    timeline: &[
        "Continue current care routine for the next 2 weeks",
        "Schedule next analysis in 10-14 days",
        "Prepare for next growth stage requirements",
        "Maintain detailed farming records",
    ],
};

static MILD: ConditionAdvice = ConditionAdvice {
    headline: "Minor issues detected. Monitor irrigation levels and check for early signs of nutrient deficiency. Consider soil testing and adjust fertilizer accordingly.",
    immediate: &[
        "Check and adjust irrigation system",
        "Inspect plants closely for specific symptoms",
        "Test soil pH and nutrient levels",
        "Increase monitoring frequency",
    ],
    weekly: &[
        "Apply balanced fertilizer if needed",
        "Monitor water drainage patterns",
        "Check for early pest signs",
        "Document any changes with photos",
    ],
    monitoring: &[
        "Leaf yellowing or browning patterns",
        "Plant growth rate changes",
        "Soil moisture consistency",
        "Root health and development",
    ],
    treatment: None,
    timeline: &[
        "Implement corrective measures within 2-3 days",
        "Monitor improvements over next week",
        "Reassess condition in 7 days",
        "Adjust treatment plan based on response",
    ],
};

static MODERATE: ConditionAdvice = ConditionAdvice {
    headline: "Attention required. Check for pest infestations, water logging, or nutrient imbalance. Consider consulting with local agricultural extension services.",
    immediate: &[
        "Identify specific problem areas",
        "Adjust irrigation to prevent water logging",
        "Apply targeted fertilizer or pesticide",
        "Isolate affected areas if possible",
    ],
    weekly: &[
        "Monitor treatment effectiveness",
        "Apply follow-up treatments as needed",
        "Consult agricultural extension officer",
        "Implement preventive measures",
    ],
    monitoring: &[
        "Disease progression or recovery",
        "Pest population changes",
        "Plant stress indicators",
        "Soil health improvements",
    ],
    treatment: Some(&[
        "Apply appropriate fungicide if disease detected",
        "Use organic pest control methods",
        "Improve field drainage system",
        "Supplement with micronutrients",
    ]),
    timeline: &[
        "Start treatment within 24 hours",
        "Monitor daily for first week",
        "Reassess in 5-7 days",
        "Continue treatment for 2-3 weeks as needed",
    ],
};

static SEVERE: ConditionAdvice = ConditionAdvice {
    headline: "Immediate action needed! Critical issues detected that could significantly impact yield. Please consult with an agricultural specialist immediately.",
    immediate: &[
        "Contact agricultural specialist immediately",
        "Stop current irrigation if water logging detected",
        "Apply emergency treatment measures",
        "Isolate severely affected areas",
    ],
    weekly: &[
        "Implement intensive treatment plan",
        "Monitor recovery progress daily",
        "Apply multiple treatment approaches",
        "Prepare for potential crop loss mitigation",
    ],
    monitoring: &[
        "Critical plant survival indicators",
        "Treatment response effectiveness",
        "Spread prevention to healthy areas",
        "Overall field recovery progress",
    ],
    treatment: Some(&[
        "Emergency fungicide/pesticide application",
        "Soil treatment and amendment",
        "Drainage system emergency repairs",
        "Consider replanting in worst areas",
    ]),
    timeline: &[
        "Emergency response within 6 hours",
        "Intensive monitoring for 48 hours",
        "Evaluate treatment response in 3 days",
        "Plan recovery strategy for next 2-4 weeks",
    ],
};

pub fn advice_for(condition: Condition) -> &'static ConditionAdvice {
    match condition {
        Condition::Healthy => &HEALTHY,
        Condition::Mild => &MILD,
        Condition::Moderate => &MODERATE,
        Condition::Severe => &SEVERE,
    }
}

/// Looks up advice by raw label, falling back to the healthy entry.
pub fn advice_for_label(label: &str) -> &'static ConditionAdvice {
    advice_for(Condition::from_label(label))
}
