use serde::{Deserialize, Serialize};

/// One parsed QA test case
///
/// All four fields are non-empty after parsing; rows that would violate
/// this are dropped by the parser instead of constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    /// Classification: "Happy Path" or "Test to Fail"
    pub case_type: String,

    /// Short case name
    pub name: String,

    /// Step-by-step instructions (multi-line)
    pub steps: String,

    /// Expected outcome (multi-line)
    pub expected_result: String,
}

impl TestCaseRecord {
    /// Create new record
    pub fn new(
        case_type: impl Into<String>,
        name: impl Into<String>,
        steps: impl Into<String>,
        expected_result: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            name: name.into(),
            steps: steps.into(),
            expected_result: expected_result.into(),
        }
    }
}
