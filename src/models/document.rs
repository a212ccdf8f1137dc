use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub name: String,
    pub address: Address,
    pub contact_information: ContactInformation,
}

/// One bullet under an experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Empty when the document leaves the employer out
    pub employer: String,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub salutation: String,
    pub introduction: String,
    pub experience_section: Vec<Experience>,
    pub motivation: String,
    pub closing: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub position: String,
    pub company: String,
    pub address: Address,
}

/// Everything extracted from one `<applicationDocument>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_style: Option<String>,
    pub applicant: Applicant,
    pub date: String,
    pub recipient: Recipient,
    pub letter: Letter,
}

impl ParsedData {
    /// JSON with two-space indentation, as shown to users.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of populated text leaves in the document.
    ///
    /// Fixed leaves always count. `formatStyle` counts when present, and
    /// each employer and achievement counts when it is not empty.
    pub fn field_count(&self) -> usize {
        // name, 4 address lines, phone, email, date, position, company,
        // 4 address lines, and the five fixed letter paragraphs
        const FIXED_LEAVES: usize = 1 + 4 + 2 + 1 + 2 + 4 + 5;

        let experience_leaves: usize = self
            .letter
            .experience_section
            .iter()
            .map(|exp| {
                let employer = usize::from(!exp.employer.is_empty());
                let achievements = exp
                    .achievements
                    .iter()
                    .filter(|a| !a.text.is_empty())
                    .count();
                employer + achievements
            })
            .sum();

        FIXED_LEAVES + usize::from(self.format_style.is_some()) + experience_leaves
    }

    pub fn achievement_count(&self) -> usize {
        self.letter
            .experience_section
            .iter()
            .map(|exp| exp.achievements.len())
            .sum()
    }
}
