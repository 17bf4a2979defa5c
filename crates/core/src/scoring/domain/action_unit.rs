use serde::{Deserialize, Serialize};

/// The twelve facial action units scored by the engine.
///
/// Serialized as their conventional keys (`"AU4"`, `"AU42_44"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionUnit {
    #[serde(rename = "AU4")]
    BrowLowerer,
    #[serde(rename = "AU5")]
    UpperLidRaiser,
    #[serde(rename = "AU6")]
    CheekRaiser,
    #[serde(rename = "AU7")]
    LidTightener,
    #[serde(rename = "AU9")]
    NoseWrinkler,
    #[serde(rename = "AU10")]
    UpperLipRaiser,
    #[serde(rename = "AU15")]
    LipCornerDepressor,
    #[serde(rename = "AU17")]
    ChinRaiser,
    #[serde(rename = "AU23")]
    LipTightener,
    #[serde(rename = "AU24")]
    LipPressor,
    #[serde(rename = "AU31")]
    JawClencher,
    #[serde(rename = "AU42_44")]
    EyeTightening,
}

impl ActionUnit {
    pub const ALL: [ActionUnit; 12] = [
        ActionUnit::BrowLowerer,
        ActionUnit::UpperLidRaiser,
        ActionUnit::CheekRaiser,
        ActionUnit::LidTightener,
        ActionUnit::NoseWrinkler,
        ActionUnit::UpperLipRaiser,
        ActionUnit::LipCornerDepressor,
        ActionUnit::ChinRaiser,
        ActionUnit::LipTightener,
        ActionUnit::LipPressor,
        ActionUnit::JawClencher,
        ActionUnit::EyeTightening,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ActionUnit::BrowLowerer => "AU4",
            ActionUnit::UpperLidRaiser => "AU5",
            ActionUnit::CheekRaiser => "AU6",
            ActionUnit::LidTightener => "AU7",
            ActionUnit::NoseWrinkler => "AU9",
            ActionUnit::UpperLipRaiser => "AU10",
            ActionUnit::LipCornerDepressor => "AU15",
            ActionUnit::ChinRaiser => "AU17",
            ActionUnit::LipTightener => "AU23",
            ActionUnit::LipPressor => "AU24",
            ActionUnit::JawClencher => "AU31",
            ActionUnit::EyeTightening => "AU42_44",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActionUnit::BrowLowerer => "brow furrow",
            ActionUnit::UpperLidRaiser => "upper-lid raise",
            ActionUnit::CheekRaiser => "cheek raise",
            ActionUnit::LidTightener => "lid tightener",
            ActionUnit::NoseWrinkler => "nose wrinkle",
            ActionUnit::UpperLipRaiser => "upper lip raise",
            ActionUnit::LipCornerDepressor => "lip-corner depression",
            ActionUnit::ChinRaiser => "chin raise",
            ActionUnit::LipTightener => "lip width",
            ActionUnit::LipPressor => "lip pressor",
            ActionUnit::JawClencher => "jaw clench",
            ActionUnit::EyeTightening => "eye tightening",
        }
    }
}

impl std::fmt::Display for ActionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
