use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
	Active,
	Inactive,
}
impl RecordStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Inactive => "inactive",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"active" => Some(Self::Active),
			"inactive" => Some(Self::Inactive),
			_ => None,
		}
	}
}
