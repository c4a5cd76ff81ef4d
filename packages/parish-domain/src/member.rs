use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
	Pastor,
	Copastor,
	Supervisor,
	Preacher,
	Disciple,
}
impl MemberRole {
	pub const ALL: [Self; 5] =
		[Self::Pastor, Self::Copastor, Self::Supervisor, Self::Preacher, Self::Disciple];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pastor => "pastor",
			Self::Copastor => "copastor",
			Self::Supervisor => "supervisor",
			Self::Preacher => "preacher",
			Self::Disciple => "disciple",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|role| role.as_str() == value)
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
	Male,
	Female,
}
impl Gender {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Male => "male",
			Self::Female => "female",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"male" => Some(Self::Male),
			"female" => Some(Self::Female),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
	Single,
	Married,
	Widowed,
	Divorced,
	Other,
}
impl MaritalStatus {
	pub const ALL: [Self; 5] =
		[Self::Single, Self::Married, Self::Widowed, Self::Divorced, Self::Other];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Single => "single",
			Self::Married => "married",
			Self::Widowed => "widowed",
			Self::Divorced => "divorced",
			Self::Other => "other",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|status| status.as_str() == value)
	}
}

/// Age bands used by the member category metrics. Derived from `birth_date`
/// at query time, never stored.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberAgeCategory {
	Child,
	Teenager,
	Youth,
	Adult,
	MiddleAged,
	Senior,
}
impl MemberAgeCategory {
	pub const ALL: [Self; 6] = [
		Self::Child,
		Self::Teenager,
		Self::Youth,
		Self::Adult,
		Self::MiddleAged,
		Self::Senior,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Child => "child",
			Self::Teenager => "teenager",
			Self::Youth => "youth",
			Self::Adult => "adult",
			Self::MiddleAged => "middle_aged",
			Self::Senior => "senior",
		}
	}

	pub fn from_age(age: i32) -> Self {
		match age {
			..=12 => Self::Child,
			13..=17 => Self::Teenager,
			18..=29 => Self::Youth,
			30..=49 => Self::Adult,
			50..=64 => Self::MiddleAged,
			_ => Self::Senior,
		}
	}
}

/// Whole years elapsed between `birth` and `on`; zero when `on` precedes
/// `birth`.
pub fn age_on(birth: Date, on: Date) -> i32 {
	let mut age = on.year() - birth.year();

	if (u8::from(on.month()), on.day()) < (u8::from(birth.month()), birth.day()) {
		age -= 1;
	}

	age.max(0)
}
